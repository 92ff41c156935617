//! The demo scenario: construct mixers, compare and combine them, ping them.

use std::cmp::Ordering;
use std::io::Write;
use std::ops::Add;

use log::{info, warn};
use numix_lib::constants::{STACK_VALUE_MAX, STACK_VALUE_MIN};
use numix_lib::report::{self, DualMixerStats, NumMixerStats, StackMixerStats};
use numix_lib::{DualMixer, Mixer, MixerError, NumMixer, RandomSource, StackMixer};
use serde_json::{json, Value};

use crate::error::RunError;

const DEMO_DATASET_LEN: usize = 10;
const DEMO_PING_SIZE: usize = 10;

/// A mixer type the demo can report on, compare and add.
trait Subject: Clone + PartialEq + PartialOrd + Add<Output = Self> {
    const CLASS_NAME: &'static str;

    fn write_stats<W: Write>(&self, out: &mut W, name: &str) -> std::io::Result<()>;

    fn stats(&self, name: &str) -> Result<Value, serde_json::Error>;
}

impl Subject for NumMixer {
    const CLASS_NAME: &'static str = "numMixer";

    fn write_stats<W: Write>(&self, out: &mut W, name: &str) -> std::io::Result<()> {
        report::write_num_mixer(out, self, name, true)
    }

    fn stats(&self, name: &str) -> Result<Value, serde_json::Error> {
        serde_json::to_value(NumMixerStats::new(name, self))
    }
}

impl Subject for DualMixer {
    const CLASS_NAME: &'static str = "dubMix";

    fn write_stats<W: Write>(&self, out: &mut W, name: &str) -> std::io::Result<()> {
        report::write_dual_mixer(out, self, name)
    }

    fn stats(&self, name: &str) -> Result<Value, serde_json::Error> {
        serde_json::to_value(DualMixerStats::new(name, self))
    }
}

impl Subject for StackMixer {
    const CLASS_NAME: &'static str = "multiMix";

    fn write_stats<W: Write>(&self, out: &mut W, name: &str) -> std::io::Result<()> {
        report::write_stack_mixer(out, self, name)
    }

    fn stats(&self, name: &str) -> Result<Value, serde_json::Error> {
        serde_json::to_value(StackMixerStats::new(name, self))
    }
}

#[derive(Clone)]
struct Named<T> {
    name: String,
    mixer: T,
}

impl<T> Named<T> {
    fn new(name: impl Into<String>, mixer: T) -> Self {
        Self {
            name: name.into(),
            mixer,
        }
    }
}

fn relation_name<T: PartialOrd>(lhs: &T, rhs: &T) -> &'static str {
    match lhs.partial_cmp(rhs) {
        Some(Ordering::Less) => "less",
        Some(Ordering::Greater) => "greater",
        _ => "not comparable",
    }
}

/// Every mixer the demo reports on, built up front from one random source.
pub struct Scenario {
    nm1: Named<NumMixer>,
    nm2: Named<NumMixer>,
    dm1: Named<DualMixer>,
    dm2: Named<DualMixer>,
    mm1: Named<StackMixer>,
    mm2: Named<StackMixer>,
    arith_stack: StackMixer,
    arith_mixer: NumMixer,
}

impl Scenario {
    /// Build the scenario.
    ///
    /// # Errors
    /// Returns an error if a mixer cannot be constructed.
    pub fn build(rng: &mut RandomSource) -> Result<Self, MixerError> {
        let dataset = demo_dataset(rng);
        let nm1 = NumMixer::with_dataset(rng, dataset)?;
        let dataset = demo_dataset(rng);
        let nm2 = NumMixer::with_dataset(rng, dataset)?;
        let dm1 = DualMixer::new(rng);
        let dm2 = DualMixer::new(rng);
        let mut mm1 = StackMixer::new();
        mm1.add_mixers(rng, 1)?;
        let mut mm2 = StackMixer::new();
        mm2.add_mixers(rng, 2)?;
        let dataset = demo_dataset(rng);
        let arith_mixer = NumMixer::with_dataset(rng, dataset)?;

        Ok(Self {
            nm1: Named::new("nm1", nm1),
            nm2: Named::new("nm2", nm2),
            dm1: Named::new("dm1", dm1),
            dm2: Named::new("dm2", dm2),
            mm1: Named::new("mm1", mm1),
            mm2: Named::new("mm2", mm2),
            arith_stack: StackMixer::new(),
            arith_mixer,
        })
    }

    /// Write the full text report, then ping every mixer.
    pub fn write_text<W: Write>(
        mut self,
        out: &mut W,
        rng: &mut RandomSource,
    ) -> Result<(), RunError> {
        write_comparison(out, &self.nm1, &self.nm2)?;
        writeln!(out)?;
        write_comparison(out, &self.dm1, &self.dm2)?;
        writeln!(out)?;
        write_comparison(out, &self.mm1, &self.mm2)?;
        writeln!(out)?;

        report::write_header(out, &["multiMix", "Mixed-Mode Arithmetic"])?;
        writeln!(out)?;
        report::write_stack_mixer(out, &self.arith_stack, "mm1")?;
        writeln!(out)?;
        report::write_num_mixer(out, &self.arith_mixer, "nm1", false)?;
        writeln!(out)?;
        self.arith_stack += &self.arith_mixer;
        report::write_stack_mixer(out, &self.arith_stack, "mm1 += nm1")?;
        writeln!(out)?;

        report::write_header(out, &["Pings"])?;
        writeln!(out)?;
        for (name, values) in self.pings(rng)? {
            report::write_ping(out, &name, &values)?;
        }
        info!("text report written");
        Ok(())
    }

    /// Render the same scenario as a JSON document.
    pub fn to_json(mut self, rng: &mut RandomSource) -> Result<Value, RunError> {
        let num = comparison_json(&self.nm1, &self.nm2)?;
        let dual = comparison_json(&self.dm1, &self.dm2)?;
        let stack = comparison_json(&self.mm1, &self.mm2)?;

        let before = StackMixerStats::new("mm1", &self.arith_stack);
        let operand = NumMixerStats::new("nm1", &self.arith_mixer);
        self.arith_stack += &self.arith_mixer;
        let after = StackMixerStats::new("mm1 += nm1", &self.arith_stack);

        let pings: serde_json::Map<String, Value> = self
            .pings(rng)?
            .into_iter()
            .map(|(name, values)| (name, json!(values)))
            .collect();

        info!("json report built");
        Ok(json!({
            "numMixer": num,
            "dubMix": dual,
            "multiMix": stack,
            "mixedModeArithmetic": {
                "before": before,
                "operand": operand,
                "after": after,
            },
            "pings": pings,
        }))
    }

    fn pings(&mut self, rng: &mut RandomSource) -> Result<Vec<(String, Vec<i32>)>, RunError> {
        let mut lines = Vec::new();

        let nm = &mut self.nm1;
        let values = nm.mixer.sample(rng, DEMO_PING_SIZE).unwrap_or_else(|err| {
            warn!("{} sample failed: {}", nm.name, err);
            Vec::new()
        });
        lines.push((nm.name.clone(), values));

        for ctl in 1..=4 {
            self.dm1.mixer.set_combine_mode(ctl)?;
            let values = self.dm1.mixer.ping(rng);
            lines.push((format!("{} ctl {}", self.dm1.name, ctl), values));
        }

        for mm in [&mut self.mm1, &mut self.mm2] {
            let values = mm.mixer.ping(rng)?;
            lines.push((format!("{} size {}", mm.name, mm.mixer.len()), values));
        }

        self.mm2.mixer.add_mixers(rng, 1)?;
        let values = self.mm2.mixer.ping(rng)?;
        lines.push((format!("{} size {}", self.mm2.name, self.mm2.mixer.len()), values));

        self.mm2.mixer.remove_mixers(2)?;
        let values = self.mm2.mixer.ping(rng)?;
        lines.push((format!("{} size {}", self.mm2.name, self.mm2.mixer.len()), values));

        Ok(lines)
    }
}

fn demo_dataset(rng: &mut RandomSource) -> Vec<i32> {
    rng.dataset(DEMO_DATASET_LEN, STACK_VALUE_MIN, STACK_VALUE_MAX)
}

fn write_comparison<T: Subject, W: Write>(
    out: &mut W,
    first: &Named<T>,
    second: &Named<T>,
) -> Result<(), RunError> {
    report::write_header(out, &[T::CLASS_NAME, "Overloaded Operators"])?;
    writeln!(out)?;

    let copy = Named::new(format!("{}Copy", second.name), second.mixer.clone());
    for subject in [first, second, &copy] {
        subject.mixer.write_stats(out, &subject.name)?;
        writeln!(out)?;
    }

    let lhs = (&first.mixer, first.name.as_str());
    let rhs = (&second.mixer, second.name.as_str());
    report::write_equality(out, lhs, rhs)?;
    report::write_equality(out, rhs, (&copy.mixer, copy.name.as_str()))?;
    report::write_relation(out, lhs, rhs)?;
    writeln!(out)?;

    let sum = first.mixer.clone() + second.mixer.clone();
    sum.write_stats(out, &format!("{} + {}", first.name, second.name))?;
    Ok(())
}

fn comparison_json<T: Subject>(first: &Named<T>, second: &Named<T>) -> Result<Value, RunError> {
    let copy = second.mixer.clone();
    let sum = first.mixer.clone() + second.mixer.clone();
    Ok(json!({
        "mixers": [
            first.mixer.stats(&first.name)?,
            second.mixer.stats(&second.name)?,
            copy.stats(&format!("{}Copy", second.name))?,
        ],
        "equal": first.mixer == second.mixer,
        "copyEqual": second.mixer == copy,
        "relation": relation_name(&first.mixer, &second.mixer),
        "sum": sum.stats(&format!("{} + {}", first.name, second.name))?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_report(seed: u64) -> String {
        let mut rng = RandomSource::seeded(seed);
        let scenario = Scenario::build(&mut rng).expect("scenario");
        let mut out = Vec::new();
        scenario.write_text(&mut out, &mut rng).expect("report");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn text_report_has_every_section() {
        let text = text_report(1);
        for title in ["numMixer", "dubMix", "multiMix", "Mixed-Mode Arithmetic", "Pings"] {
            assert!(text.contains(title), "missing {}", title);
        }
        assert!(text.contains("nm2 and nm2Copy are the same"));
        assert!(text.contains("== \"nm1 + nm2\" STATS =="));
        assert!(text.contains("== \"mm1 += nm1\" STATS =="));
        assert!(text.contains("dm1 ctl 3 ping: "));
        assert!(text.contains("mm2 size 1 ping: "));
    }

    #[test]
    fn seeded_reports_repeat() {
        assert_eq!(text_report(5), text_report(5));
    }

    #[test]
    fn json_report_shape() {
        let mut rng = RandomSource::seeded(2);
        let scenario = Scenario::build(&mut rng).expect("scenario");
        let value = scenario.to_json(&mut rng).expect("json");

        assert_eq!(value["numMixer"]["mixers"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["dubMix"]["copyEqual"], true);
        assert_eq!(value["multiMix"]["sum"]["size"], 3);
        assert_eq!(value["mixedModeArithmetic"]["after"]["size"], 1);
        assert_eq!(value["pings"]["dm1 ctl 3"].as_array().map(Vec::len), Some(20));
    }

    #[test]
    fn relation_names() {
        assert_eq!(relation_name(&1, &2), "less");
        assert_eq!(relation_name(&3, &2), "greater");
        assert_eq!(relation_name(&2, &2), "not comparable");
    }
}
