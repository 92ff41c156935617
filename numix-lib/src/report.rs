//! Human-readable and JSON reports built from the mixers' read-only accessors.

use std::cmp::Ordering;
use std::io::{self, Write};

use serde::Serialize;

use crate::mixer::{DualMixer, Mode, NumMixer, StackMixer};

const HEADER_WIDTH: usize = 26;
const BLOCK_BORDER_WIDTH: usize = 28;

fn bool_name(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Write a boxed section header with one centered line per title.
pub fn write_header<W: Write>(out: &mut W, titles: &[&str]) -> io::Result<()> {
    let border = format!("#{}#", "#".repeat(HEADER_WIDTH));
    let padding = format!("#{}#", " ".repeat(HEADER_WIDTH));
    writeln!(out, "{}", border)?;
    writeln!(out, "{}", padding)?;
    for title in titles {
        let spare = HEADER_WIDTH.saturating_sub(title.len());
        let left = spare / 2;
        let right = spare - left;
        writeln!(out, "#{}{}{}#", " ".repeat(left), title, " ".repeat(right))?;
    }
    writeln!(out, "{}", padding)?;
    writeln!(out, "{}", border)
}

/// Write the stats block of a single mixer.
///
/// # Arguments
/// * `name` - Label printed in the block title.
/// * `verbose` - When true, the dataset is listed one value per line.
pub fn write_num_mixer<W: Write>(
    out: &mut W,
    mixer: &NumMixer,
    name: &str,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "== \"{}\" STATS ==", name)?;
    writeln!(out, "stateChangeCount: {}", mixer.mode_change_count())?;
    writeln!(out, "countDown: {}", mixer.remaining_budget())?;
    writeln!(out, "evenValid: {}", bool_name(mixer.even_allowed()))?;
    writeln!(out, "oddValid: {}", bool_name(mixer.odd_allowed()))?;
    if verbose {
        writeln!(out, "dataset: ")?;
        for value in mixer.dataset() {
            writeln!(out, "{}", value)?;
        }
    }
    writeln!(out, "controllerState: {}", mixer.mode_name())
}

pub fn write_dual_mixer<W: Write>(out: &mut W, mixer: &DualMixer, name: &str) -> io::Result<()> {
    let border = "=".repeat(BLOCK_BORDER_WIDTH);
    writeln!(out, "{}", border)?;
    writeln!(out, "== \"{}\" STATS ==", name)?;
    writeln!(out, "ctl: {}", mixer.combine_mode().value())?;
    writeln!(out)?;
    write_num_mixer(out, mixer.even(), "x", false)?;
    writeln!(out)?;
    write_num_mixer(out, mixer.odd(), "z", false)?;
    writeln!(out, "{}", border)
}

pub fn write_stack_mixer<W: Write>(out: &mut W, mixer: &StackMixer, name: &str) -> io::Result<()> {
    let border = "=".repeat(BLOCK_BORDER_WIDTH);
    writeln!(out, "{}", border)?;
    writeln!(out, "== \"{}\" STATS ==", name)?;
    writeln!(out, "Stack size: {}", mixer.len())?;
    for (index, num_mixer) in mixer.iter_top_down() {
        writeln!(out)?;
        write_num_mixer(out, num_mixer, &format!("index [{}]", index), false)?;
    }
    writeln!(out, "{}", border)
}

/// Write `<lhs> and <rhs> are the same|different`.
pub fn write_equality<W: Write, T: PartialEq>(
    out: &mut W,
    (lhs, lhs_name): (&T, &str),
    (rhs, rhs_name): (&T, &str),
) -> io::Result<()> {
    let verdict = if lhs == rhs { "the same" } else { "different" };
    writeln!(out, "{} and {} are {}", lhs_name, rhs_name, verdict)
}

/// Write `<lhs> is less than|greater than|not comparable to <rhs>`.
///
/// Equal operands are reported as not comparable, matching a strict
/// less/greater test.
pub fn write_relation<W: Write, T: PartialOrd>(
    out: &mut W,
    (lhs, lhs_name): (&T, &str),
    (rhs, rhs_name): (&T, &str),
) -> io::Result<()> {
    let relation = match lhs.partial_cmp(rhs) {
        Some(Ordering::Less) => "less than",
        Some(Ordering::Greater) => "greater than",
        _ => "not comparable to",
    };
    writeln!(out, "{} is {} {}", lhs_name, relation, rhs_name)
}

/// Write `<name> ping: [a, b, ...]`.
pub fn write_ping<W: Write>(out: &mut W, name: &str, values: &[i32]) -> io::Result<()> {
    writeln!(out, "{} ping: {:?}", name, values)
}

/// Serializable snapshot of a [`NumMixer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumMixerStats {
    pub name: String,
    pub mode: Mode,
    pub mode_change_count: u32,
    pub remaining_budget: u32,
    pub even_allowed: bool,
    pub odd_allowed: bool,
    pub dataset: Vec<i32>,
}

impl NumMixerStats {
    pub fn new(name: impl Into<String>, mixer: &NumMixer) -> Self {
        Self {
            name: name.into(),
            mode: mixer.mode(),
            mode_change_count: mixer.mode_change_count(),
            remaining_budget: mixer.remaining_budget(),
            even_allowed: mixer.even_allowed(),
            odd_allowed: mixer.odd_allowed(),
            dataset: mixer.dataset().to_vec(),
        }
    }
}

/// Serializable snapshot of a [`DualMixer`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DualMixerStats {
    pub name: String,
    pub combine_mode: u32,
    pub even: NumMixerStats,
    pub odd: NumMixerStats,
}

impl DualMixerStats {
    pub fn new(name: impl Into<String>, mixer: &DualMixer) -> Self {
        Self {
            name: name.into(),
            combine_mode: mixer.combine_mode().value(),
            even: NumMixerStats::new("x", mixer.even()),
            odd: NumMixerStats::new("z", mixer.odd()),
        }
    }
}

/// Serializable snapshot of a [`StackMixer`], listed top-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackMixerStats {
    pub name: String,
    pub size: usize,
    pub mixers: Vec<NumMixerStats>,
}

impl StackMixerStats {
    pub fn new(name: impl Into<String>, mixer: &StackMixer) -> Self {
        Self {
            name: name.into(),
            size: mixer.len(),
            mixers: mixer
                .iter_top_down()
                .map(|(index, m)| NumMixerStats::new(format!("index [{}]", index), m))
                .collect(),
        }
    }
}

/// Render any snapshot as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_json<T: Serialize>(stats: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(stats)
}
