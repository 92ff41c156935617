//! Parity-filtered mixers and their compositions.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::error::MixerError;
use crate::random::RandomSource;

pub mod dual;
pub mod num;
pub mod stack;

pub use dual::{CombineMode, DualMixer};
pub use num::NumMixer;
pub use stack::StackMixer;

/// Parity selector governing which dataset values a sample may yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    Mix,
    Even,
    Odd,
}

impl Mode {
    /// Report name of the mode.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Mix => "MIX",
            Mode::Even => "EVEN",
            Mode::Odd => "ODD",
        }
    }

    /// Whether `value` may be produced under this mode.
    pub fn accepts(self, value: i32) -> bool {
        match self {
            Mode::Mix => true,
            Mode::Even => value.rem_euclid(2) == 0,
            Mode::Odd => value.rem_euclid(2) == 1,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sampling capability shared by mixers.
pub trait Mixer {
    /// Draw `count` values under the current mode.
    ///
    /// # Errors
    /// Returns an error if `count` is zero, if the budget is exhausted, or if
    /// the dataset holds no value of the required parity.
    fn sample(&mut self, rng: &mut RandomSource, count: usize) -> Result<Vec<i32>, MixerError>;

    /// Whether the mixer still has budget left.
    fn is_active(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_predicates() {
        assert!(Mode::Mix.accepts(7));
        assert!(Mode::Even.accepts(0));
        assert!(Mode::Even.accepts(-4));
        assert!(!Mode::Even.accepts(3));
        assert!(Mode::Odd.accepts(-3));
        assert!(!Mode::Odd.accepts(10));
    }

    #[test]
    fn mode_names() {
        assert_eq!(Mode::Mix.to_string(), "MIX");
        assert_eq!(Mode::Even.name(), "EVEN");
        assert_eq!(Mode::Odd.name(), "ODD");
    }
}
