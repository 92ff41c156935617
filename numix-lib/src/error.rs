use std::fmt::{Display, Formatter};

use crate::mixer::Mode;

/// Error type for mixer construction, sampling and stack management.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixerError {
    EmptyDataset,
    EmptyBatch,
    Inactive,
    ParityUnavailable(Mode),
    InvalidCombineMode(u32),
    EmptyStack,
    StackUnderflow { requested: usize, available: usize },
}

impl Display for MixerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDataset => write!(f, "dataset must contain at least one value"),
            Self::EmptyBatch => write!(f, "batch size must be greater than zero"),
            Self::Inactive => write!(f, "mixer budget is exhausted"),
            Self::ParityUnavailable(mode) => {
                write!(f, "dataset has no values for mode {}", mode)
            }
            Self::InvalidCombineMode(val) => {
                write!(f, "combine mode {} is outside 1..=4", val)
            }
            Self::EmptyStack => write!(f, "mixer stack is empty"),
            Self::StackUnderflow {
                requested,
                available,
            } => write!(
                f,
                "cannot remove {} mixer(s) from a stack of {}",
                requested, available
            ),
        }
    }
}

impl std::error::Error for MixerError {}
