//! Two pinned mixers (even and odd) merged by a combine policy.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

use log::{debug, warn};

use super::{Mixer, Mode, NumMixer};
use crate::constants::PING_BATCH;
use crate::error::MixerError;
use crate::filter::dedup_stable;
use crate::random::RandomSource;

/// Policy used by [`DualMixer::ping`] to merge the two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombineMode {
    /// Even values only.
    Even = 1,
    /// Odd values only.
    Odd = 2,
    /// Even and odd values alternating, even first.
    #[default]
    Interleave = 3,
    /// Deduplicated even values followed by deduplicated odd values.
    DedupConcat = 4,
}

impl CombineMode {
    /// Numeric selector of the policy (1 to 4).
    pub fn value(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for CombineMode {
    type Error = MixerError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Even),
            2 => Ok(Self::Odd),
            3 => Ok(Self::Interleave),
            4 => Ok(Self::DedupConcat),
            other => Err(MixerError::InvalidCombineMode(other)),
        }
    }
}

/// Owns one even-pinned and one odd-pinned [`NumMixer`] over `1..=100`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DualMixer {
    combine_mode: CombineMode,
    even: NumMixer,
    odd: NumMixer,
}

impl DualMixer {
    pub fn new(rng: &mut RandomSource) -> Self {
        let mut even = NumMixer::new(rng);
        even.set_mode(Mode::Even);
        let mut odd = NumMixer::new(rng);
        odd.set_mode(Mode::Odd);

        Self {
            combine_mode: CombineMode::default(),
            even,
            odd,
        }
    }

    pub fn combine_mode(&self) -> CombineMode {
        self.combine_mode
    }

    /// Select the combine policy by its numeric value.
    ///
    /// # Errors
    /// Returns [`MixerError::InvalidCombineMode`] for values outside `1..=4`;
    /// the current policy is kept.
    pub fn set_combine_mode(&mut self, value: u32) -> Result<(), MixerError> {
        self.combine_mode = CombineMode::try_from(value)?;
        debug!("dubMix combine mode set to {}", value);
        Ok(())
    }

    /// The even-pinned mixer.
    pub fn even(&self) -> &NumMixer {
        &self.even
    }

    /// The odd-pinned mixer.
    pub fn odd(&self) -> &NumMixer {
        &self.odd
    }

    /// Draw one batch from the owned mixers and merge it per the combine mode.
    ///
    /// A mixer that cannot sample contributes no values, so the result may be
    /// shorter than the nominal length (or empty).
    pub fn ping(&mut self, rng: &mut RandomSource) -> Vec<i32> {
        match self.combine_mode {
            CombineMode::Even => draw(&mut self.even, rng),
            CombineMode::Odd => draw(&mut self.odd, rng),
            CombineMode::Interleave => {
                let evens = draw(&mut self.even, rng);
                let odds = draw(&mut self.odd, rng);
                interleave(&evens, &odds)
            }
            CombineMode::DedupConcat => {
                let mut out = dedup_stable(&draw(&mut self.even, rng));
                out.extend(dedup_stable(&draw(&mut self.odd, rng)));
                out
            }
        }
    }
}

fn draw<M: Mixer>(mixer: &mut M, rng: &mut RandomSource) -> Vec<i32> {
    mixer.sample(rng, PING_BATCH).unwrap_or_else(|err| {
        warn!("dubMix sample skipped: {}", err);
        Vec::new()
    })
}

// Alternates while both sides have values, then appends the remainder.
fn interleave(first: &[i32], second: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(first.len() + second.len());
    let shared = first.len().min(second.len());
    for i in 0..shared {
        out.push(first[i]);
        out.push(second[i]);
    }
    out.extend_from_slice(&first[shared..]);
    out.extend_from_slice(&second[shared..]);
    out
}

impl PartialOrd for DualMixer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.even < other.even && self.odd < other.odd {
            Some(Ordering::Less)
        } else if self.even > other.even && self.odd > other.odd {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl AddAssign<&DualMixer> for DualMixer {
    fn add_assign(&mut self, rhs: &DualMixer) {
        self.even += &rhs.even;
        self.odd += &rhs.odd;
    }
}

impl AddAssign for DualMixer {
    fn add_assign(&mut self, rhs: DualMixer) {
        *self += &rhs;
    }
}

impl Add<&DualMixer> for DualMixer {
    type Output = DualMixer;

    fn add(mut self, rhs: &DualMixer) -> DualMixer {
        self += rhs;
        self
    }
}

impl Add for DualMixer {
    type Output = DualMixer;

    fn add(mut self, rhs: DualMixer) -> DualMixer {
        self += &rhs;
        self
    }
}
