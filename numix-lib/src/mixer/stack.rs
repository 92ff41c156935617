//! LIFO stack of mixers whose behavior is derived from stack position.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

use log::{debug, warn};

use super::{Mixer, Mode, NumMixer};
use crate::constants::{PING_BATCH, STACK_DATASET_LEN, STACK_VALUE_MAX, STACK_VALUE_MIN};
use crate::error::MixerError;
use crate::filter::purge_primes;
use crate::random::RandomSource;

/// Stack of [`NumMixer`]s; the last element is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackMixer {
    stack: Vec<NumMixer>,
}

impl StackMixer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn has_mixers(&self) -> bool {
        !self.is_empty()
    }

    pub fn top(&self) -> Option<&NumMixer> {
        self.stack.last()
    }

    /// Iterate from the top of the stack down, paired with each stack index.
    pub fn iter_top_down(&self) -> impl Iterator<Item = (usize, &NumMixer)> {
        self.stack.iter().enumerate().rev()
    }

    /// Push `count` mixers, each over a fresh 30-value dataset from `2..=100`.
    ///
    /// # Errors
    /// Returns [`MixerError::EmptyBatch`] if `count` is zero.
    pub fn add_mixers(&mut self, rng: &mut RandomSource, count: usize) -> Result<(), MixerError> {
        if count == 0 {
            return Err(MixerError::EmptyBatch);
        }
        for _ in 0..count {
            let dataset = rng.dataset(STACK_DATASET_LEN, STACK_VALUE_MIN, STACK_VALUE_MAX);
            self.stack.push(NumMixer::with_dataset(rng, dataset)?);
        }
        debug!("multiMix pushed {} mixer(s), size {}", count, self.len());
        Ok(())
    }

    /// Pop `count` mixers from the top.
    ///
    /// # Errors
    /// Returns [`MixerError::EmptyBatch`] if `count` is zero and
    /// [`MixerError::StackUnderflow`] if fewer than `count` mixers are present;
    /// the stack is untouched in both cases.
    pub fn remove_mixers(&mut self, count: usize) -> Result<(), MixerError> {
        if count == 0 {
            return Err(MixerError::EmptyBatch);
        }
        if count > self.len() {
            return Err(MixerError::StackUnderflow {
                requested: count,
                available: self.len(),
            });
        }
        self.stack.truncate(self.len() - count);
        debug!("multiMix popped {} mixer(s), size {}", count, self.len());
        Ok(())
    }

    /// Sample one batch from the top mixer.
    ///
    /// The top index `len - 1` selects the policy: `% 3 == 0` samples in mix
    /// mode and drops primes, `1` samples even values, `2` samples odd values.
    /// A failed sample yields an empty batch.
    ///
    /// # Errors
    /// Returns [`MixerError::EmptyStack`] when there is no mixer to ping.
    pub fn ping(&mut self, rng: &mut RandomSource) -> Result<Vec<i32>, MixerError> {
        let index = self.len().checked_sub(1).ok_or(MixerError::EmptyStack)?;
        let mode = mode_for_index(index);
        let top = self.stack.last_mut().ok_or(MixerError::EmptyStack)?;
        top.set_mode(mode);

        let values = match top.sample(rng, PING_BATCH) {
            Ok(values) => values,
            Err(err) => {
                warn!("multiMix sample at index {} skipped: {}", index, err);
                return Ok(Vec::new());
            }
        };

        Ok(match mode {
            Mode::Mix => purge_primes(&values),
            Mode::Even | Mode::Odd => values,
        })
    }
}

fn mode_for_index(index: usize) -> Mode {
    match index % 3 {
        0 => Mode::Mix,
        1 => Mode::Even,
        _ => Mode::Odd,
    }
}

/// Stacks order by size; equal sizes order only when the stacks are identical.
impl PartialOrd for StackMixer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.len().cmp(&other.len()) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl AddAssign<StackMixer> for StackMixer {
    fn add_assign(&mut self, rhs: StackMixer) {
        self.stack.extend(rhs.stack);
    }
}

impl AddAssign<&StackMixer> for StackMixer {
    fn add_assign(&mut self, rhs: &StackMixer) {
        self.stack.extend_from_slice(&rhs.stack);
    }
}

impl AddAssign<NumMixer> for StackMixer {
    fn add_assign(&mut self, rhs: NumMixer) {
        self.stack.push(rhs);
    }
}

impl AddAssign<&NumMixer> for StackMixer {
    fn add_assign(&mut self, rhs: &NumMixer) {
        self.stack.push(rhs.clone());
    }
}

impl Add<StackMixer> for StackMixer {
    type Output = StackMixer;

    fn add(mut self, rhs: StackMixer) -> StackMixer {
        self += rhs;
        self
    }
}

impl Add<&StackMixer> for StackMixer {
    type Output = StackMixer;

    fn add(mut self, rhs: &StackMixer) -> StackMixer {
        self += rhs;
        self
    }
}

impl Add<NumMixer> for StackMixer {
    type Output = StackMixer;

    fn add(mut self, rhs: NumMixer) -> StackMixer {
        self += rhs;
        self
    }
}

impl Add<&NumMixer> for StackMixer {
    type Output = StackMixer;

    fn add(mut self, rhs: &NumMixer) -> StackMixer {
        self += rhs;
        self
    }
}
