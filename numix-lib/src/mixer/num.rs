//! Single-dataset mixer with a parity mode and an activity budget.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign};

use log::{debug, trace};

use super::{Mixer, Mode};
use crate::constants::{BUDGET_MAX, BUDGET_MIN, DEFAULT_DATASET_LEN};
use crate::error::MixerError;
use crate::random::RandomSource;

/// Samples values from an owned dataset, filtered by parity.
///
/// Every successful [`sample`](Mixer::sample) call spends one unit of budget;
/// once the budget reaches zero the mixer stays inactive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumMixer {
    dataset: Vec<i32>,
    mode: Mode,
    even_allowed: bool,
    odd_allowed: bool,
    remaining_budget: u32,
    mode_change_count: u32,
}

impl NumMixer {
    /// Create a mixer over the default dataset `1..=100`.
    pub fn new(rng: &mut RandomSource) -> Self {
        Self::build(rng, (1..=DEFAULT_DATASET_LEN).collect())
    }

    /// Create a mixer over a caller-supplied dataset.
    ///
    /// # Errors
    /// Returns [`MixerError::EmptyDataset`] if `dataset` is empty.
    pub fn with_dataset(rng: &mut RandomSource, dataset: Vec<i32>) -> Result<Self, MixerError> {
        if dataset.is_empty() {
            return Err(MixerError::EmptyDataset);
        }
        Ok(Self::build(rng, dataset))
    }

    fn build(rng: &mut RandomSource, dataset: Vec<i32>) -> Self {
        let even_allowed = dataset.iter().any(|v| Mode::Even.accepts(*v));
        let odd_allowed = dataset.iter().any(|v| Mode::Odd.accepts(*v));
        let remaining_budget = rng.between_u32(BUDGET_MIN, BUDGET_MAX);
        debug!(
            "numMixer created: {} values, budget {}, even {}, odd {}",
            dataset.len(),
            remaining_budget,
            even_allowed,
            odd_allowed
        );

        Self {
            dataset,
            mode: Mode::Mix,
            even_allowed,
            odd_allowed,
            remaining_budget,
            mode_change_count: 0,
        }
    }

    /// Switch parity mode. Setting the current mode again is a no-op.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            trace!("numMixer mode {} -> {}", self.mode, mode);
            self.mode = mode;
            self.mode_change_count += 1;
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn mode_name(&self) -> &'static str {
        self.mode.name()
    }

    pub fn mode_change_count(&self) -> u32 {
        self.mode_change_count
    }

    pub fn remaining_budget(&self) -> u32 {
        self.remaining_budget
    }

    pub fn even_allowed(&self) -> bool {
        self.even_allowed
    }

    pub fn odd_allowed(&self) -> bool {
        self.odd_allowed
    }

    pub fn dataset(&self) -> &[i32] {
        &self.dataset
    }

    fn mode_satisfiable(&self) -> bool {
        match self.mode {
            Mode::Mix => true,
            Mode::Even => self.even_allowed,
            Mode::Odd => self.odd_allowed,
        }
    }

    // Rejection sampling: redraw until the value fits the mode.
    fn draw(&self, rng: &mut RandomSource) -> i32 {
        loop {
            let value = self.dataset[rng.index(self.dataset.len())];
            if self.mode.accepts(value) {
                return value;
            }
        }
    }
}

impl Mixer for NumMixer {
    fn sample(&mut self, rng: &mut RandomSource, count: usize) -> Result<Vec<i32>, MixerError> {
        if count == 0 {
            return Err(MixerError::EmptyBatch);
        }
        if !self.is_active() {
            return Err(MixerError::Inactive);
        }
        if !self.mode_satisfiable() {
            return Err(MixerError::ParityUnavailable(self.mode));
        }

        let values = (0..count).map(|_| self.draw(rng)).collect();
        self.remaining_budget -= 1;
        Ok(values)
    }

    fn is_active(&self) -> bool {
        self.remaining_budget > 0
    }
}

/// Mixers order by remaining budget; equal budgets order only when the
/// mixers are identical.
impl PartialOrd for NumMixer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.remaining_budget.cmp(&other.remaining_budget) {
            Ordering::Equal if self != other => None,
            ordering => Some(ordering),
        }
    }
}

impl AddAssign<&NumMixer> for NumMixer {
    fn add_assign(&mut self, rhs: &NumMixer) {
        self.mode_change_count += rhs.mode_change_count;
        self.remaining_budget += rhs.remaining_budget;
        self.even_allowed |= rhs.even_allowed;
        self.odd_allowed |= rhs.odd_allowed;
        self.dataset.extend_from_slice(&rhs.dataset);
    }
}

impl AddAssign for NumMixer {
    fn add_assign(&mut self, rhs: NumMixer) {
        *self += &rhs;
    }
}

impl Add<&NumMixer> for NumMixer {
    type Output = NumMixer;

    fn add(mut self, rhs: &NumMixer) -> NumMixer {
        self += rhs;
        self
    }
}

impl Add for NumMixer {
    type Output = NumMixer;

    fn add(mut self, rhs: NumMixer) -> NumMixer {
        self += &rhs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> RandomSource {
        RandomSource::seeded(0x5eed)
    }

    #[test]
    fn default_dataset_allows_both_parities() {
        let mixer = NumMixer::new(&mut rng());
        assert_eq!(mixer.dataset(), (1..=100).collect::<Vec<_>>().as_slice());
        assert!(mixer.even_allowed());
        assert!(mixer.odd_allowed());
        assert_eq!(mixer.mode(), Mode::Mix);
        assert_eq!(mixer.mode_change_count(), 0);
        assert!((BUDGET_MIN..=BUDGET_MAX).contains(&mixer.remaining_budget()));
    }

    #[test]
    fn parity_flags_follow_dataset() {
        let mut rng = rng();
        let evens = NumMixer::with_dataset(&mut rng, vec![2, 4, 6]).unwrap();
        assert!(evens.even_allowed());
        assert!(!evens.odd_allowed());

        let odds = NumMixer::with_dataset(&mut rng, vec![-3, 5]).unwrap();
        assert!(!odds.even_allowed());
        assert!(odds.odd_allowed());
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let result = NumMixer::with_dataset(&mut rng(), Vec::new());
        assert_eq!(result.unwrap_err(), MixerError::EmptyDataset);
    }

    #[test]
    fn repeated_set_mode_counts_once() {
        let mut mixer = NumMixer::new(&mut rng());
        mixer.set_mode(Mode::Even);
        mixer.set_mode(Mode::Even);
        assert_eq!(mixer.mode_change_count(), 1);
        mixer.set_mode(Mode::Mix);
        assert_eq!(mixer.mode_change_count(), 2);
    }

    #[test]
    fn even_sample_from_default_dataset() {
        let mut rng = rng();
        let mut mixer = NumMixer::new(&mut rng);
        mixer.set_mode(Mode::Even);
        let budget = mixer.remaining_budget();

        let values = mixer.sample(&mut rng, 10).unwrap();
        assert_eq!(values.len(), 10);
        assert!(values.iter().all(|v| v % 2 == 0 && (2..=100).contains(v)));
        assert_eq!(mixer.remaining_budget(), budget - 1);
    }

    #[test]
    fn odd_and_mix_samples_respect_mode() {
        let mut rng = rng();
        let dataset = vec![3, 8, 15, 22, 41];
        let mut mixer = NumMixer::with_dataset(&mut rng, dataset.clone()).unwrap();

        let mixed = mixer.sample(&mut rng, 20).unwrap();
        assert!(mixed.iter().all(|v| dataset.contains(v)));

        mixer.set_mode(Mode::Odd);
        let odd = mixer.sample(&mut rng, 20).unwrap();
        assert!(odd.iter().all(|v| v % 2 == 1));
    }

    #[test]
    fn missing_parity_fails_without_spending_budget() {
        let mut rng = rng();
        let mut mixer = NumMixer::with_dataset(&mut rng, vec![2, 4, 6]).unwrap();
        let budget = mixer.remaining_budget();
        mixer.set_mode(Mode::Odd);

        assert_eq!(
            mixer.sample(&mut rng, 5),
            Err(MixerError::ParityUnavailable(Mode::Odd))
        );
        assert_eq!(mixer.remaining_budget(), budget);
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut rng = rng();
        let mut mixer = NumMixer::new(&mut rng);
        assert_eq!(mixer.sample(&mut rng, 0), Err(MixerError::EmptyBatch));
    }

    #[test]
    fn budget_runs_out_for_every_mode() {
        let mut rng = rng();
        let mut mixer = NumMixer::new(&mut rng);
        let budget = mixer.remaining_budget();

        for spent in 1..=budget {
            assert!(mixer.sample(&mut rng, 3).is_ok());
            assert_eq!(mixer.remaining_budget(), budget - spent);
        }

        assert!(!mixer.is_active());
        for mode in [Mode::Mix, Mode::Even, Mode::Odd] {
            mixer.set_mode(mode);
            assert_eq!(mixer.sample(&mut rng, 1), Err(MixerError::Inactive));
        }
        assert_eq!(mixer.remaining_budget(), 0);
    }

    #[test]
    fn addition_merges_state() {
        let mut rng = rng();
        let mut lhs = NumMixer::with_dataset(&mut rng, vec![2, 4]).unwrap();
        lhs.set_mode(Mode::Even);
        let rhs = NumMixer::with_dataset(&mut rng, vec![7]).unwrap();

        let sum = lhs.clone() + &rhs;
        assert_eq!(sum.dataset(), &[2, 4, 7]);
        assert_eq!(
            sum.remaining_budget(),
            lhs.remaining_budget() + rhs.remaining_budget()
        );
        assert_eq!(sum.mode_change_count(), 1);
        assert!(sum.even_allowed() && sum.odd_allowed());
        assert_eq!(sum.mode(), Mode::Even);
    }

    #[test]
    fn ordering_follows_budget() {
        let mut rng = rng();
        let mut low = NumMixer::new(&mut rng);
        let high = NumMixer::new(&mut rng) + NumMixer::new(&mut rng);
        while low.remaining_budget() >= high.remaining_budget() {
            low.sample(&mut rng, 1).unwrap();
        }

        assert!(low < high);
        assert!(high > low);
        assert_eq!(low.partial_cmp(&low.clone()), Some(Ordering::Equal));
    }

    #[test]
    fn equal_budgets_on_different_mixers_are_unordered() {
        let mut rng = rng();
        let a = NumMixer::with_dataset(&mut rng, vec![1]).unwrap();
        let mut b = a.clone();
        b.set_mode(Mode::Odd);

        assert_ne!(a, b);
        assert_eq!(a.partial_cmp(&b), None);
    }
}
