//! Shared constants for mixer construction and sampling defaults.

/// Length of the default `NumMixer` dataset (values `1..=DEFAULT_DATASET_LEN`).
pub const DEFAULT_DATASET_LEN: i32 = 100;

/// Inclusive bounds for a freshly constructed mixer's activity budget.
pub const BUDGET_MIN: u32 = 10;
pub const BUDGET_MAX: u32 = 20;

/// Number of values drawn per `ping` by the composite mixers.
pub const PING_BATCH: usize = 10;

/// Size and inclusive value bounds of datasets generated for stacked mixers.
pub const STACK_DATASET_LEN: usize = 30;
pub const STACK_VALUE_MIN: i32 = 2;
pub const STACK_VALUE_MAX: i32 = 100;

/// Sorted primes below 100.
pub const PRIMES: [i32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];
