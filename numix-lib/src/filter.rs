//! Order-preserving value filters applied to mixer output.

use std::collections::HashSet;

use crate::constants::PRIMES;

/// Whether `value` is one of the tabulated primes below 100.
pub fn is_prime(value: i32) -> bool {
    PRIMES.binary_search(&value).is_ok()
}

/// Keep the first occurrence of every value, preserving order.
pub fn dedup_stable(values: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().copied().filter(|v| seen.insert(*v)).collect()
}

/// Drop every tabulated prime, preserving order.
pub fn purge_primes(values: &[i32]) -> Vec<i32> {
    values.iter().copied().filter(|v| !is_prime(*v)).collect()
}
