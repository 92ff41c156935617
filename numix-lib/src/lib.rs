//! # numix
//!
//! Parity-filtered pseudo-random number mixers. A [`NumMixer`](mixer::NumMixer)
//! samples from its own dataset under a budget, a [`DualMixer`](mixer::DualMixer)
//! merges an even and an odd mixer, and a [`StackMixer`](mixer::StackMixer)
//! derives each stacked mixer's behavior from its position.
//! All randomness flows through an explicitly passed [`RandomSource`](random::RandomSource).

pub mod constants;
pub mod error;
pub mod filter;
pub mod mixer;
pub mod random;
pub mod report;

pub use error::MixerError;
pub use mixer::{CombineMode, DualMixer, Mixer, Mode, NumMixer, StackMixer};
pub use random::RandomSource;
