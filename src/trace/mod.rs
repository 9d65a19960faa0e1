//! Step trace generation
//!
//! This module turns an algorithm + sequence selection into an immutable,
//! randomly seekable trace of atomic operations:
//! - [`step`]: the [`Step`] record, its embedded [`StepStats`], and the
//!   derived [`Highlight`]
//! - [`algorithms`]: the [`Algorithm`] enum and the per-algorithm
//!   generators behind [`generate`]
//!
//! # Determinism
//!
//! Generation is a pure function of (algorithm, sequence): no side
//! effects, no clock, no randomness. The same selection always produces
//! the identical trace, which is what makes snapshot replay and
//! step-accurate pseudocode highlighting possible downstream.

pub mod algorithms;
pub mod step;

pub use algorithms::{generate, Algorithm};
pub use step::{Highlight, Step, StepKind, StepStats};
