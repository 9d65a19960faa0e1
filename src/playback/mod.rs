//! Playback control over a generated trace
//!
//! This module owns everything that moves during a session:
//! - [`player`]: the stateful [`Player`], a cursor-and-run-flag state
//!   machine over the immutable trace/snapshot pair
//! - [`ticker`]: the single cancellable autoplay schedule
//! - [`sequence`]: base-sequence generation, parsing, and bounds
//!
//! # Concurrency Model
//!
//! Everything here is single-threaded and cooperative. Trace generation
//! and snapshot building run to completion synchronously on every
//! selection change; the only time-driven element is the autoplay
//! schedule, which the control loop advances by polling
//! [`Player::tick`]. At most one schedule is outstanding per player, and
//! every transition out of the running state cancels it before anything
//! else changes.

pub mod player;
pub mod sequence;
pub mod ticker;

pub use player::{Phase, Player};
