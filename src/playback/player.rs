// Playback engine over a generated trace and its snapshots

use std::time::{Duration, Instant};

use rustc_hash::FxHashSet;

use crate::playback::sequence;
use crate::playback::ticker::Ticker;
use crate::snapshot::build_snapshots;
use crate::trace::{Algorithm, Highlight, Step, StepStats};

/// Milliseconds per autoplay step when none is configured
pub const DEFAULT_SPEED_MS: u64 = 100;

/// Fastest autoplay cadence; lower speed requests are floored here
pub const MIN_TICK_MS: u64 = 8;

/// Slowest autoplay cadence the UI offers
pub const MAX_SPEED_MS: u64 = 600;

/// Coarse playback phase derived from the cursor and run flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// At the start of the trace, not running
    Idle,
    /// Mid-trace, not running
    Paused,
    /// Autoplay active
    Running,
    /// Cursor at the end of a non-empty trace
    Finished,
}

/// The playback controller.
///
/// Owns the current selection (algorithm + base sequence), the trace and
/// snapshots generated from it, and a cursor over `0..=trace_len`. All
/// navigation is seeking into the prebuilt snapshot list; nothing is ever
/// re-sorted during playback. Out-of-range seeks clamp silently, and every
/// selection change cancels the autoplay schedule before the old trace is
/// replaced.
pub struct Player {
    algorithm: Algorithm,

    /// Base sequence for the current selection, replaced wholesale
    base: Vec<i64>,

    /// Immutable trace for (algorithm, base)
    steps: Vec<Step>,

    /// One array state per step boundary, `steps.len() + 1` entries
    snapshots: Vec<Vec<i64>>,

    /// Position in the trace, `0..=steps.len()`
    cursor: usize,

    /// Whether autoplay is active
    running: bool,

    /// Requested milliseconds per autoplay step (floored at `MIN_TICK_MS`
    /// when armed)
    speed_ms: u64,

    /// The single outstanding autoplay schedule
    ticker: Ticker,
}

impl Player {
    /// Build a player for the given selection, cursor at the start
    pub fn new(algorithm: Algorithm, base: Vec<i64>) -> Self {
        let steps = algorithm.steps(&base);
        let snapshots = build_snapshots(&base, &steps);
        Player {
            algorithm,
            base,
            steps,
            snapshots,
            cursor: 0,
            running: false,
            speed_ms: DEFAULT_SPEED_MS,
            ticker: Ticker::new(),
        }
    }

    /// Regenerate trace and snapshots for the current selection and reset
    /// playback. The ticker is cancelled before the old trace is dropped
    /// so its schedule can never advance into the new one.
    fn rebuild(&mut self) {
        self.ticker.cancel();
        self.running = false;
        self.steps = self.algorithm.steps(&self.base);
        self.snapshots = build_snapshots(&self.base, &self.steps);
        self.cursor = 0;
    }

    /// Advance one step; a no-op at the end of the trace
    pub fn step_forward(&mut self) {
        if self.cursor < self.steps.len() {
            self.cursor += 1;
        }
    }

    /// Retreat one step; a no-op at the start
    pub fn step_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Start autoplay.
    ///
    /// A no-op while already running or when the trace is empty. Starting
    /// from the end rewinds to the start first.
    pub fn play(&mut self) {
        if self.running || self.steps.is_empty() {
            return;
        }
        if self.cursor >= self.steps.len() {
            self.cursor = 0;
        }
        self.running = true;
        self.ticker.arm(Instant::now(), self.tick_interval());
    }

    /// Stop autoplay, keeping the cursor where it is
    pub fn pause(&mut self) {
        self.running = false;
        self.ticker.cancel();
    }

    /// Stop autoplay and rewind to the start
    pub fn reset(&mut self) {
        self.pause();
        self.cursor = 0;
    }

    /// Advance autoplay against the caller's clock.
    ///
    /// Fires every due interval since the last call, so the step rate
    /// tracks the configured speed even when the control loop polls
    /// slower than the interval. Reaching the end of the trace stops
    /// autoplay and cancels the schedule. Returns the number of steps
    /// taken.
    pub fn tick(&mut self, now: Instant) -> usize {
        let mut taken = 0;
        while self.running && self.ticker.fire(now) {
            self.step_forward();
            taken += 1;
            if self.cursor >= self.steps.len() {
                self.pause();
            }
        }
        taken
    }

    /// Set the autoplay speed in milliseconds per step, clamped to the
    /// supported range.
    ///
    /// Takes effect immediately: while running, the old schedule is
    /// cancelled and a fresh one armed at the new cadence.
    pub fn set_speed(&mut self, ms: u64) {
        self.speed_ms = ms.clamp(MIN_TICK_MS, MAX_SPEED_MS);
        if self.running {
            self.ticker.cancel();
            self.ticker.arm(Instant::now(), self.tick_interval());
        }
    }

    /// Switch algorithm, regenerating the trace over the same base
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
        self.rebuild();
    }

    /// Replace the base with a fresh random sequence of `len` elements,
    /// clamped to the supported size range
    pub fn set_array_size(&mut self, len: usize) {
        let len = len.clamp(sequence::MIN_SIZE, sequence::MAX_SIZE);
        self.base = sequence::random_sequence(len);
        self.rebuild();
    }

    /// Replace the base with a fresh random sequence of the current size
    pub fn regenerate(&mut self) {
        self.base = sequence::random_sequence(self.base.len());
        self.rebuild();
    }

    /// Replace the base with a user-supplied sequence.
    ///
    /// An empty sequence leaves the current state untouched, so an input
    /// with no valid tokens never wipes a working trace.
    pub fn set_custom_sequence(&mut self, values: Vec<i64>) {
        if values.is_empty() {
            return;
        }
        self.base = values;
        self.rebuild();
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.speed_ms.max(MIN_TICK_MS))
    }

    // ========== Getter methods for UI ==========

    /// Current cursor position in `0..=trace_len`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of steps in the trace
    pub fn trace_len(&self) -> usize {
        self.steps.len()
    }

    /// The current algorithm selection
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The array as of the cursor.
    ///
    /// Always in range: the snapshot list carries one entry per cursor
    /// position and is rebuilt together with the trace.
    pub fn array(&self) -> &[i64] {
        &self.snapshots[self.cursor]
    }

    /// Whether autoplay is active
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the cursor sits at the end of a non-empty trace
    pub fn is_finished(&self) -> bool {
        !self.steps.is_empty() && self.cursor == self.steps.len()
    }

    /// Requested speed in milliseconds per step
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// The step the cursor has just consumed, if any
    pub fn current_step(&self) -> Option<Step> {
        self.cursor
            .checked_sub(1)
            .and_then(|index| self.steps.get(index))
            .copied()
    }

    /// Cumulative statistics as of the cursor (zero baseline at the start)
    pub fn stats(&self) -> StepStats {
        self.current_step()
            .map(|step| step.stats())
            .unwrap_or_default()
    }

    /// Highlight derived from the just-consumed step
    pub fn highlight(&self) -> Option<Highlight> {
        self.current_step().map(|step| step.highlight())
    }

    /// Coarse playback phase
    pub fn phase(&self) -> Phase {
        if self.running {
            Phase::Running
        } else if self.is_finished() {
            Phase::Finished
        } else if self.cursor == 0 {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }

    /// Positions finalized by `MarkSorted` steps up to the cursor.
    ///
    /// Returned as a set: bubble sort re-marks index 0 at the end of its
    /// run, and re-marking is absorbed here.
    pub fn sorted_positions(&self) -> FxHashSet<usize> {
        let mut sorted = FxHashSet::default();
        for step in &self.steps[..self.cursor] {
            if let Step::MarkSorted { index, .. } = step {
                sorted.insert(*index);
            }
        }
        sorted
    }
}
