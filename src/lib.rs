//! Puckstop - a falling-puck goalie arcade game, simulation core only
//!
//! Core modules:
//! - `sim`: the simulation engine (entities, collisions, per-frame tick)
//! - `driver`: scheduler-facing loop shell with cancellation
//! - `input`: polled pointer/keyboard target tracking
//! - `config`: explicit tuning configuration, validated at construction
//! - `scores`: game-outcome event and the submission seam
//!
//! Rendering, DOM/event capture and persistence live in external
//! collaborators; they consume the per-tick [`sim::FrameSnapshot`] and the
//! [`scores::OutcomeSink`] trait and nothing else.

pub mod config;
pub mod driver;
pub mod input;
pub mod scores;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use driver::{GameDriver, LoopControl, TickHandle};
pub use input::InputTracker;
pub use scores::{GameOutcome, LogSink, NullSink, OutcomeSink};
pub use sim::{FrameClock, FrameDelta, GameSession, GameStatus};

/// Fixed timebase constants
pub mod consts {
    /// Duration of one frame at the 60 Hz reference rate (ms)
    pub const TARGET_FRAME_MS: f32 = 1000.0 / 60.0;
    /// Elapsed-time clamp per frame; absorbs tab suspension and debugger
    /// stalls without teleporting entities (ms)
    pub const MAX_FRAME_ELAPSED_MS: f32 = 50.0;
}

/// Per-frame blend factor for exponential smoothing, compensated for the
/// speed multiplier so convergence is frame-rate independent:
/// `1 - (1 - easing)^delta` equals `easing` at delta = 1.
#[inline]
pub fn ease_factor(easing: f32, delta: f32) -> f32 {
    1.0 - (1.0 - easing).powf(delta)
}

/// Linear decay toward zero for transient effect scalars.
#[inline]
pub fn decay_scalar(value: f32, rate: f32, delta: f32) -> f32 {
    (value - rate * delta).max(0.0)
}
