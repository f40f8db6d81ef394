//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Driven only by timestamps fed through the clock
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Renderers consume the read-only [`FrameSnapshot`]; nothing in here
//! draws, listens to events, or touches storage.

pub mod clock;
pub mod collision;
pub mod confetti;
pub mod goalie;
pub mod puck;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use clock::{FrameClock, FrameDelta};
pub use collision::{Zone, resolve_outcomes};
pub use confetti::{BurstKind, ConfettiParticle, EffectsSystem};
pub use goalie::{Goal, Goalie};
pub use puck::{Puck, aim_wobble};
pub use snapshot::{FrameSnapshot, GoalieView};
pub use state::{CatchText, DifficultyParams, GameSession, GameStatus};
pub use tick::tick;
