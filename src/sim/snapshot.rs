//! Read-only per-tick view for external collaborators
//!
//! The renderer (or any embedder) gets exactly this and nothing else: no
//! mutable access, no entity internals beyond what drawing needs.

use serde::Serialize;

use super::confetti::ConfettiParticle;
use super::puck::Puck;
use super::state::{CatchText, GameSession, GameStatus};

/// Goalie drawing data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GoalieView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub catch_anim: f32,
    pub catch_flash: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Serialize)]
pub struct FrameSnapshot<'a> {
    pub status: GameStatus,
    pub score: u32,
    pub lives: u32,
    pub best_score: u32,
    pub catch_flash: f32,
    pub catch_text: Option<&'a CatchText>,
    pub goalie: GoalieView,
    pub goal_flash: f32,
    pub pucks: &'a [Puck],
    pub confetti: &'a [ConfettiParticle],
}

impl GameSession {
    /// Borrowed, read-only view of the current frame
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            status: self.status,
            score: self.score,
            lives: self.lives,
            best_score: self.best_score,
            catch_flash: self.catch_flash,
            catch_text: self.catch_text.as_ref(),
            goalie: GoalieView {
                x: self.goalie.x,
                y: self.config.goalie_y(),
                width: self.config.goalie_width,
                height: self.config.goalie_height,
                catch_anim: self.goalie.catch_anim,
                catch_flash: self.goalie.catch_flash,
            },
            goal_flash: self.goal.flash,
            pucks: &self.pucks,
            confetti: self.effects.particles(),
        }
    }
}
