//! Goalie and goal entities
//!
//! The goalie is the only player-driven entity: a fixed-height figure
//! easing horizontally toward the input target. The goal is a fixed
//! opening at the bottom of the field; pucks entering it cost a life.

use glam::Vec2;

use super::collision::Zone;
use crate::config::GameConfig;
use crate::{decay_scalar, ease_factor};

/// Player-controlled goal tender. y is fixed by the field layout.
#[derive(Debug, Clone)]
pub struct Goalie {
    pub x: f32,
    pub target_x: f32,
    /// Catch pose animation, 1.0 on catch, decays to 0
    pub catch_anim: f32,
    /// Catch highlight flash, 1.0 on catch, decays to 0
    pub catch_flash: f32,
}

impl Goalie {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.center_x(),
            target_x: config.center_x(),
            catch_anim: 0.0,
            catch_flash: 0.0,
        }
    }

    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    /// Clamp the desired x into the side margins, then store it as the
    /// easing target. Out-of-range input is never rejected, only clamped.
    pub fn set_target(&mut self, x: f32, config: &GameConfig) {
        let half = config.goalie_width / 2.0;
        let lo = config.side_margin + half;
        let hi = config.field_width - config.side_margin - half;
        self.target_x = x.clamp(lo, hi);
    }

    /// Ease toward the target with a delta-compensated blend so the
    /// convergence speed does not depend on the display refresh rate.
    pub fn update(&mut self, delta: f32, config: &GameConfig) {
        self.x += (self.target_x - self.x) * ease_factor(config.goalie_easing, delta);
    }

    /// Full body bounds
    pub fn body(&self, config: &GameConfig) -> Zone {
        let min = Vec2::new(self.x - config.goalie_width / 2.0, config.goalie_y());
        Zone::new(
            min,
            min + Vec2::new(config.goalie_width, config.goalie_height),
        )
    }

    /// The sub-rectangle where an overlapping puck counts as caught:
    /// narrower than the body and limited to its upper portion (the
    /// glove, not the skates).
    pub fn catch_zone(&self, config: &GameConfig) -> Zone {
        let width = config.goalie_width * config.catch_zone_width_frac;
        let height = config.goalie_height * config.catch_zone_height_frac;
        let min = Vec2::new(self.x - width / 2.0, config.goalie_y());
        Zone::new(min, min + Vec2::new(width, height))
    }

    pub fn on_catch(&mut self) {
        self.catch_anim = 1.0;
        self.catch_flash = 1.0;
    }

    pub fn decay(&mut self, delta: f32, config: &GameConfig) {
        self.catch_anim = decay_scalar(self.catch_anim, config.catch_anim_decay, delta);
        self.catch_flash = decay_scalar(self.catch_flash, config.catch_flash_decay, delta);
    }
}

/// The fixed opening at the bottom of the field
#[derive(Debug, Clone, Default)]
pub struct Goal {
    /// Miss highlight flash, 1.0 on goal entry, decays to 0
    pub flash: f32,
}

impl Goal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.flash = 0.0;
    }

    /// The scoring rectangle, centered at the bottom of the field
    pub fn opening(config: &GameConfig) -> Zone {
        let min = Vec2::new(
            config.center_x() - config.goal_width / 2.0,
            config.goal_top(),
        );
        Zone::new(min, min + Vec2::new(config.goal_width, config.goal_height))
    }

    /// Aim point for the spawner
    pub fn center(config: &GameConfig) -> Vec2 {
        Self::opening(config).center()
    }

    pub fn on_goal(&mut self) {
        self.flash = 1.0;
    }

    pub fn decay(&mut self, delta: f32, config: &GameConfig) {
        self.flash = decay_scalar(self.flash, config.goal_flash_decay, delta);
    }
}
