//! Game tuning configuration
//!
//! One explicit, fully enumerated structure passed into the session at
//! construction. There is no module-level mutable configuration; anything
//! a renderer or embedder wants to tweak goes through here.

use serde::{Deserialize, Serialize};

/// Rejected configuration values. Everything else is clamped, not refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A dimension or rate was NaN or infinite
    NonFinite(&'static str),
    /// A field dimension was zero or negative
    NonPositive(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonFinite(field) => write!(f, "config field `{field}` is not finite"),
            ConfigError::NonPositive(field) => write!(f, "config field `{field}` must be > 0"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Complete gameplay tuning. Distances are px, velocities px per 60 Hz
/// frame, durations ms unless the name says frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    /// Playfield width (px)
    pub field_width: f32,
    /// Playfield height (px)
    pub field_height: f32,
    /// Horizontal margin the goalie cannot leave (px)
    pub side_margin: f32,
    /// Extra margin past the field edges before a puck is purged (px)
    pub offscreen_margin: f32,

    // === Session ===
    /// Lives at game start
    pub initial_lives: u32,

    // === Goal ===
    /// Width of the goal opening, centered at the bottom (px)
    pub goal_width: f32,
    /// Height of the goal opening (px)
    pub goal_height: f32,

    // === Goalie ===
    pub goalie_width: f32,
    pub goalie_height: f32,
    /// Catch zone width as a fraction of the goalie body
    pub catch_zone_width_frac: f32,
    /// Catch zone height as a fraction of the body, anchored to its top
    pub catch_zone_height_frac: f32,
    /// Exponential smoothing factor toward the target x, per reference frame
    pub goalie_easing: f32,
    /// Target nudge per frame while a key is held (px)
    pub key_nudge_step: f32,

    // === Spawner / difficulty ===
    /// Spawn interval at game start (ms)
    pub initial_spawn_interval_ms: f32,
    /// Spawn interval floor (ms)
    pub min_spawn_interval_ms: f32,
    /// Interval decrease applied per ramp step (ms)
    pub spawn_interval_decrease_ms: f32,
    /// Fall speed at game start (px/frame)
    pub initial_fall_speed: f32,
    /// Fall speed ceiling (px/frame)
    pub max_fall_speed: f32,
    /// Fall speed increase applied per ramp step (px/frame)
    pub fall_speed_increase: f32,
    /// Time between difficulty ramp steps (ms)
    pub difficulty_ramp_interval_ms: f32,
    /// Probability a puck enters from a side edge instead of the top
    pub side_spawn_chance: f32,
    /// Frames of play before aim deviation starts ramping
    pub aim_wobble_delay_frames: u64,
    /// Frames over which aim deviation ramps to full strength
    pub aim_wobble_ramp_frames: u64,
    /// Maximum angular deviation from the goal-center aim (radians)
    pub aim_wobble_max: f32,
    /// Minimum downward velocity as a fraction of total speed
    pub min_downward_frac: f32,

    // === Puck ===
    pub puck_radius: f32,
    /// Maximum visual compression near the goal plane
    pub squash_max: f32,
    /// Distance above the goal plane over which squash ramps in (px)
    pub squash_range: f32,

    // === Effect timers (per-frame decay rates at delta = 1) ===
    pub catch_flash_decay: f32,
    pub goal_flash_decay: f32,
    pub catch_anim_decay: f32,
    /// Catch text time-to-live (frames)
    pub catch_text_ttl: f32,
    /// Catch text upward drift (px/frame)
    pub catch_text_rise: f32,

    // === Confetti ===
    pub catch_burst_count: usize,
    pub record_burst_count: usize,
    /// Initial-velocity multiplier for record bursts
    pub record_burst_power: f32,
    /// Downward acceleration on particles (px/frame^2)
    pub confetti_gravity: f32,
    pub confetti_life_min: f32,
    pub confetti_life_max: f32,
    /// Hard cap on live particles; oldest are recycled past it
    pub max_confetti: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: 480.0,
            field_height: 640.0,
            side_margin: 12.0,
            offscreen_margin: 40.0,

            initial_lives: 3,

            goal_width: 160.0,
            goal_height: 40.0,

            goalie_width: 72.0,
            goalie_height: 54.0,
            catch_zone_width_frac: 0.6,
            catch_zone_height_frac: 0.45,
            goalie_easing: 0.18,
            key_nudge_step: 7.0,

            initial_spawn_interval_ms: 800.0,
            min_spawn_interval_ms: 350.0,
            spawn_interval_decrease_ms: 45.0,
            initial_fall_speed: 2.6,
            max_fall_speed: 6.5,
            fall_speed_increase: 0.3,
            difficulty_ramp_interval_ms: 6000.0,
            side_spawn_chance: 0.18,
            aim_wobble_delay_frames: 300,
            aim_wobble_ramp_frames: 3600,
            aim_wobble_max: 0.55,
            min_downward_frac: 0.35,

            puck_radius: 9.0,
            squash_max: 0.45,
            squash_range: 90.0,

            catch_flash_decay: 0.05,
            goal_flash_decay: 0.04,
            catch_anim_decay: 0.08,
            catch_text_ttl: 45.0,
            catch_text_rise: 0.8,

            catch_burst_count: 18,
            record_burst_count: 64,
            record_burst_power: 1.6,
            confetti_gravity: 0.12,
            confetti_life_min: 40.0,
            confetti_life_max: 80.0,
            max_confetti: 512,
        }
    }
}

impl GameConfig {
    /// Validate and normalize. Dimensions must be positive and finite;
    /// fractions, floors and ceilings are clamped into sane ranges rather
    /// than rejected.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        for (value, name) in [
            (self.field_width, "field_width"),
            (self.field_height, "field_height"),
            (self.goal_width, "goal_width"),
            (self.goal_height, "goal_height"),
            (self.goalie_width, "goalie_width"),
            (self.goalie_height, "goalie_height"),
            (self.puck_radius, "puck_radius"),
            (self.initial_spawn_interval_ms, "initial_spawn_interval_ms"),
            (self.initial_fall_speed, "initial_fall_speed"),
            (self.difficulty_ramp_interval_ms, "difficulty_ramp_interval_ms"),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite(name));
            }
            if value <= 0.0 {
                return Err(ConfigError::NonPositive(name));
            }
        }

        self.goal_width = self.goal_width.min(self.field_width);
        self.side_margin = self.side_margin.clamp(0.0, self.field_width / 4.0);
        self.offscreen_margin = self.offscreen_margin.max(0.0);

        self.catch_zone_width_frac = self.catch_zone_width_frac.clamp(0.05, 1.0);
        self.catch_zone_height_frac = self.catch_zone_height_frac.clamp(0.05, 1.0);
        self.goalie_easing = self.goalie_easing.clamp(0.01, 0.99);
        self.key_nudge_step = self.key_nudge_step.max(0.0);

        self.min_spawn_interval_ms = self
            .min_spawn_interval_ms
            .clamp(1.0, self.initial_spawn_interval_ms);
        self.spawn_interval_decrease_ms = self.spawn_interval_decrease_ms.max(0.0);
        self.max_fall_speed = self.max_fall_speed.max(self.initial_fall_speed);
        self.fall_speed_increase = self.fall_speed_increase.max(0.0);
        self.side_spawn_chance = self.side_spawn_chance.clamp(0.0, 1.0);
        self.aim_wobble_ramp_frames = self.aim_wobble_ramp_frames.max(1);
        self.aim_wobble_max = self.aim_wobble_max.clamp(0.0, std::f32::consts::FRAC_PI_2);
        self.min_downward_frac = self.min_downward_frac.clamp(0.0, 0.95);

        self.squash_max = self.squash_max.max(0.0);
        self.squash_range = self.squash_range.max(1.0);

        self.catch_flash_decay = self.catch_flash_decay.max(1e-4);
        self.goal_flash_decay = self.goal_flash_decay.max(1e-4);
        self.catch_anim_decay = self.catch_anim_decay.max(1e-4);
        self.catch_text_ttl = self.catch_text_ttl.max(1.0);

        self.confetti_life_min = self.confetti_life_min.max(1.0);
        self.confetti_life_max = self.confetti_life_max.max(self.confetti_life_min);
        self.record_burst_power = self.record_burst_power.max(1.0);

        Ok(self)
    }

    /// Top edge of the goal opening - the plane pucks squash against
    pub fn goal_top(&self) -> f32 {
        self.field_height - self.goal_height
    }

    /// Fixed goalie y (top of the body), just above the goal opening
    pub fn goalie_y(&self) -> f32 {
        self.goal_top() - self.goalie_height
    }

    /// Horizontal center of the field
    pub fn center_x(&self) -> f32 {
        self.field_width / 2.0
    }
}
