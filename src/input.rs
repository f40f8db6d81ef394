//! Input target tracking
//!
//! Reduces whatever the embedder captures (pointer moves, touch drags,
//! held arrow keys) to one desired horizontal position, polled once per
//! tick. No event buffering: only the latest target survives, and the
//! adapter that actually listens to events lives outside the core.

use crate::config::GameConfig;

/// Latest-value target tracker
#[derive(Debug, Clone)]
pub struct InputTracker {
    target_x: f32,
    left_held: bool,
    right_held: bool,
}

impl InputTracker {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            target_x: config.center_x(),
            left_held: false,
            right_held: false,
        }
    }

    /// Pointer/touch sample. Non-finite samples are dropped; range is the
    /// goalie's problem (it clamps to its margins before easing).
    pub fn set_pointer_x(&mut self, x: f32) {
        if x.is_finite() {
            self.target_x = x;
        }
    }

    pub fn set_left(&mut self, held: bool) {
        self.left_held = held;
    }

    pub fn set_right(&mut self, held: bool) {
        self.right_held = held;
    }

    /// Apply held-key nudges for this frame
    pub fn update(&mut self, delta: f32, config: &GameConfig) {
        let step = config.key_nudge_step * delta;
        if self.left_held {
            self.target_x -= step;
        }
        if self.right_held {
            self.target_x += step;
        }
        self.target_x = self.target_x.clamp(0.0, config.field_width);
    }

    /// The single value the simulation polls each tick
    pub fn target_x(&self) -> f32 {
        self.target_x
    }

    /// Back to the field center, keys released
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> GameConfig {
        GameConfig::default().validated().unwrap()
    }

    #[test]
    fn test_starts_at_field_center() {
        let cfg = cfg();
        let tracker = InputTracker::new(&cfg);
        assert_eq!(tracker.target_x(), cfg.center_x());
    }

    #[test]
    fn test_pointer_overwrites_target() {
        let cfg = cfg();
        let mut tracker = InputTracker::new(&cfg);
        tracker.set_pointer_x(123.0);
        tracker.set_pointer_x(321.0);
        assert_eq!(tracker.target_x(), 321.0);
    }

    #[test]
    fn test_nonfinite_pointer_ignored() {
        let cfg = cfg();
        let mut tracker = InputTracker::new(&cfg);
        tracker.set_pointer_x(f32::NAN);
        tracker.set_pointer_x(f32::INFINITY);
        assert_eq!(tracker.target_x(), cfg.center_x());
    }

    #[test]
    fn test_held_keys_nudge_per_frame() {
        let cfg = cfg();
        let mut tracker = InputTracker::new(&cfg);
        tracker.set_right(true);
        tracker.update(1.0, &cfg);
        tracker.update(1.0, &cfg);
        assert_eq!(tracker.target_x(), cfg.center_x() + 2.0 * cfg.key_nudge_step);

        tracker.set_right(false);
        tracker.set_left(true);
        tracker.update(2.0, &cfg); // nudge scales with delta
        assert_eq!(tracker.target_x(), cfg.center_x());
    }

    #[test]
    fn test_target_clamped_to_field() {
        let cfg = cfg();
        let mut tracker = InputTracker::new(&cfg);
        tracker.set_left(true);
        for _ in 0..10_000 {
            tracker.update(1.0, &cfg);
        }
        assert_eq!(tracker.target_x(), 0.0);
    }

    #[test]
    fn test_reset_recenters_and_releases_keys() {
        let cfg = cfg();
        let mut tracker = InputTracker::new(&cfg);
        tracker.set_pointer_x(5.0);
        tracker.set_left(true);
        tracker.reset(&cfg);
        assert_eq!(tracker.target_x(), cfg.center_x());
        tracker.update(1.0, &cfg);
        assert_eq!(tracker.target_x(), cfg.center_x());
    }
}
