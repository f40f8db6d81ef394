//! Confetti particle system
//!
//! Celebration-only: nothing here affects gameplay. Particles are owned
//! by the effects system, never by the puck that triggered them, so a
//! burst keeps raining after its puck is gone.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::GameConfig;

/// Palette for ordinary catch bursts (0xRRGGBB)
pub const CATCH_PALETTE: [u32; 5] = [0x4FC3F7, 0x81C784, 0xFFB74D, 0xE57373, 0xBA68C8];
/// Gold palette reserved for new personal records
pub const RECORD_PALETTE: [u32; 5] = [0xFFD54F, 0xFFE082, 0xFFF176, 0xFFCA28, 0xFFFFFF];

/// What triggered a burst - decides count, palette and launch power
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurstKind {
    Catch,
    Record,
}

/// One piece of confetti
#[derive(Debug, Clone, Serialize)]
pub struct ConfettiParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub rotation: f32,
    pub rot_speed: f32,
    /// 0xRRGGBB
    pub color: u32,
    /// Remaining life in frames, decremented by delta
    pub life: f32,
}

/// Owns all transient particles for a session
#[derive(Debug, Default)]
pub struct EffectsSystem {
    particles: Vec<ConfettiParticle>,
}

impl EffectsSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[ConfettiParticle] {
        &self.particles
    }

    pub fn is_drained(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Emit a burst at `pos`. Record bursts are bigger, gold, and launched
    /// harder than catch bursts.
    pub fn burst(&mut self, rng: &mut Pcg32, config: &GameConfig, pos: Vec2, kind: BurstKind) {
        let (count, power, palette) = match kind {
            BurstKind::Catch => (config.catch_burst_count, 1.0, &CATCH_PALETTE),
            BurstKind::Record => (
                config.record_burst_count,
                config.record_burst_power,
                &RECORD_PALETTE,
            ),
        };

        for _ in 0..count {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(1.5..4.5) * power;
            // Upward kick so bursts fountain before gravity wins
            let vel = Vec2::from_angle(angle) * speed + Vec2::new(0.0, -1.2 * power);

            if self.particles.len() >= config.max_confetti {
                // Recycle the oldest to stay under the cap
                self.particles.remove(0);
            }
            self.particles.push(ConfettiParticle {
                pos,
                vel,
                rotation: rng.random_range(0.0..std::f32::consts::TAU),
                rot_speed: rng.random_range(-0.3..0.3),
                color: palette[rng.random_range(0..palette.len())],
                life: rng.random_range(config.confetti_life_min..config.confetti_life_max),
            });
        }
    }

    /// One frame of particle physics: gravity, integration, spin, decay.
    /// Dead particles are dropped immediately.
    pub fn update(&mut self, delta: f32, config: &GameConfig) {
        for p in &mut self.particles {
            p.vel.y += config.confetti_gravity * delta;
            p.pos += p.vel * delta;
            p.rotation += p.rot_speed * delta;
            p.life -= delta;
        }
        self.particles.retain(|p| p.life > 0.0);
    }
}
