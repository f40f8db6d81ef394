//! Collision detection and outcome resolution
//!
//! Everything here is axis-aligned zone testing against puck centers -
//! no rigid-body response, no sub-frame trajectory interpolation. The
//! one ordering rule that matters: the goal-entry test runs before the
//! catch test, so a puck that scores can never also be caught.

use glam::Vec2;

use super::confetti::BurstKind;
use super::goalie::Goal;
use super::state::{CatchText, GameSession};

/// Axis-aligned rectangle in field coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zone {
    pub min: Vec2,
    pub max: Vec2,
}

impl Zone {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }
}

/// Resolve every active puck against the goal opening and the goalie's
/// catch zone, then purge off-screen strays. Pucks already flagged from a
/// previous frame are skipped entirely - an outcome applies at most once
/// per puck lifetime.
pub fn resolve_outcomes(session: &mut GameSession) {
    let opening = Goal::opening(&session.config);
    let catch_zone = session.goalie.catch_zone(&session.config);

    for i in 0..session.pucks.len() {
        if session.pucks[i].resolved() {
            continue;
        }
        let center = session.pucks[i].pos;

        // Goal entry first: a scored puck cannot also be caught
        if opening.contains(center) {
            let puck = &mut session.pucks[i];
            puck.scored = true;
            puck.remove = true;
            session.goal.on_goal();
            session.lives = session.lives.saturating_sub(1);
            continue;
        }

        if catch_zone.contains(center) {
            let puck = &mut session.pucks[i];
            puck.caught = true;
            puck.remove = true;
            session.goalie.on_catch();
            session.score += 1;
            session.catch_flash = 1.0;
            session.catch_text = Some(CatchText {
                pos: center,
                ttl: session.config.catch_text_ttl,
                value: session.score,
            });
            session
                .effects
                .burst(&mut session.rng, &session.config, center, BurstKind::Catch);
            continue;
        }

        // Neither zone: strays past the margins vanish with no penalty
        if session.pucks[i].offscreen(&session.config) {
            session.pucks[i].remove = true;
        }
    }

    session.pucks.retain(|p| !p.remove);
}
