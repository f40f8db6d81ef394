//! Per-frame simulation step
//!
//! One tick advances every component in a fixed order:
//! input target -> difficulty ramp -> spawner -> entity movement ->
//! collision/outcome -> effects decay -> lifecycle check.
//!
//! A puck emitted by the spawner joins the active set at the end of the
//! tick, so it is neither moved nor collision-tested until the next one.

use super::clock::FrameDelta;
use super::collision::resolve_outcomes;
use super::puck::{Puck, aim_wobble};
use super::state::{GameSession, GameStatus};
use crate::decay_scalar;

/// Advance the session by one frame. Outside Playing this is almost a
/// no-op: Idle/Paused skip the simulation entirely, Ended only keeps the
/// remaining confetti draining.
pub fn tick(session: &mut GameSession, target_x: f32, dt: FrameDelta) {
    match session.status {
        GameStatus::Playing => {}
        GameStatus::Ended => {
            session.effects.update(dt.delta, &session.config);
            return;
        }
        GameStatus::Idle | GameStatus::Paused => return,
    }

    session.frames += 1;

    // Input target (already reduced to a single x by the tracker)
    session.goalie.set_target(target_x, &session.config);

    // Difficulty ramp: a step function, not an easing curve
    session.ramp_elapsed_ms += dt.elapsed_ms;
    if session.ramp_elapsed_ms >= session.config.difficulty_ramp_interval_ms {
        session.ramp_elapsed_ms = 0.0;
        session.difficulty.step(&session.config);
        log::debug!(
            "difficulty step: interval={:.0}ms speed={:.2}",
            session.difficulty.spawn_interval_ms,
            session.difficulty.fall_speed
        );
    }

    // Spawner: emit at most one puck per tick, held back until the end of
    // the frame so it is not evaluated in the tick that created it
    session.spawn_elapsed_ms += dt.elapsed_ms;
    let mut spawned = None;
    if session.spawn_elapsed_ms >= session.difficulty.spawn_interval_ms {
        session.spawn_elapsed_ms = 0.0;
        let id = session.next_entity_id();
        let wobble = aim_wobble(session.frames, &session.config);
        spawned = Some(Puck::spawn(
            id,
            &session.config,
            session.difficulty.fall_speed,
            wobble,
            &mut session.rng,
        ));
    }

    // Entity movement
    session.goalie.update(dt.delta, &session.config);
    for puck in &mut session.pucks {
        puck.integrate(&session.config, dt.delta);
    }

    // Collision and outcome resolution
    resolve_outcomes(session);

    if let Some(puck) = spawned {
        session.pucks.push(puck);
    }

    // Effects decay
    session.catch_flash = decay_scalar(session.catch_flash, session.config.catch_flash_decay, dt.delta);
    if let Some(text) = &mut session.catch_text {
        text.ttl -= dt.delta;
        text.pos.y -= session.config.catch_text_rise * dt.delta;
    }
    if session.catch_text.as_ref().is_some_and(|t| t.ttl <= 0.0) {
        session.catch_text = None;
    }
    session.goalie.decay(dt.delta, &session.config);
    session.goal.decay(dt.delta, &session.config);
    session.effects.update(dt.delta, &session.config);

    // Lifecycle check: exactly one transition to Ended
    if session.lives == 0 {
        session.end();
    }
}
