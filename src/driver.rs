//! Scheduler-facing loop shell
//!
//! Owns the session, the clock and the input tracker, and exposes an
//! explicit start/stop/tick surface instead of recursing on an
//! animation-frame primitive. The embedder's frame scheduler grabs a
//! [`TickHandle`] when it schedules a callback and presents it to
//! [`GameDriver::advance`]; a handle issued before a restart or teardown
//! is stale and the tick it carries is dropped without touching the
//! session, which is what keeps cancelled callbacks from resurrecting
//! state.

use crate::config::{ConfigError, GameConfig};
use crate::input::InputTracker;
use crate::scores::OutcomeSink;
use crate::sim::{FrameClock, GameSession, GameStatus, tick};

/// Whether the embedder should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Proof that a scheduled tick belongs to the current loop generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
}

/// The loop driver
pub struct GameDriver {
    session: GameSession,
    clock: FrameClock,
    input: InputTracker,
    sink: Box<dyn OutcomeSink>,
    generation: u64,
    running: bool,
}

impl GameDriver {
    pub fn new(
        config: GameConfig,
        seed: u64,
        sink: Box<dyn OutcomeSink>,
    ) -> Result<Self, ConfigError> {
        let session = GameSession::new(config, seed)?;
        let input = InputTracker::new(&session.config);
        Ok(Self {
            session,
            clock: FrameClock::new(),
            input,
            sink,
            generation: 0,
            running: false,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn input_mut(&mut self) -> &mut InputTracker {
        &mut self.input
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin scheduling. Only effective from Idle.
    pub fn start(&mut self) {
        self.session.start();
        if self.session.status == GameStatus::Playing {
            self.clock.reset();
            self.running = true;
        }
    }

    /// Pausing skips the simulation but keeps the loop alive so resume is
    /// instant; the clock is reset on resume so the paused span never
    /// lands as elapsed time.
    pub fn pause(&mut self) {
        self.session.pause();
    }

    pub fn resume(&mut self) {
        let was_paused = self.session.status == GameStatus::Paused;
        self.session.resume();
        if was_paused && self.session.status == GameStatus::Playing {
            self.clock.reset();
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.session.status {
            GameStatus::Paused => self.resume(),
            _ => self.pause(),
        }
    }

    /// Cancel any scheduled continuation and return the session to Idle.
    /// Everything resets except the best score; `start()` re-arms.
    pub fn restart(&mut self) {
        self.generation += 1;
        self.running = false;
        self.clock.reset();
        self.input.reset(&self.session.config);
        self.session.restart();
    }

    /// Teardown: no tick fires after this
    pub fn stop(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    /// Token for the next scheduled callback
    pub fn schedule(&self) -> TickHandle {
        TickHandle {
            generation: self.generation,
        }
    }

    /// Run one scheduled tick. Stale handles (issued before a restart or
    /// stop) are ignored entirely.
    pub fn advance(&mut self, handle: TickHandle, now_ms: f64) -> LoopControl {
        if handle.generation != self.generation || !self.running {
            return LoopControl::Stop;
        }

        let dt = self.clock.sample(now_ms);

        match self.session.status {
            GameStatus::Playing => {
                self.input.update(dt.delta, &self.session.config);
                tick(&mut self.session, self.input.target_x(), dt);
                if let Some(outcome) = self.session.take_outcome() {
                    // Fire-and-forget: visible state is already final
                    self.sink.submit(&outcome);
                }
                LoopControl::Continue
            }
            GameStatus::Idle | GameStatus::Paused => LoopControl::Continue,
            GameStatus::Ended => {
                // Keep ticking solely to drain the celebration, then stop
                tick(&mut self.session, self.input.target_x(), dt);
                if self.session.effects.is_drained() {
                    self.running = false;
                    LoopControl::Stop
                } else {
                    LoopControl::Continue
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TARGET_FRAME_MS;
    use crate::scores::GameOutcome;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Captures submitted outcomes for inspection
    #[derive(Default)]
    struct RecordingSink(Rc<RefCell<Vec<GameOutcome>>>);

    impl OutcomeSink for RecordingSink {
        fn submit(&mut self, outcome: &GameOutcome) {
            self.0.borrow_mut().push(*outcome);
        }
    }

    fn driver_with_sink() -> (GameDriver, Rc<RefCell<Vec<GameOutcome>>>) {
        let outcomes = Rc::new(RefCell::new(Vec::new()));
        let sink = RecordingSink(outcomes.clone());
        let driver = GameDriver::new(GameConfig::default(), 42, Box::new(sink)).unwrap();
        (driver, outcomes)
    }

    fn run_frames(driver: &mut GameDriver, start_ms: f64, count: usize) -> f64 {
        let mut now = start_ms;
        for _ in 0..count {
            let handle = driver.schedule();
            now += TARGET_FRAME_MS as f64;
            driver.advance(handle, now);
        }
        now
    }

    #[test]
    fn test_advance_noop_before_start() {
        let (mut driver, _) = driver_with_sink();
        let handle = driver.schedule();
        assert_eq!(driver.advance(handle, 16.0), LoopControl::Stop);
        assert_eq!(driver.session().frames, 0);
    }

    #[test]
    fn test_playing_frames_advance_simulation() {
        let (mut driver, _) = driver_with_sink();
        driver.start();
        run_frames(&mut driver, 0.0, 10);
        // The first sample is a zero frame but still counts as a tick
        assert_eq!(driver.session().frames, 10);
    }

    #[test]
    fn test_paused_frames_skip_simulation() {
        let (mut driver, _) = driver_with_sink();
        driver.start();
        run_frames(&mut driver, 0.0, 5);
        let frames_before = driver.session().frames;

        driver.pause();
        let handle = driver.schedule();
        let control = driver.advance(handle, 10_000.0);
        assert_eq!(control, LoopControl::Continue);
        assert_eq!(driver.session().frames, frames_before);
        assert_eq!(driver.session().status, GameStatus::Paused);
    }

    #[test]
    fn test_resume_does_not_count_paused_span() {
        let (mut driver, _) = driver_with_sink();
        driver.start();
        let now = run_frames(&mut driver, 0.0, 5);

        driver.pause();
        driver.resume();
        // Long paused gap: first post-resume sample must be a zero frame
        let spawn_elapsed = driver.session().spawn_elapsed_ms;
        let handle = driver.schedule();
        driver.advance(handle, now + 30_000.0);
        assert_eq!(driver.session().spawn_elapsed_ms, spawn_elapsed);
    }

    #[test]
    fn test_stale_handle_after_restart_is_ignored() {
        let (mut driver, _) = driver_with_sink();
        driver.start();
        run_frames(&mut driver, 0.0, 5);

        let stale = driver.schedule();
        driver.restart();
        driver.start();
        run_frames(&mut driver, 1000.0, 3);
        let frames_before = driver.session().frames;

        // The pre-restart callback finally fires: it must change nothing
        assert_eq!(driver.advance(stale, 2000.0), LoopControl::Stop);
        assert_eq!(driver.session().frames, frames_before);
    }

    #[test]
    fn test_no_tick_after_stop() {
        let (mut driver, _) = driver_with_sink();
        driver.start();
        run_frames(&mut driver, 0.0, 5);
        let handle = driver.schedule();
        driver.stop();
        assert_eq!(driver.advance(handle, 9999.0), LoopControl::Stop);
        assert!(!driver.is_running());
    }

    #[test]
    fn test_outcome_submitted_once_and_loop_drains() {
        let (mut driver, outcomes) = driver_with_sink();
        driver.start();

        // Rig the session: one life, one puck parked in the goal mouth
        {
            let session = &mut driver.session;
            session.lives = 1;
            session.score = 2;
            let id = session.next_entity_id();
            let cfg = session.config.clone();
            let mut puck = crate::sim::Puck::aimed(
                id,
                &cfg,
                glam::Vec2::new(cfg.center_x(), 0.0),
                3.0,
                0.0,
            );
            puck.pos = crate::sim::goalie::Goal::center(&cfg);
            puck.vel = glam::Vec2::ZERO;
            session.pucks.push(puck);
        }

        let mut now = run_frames(&mut driver, 0.0, 3);
        assert_eq!(driver.session().status, GameStatus::Ended);
        let submitted = outcomes.borrow().clone();
        assert_eq!(submitted, vec![GameOutcome { final_score: 2, is_new_record: true }]);

        // Ended: loop keeps going until the record confetti is gone
        let mut stopped = false;
        for _ in 0..200 {
            let handle = driver.schedule();
            now += TARGET_FRAME_MS as f64;
            if driver.advance(handle, now) == LoopControl::Stop {
                stopped = true;
                break;
            }
        }
        assert!(stopped, "loop must stop once particles are drained");
        assert_eq!(outcomes.borrow().len(), 1, "outcome submitted exactly once");
    }

    #[test]
    fn test_restart_preserves_best_across_runs() {
        let (mut driver, _) = driver_with_sink();
        driver.start();
        driver.session.score = 6;
        driver.session.lives = 0;
        run_frames(&mut driver, 0.0, 2);
        assert_eq!(driver.session().best_score, 6);

        driver.restart();
        assert_eq!(driver.session().status, GameStatus::Idle);
        assert_eq!(driver.session().score, 0);
        assert_eq!(driver.session().best_score, 6);
    }
}
