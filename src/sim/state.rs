//! Game session state and lifecycle state machine
//!
//! All counters, entities and transient effect state for one playthrough
//! context live here, together with the lifecycle operations. Invalid
//! transitions are silent no-ops, never errors: calling `pause()` while
//! Idle simply does nothing.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::confetti::{BurstKind, EffectsSystem};
use super::goalie::{Goal, Goalie};
use super::puck::Puck;
use crate::config::{ConfigError, GameConfig};
use crate::scores::GameOutcome;

/// Lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for `start()`
    Idle,
    /// Simulation advancing
    Playing,
    /// Frozen mid-run; counters untouched
    Paused,
    /// Lives exhausted; terminal until `restart()`
    Ended,
}

/// Difficulty knobs the ramp mutates. Bounded: the interval never drops
/// below its floor, the speed never exceeds its ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultyParams {
    pub spawn_interval_ms: f32,
    pub fall_speed: f32,
}

impl DifficultyParams {
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            spawn_interval_ms: config.initial_spawn_interval_ms,
            fall_speed: config.initial_fall_speed,
        }
    }

    /// One ramp step: spawn faster, fall faster
    pub fn step(&mut self, config: &GameConfig) {
        self.spawn_interval_ms = (self.spawn_interval_ms - config.spawn_interval_decrease_ms)
            .max(config.min_spawn_interval_ms);
        self.fall_speed = (self.fall_speed + config.fall_speed_increase).min(config.max_fall_speed);
    }
}

/// Floating score popup shown after a catch
#[derive(Debug, Clone, Serialize)]
pub struct CatchText {
    pub pos: Vec2,
    /// Remaining time to live (frames)
    pub ttl: f32,
    /// Score value displayed
    pub value: u32,
}

/// Everything one playthrough context owns. Mutated only from within a
/// tick; renderers get the read-only snapshot.
#[derive(Debug)]
pub struct GameSession {
    pub config: GameConfig,
    pub status: GameStatus,
    pub score: u32,
    pub lives: u32,
    /// Best score across restarts within this session; the only field
    /// `restart()` keeps
    pub best_score: u32,
    /// Frames elapsed this run; drives the aim-deviation ramp
    pub frames: u64,
    pub spawn_elapsed_ms: f32,
    pub ramp_elapsed_ms: f32,
    pub difficulty: DifficultyParams,
    /// Full-screen catch highlight in [0, 1]
    pub catch_flash: f32,
    pub catch_text: Option<CatchText>,
    pub goalie: Goalie,
    pub goal: Goal,
    pub pucks: Vec<Puck>,
    pub effects: EffectsSystem,
    pub rng: Pcg32,
    seed: u64,
    runs: u64,
    next_id: u32,
    outcome: Option<GameOutcome>,
}

impl GameSession {
    /// Create a fresh Idle session. The config is validated here; there
    /// is no other construction path.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        Ok(Self {
            status: GameStatus::Idle,
            score: 0,
            lives: config.initial_lives,
            best_score: 0,
            frames: 0,
            spawn_elapsed_ms: 0.0,
            ramp_elapsed_ms: 0.0,
            difficulty: DifficultyParams::initial(&config),
            catch_flash: 0.0,
            catch_text: None,
            goalie: Goalie::new(&config),
            goal: Goal::new(),
            pucks: Vec::new(),
            effects: EffectsSystem::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            runs: 0,
            next_id: 1,
            outcome: None,
            config,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Idle -> Playing. No-op from any other state.
    pub fn start(&mut self) {
        if self.status != GameStatus::Idle {
            return;
        }
        self.status = GameStatus::Playing;
        log::info!("game started (run {})", self.runs + 1);
    }

    /// Playing -> Paused. Counters are untouched.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
        }
    }

    /// Paused -> Playing
    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.status {
            GameStatus::Playing => self.pause(),
            GameStatus::Paused => self.resume(),
            _ => {}
        }
    }

    /// Internal game-over transition, invoked by the tick when lives hit
    /// zero. Freezes score/lives, settles the best score, queues the
    /// outcome event and fires the record celebration. Runs at most once
    /// per playthrough.
    pub(crate) fn end(&mut self) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.status = GameStatus::Ended;

        let is_new_record = self.score > self.best_score;
        if is_new_record {
            self.best_score = self.score;
            let center = Vec2::new(self.config.center_x(), self.config.field_height / 2.0);
            self.effects
                .burst(&mut self.rng, &self.config, center, BurstKind::Record);
        }
        self.outcome = Some(GameOutcome {
            final_score: self.score,
            is_new_record,
        });
        log::info!(
            "game over: score={} best={} record={}",
            self.score,
            self.best_score,
            is_new_record
        );
    }

    /// Valid from any state: clear the field, reset every counter except
    /// `best_score`, return to Idle. Each run gets a fresh RNG stream so
    /// restarts do not replay the previous game.
    pub fn restart(&mut self) {
        self.runs += 1;
        self.status = GameStatus::Idle;
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.frames = 0;
        self.spawn_elapsed_ms = 0.0;
        self.ramp_elapsed_ms = 0.0;
        self.difficulty = DifficultyParams::initial(&self.config);
        self.catch_flash = 0.0;
        self.catch_text = None;
        self.goalie.reset(&self.config);
        self.goal.reset();
        self.pucks.clear();
        self.effects.clear();
        self.rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.runs));
        self.outcome = None;
        log::info!("restart: best={}", self.best_score);
    }

    /// External leaderboard feedback. Submission results can only raise
    /// the best score, never lower it - the in-memory value stays
    /// authoritative if the remote side failed or lagged.
    pub fn apply_best_score(&mut self, external_best: u32) {
        self.best_score = self.best_score.max(external_best);
    }

    /// Take the queued outcome event, if a game just ended. The driver
    /// hands it to the submission sink exactly once.
    pub fn take_outcome(&mut self) -> Option<GameOutcome> {
        self.outcome.take()
    }
}
