//! Puckstop demo entry point
//!
//! Headless autopilot run: drives the simulation with synthetic 60 Hz
//! timestamps and a simple AI goalie, logging progress along the way.
//! Useful for eyeballing balance changes without a renderer attached.
//!
//! Usage: `puckstop [config.json]`

use puckstop::consts::TARGET_FRAME_MS;
use puckstop::{GameConfig, GameDriver, LogSink, LoopControl};

/// Demo cutoff: ten simulated minutes
const MAX_DEMO_FRAMES: u64 = 10 * 60 * 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            log::info!("config loaded from {path}");
            serde_json::from_str(&json)?
        }
        None => GameConfig::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_millis() as u64;
    let mut driver = GameDriver::new(config, seed, Box::new(LogSink))?;
    driver.start();

    let mut now = 0.0_f64;
    let mut frames = 0_u64;
    loop {
        let handle = driver.schedule();
        now += TARGET_FRAME_MS as f64;

        if let Some(x) = autopilot_target(&driver) {
            driver.input_mut().set_pointer_x(x);
        }

        if driver.advance(handle, now) == LoopControl::Stop {
            break;
        }

        frames += 1;
        if frames % 600 == 0 {
            let snap = driver.session().snapshot();
            log::info!(
                "t={:>4}s score={} lives={} pucks={} interval={:.0}ms",
                frames / 60,
                snap.score,
                snap.lives,
                snap.pucks.len(),
                driver.session().difficulty.spawn_interval_ms
            );
        }
        if frames >= MAX_DEMO_FRAMES {
            log::info!("demo time limit reached");
            break;
        }
    }

    let snap = driver.session().snapshot();
    println!(
        "final: score={} best={} lives={} after {}s",
        snap.score,
        snap.best_score,
        snap.lives,
        frames / 60
    );
    Ok(())
}

/// Track the most dangerous puck: the unresolved one closest to the goal
/// line, with a small lead so the goalie arrives ahead of it.
fn autopilot_target(driver: &GameDriver) -> Option<f32> {
    driver
        .session()
        .pucks
        .iter()
        .filter(|p| !p.resolved())
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| (p.pos + p.vel * 8.0).x)
}
