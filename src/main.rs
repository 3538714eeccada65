//! Headless playback demo: runs the exploded-view animation to
//! completion and logs tier settles, standing in for a presentation
//! layer. Pass a TOML options file as the first argument to override
//! the defaults.

use std::path::Path;
use std::time::Duration;

use fenestra::animation::PartProgress;
use fenestra::assembly::Tier;
use fenestra::engine::ExplodedViewEngine;
use fenestra::options::Options;
use fenestra::util::frame_clock::FrameClock;

/// Frame pacing for the headless playback loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => {
                log::info!("loaded options from {path}");
                options
            }
            Err(e) => {
                log::error!("failed to load options from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    let mut engine = match ExplodedViewEngine::new(options) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("engine construction failed: {e}");
            std::process::exit(1);
        }
    };

    log_assembly(&engine);
    run_playback(&mut engine);
}

/// Play the assembly animation to completion, logging tier settles.
fn run_playback(engine: &mut ExplodedViewEngine) {
    engine.play_pause();
    let mut clock = FrameClock::new();
    let mut settled = settled_tiers(engine);

    loop {
        std::thread::sleep(FRAME_INTERVAL);
        let elapsed = clock.tick();
        let running = engine.tick(elapsed);

        let now_settled = settled_tiers(engine);
        for tier in Tier::ALL {
            if now_settled.contains(&tier) && !settled.contains(&tier) {
                log::info!(
                    "{} settled at {:.1}%",
                    tier.label(),
                    engine.progress_percent()
                );
            }
        }
        settled = now_settled;

        if !running {
            break;
        }
    }

    log::info!(
        "assembled: {} parts flush, ~{:.0} fps",
        engine.parts().len(),
        clock.fps()
    );
}

/// Tiers whose every part has reached its assembled position.
fn settled_tiers(engine: &ExplodedViewEngine) -> Vec<Tier> {
    let progress = engine.progress_percent() / 100.0;
    Tier::ALL
        .into_iter()
        .filter(|tier| {
            engine
                .parts()
                .iter()
                .filter(|part| part.tier == *tier)
                .all(|part| PartProgress::of(part, progress).settled())
        })
        .collect()
}

fn log_assembly(engine: &ExplodedViewEngine) {
    for part in engine.parts() {
        log::debug!(
            "  part {} ({}): {} x {} x {}",
            part.id,
            part.tier.label(),
            part.dimensions.x,
            part.dimensions.y,
            part.dimensions.z
        );
    }
    if let Some((min, max)) = engine.assembly().assembled_bounds() {
        log::info!("assembled bounds: {min} to {max}");
    }
}
