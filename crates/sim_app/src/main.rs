//! # sim_app: headless host
//!
//! Drives the simulation the way a windowed host would, minus the window:
//! builds the demo scene, then calls the frame pipeline at a fixed rate with
//! a scripted key sequence.
//!
//! ## Environment
//!
//! - `SIM_CONFIG`: optional path to a JSON `SimConfig`.
//! - `SIM_MAX_TICKS`: ticks to run before exiting (default 300, 0 = forever).
//! - `RUST_LOG`: log filter (default `sim_app=info`).

mod scene;
mod tick;

use anyhow::{Context, Result};
use sim_component::Position;
use sim_system::{RecordingRenderer, SimConfig, Simulation};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tick::{KeyScript, TickConfig, TickLoop};

const DEFAULT_MAX_TICKS: u64 = 300;

fn main() -> Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sim_app=info".parse()?))
        .init();

    info!("simulation host starting");

    let config = match std::env::var("SIM_CONFIG") {
        Ok(path) => {
            SimConfig::load(&path).with_context(|| format!("loading SIM_CONFIG={path}"))?
        }
        Err(_) => SimConfig::default(),
    };
    let max_ticks = match std::env::var("SIM_MAX_TICKS") {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("SIM_MAX_TICKS={raw} is not a tick count"))?,
        Err(_) => DEFAULT_MAX_TICKS,
    };

    let mut sim = Simulation::new(config);
    let mut renderer = RecordingRenderer::new();
    let demo = scene::spawn_demo(sim.world_mut(), &mut renderer)?;
    info!(
        player = demo.player.id(),
        other = demo.other.id(),
        "demo scene spawned"
    );

    let tick_config = TickConfig {
        tick_rate: 60.0,
        max_ticks,
    };
    let mut tick_loop = TickLoop::new(
        tick_config,
        sim,
        renderer,
        scene::VIEWPORT,
        KeyScript::demo(),
    );
    tick_loop.run();

    let world = tick_loop.sim().world();
    for entity in [demo.player, demo.other] {
        if let Some(position) = world.get::<Position>(entity) {
            info!(
                entity = entity.id(),
                x = position.x,
                y = position.y,
                "final position"
            );
        }
    }
    info!(
        frames = tick_loop.renderer().frames_begun(),
        drawn_last_frame = tick_loop.renderer().frame().len(),
        collisions = tick_loop.collision_count(),
        "render summary"
    );
    let snapshot = serde_json::to_string(&world.snapshot())?;
    info!(%snapshot, "final world state");

    info!("simulation host shut down");
    Ok(())
}
