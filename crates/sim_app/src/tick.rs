//! Host tick loop.
//!
//! Stands in for a windowed event loop: a fixed-timestep loop that feeds a
//! scripted key state to the simulation, renders into a
//! [`RecordingRenderer`], and sleeps out the rest of each tick's budget.

use std::time::{Duration, Instant};

use sim_system::{FrameInput, InputState, Key, RecordingRenderer, Simulation, Viewport};
use tracing::{debug, info, warn};

/// Configuration for the host tick loop.
#[derive(Debug, Clone)]
pub struct TickConfig {
    /// Target ticks per second.
    pub tick_rate: f64,
    /// Maximum number of ticks to run (0 = unlimited).
    pub max_ticks: u64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            max_ticks: 0,
        }
    }
}

/// A key held for the ticks in `start..end`.
#[derive(Debug, Clone, Copy)]
pub struct KeyHold {
    pub key: Key,
    pub start: u64,
    pub end: u64,
}

/// Scripted key presses, replayed by tick number.
#[derive(Debug, Clone, Default)]
pub struct KeyScript {
    holds: Vec<KeyHold>,
}

impl KeyScript {
    /// Create an empty script (no keys ever held).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold `key` for the ticks in `start..end`.
    #[must_use]
    pub fn hold(mut self, key: Key, start: u64, end: u64) -> Self {
        self.holds.push(KeyHold { key, start, end });
        self
    }

    /// The demo's moves: run right, then left, with a hop in between.
    #[must_use]
    pub fn demo() -> Self {
        Self::new()
            .hold(Key::Right, 1, 60)
            .hold(Key::Up, 45, 50)
            .hold(Key::Left, 90, 150)
    }

    /// Write the key state for `tick` into `state`.
    pub fn apply(&self, tick: u64, state: &mut InputState) {
        state.clear();
        for hold in &self.holds {
            if (hold.start..hold.end).contains(&tick) {
                state.press(hold.key);
            }
        }
    }
}

/// The host loop state.
pub struct TickLoop {
    /// Tick configuration.
    config: TickConfig,
    /// The simulation being driven.
    sim: Simulation,
    /// Viewport reported to the simulation every tick.
    viewport: Viewport,
    /// Key state owned by the host.
    keys: InputState,
    /// Key presses to replay.
    script: KeyScript,
    /// Render backend.
    renderer: RecordingRenderer,
    /// Collisions seen across all ticks.
    collision_count: u64,
}

impl TickLoop {
    /// Create a tick loop around a prepared simulation and renderer.
    #[must_use]
    pub fn new(
        config: TickConfig,
        sim: Simulation,
        renderer: RecordingRenderer,
        viewport: Viewport,
        script: KeyScript,
    ) -> Self {
        Self {
            config,
            sim,
            viewport,
            keys: InputState::default(),
            script,
            renderer,
            collision_count: 0,
        }
    }

    /// Returns the simulation.
    #[must_use]
    pub fn sim(&self) -> &Simulation {
        &self.sim
    }

    /// Returns the render backend.
    #[must_use]
    pub fn renderer(&self) -> &RecordingRenderer {
        &self.renderer
    }

    /// Returns the number of collisions reported so far.
    #[must_use]
    pub fn collision_count(&self) -> u64 {
        self.collision_count
    }

    /// Run one tick with the given frame delta.
    pub fn tick(&mut self, dt: f32) {
        let next_tick = self.sim.tick_id() + 1;
        self.script.apply(next_tick, &mut self.keys);

        let report = self.sim.update(
            dt,
            FrameInput::new(&self.keys, self.viewport, &mut self.renderer),
        );

        self.collision_count += report.collisions.len() as u64;
        debug!(
            tick_id = report.tick_id,
            collisions = report.collisions.len(),
            drawn = self.renderer.frame().len(),
            "tick done"
        );
    }

    /// Run the tick loop for the configured number of ticks, or indefinitely.
    ///
    /// Every tick is fed a delta of `1.0`: one display frame.
    pub fn run(&mut self) {
        let tick_duration = Duration::from_secs_f64(1.0 / self.config.tick_rate);
        let mut tick_count = 0u64;

        info!(
            tick_rate = self.config.tick_rate,
            max_ticks = self.config.max_ticks,
            "starting tick loop"
        );

        loop {
            let start = Instant::now();

            self.tick(1.0);

            tick_count += 1;
            if self.config.max_ticks > 0 && tick_count >= self.config.max_ticks {
                info!(
                    ticks = tick_count,
                    collisions = self.collision_count,
                    "tick loop complete"
                );
                break;
            }

            let elapsed = start.elapsed();
            if elapsed < tick_duration {
                std::thread::sleep(tick_duration - elapsed);
            } else {
                warn!(
                    tick_id = self.sim.tick_id(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    budget_ms = tick_duration.as_millis() as u64,
                    "tick exceeded time budget"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sim_component::{Position, Velocity};
    use sim_system::{KeyState, SimConfig};

    use super::*;
    use crate::scene::{self, VIEWPORT};

    fn demo_loop(config: TickConfig, script: KeyScript) -> (TickLoop, scene::DemoScene) {
        let mut sim = Simulation::new(SimConfig::default());
        let mut renderer = RecordingRenderer::new();
        let demo = scene::spawn_demo(sim.world_mut(), &mut renderer).unwrap();
        (TickLoop::new(config, sim, renderer, VIEWPORT, script), demo)
    }

    #[test]
    fn test_script_applies_holds() {
        let script = KeyScript::new().hold(Key::Right, 1, 3).hold(Key::Up, 2, 3);
        let mut state = InputState::default();

        script.apply(1, &mut state);
        assert!(state.is_pressed(Key::Right) && !state.is_pressed(Key::Up));
        script.apply(2, &mut state);
        assert!(state.is_pressed(Key::Right) && state.is_pressed(Key::Up));
        script.apply(3, &mut state);
        assert_eq!(state, InputState::default());
    }

    #[test]
    fn test_run_limited_ticks() {
        let config = TickConfig {
            tick_rate: 1000.0, // fast for testing
            max_ticks: 5,
        };
        let (mut tick_loop, _) = demo_loop(config, KeyScript::new());
        tick_loop.run();
        assert_eq!(tick_loop.sim().tick_id(), 5);
        assert_eq!(tick_loop.renderer().frames_begun(), 5);
    }

    #[test]
    fn test_scripted_player_moves_right_other_stays() {
        let (mut tick_loop, demo) =
            demo_loop(TickConfig::default(), KeyScript::new().hold(Key::Right, 1, 11));
        for _ in 0..10 {
            tick_loop.tick(1.0);
        }

        let world = tick_loop.sim().world();
        assert!(world.get::<Position>(demo.player).unwrap().x > 400.0);
        assert_eq!(world.get::<Position>(demo.other).unwrap().x, 600.0);
        assert_eq!(world.get::<Velocity>(demo.other).unwrap().x, 0.0);
    }

    #[test]
    fn test_demo_bunnies_come_to_rest_on_floor() {
        let (mut tick_loop, demo) = demo_loop(TickConfig::default(), KeyScript::new());
        for _ in 0..200 {
            tick_loop.tick(1.0);
        }

        let world = tick_loop.sim().world();
        for entity in [demo.player, demo.other] {
            let bottom = world.get::<Position>(entity).unwrap().y + 90.0;
            assert!(bottom <= VIEWPORT.height + 1.0, "bottom {bottom} fell through");
            assert!(bottom > VIEWPORT.height - 30.0, "bottom {bottom} never landed");
        }
        assert_eq!(tick_loop.collision_count(), 0);
    }
}
