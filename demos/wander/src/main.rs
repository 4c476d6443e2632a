//! wander — smallest end-to-end run of the gridwalk simulation.
//!
//! Fills a grid, drops a few entities on it, and lets them walk to random
//! cells for a fixed number of frames.  Entity 0 is first sent to the far
//! corner, the way a player's click would.
//!
//! ```text
//! wander [config.toml]        RUST_LOG=debug for per-move logging
//! ```

use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info, warn};

use gw_action::Status;
use gw_core::{EntityId, Point, Tick, WorldConfig};
use gw_placement::PlacementError;
use gw_sim::{Wanderer, WorldBuilder, WorldObserver};

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs notable events and keeps totals for the summary.
#[derive(Default)]
struct LoggingObserver {
    walks_done:        usize,
    walks_interrupted: usize,
    moves_rejected:    usize,
    busiest_tick:      usize,
}

impl WorldObserver for LoggingObserver {
    fn on_action_finished(&mut self, tick: Tick, entity: EntityId, status: Status) {
        if status.is_interrupted() {
            self.walks_interrupted += 1;
            debug!("{tick}: {entity} was blocked");
        } else {
            self.walks_done += 1;
            debug!("{tick}: {entity} arrived");
        }
    }

    fn on_move_rejected(
        &mut self,
        tick:   Tick,
        entity: EntityId,
        target: Point,
        error:  &PlacementError,
    ) {
        self.moves_rejected += 1;
        debug!("{tick}: {entity} cannot go to {target}: {error}");
    }

    fn on_tick_end(&mut self, _tick: Tick, busy: usize) {
        self.busiest_tick = self.busiest_tick.max(busy);
    }

    fn on_run_end(&mut self, final_tick: Tick) {
        info!(
            "run ended at {final_tick}: {} walks done, {} interrupted, {} rejected",
            self.walks_done, self.walks_interrupted, self.moves_rejected
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => WorldConfig::load(&path)
            .with_context(|| format!("loading world config from {path}"))?,
        None => WorldConfig::default(),
    };

    println!("=== wander — gridwalk ===");
    println!(
        "Grid: {} to {}  |  Entities: {}  |  Seed: {}",
        config.min,
        config.max,
        config.spawns.len(),
        config.seed
    );
    println!(
        "Run: {} ticks × {} ms, {} ms per step",
        config.total_ticks, config.frame_millis, config.step_millis
    );
    println!();

    let corner = config.max;
    let mut world = WorldBuilder::new(config)
        .commander(Wanderer::default())
        .build()
        .context("building the world")?;

    if world.entity_count() > 0 {
        if let Err(e) = world.command(EntityId(0), corner) {
            warn!("could not send {} to {corner}: {e}", EntityId(0));
        }
    }

    let mut observer = LoggingObserver::default();
    let t0 = Instant::now();
    world.run(&mut observer);
    let elapsed = t0.elapsed();

    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), world.clock);
    println!("  walks done        : {}", observer.walks_done);
    println!("  walks interrupted : {}", observer.walks_interrupted);
    println!("  moves rejected    : {}", observer.moves_rejected);
    println!("  most busy at once : {}", observer.busiest_tick);
    println!();

    println!("{:<14} {:<12} {:<12} {:<8}", "Entity", "Cell", "Heading", "Progress");
    println!("{}", "-".repeat(48));
    for i in 0..world.entity_count() {
        let id = EntityId(i as u32);
        let Some(placement) = world.placement(id) else {
            continue;
        };
        let heading = if placement.headed() {
            placement.heading().to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:<14} {:<12} {:<12} {:<8.2}",
            id.to_string(),
            placement.at_point().to_string(),
            heading,
            placement.progress()
        );
    }

    Ok(())
}
