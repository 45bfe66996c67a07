use std::env;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod sim;

use sim::config::WorldConfig;
use sim::constants::{BASE_SPEED, TICK_MS};
use sim::steering::{FixedSteering, WanderSteering};
use sim::terrain::RollingGround;
use sim::types::Vec3;
use sim::world::SnakeWorld;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let snake_count: usize = env_or("SNAKE_COUNT", 8);
  let tick_ms: u64 = env_or("TICK_MS", TICK_MS);
  let run_ticks: Option<u64> = env::var("RUN_TICKS").ok().and_then(|value| value.parse().ok());

  let config = WorldConfig::default();
  let terrain = RollingGround::new(2.0, 0.05);
  let mut world = SnakeWorld::new(Box::new(terrain), config);

  // one externally-driven snake alongside the roamers, so both steering
  // variants are exercised every run
  world.spawn_snake(
    "player",
    Box::new(FixedSteering::new(Vec3 { x: 1.0, y: 0.0, z: 0.0 }, BASE_SPEED)),
  );
  for index in 0..snake_count {
    world.spawn_snake(
      &format!("roamer-{index}"),
      Box::new(WanderSteering::new(Vec3 { x: 1.0, y: 0.0, z: 0.0 })),
    );
  }

  let dt = tick_ms as f64 / 1000.0;
  let snapshot_every = (1000 / tick_ms).max(1);
  let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
  let mut ticks: u64 = 0;

  tracing::info!(snake_count, tick_ms, "simulation running");

  loop {
    interval.tick().await;
    world.step(dt);
    ticks += 1;

    if ticks % snapshot_every == 0 {
      let snapshot = world.snapshot();
      tracing::info!(
        tick = snapshot.tick,
        snakes = snapshot.snakes.len(),
        pickups = snapshot.pickups.len(),
        "state {}",
        serde_json::to_string(&snapshot)?
      );
    }

    if let Some(limit) = run_ticks {
      if ticks >= limit {
        break;
      }
    }
  }

  tracing::info!(ticks, "simulation finished");
  Ok(())
}

fn env_or<T: std::str::FromStr>(name: &str, fallback: T) -> T {
  env::var(name)
    .ok()
    .and_then(|value| value.parse().ok())
    .unwrap_or(fallback)
}
