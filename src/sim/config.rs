use super::constants::{
  BASE_PICKUP_COUNT, DEFAULT_SEGMENT_CAPACITY, GROWTH_COMMIT_BAND, GROWTH_RATE,
  LINK_LENGTH_OFFSET, LINK_LENGTH_TOLERANCE, MAX_PICKUPS, MIN_SNAKE_LENGTH, NECK_START_FRACTION,
  PICKUP_RADIUS, SCALE_CURVE_DIVISOR, SCALE_MULTIPLIER, SCALE_RATE, SPAWN_JITTER_RADIUS,
  TURNING_RADIUS_PER_SCALE, WAYPOINTS_PER_LINK, WORLD_EXTENT,
};

/// Per-chain tuning, passed at creation. Replaces the per-prefab serialized
/// fields and static length tables of earlier iterations so every chain is
/// fully described by its own configuration value.
#[derive(Debug, Clone)]
pub struct ChainConfig {
  pub minimum_length: usize,
  pub segment_capacity: usize,
  pub waypoints_per_link: f64,
  pub link_length_offset: f64,
  pub link_length_tolerance: f64,
  pub growth_rate: f64,
  pub growth_commit_band: f64,
  pub neck_start_fraction: f64,
  pub scale_multiplier: f64,
  pub scale_curve_divisor: f64,
  pub scale_rate: f64,
  pub turning_radius_per_scale: f64,
}

impl Default for ChainConfig {
  fn default() -> Self {
    Self {
      minimum_length: MIN_SNAKE_LENGTH,
      segment_capacity: DEFAULT_SEGMENT_CAPACITY,
      waypoints_per_link: WAYPOINTS_PER_LINK,
      link_length_offset: LINK_LENGTH_OFFSET,
      link_length_tolerance: LINK_LENGTH_TOLERANCE,
      growth_rate: GROWTH_RATE,
      growth_commit_band: GROWTH_COMMIT_BAND,
      neck_start_fraction: NECK_START_FRACTION,
      scale_multiplier: SCALE_MULTIPLIER,
      scale_curve_divisor: SCALE_CURVE_DIVISOR,
      scale_rate: SCALE_RATE,
      turning_radius_per_scale: TURNING_RADIUS_PER_SCALE,
    }
  }
}

#[derive(Debug, Clone)]
pub struct WorldConfig {
  pub chain: ChainConfig,
  pub world_extent: f64,
  pub spawn_jitter_radius: f64,
  pub base_pickup_count: usize,
  pub max_pickups: usize,
  pub pickup_radius: f64,
}

impl Default for WorldConfig {
  fn default() -> Self {
    Self {
      chain: ChainConfig::default(),
      world_extent: WORLD_EXTENT,
      spawn_jitter_radius: SPAWN_JITTER_RADIUS,
      base_pickup_count: BASE_PICKUP_COUNT,
      max_pickups: MAX_PICKUPS,
      pickup_radius: PICKUP_RADIUS,
    }
  }
}
