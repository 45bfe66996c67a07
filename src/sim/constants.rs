pub const MIN_SNAKE_LENGTH: usize = 5;
pub const DEFAULT_SEGMENT_CAPACITY: usize = 200;

pub const WAYPOINTS_PER_LINK: f64 = 2.0;
pub const LINK_LENGTH_OFFSET: f64 = 0.5;
pub const LINK_LENGTH_TOLERANCE: f64 = 0.01;

pub const GROWTH_RATE: f64 = 0.5;
pub const GROWTH_COMMIT_BAND: f64 = 0.1;
pub const NECK_START_FRACTION: f64 = 0.05;

// scales from 1 at the minimum length to ~5 at 200 parts
pub const SCALE_MULTIPLIER: f64 = 1.5;
pub const SCALE_CURVE_DIVISOR: f64 = 1.0 / MIN_SNAKE_LENGTH as f64;
pub const SCALE_RATE: f64 = 0.5;

pub const TURNING_RADIUS_PER_SCALE: f64 = 1.0;

pub const BASE_SPEED: f64 = 5.0;
pub const SPRINT_SPEED: f64 = 7.0;

pub const TICK_MS: u64 = 50;

pub const WORLD_EXTENT: f64 = 200.0;
pub const SPAWN_JITTER_RADIUS: f64 = 6.0;
pub const BASE_PICKUP_COUNT: usize = 24;
pub const MAX_PICKUPS: usize = 96;
pub const PICKUP_RADIUS: f64 = 0.5;

pub const WANDER_RETARGET_MIN_SECS: f64 = 1.5;
pub const WANDER_RETARGET_MAX_SECS: f64 = 5.0;
pub const WANDER_ERRATICNESS_RADIANS: f64 = 1.2;
