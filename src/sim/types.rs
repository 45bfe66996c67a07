use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
  pub x: f64,
  pub y: f64,
  pub z: f64,
}

/// A recorded position of the leader, tagged with the path distance
/// traveled since the previous waypoint was recorded.
#[derive(Debug, Clone, Copy)]
pub struct Waypoint {
  pub position: Vec3,
  pub arclength_from_previous: f64,
}

/// One pooled slot in a snake's segment arena. Slot 0 is the head; active
/// slots are ordered head-to-tail. Inactive slots keep their last pose so
/// reactivation never starts from garbage.
#[derive(Debug, Clone, Copy)]
pub struct SegmentSlot {
  pub position: Vec3,
  pub facing: Vec3,
  pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnakeSnapshot {
  pub id: String,
  pub name: String,
  pub alive: bool,
  pub active_length: usize,
  pub target_length: usize,
  pub scale: f64,
  pub head: Vec3,
  pub segments: Vec<Vec3>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorldSnapshot {
  pub tick: u64,
  pub snakes: Vec<SnakeSnapshot>,
  pub pickups: Vec<Vec3>,
}
