use super::math::{clamp, horizontal, length, normalize, rotate_y, scale, signed_angle_y};
use super::types::Vec3;

/// Velocity source driving a chain's head: player input, scripted motion, or
/// an AI brain all reduce to a target facing, a speed, and a stopped flag.
/// The chain never depends on the concrete source.
pub trait Steering: std::fmt::Debug {
    /// Advance any internal state (timers, retargeting). Default: none.
    fn update(&mut self, _dt: f64) {}

    fn target_facing(&self) -> Vec3;
    fn speed(&self) -> f64;
    fn is_stopped(&self) -> bool;
}

/// Current facing of the leader, rotated toward the steering target at an
/// angular rate bounded by `speed / turning_radius`.
#[derive(Debug, Clone)]
pub struct HeadingController {
    facing: Vec3,
}

impl HeadingController {
    pub fn new(facing: Vec3) -> Self {
        let flat = normalize(horizontal(facing));
        let facing = if length(flat) == 0.0 {
            Vec3 { x: 1.0, y: 0.0, z: 0.0 }
        } else {
            flat
        };
        Self { facing }
    }

    pub fn facing(&self) -> Vec3 {
        self.facing
    }

    /// Rotates the facing toward `target_facing` about the vertical axis. The
    /// applied rotation is clamped so one frame never overshoots the target
    /// angle. A small turning radius turns fast; radius scales with the chain.
    pub fn rotate_toward(&mut self, target_facing: Vec3, turning_radius: f64, speed: f64, dt: f64) {
        let target = normalize(horizontal(target_facing));
        if length(target) == 0.0 {
            return;
        }

        let angle = signed_angle_y(self.facing, target);
        let max_step = (speed / turning_radius.max(1e-6)) * dt;
        let step = clamp(angle, -max_step, max_step);

        rotate_y(&mut self.facing, step);
        self.facing = normalize(self.facing);
    }

    pub fn displacement(&self, speed: f64, dt: f64) -> Vec3 {
        scale(self.facing, speed * dt)
    }
}
