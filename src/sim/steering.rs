use super::constants::{
    BASE_SPEED, SPRINT_SPEED, WANDER_ERRATICNESS_RADIANS, WANDER_RETARGET_MAX_SECS,
    WANDER_RETARGET_MIN_SECS,
};
use super::heading::Steering;
use super::math::{horizontal, length, normalize, rotate_y};
use super::types::Vec3;
use rand::Rng;

/// Externally driven source: a stand-in for player input. The owner sets the
/// target facing, sprint and stopped flags; the source itself has no behavior.
#[derive(Debug, Clone)]
pub struct FixedSteering {
    target: Vec3,
    base_speed: f64,
    sprint_speed: f64,
    sprinting: bool,
    stopped: bool,
}

impl FixedSteering {
    pub fn new(target: Vec3, base_speed: f64) -> Self {
        Self {
            target: fallback_facing(target),
            base_speed,
            sprint_speed: SPRINT_SPEED.max(base_speed),
            sprinting: false,
            stopped: false,
        }
    }

    pub fn set_target_facing(&mut self, target: Vec3) {
        self.target = fallback_facing(target);
    }

    pub fn set_sprinting(&mut self, sprinting: bool) {
        self.sprinting = sprinting;
    }

    pub fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }
}

impl Steering for FixedSteering {
    fn target_facing(&self) -> Vec3 {
        self.target
    }

    fn speed(&self) -> f64 {
        if self.sprinting {
            self.sprint_speed
        } else {
            self.base_speed
        }
    }

    fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// Roaming source: periodically swings its target heading by a random angle.
/// Enough to keep a headless world in motion; deliberately knows nothing
/// about pickups, other snakes, or bounds.
#[derive(Debug, Clone)]
pub struct WanderSteering {
    target: Vec3,
    speed: f64,
    retarget_in: f64,
}

impl WanderSteering {
    pub fn new(initial_facing: Vec3) -> Self {
        Self {
            target: fallback_facing(initial_facing),
            speed: BASE_SPEED,
            retarget_in: 0.0,
        }
    }
}

impl Steering for WanderSteering {
    fn update(&mut self, dt: f64) {
        self.retarget_in -= dt;
        if self.retarget_in > 0.0 {
            return;
        }
        let mut rng = rand::thread_rng();
        let swing = rng.gen_range(-WANDER_ERRATICNESS_RADIANS..WANDER_ERRATICNESS_RADIANS);
        rotate_y(&mut self.target, swing);
        self.retarget_in = rng.gen_range(WANDER_RETARGET_MIN_SECS..WANDER_RETARGET_MAX_SECS);
    }

    fn target_facing(&self) -> Vec3 {
        self.target
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn is_stopped(&self) -> bool {
        false
    }
}

fn fallback_facing(facing: Vec3) -> Vec3 {
    let flat = normalize(horizontal(facing));
    if length(flat) == 0.0 {
        Vec3 { x: 1.0, y: 0.0, z: 0.0 }
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_steering_reports_what_was_set() {
        let mut steering = FixedSteering::new(Vec3 { x: 0.0, y: 5.0, z: 1.0 }, 5.0);
        assert_eq!(steering.target_facing().y, 0.0);
        assert!(!steering.is_stopped());
        assert_eq!(steering.speed(), 5.0);

        steering.set_sprinting(true);
        assert_eq!(steering.speed(), SPRINT_SPEED);

        steering.set_target_facing(Vec3 { x: 0.0, y: 0.0, z: -1.0 });
        assert_eq!(steering.target_facing().z, -1.0);

        steering.set_stopped(true);
        assert!(steering.is_stopped());
    }

    #[test]
    fn wander_steering_stays_horizontal_and_unit_length() {
        let mut steering = WanderSteering::new(Vec3 { x: 1.0, y: 0.0, z: 0.0 });
        for _ in 0..100 {
            steering.update(0.5);
            let target = steering.target_facing();
            assert_eq!(target.y, 0.0);
            assert!((length(target) - 1.0).abs() < 1e-9);
        }
    }
}
