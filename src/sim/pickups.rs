use super::math::distance;
use super::terrain::HeightField;
use super::types::Vec3;
use rand::Rng;

/// How a snake responds to touching a pickup. Only `Grow` has a simulated
/// effect here; the power kinds exist so consumers can dispatch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupPower {
    Grow,
    BlastMagnet,
    Fireball,
    TempImmunity,
}

#[derive(Debug, Clone, Copy)]
pub struct Pickup {
    pub position: Vec3,
    pub power: PickupPower,
    pub active: bool,
}

/// Pooled pickup registry. Consumed pickups are deactivated in place and
/// their slots reused by later spawns, mirroring the segment arena.
#[derive(Debug, Clone, Default)]
pub struct PickupField {
    pickups: Vec<Pickup>,
}

impl PickupField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.pickups.iter().filter(|pickup| pickup.active).count()
    }

    pub fn active_positions(&self) -> Vec<Vec3> {
        self.pickups
            .iter()
            .filter(|pickup| pickup.active)
            .map(|pickup| pickup.position)
            .collect()
    }

    /// Spawns growth pickups at forced positions, typically the segments
    /// removed by a cut.
    pub fn spawn_love(&mut self, positions: &[Vec3]) {
        for position in positions {
            self.spawn(*position, PickupPower::Grow);
        }
    }

    /// Spawns one growth pickup at a jittered random spot on the ground.
    pub fn scatter<R: Rng>(
        &mut self,
        rng: &mut R,
        extent: f64,
        jitter_radius: f64,
        terrain: &dyn HeightField,
    ) {
        let x = rng.gen_range(-extent..extent) + rng.gen_range(-jitter_radius..jitter_radius);
        let z = rng.gen_range(-extent..extent) + rng.gen_range(-jitter_radius..jitter_radius);
        let position = Vec3 {
            x,
            y: terrain.sample_height(x, z) + 0.5,
            z,
        };
        self.spawn(position, PickupPower::Grow);
    }

    /// Consumes the first active pickup within `radius` of `point`, if any.
    pub fn consume_near(&mut self, point: Vec3, radius: f64) -> Option<PickupPower> {
        for pickup in self.pickups.iter_mut() {
            if pickup.active && distance(pickup.position, point) < radius {
                pickup.active = false;
                return Some(pickup.power);
            }
        }
        None
    }

    fn spawn(&mut self, position: Vec3, power: PickupPower) {
        if let Some(slot) = self.pickups.iter_mut().find(|pickup| !pickup.active) {
            slot.position = position;
            slot.power = power;
            slot.active = true;
            return;
        }
        self.pickups.push(Pickup {
            position,
            power,
            active: true,
        });
    }
}
