use super::config::WorldConfig;
use super::heading::Steering;
use super::math::{distance, dot, normalize, sub};
use super::pickups::{PickupField, PickupPower};
use super::snake::Snake;
use super::terrain::HeightField;
use super::types::{Vec3, WorldSnapshot};
use rand::Rng;
use std::f64::consts::PI;
use uuid::Uuid;

/// A scene of independent snakes over one shared ground. The world owns the
/// per-frame ordering and brokers the interactions the chains themselves
/// stay agnostic to: head-versus-body contact, head-butts, and pickups.
#[derive(Debug)]
pub struct SnakeWorld {
  config: WorldConfig,
  terrain: Box<dyn HeightField>,
  snakes: Vec<Snake>,
  pickups: PickupField,
  tick: u64,
}

#[derive(Debug, Clone, Copy)]
enum Contact {
  /// Head of `attacker` touched a body segment of `victim`.
  Bite {
    attacker: usize,
    victim: usize,
    segment: usize,
  },
  /// Two heads touched; intent is decided at apply time.
  HeadButt { a: usize, b: usize },
}

impl SnakeWorld {
  pub fn new(terrain: Box<dyn HeightField>, config: WorldConfig) -> Self {
    Self {
      config,
      terrain,
      snakes: Vec::new(),
      pickups: PickupField::new(),
      tick: 0,
    }
  }

  /// Spawns a snake at a random, jittered spawn point with a random facing.
  pub fn spawn_snake(&mut self, name: &str, steering: Box<dyn Steering>) -> Uuid {
    let mut rng = rand::thread_rng();
    let extent = self.config.world_extent;
    let jitter = self.config.spawn_jitter_radius;
    let position = Vec3 {
      x: rng.gen_range(-extent..extent) + rng.gen_range(-jitter..jitter),
      y: 0.0,
      z: rng.gen_range(-extent..extent) + rng.gen_range(-jitter..jitter),
    };
    let angle = rng.gen_range(0.0..PI * 2.0);
    let facing = Vec3 {
      x: angle.cos(),
      y: 0.0,
      z: angle.sin(),
    };
    self.spawn_snake_at(name, position, facing, steering)
  }

  pub fn spawn_snake_at(
    &mut self,
    name: &str,
    position: Vec3,
    facing: Vec3,
    steering: Box<dyn Steering>,
  ) -> Uuid {
    let snake = Snake::spawn(
      name,
      position,
      facing,
      steering,
      self.terrain.as_ref(),
      self.config.chain.clone(),
    );
    let id = snake.id();
    tracing::info!(name, id = %id, "snake spawned");
    self.snakes.push(snake);
    id
  }

  pub fn snakes(&self) -> &[Snake] {
    &self.snakes
  }

  pub fn snake(&self, id: Uuid) -> Option<&Snake> {
    self.snakes.iter().find(|snake| snake.id() == id)
  }

  pub fn snake_mut(&mut self, id: Uuid) -> Option<&mut Snake> {
    self.snakes.iter_mut().find(|snake| snake.id() == id)
  }

  pub fn pickup_count(&self) -> usize {
    self.pickups.active_count()
  }

  pub fn tick(&self) -> u64 {
    self.tick
  }

  /// One simulated frame for the whole scene. Chains update strictly in
  /// insertion order; interactions are brokered afterward against the
  /// resolved positions.
  pub fn step(&mut self, dt: f64) {
    self.tick += 1;

    for snake in self.snakes.iter_mut() {
      snake.update(dt, self.terrain.as_ref());
    }

    let contacts = self.collect_contacts();
    self.apply_contacts(&contacts);
    self.consume_pickups();
    self.replenish_pickups();

    for snake in self.snakes.iter().filter(|snake| !snake.is_alive()) {
      tracing::info!(name = snake.name(), id = %snake.id(), "snake removed");
    }
    self.snakes.retain(|snake| snake.is_alive());
  }

  pub fn snapshot(&self) -> WorldSnapshot {
    WorldSnapshot {
      tick: self.tick,
      snakes: self.snakes.iter().map(|snake| snake.snapshot()).collect(),
      pickups: self.pickups.active_positions(),
    }
  }

  fn collect_contacts(&self) -> Vec<Contact> {
    let mut contacts = Vec::new();

    for a in 0..self.snakes.len() {
      if !self.snakes[a].is_alive() {
        continue;
      }
      let head_a = self.snakes[a].head_position();

      for b in 0..self.snakes.len() {
        if a == b || !self.snakes[b].is_alive() {
          continue;
        }
        let reach = self.snakes[a].collision_radius() + self.snakes[b].collision_radius();

        if a < b && distance(head_a, self.snakes[b].head_position()) < reach {
          contacts.push(Contact::HeadButt { a, b });
          continue;
        }

        // body scan skips the victim's head slot; that case is the head-butt
        for segment in 1..self.snakes[b].active_length() {
          if distance(head_a, self.snakes[b].segment_position(segment)) < reach {
            contacts.push(Contact::Bite {
              attacker: a,
              victim: b,
              segment,
            });
            break;
          }
        }
      }
    }

    contacts
  }

  fn apply_contacts(&mut self, contacts: &[Contact]) {
    for contact in contacts {
      match *contact {
        Contact::Bite {
          attacker,
          victim,
          segment,
        } => {
          if !self.snakes[victim].is_alive() || segment >= self.snakes[victim].active_length() {
            continue;
          }
          let removed = self.snakes[victim].cut_at(segment);
          if removed.is_empty() {
            // protected by the minimum viable length
            tracing::debug!(
              victim = self.snakes[victim].name(),
              segment,
              "bite ignored"
            );
            continue;
          }
          tracing::info!(
            attacker = self.snakes[attacker].name(),
            victim = self.snakes[victim].name(),
            segment,
            shed = removed.len(),
            "snake cut"
          );
          self.pickups.spawn_love(&removed);
        }
        Contact::HeadButt { a, b } => {
          if !self.snakes[a].is_alive() || !self.snakes[b].is_alive() {
            continue;
          }
          let loser = self.decide_head_butt(a, b);
          let winner = if loser == a { b } else { a };
          let removed = self.snakes[loser].kill();
          tracing::info!(
            winner = self.snakes[winner].name(),
            loser = self.snakes[loser].name(),
            shed = removed.len(),
            "head-on collision"
          );
          self.pickups.spawn_love(&removed);
        }
      }
    }
  }

  /// The more head-on snake is the attacker and survives; chain length
  /// breaks an even approach.
  fn decide_head_butt(&self, a: usize, b: usize) -> usize {
    let head_a = self.snakes[a].head_position();
    let head_b = self.snakes[b].head_position();
    let toward_b = normalize(sub(head_b, head_a));
    let toward_a = normalize(sub(head_a, head_b));
    let alignment_a = dot(self.snakes[a].facing(), toward_b);
    let alignment_b = dot(self.snakes[b].facing(), toward_a);

    if (alignment_a - alignment_b).abs() < 1e-6 {
      if self.snakes[a].active_length() >= self.snakes[b].active_length() {
        b
      } else {
        a
      }
    } else if alignment_a > alignment_b {
      b
    } else {
      a
    }
  }

  fn consume_pickups(&mut self) {
    for snake in self.snakes.iter_mut() {
      if !snake.is_alive() {
        continue;
      }
      let reach = snake.collision_radius() + self.config.pickup_radius;
      if let Some(power) = self.pickups.consume_near(snake.head_position(), reach) {
        match power {
          PickupPower::Grow => {
            snake.request_growth(1);
            tracing::debug!(name = snake.name(), "pickup eaten");
          }
          other => {
            tracing::debug!(name = snake.name(), power = ?other, "power pickup not simulated");
          }
        }
      }
    }
  }

  /// Gradual pellet-style respawn: one scatter per tick while the field is
  /// below its baseline, hard-capped overall.
  fn replenish_pickups(&mut self) {
    if self.pickups.active_count() >= self.config.base_pickup_count {
      return;
    }
    if self.pickups.active_count() >= self.config.max_pickups {
      return;
    }
    let mut rng = rand::thread_rng();
    self.pickups.scatter(
      &mut rng,
      self.config.world_extent,
      self.config.spawn_jitter_radius,
      self.terrain.as_ref(),
    );
  }
}
