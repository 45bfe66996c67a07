use super::math::distance;
use super::types::{Vec3, Waypoint};
use std::collections::VecDeque;

/// Bounded record of the leader's recent trajectory. The front entry is an
/// anchor: its `arclength_from_previous` has no predecessor in the retained
/// window and is never consumed as an interpolation source.
#[derive(Debug, Clone)]
pub struct PathHistory {
    waypoints: VecDeque<Waypoint>,
    accumulated_movement: f64,
}

impl PathHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            waypoints: VecDeque::with_capacity(capacity),
            accumulated_movement: 0.0,
        }
    }

    /// Resets the history to the spawn pose: the tail anchor plus the head,
    /// one link of recorded path between them.
    pub fn seed(&mut self, tail: Vec3, head: Vec3) {
        self.waypoints.clear();
        self.accumulated_movement = 0.0;
        self.waypoints.push_back(Waypoint {
            position: tail,
            arclength_from_previous: 0.0,
        });
        self.waypoints.push_back(Waypoint {
            position: head,
            arclength_from_previous: distance(head, tail),
        });
    }

    /// Accumulates movement magnitude regardless of direction, and commits a
    /// waypoint once the accumulation crosses `link_length / waypoints_per_link`.
    /// Waypoint density therefore tracks link length, not frame rate. Commits
    /// trim the oldest entries beyond what `retained_links` segments can need.
    /// Returns true when a waypoint was committed.
    pub fn record(
        &mut self,
        position: Vec3,
        moved: f64,
        link_length: f64,
        waypoints_per_link: f64,
        retained_links: usize,
    ) -> bool {
        self.accumulated_movement += moved;

        let gate = link_length / waypoints_per_link;
        if self.accumulated_movement <= gate {
            return false;
        }

        self.waypoints.push_back(Waypoint {
            position,
            arclength_from_previous: self.accumulated_movement,
        });
        self.accumulated_movement = 0.0;

        let cap = (retained_links as f64 * waypoints_per_link).ceil() as usize;
        while self.waypoints.len() > cap {
            self.waypoints.pop_front();
        }

        true
    }

    /// Sum of recorded inter-waypoint distances, excluding the anchor.
    pub fn total_arclength(&self) -> f64 {
        self.waypoints
            .iter()
            .skip(1)
            .map(|waypoint| waypoint.arclength_from_previous)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn at(&self, index: usize) -> Waypoint {
        self.waypoints[index]
    }

    pub fn newest(&self) -> Option<Waypoint> {
        self.waypoints.back().copied()
    }
}
