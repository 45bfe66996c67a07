use super::body::SnakeBody;
use super::config::ChainConfig;
use super::growth::{GrowthController, GrowthStep};
use super::heading::{HeadingController, Steering};
use super::math::{add, distance, length, normalize, scale, sub};
use super::path::PathHistory;
use super::scale::ScaleController;
use super::terrain::HeightField;
use super::types::{SnakeSnapshot, Vec3};
use uuid::Uuid;

/// One chain instance: leader heading, recorded path, segment arena, growth
/// and scale controllers, driven by a polymorphic steering source. All state
/// is confined to the owning world's single update pass.
#[derive(Debug)]
pub struct Snake {
    id: Uuid,
    name: String,
    config: ChainConfig,
    steering: Box<dyn Steering>,
    heading: HeadingController,
    path: PathHistory,
    body: SnakeBody,
    growth: GrowthController,
    scale: ScaleController,
    alive: bool,
}

impl Snake {
    /// Spawns a head-and-tail chain at `position`, pinned to the ground, with
    /// the tail trailing one link behind the facing. The chain then grows to
    /// the configured minimum length through the ordinary ramp.
    pub fn spawn(
        name: &str,
        position: Vec3,
        facing: Vec3,
        steering: Box<dyn Steering>,
        terrain: &dyn HeightField,
        config: ChainConfig,
    ) -> Self {
        let heading = HeadingController::new(facing);
        let scale_controller = ScaleController::new();
        let link_length = scale_controller.link_length(&config);
        let half_height = scale_controller.scale() * 0.5;

        let mut head = position;
        head.y = terrain.sample_height(head.x, head.z) + half_height;

        let mut tail = add(head, scale(heading.facing(), -link_length));
        tail.y = terrain.sample_height(tail.x, tail.z) + half_height;

        let mut path = PathHistory::new(config.segment_capacity * config.waypoints_per_link as usize);
        path.seed(tail, head);

        let body = SnakeBody::new(head, tail, config.segment_capacity);

        // the seeded head-tail gap doubles as the initial neck spacing, so
        // the first growth commit fires without collapsing the seeded tail
        let growth = GrowthController::new(config.minimum_length, distance(head, tail));

        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            config,
            steering,
            heading,
            path,
            body,
            growth,
            scale: scale_controller,
            alive: true,
        }
    }

    /// One simulation frame: heading, displacement, ground clamp, path
    /// record, growth, resolve, scale, strictly in that order. A stopped
    /// steering source freezes everything but leaves state resumable.
    pub fn update(&mut self, dt: f64, terrain: &dyn HeightField) {
        if !self.alive {
            return;
        }

        self.steering.update(dt);
        if self.steering.is_stopped() {
            return;
        }

        let speed = self.steering.speed();
        let current_scale = self.scale.scale();
        let turning_radius = self.config.turning_radius_per_scale * current_scale;
        self.heading
            .rotate_toward(self.steering.target_facing(), turning_radius, speed, dt);

        let link_length = self.scale.link_length(&self.config);

        // horizontal displacement, then clamp the head onto the ground;
        // the vertical correction counts toward traveled arclength
        let head = self.body.head_position();
        let mut next = add(head, self.heading.displacement(speed, dt));
        next.y = terrain.sample_height(next.x, next.z) + current_scale * 0.5;
        let movement = sub(next, head);
        let moved = length(movement);

        self.body.set_head(next, normalize(movement));
        self.path.record(
            next,
            moved,
            link_length,
            self.config.waypoints_per_link,
            self.growth.target_length(),
        );

        let active = self.body.active_length();
        if self.growth.is_growing(active) {
            let step = self
                .growth
                .advance(active, link_length, speed, dt, &self.config);
            if step == GrowthStep::Commit {
                self.body.activate_tail_slot();
            }
        }

        let neck = if self.growth.is_growing(self.body.active_length()) {
            Some(self.growth.neck_length())
        } else {
            None
        };
        self.body
            .resolve(&self.path, link_length, neck, self.config.link_length_tolerance);

        self.scale
            .update(self.body.active_length(), dt, &self.config);
    }

    /// Truncates the chain at `index`, returning the removed positions
    /// tail-first for conversion into pickups. Below the minimum viable
    /// length this is a no-op. The growth target is re-pinned so the lost
    /// length stays lost until new growth is requested.
    pub fn cut_at(&mut self, index: usize) -> Vec<Vec3> {
        let removed = self.body.cut_at(index, self.config.minimum_length);
        if !removed.is_empty() {
            self.growth.set_target_length(self.body.active_length());
        }
        removed
    }

    /// Deactivates the whole chain and returns every segment position,
    /// tail-first. The only path that shrinks below the minimum length.
    pub fn kill(&mut self) -> Vec<Vec3> {
        self.alive = false;
        self.body.deactivate_all()
    }

    pub fn request_growth(&mut self, added: usize) {
        self.growth.request_growth(added);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn head_position(&self) -> Vec3 {
        self.body.head_position()
    }

    pub fn facing(&self) -> Vec3 {
        self.heading.facing()
    }

    pub fn active_length(&self) -> usize {
        self.body.active_length()
    }

    pub fn target_length(&self) -> usize {
        self.growth.target_length()
    }

    pub fn segment_position(&self, index: usize) -> Vec3 {
        self.body.segment_position(index)
    }

    pub fn is_head_slot(&self, index: usize) -> bool {
        self.body.is_head(index)
    }

    pub fn scale(&self) -> f64 {
        self.scale.scale()
    }

    /// Segments are spheres of diameter `scale`.
    pub fn collision_radius(&self) -> f64 {
        self.scale.scale() * 0.5
    }

    pub fn total_path_arclength(&self) -> f64 {
        self.path.total_arclength()
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        let segments = (0..self.body.active_length())
            .map(|index| self.body.segment_position(index))
            .collect();
        SnakeSnapshot {
            id: self.id.to_string(),
            name: self.name.clone(),
            alive: self.alive,
            active_length: self.body.active_length(),
            target_length: self.growth.target_length(),
            scale: self.scale.scale(),
            head: self.body.head_position(),
            segments,
        }
    }
}
