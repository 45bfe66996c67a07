use super::math::{distance, lerp, length, normalize, sub};
use super::path::PathHistory;
use super::types::{SegmentSlot, Vec3};

/// Fixed-capacity arena of segment slots. Slot 0 is the head; active slots
/// ascend head-to-tail, and `active_length` is a cursor into the arena, so
/// growth and cuts reuse slots instead of allocating. Slots past the cursor
/// stay inactive with their last pose.
#[derive(Debug, Clone)]
pub struct SnakeBody {
    slots: Vec<SegmentSlot>,
    active_length: usize,
}

impl SnakeBody {
    /// A new body is just the head and the tail; everything between grows in.
    pub fn new(head: Vec3, tail: Vec3, capacity: usize) -> Self {
        let facing = normalize(sub(head, tail));
        let mut slots = Vec::with_capacity(capacity);
        slots.push(SegmentSlot {
            position: head,
            facing,
            active: true,
        });
        slots.push(SegmentSlot {
            position: tail,
            facing,
            active: true,
        });
        Self {
            slots,
            active_length: 2,
        }
    }

    pub fn active_length(&self) -> usize {
        self.active_length
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn head_position(&self) -> Vec3 {
        self.slots[0].position
    }

    pub fn tail_position(&self) -> Vec3 {
        self.slots[self.active_length - 1].position
    }

    pub fn segment_position(&self, index: usize) -> Vec3 {
        self.slots[index].position
    }

    pub fn segment_facing(&self, index: usize) -> Vec3 {
        self.slots[index].facing
    }

    pub fn is_head(&self, index: usize) -> bool {
        index == 0
    }

    pub fn is_segment_active(&self, index: usize) -> bool {
        self.slots[index].active
    }

    pub fn set_head(&mut self, position: Vec3, facing: Vec3) {
        self.slots[0].position = position;
        if length(facing) > 0.0 {
            self.slots[0].facing = facing;
        }
    }

    /// Activates one pooled slot at the tail, allocating a fresh slot only
    /// when the pool is exhausted. The slot starts at the tail position and
    /// is moved into formation by the next resolve.
    pub fn activate_tail_slot(&mut self) {
        let tail = self.slots[self.active_length - 1];
        if self.active_length < self.slots.len() {
            let slot = &mut self.slots[self.active_length];
            slot.position = tail.position;
            slot.facing = tail.facing;
            slot.active = true;
        } else {
            self.slots.push(SegmentSlot {
                position: tail.position,
                facing: tail.facing,
                active: true,
            });
        }
        self.active_length += 1;
    }

    /// Positions every active body segment along the recorded path, walking
    /// backward from the newest waypoint and spending `link_length` of
    /// arclength per segment (`neck_length` for the first body segment while
    /// a growth ramp is in progress). Leftover arclength within a waypoint
    /// pair carries into the next segment's walk, so spacing composes along
    /// the path without re-summing.
    ///
    /// If the history runs out before a segment's distance is met, that
    /// segment and everything behind it hold their last pose for the frame.
    pub fn resolve(
        &mut self,
        path: &PathHistory,
        link_length: f64,
        neck_length: Option<f64>,
        tolerance: f64,
    ) {
        if self.active_length < 2 || path.len() < 2 {
            return;
        }

        let mut path_index = path.len() - 1;
        // distance already covered between the head and the newest waypoint
        let mut path_length = distance(path.at(path_index).position, self.slots[0].position);
        let mut previous_position = self.slots[0].position;

        for i in 1..self.active_length {
            if path_index < 1 {
                break;
            }

            let target = match neck_length {
                Some(neck) if i == 1 => neck,
                _ => link_length,
            };

            // advance to the waypoint pair straddling the target distance;
            // the 0th waypoint is an anchor and never supplies arclength
            while path_index > 1 {
                let pair = path.at(path_index).arclength_from_previous;
                if path_length + pair > target {
                    break;
                }
                path_length += pair;
                path_index -= 1;
            }

            let pair = path.at(path_index).arclength_from_previous;
            let remaining = target - path_length;
            let mut t = if pair <= f64::EPSILON {
                0.0
            } else {
                remaining / pair
            };
            if t > 1.0 {
                if remaining - pair > tolerance {
                    // not enough path recorded yet
                    break;
                }
                t = 1.0;
            }

            let from = path.at(path_index).position;
            let to = path.at(path_index - 1).position;
            let position = lerp(from, to, t);

            let facing = normalize(sub(previous_position, position));
            self.slots[i].position = position;
            if length(facing) > 0.0 {
                self.slots[i].facing = facing;
            }
            previous_position = position;

            // preserve the remainder of this pair for the next segment
            path_length = (1.0 - t) * pair;
            path_index -= 1;
        }
    }

    /// Deactivates every active segment from `index` through the tail and
    /// returns the removed positions in tail-to-cut order. Cuts that would
    /// shrink the chain below `minimum_length` are ignored.
    pub fn cut_at(&mut self, index: usize, minimum_length: usize) -> Vec<Vec3> {
        let mut removed = Vec::new();
        if index < minimum_length || index >= self.active_length {
            return removed;
        }

        for i in (index..self.active_length).rev() {
            removed.push(self.slots[i].position);
            self.slots[i].active = false;
        }
        self.active_length = index;
        removed
    }

    /// Deactivates the whole chain (kill path) and returns every position,
    /// tail first, for conversion into pickups.
    pub fn deactivate_all(&mut self) -> Vec<Vec3> {
        let mut removed = Vec::with_capacity(self.active_length);
        for i in (0..self.active_length).rev() {
            removed.push(self.slots[i].position);
            self.slots[i].active = false;
        }
        self.active_length = 0;
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec(x: f64, z: f64) -> Vec3 {
        Vec3 { x, y: 0.0, z }
    }

    /// Straight path along +X with evenly spaced waypoints, newest at `head_x`.
    fn straight_path(head_x: f64, step: f64, count: usize) -> PathHistory {
        let mut path = PathHistory::new(count + 2);
        let oldest = head_x - step * count as f64;
        path.seed(vec(oldest - step, 0.0), vec(oldest, 0.0));
        let mut x = oldest;
        for _ in 0..count {
            x += step;
            let committed = path.record(vec(x, 0.0), step, 1.0, 2.0, 1000);
            assert!(committed);
        }
        path
    }

    fn body_on_path(active: usize, head_x: f64) -> (SnakeBody, PathHistory) {
        let path = straight_path(head_x, 0.6, 60);
        let mut body = SnakeBody::new(vec(head_x, 0.0), vec(head_x - 1.5, 0.0), 64);
        for _ in 2..active {
            body.activate_tail_slot();
        }
        (body, path)
    }

    #[test]
    fn resolve_spaces_segments_one_link_apart_on_straight_path() {
        let link = 1.5;
        let (mut body, path) = body_on_path(6, 30.0);
        body.resolve(&path, link, None, 0.01);

        for i in 1..body.active_length() {
            let gap = distance(body.segment_position(i - 1), body.segment_position(i));
            assert!(
                (gap - link).abs() < 0.01,
                "segment {} spaced {} instead of {}",
                i,
                gap,
                link
            );
        }
        // all on the path line, behind the head
        for i in 1..body.active_length() {
            let position = body.segment_position(i);
            assert!(position.z.abs() < 1e-9);
            assert!(position.x < body.head_position().x);
        }
    }

    #[test]
    fn resolve_orients_segments_toward_the_head() {
        let (mut body, path) = body_on_path(5, 30.0);
        body.resolve(&path, 1.5, None, 0.01);

        for i in 1..body.active_length() {
            let facing = body.segment_facing(i);
            assert!(facing.x > 0.99, "segment {} should face +X, got {:?}", i, facing);
        }
    }

    #[test]
    fn neck_length_overrides_spacing_of_first_body_segment_only() {
        let link = 1.5;
        let neck = 0.4;
        let (mut body, path) = body_on_path(6, 30.0);
        body.resolve(&path, link, Some(neck), 0.01);

        let first_gap = distance(body.segment_position(0), body.segment_position(1));
        assert!((first_gap - neck).abs() < 0.01);
        for i in 2..body.active_length() {
            let gap = distance(body.segment_position(i - 1), body.segment_position(i));
            assert!((gap - link).abs() < 0.01);
        }
    }

    #[test]
    fn exhausted_history_leaves_far_segments_holding_pose() {
        // only ~3 links of path recorded, but 8 segments want placing
        let path = straight_path(10.0, 0.6, 8);
        let mut body = SnakeBody::new(vec(10.0, 0.0), vec(8.5, 0.0), 16);
        for _ in 2..8 {
            body.activate_tail_slot();
        }
        let parked = body.tail_position();

        body.resolve(&path, 1.5, None, 0.01);

        // near segments resolved onto the path, far segments untouched
        let first_gap = distance(body.segment_position(0), body.segment_position(1));
        assert!((first_gap - 1.5).abs() < 0.01);
        assert!(distance(body.segment_position(7), parked) < 1e-9);
    }

    #[test]
    fn zero_length_waypoint_pairs_are_guarded() {
        // degenerate spawn: head and tail coincide, so the seeded pair has
        // zero arclength and a naive interpolation fraction would divide by it
        let spot = vec(1.5, 0.0);
        let mut path = PathHistory::new(16);
        path.seed(spot, spot);

        let mut body = SnakeBody::new(spot, vec(0.0, 0.0), 8);
        body.resolve(&path, 1.5, None, 0.01);
        let position = body.segment_position(1);
        assert!(position.x.is_finite() && position.y.is_finite() && position.z.is_finite());
    }

    #[test]
    fn cut_returns_removed_positions_tail_first() {
        let (mut body, path) = body_on_path(10, 30.0);
        body.resolve(&path, 1.5, None, 0.01);
        let tail_before = body.tail_position();

        let removed = body.cut_at(7, 5);

        assert_eq!(body.active_length(), 7);
        assert_eq!(removed.len(), 3);
        // tail first, marching toward the cut index
        assert!(distance(removed[0], tail_before) < 1e-9);
        assert!(removed[0].x < removed[1].x);
        assert!(removed[1].x < removed[2].x);

        // cut slots are deactivated in place, surviving slots untouched
        for index in 7..10 {
            assert!(!body.is_segment_active(index));
        }
        for index in 0..7 {
            assert!(body.is_segment_active(index));
        }
    }

    #[test]
    fn cut_below_minimum_length_is_a_no_op() {
        let (mut body, path) = body_on_path(10, 30.0);
        body.resolve(&path, 1.5, None, 0.01);

        let removed = body.cut_at(3, 5);
        assert!(removed.is_empty());
        assert_eq!(body.active_length(), 10);

        let removed = body.cut_at(12, 5);
        assert!(removed.is_empty());
        assert_eq!(body.active_length(), 10);
    }

    #[test]
    fn cut_slots_are_reused_by_later_growth() {
        let (mut body, path) = body_on_path(10, 30.0);
        body.resolve(&path, 1.5, None, 0.01);
        let slots_before = body.slot_count();

        body.cut_at(6, 5);
        body.activate_tail_slot();
        body.activate_tail_slot();

        assert_eq!(body.active_length(), 8);
        assert_eq!(body.slot_count(), slots_before);
    }

    #[test]
    fn pool_exhaustion_allocates_a_fresh_slot() {
        let mut body = SnakeBody::new(vec(1.5, 0.0), vec(0.0, 0.0), 2);
        assert_eq!(body.slot_count(), 2);
        body.activate_tail_slot();
        assert_eq!(body.slot_count(), 3);
        assert_eq!(body.active_length(), 3);
    }

    #[test]
    fn deactivate_all_returns_whole_chain_tail_first() {
        let (mut body, path) = body_on_path(6, 30.0);
        body.resolve(&path, 1.5, None, 0.01);
        let tail = body.tail_position();
        let head = body.head_position();

        let removed = body.deactivate_all();
        assert_eq!(removed.len(), 6);
        assert!(distance(removed[0], tail) < 1e-9);
        assert!(distance(removed[5], head) < 1e-9);
        assert_eq!(body.active_length(), 0);
    }
}
