use super::config::ChainConfig;

/// Outcome of one growth frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthStep {
    /// Active length already matches the target.
    Idle,
    /// The neck spacing moved toward the full link length.
    Ramping,
    /// The neck converged; the owner must activate one tail slot.
    Commit,
}

/// Tracks requested length versus active length and eases each new segment
/// into formation. The newest segment's spacing to the head ramps from near
/// zero up to the link length, and only on convergence is a pooled slot
/// activated, so growth never pops a segment into place at full spacing.
#[derive(Debug, Clone)]
pub struct GrowthController {
    target_length: usize,
    neck_length: f64,
}

impl GrowthController {
    pub fn new(target_length: usize, initial_neck_length: f64) -> Self {
        Self {
            target_length,
            neck_length: initial_neck_length,
        }
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    /// Raises the target; actual segments appear over time through the ramp.
    pub fn request_growth(&mut self, added: usize) {
        self.target_length += added;
    }

    /// Re-pins the target after a cut so the lost length is not silently
    /// regrown without new pickups.
    pub fn set_target_length(&mut self, length: usize) {
        self.target_length = length;
    }

    pub fn is_growing(&self, active_length: usize) -> bool {
        active_length < self.target_length
    }

    /// Spacing the solver should use for the neck segment this frame.
    pub fn neck_length(&self) -> f64 {
        self.neck_length
    }

    /// Advances the neck ramp. At most one `Commit` per frame; on commit the
    /// ramp restarts near zero (never exactly zero, so the next segment can
    /// never coincide with the head).
    pub fn advance(
        &mut self,
        active_length: usize,
        link_length: f64,
        speed: f64,
        dt: f64,
        config: &ChainConfig,
    ) -> GrowthStep {
        if active_length >= self.target_length {
            return GrowthStep::Idle;
        }

        if (self.neck_length - link_length).abs() < link_length * config.growth_commit_band {
            self.neck_length = link_length * config.neck_start_fraction;
            return GrowthStep::Commit;
        }

        let alpha = (-config.growth_rate * speed * dt).exp();
        self.neck_length = link_length + (self.neck_length - link_length) * alpha;
        GrowthStep::Ramping
    }
}
