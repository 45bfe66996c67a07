use super::config::ChainConfig;

/// Chain-wide thickness scale. Grows logarithmically with active length so
/// long chains fatten slowly, and damps toward the target instead of
/// snapping when length changes. Link length derives from the scale, so the
/// solver must re-read it every frame.
#[derive(Debug, Clone)]
pub struct ScaleController {
    scale: f64,
}

impl ScaleController {
    pub fn new() -> Self {
        Self { scale: 1.0 }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Target spacing between adjacent segments at the current scale.
    pub fn link_length(&self, config: &ChainConfig) -> f64 {
        self.scale + config.link_length_offset
    }

    pub fn target_scale(active_length: usize, config: &ChainConfig) -> f64 {
        if active_length <= config.minimum_length {
            return 1.0;
        }
        let curve =
            config.scale_multiplier * (active_length as f64 * config.scale_curve_divisor).ln() + 1.0;
        curve.max(1.0)
    }

    pub fn update(&mut self, active_length: usize, dt: f64, config: &ChainConfig) {
        let target = Self::target_scale(active_length, config);
        let alpha = (-config.scale_rate * dt).exp();
        self.scale = target + (self.scale - target) * alpha;
    }
}

impl Default for ScaleController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_floors_at_one_through_minimum_length() {
        let config = ChainConfig::default();
        for active in 0..=config.minimum_length {
            assert_eq!(ScaleController::target_scale(active, &config), 1.0);
        }
        assert!(ScaleController::target_scale(config.minimum_length + 1, &config) > 1.0);
    }

    #[test]
    fn scale_growth_is_sublinear_in_length() {
        let config = ChainConfig::default();
        let at_20 = ScaleController::target_scale(20, &config);
        let at_40 = ScaleController::target_scale(40, &config);
        let at_80 = ScaleController::target_scale(80, &config);
        assert!(at_40 - at_20 > at_80 - at_40);
        // roughly 1 at the minimum, roughly 5 at 200 parts
        assert!((ScaleController::target_scale(200, &config) - 6.53).abs() < 0.1);
    }

    #[test]
    fn damped_scale_converges_to_target() {
        let config = ChainConfig::default();
        let mut controller = ScaleController::new();
        let dt = 1.0 / 60.0;
        for _ in 0..60 * 60 {
            controller.update(40, dt, &config);
        }
        let target = ScaleController::target_scale(40, &config);
        assert!((controller.scale() - target).abs() < 1e-3);
    }

    #[test]
    fn link_length_tracks_scale() {
        let config = ChainConfig::default();
        let mut controller = ScaleController::new();
        let before = controller.link_length(&config);
        assert!((before - 1.5).abs() < 1e-12);

        for _ in 0..600 {
            controller.update(60, 1.0 / 60.0, &config);
        }
        assert!(controller.link_length(&config) > before);
    }
}
