use {
    crate::{
        AnalyticsError, classifier::ClassifierThresholds, history::HISTORY_CAPACITY,
        stability::StabilityConfig,
    },
    serde::{Deserialize, Serialize},
    std::path::Path,
};

/// Number of trailing frames charted by the confidence trend.
pub const TREND_WINDOW: usize = 20;

/// Consecutive stable frames of one pose before a hold fires.
pub const HOLD_FRAMES: usize = 30;

/// Tunables for the analytics pipeline. Missing JSON fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub history_capacity: usize,
    pub trend_window: usize,
    pub stability: StabilityConfig,
    pub classifier: ClassifierThresholds,
    pub hold_frames: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            history_capacity: HISTORY_CAPACITY,
            trend_window: TREND_WINDOW,
            stability: StabilityConfig::default(),
            classifier: ClassifierThresholds::default(),
            hold_frames: HOLD_FRAMES,
        }
    }
}

impl AnalyticsConfig {
    pub fn from_json(json: &str) -> Result<Self, AnalyticsError> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, AnalyticsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AnalyticsError::Io(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), AnalyticsError> {
        let fail = |msg: String| Err(AnalyticsError::Config(msg));

        if self.history_capacity == 0 {
            return fail("history_capacity must be at least 1".to_string());
        }
        if self.trend_window == 0 || self.trend_window > self.history_capacity {
            return fail(format!(
                "trend_window must be in 1..={}, got {}",
                self.history_capacity, self.trend_window
            ));
        }
        if self.stability.window < 2 || self.stability.window > self.history_capacity {
            return fail(format!(
                "stability.window must be in 2..={}, got {}",
                self.history_capacity, self.stability.window
            ));
        }
        if self.stability.min_usable_frames > self.stability.window {
            return fail(format!(
                "stability.min_usable_frames ({}) exceeds stability.window ({})",
                self.stability.min_usable_frames, self.stability.window
            ));
        }
        let max_displacement = self.stability.max_mean_displacement;
        if max_displacement.is_nan() || max_displacement <= 0.0 {
            return fail(format!(
                "stability.max_mean_displacement must be positive, got {max_displacement}"
            ));
        }

        let c = &self.classifier;
        for (name, value) in [
            ("level_tolerance", c.level_tolerance),
            ("alignment_tolerance", c.alignment_tolerance),
            ("raise_offset", c.raise_offset),
            ("extension_offset", c.extension_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return fail(format!("classifier.{name} must be a non-negative number, got {value}"));
            }
        }

        if self.hold_frames == 0 {
            return fail("hold_frames must be at least 1".to_string());
        }
        Ok(())
    }
}
