use std::time::Duration;

/// Playback timing. Delays step down at fixed level thresholds rather than
/// decaying continuously.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Pause before the first entry is shown.
    pub lead_in_ms: u64,
    pub slow_click_delay_ms: u64,
    pub fast_click_delay_ms: u64,
    /// First level that uses `fast_click_delay_ms`.
    pub fast_click_from_level: usize,
    pub long_press_ms: u64,
    pub short_press_ms: u64,
    /// First level that uses `short_press_ms`.
    pub short_press_from_level: usize,
    /// Fixed RNG seed; entropy from the OS when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            lead_in_ms: 1500,
            slow_click_delay_ms: 600,
            fast_click_delay_ms: 400,
            fast_click_from_level: 5,
            long_press_ms: 500,
            short_press_ms: 300,
            short_press_from_level: 8,
            seed: None,
        }
    }
}

impl PacingConfig {
    pub fn lead_in(&self) -> Duration {
        Duration::from_millis(self.lead_in_ms)
    }

    /// Gap before each highlighted entry at the given level.
    pub fn click_delay(&self, level: usize) -> Duration {
        if level < self.fast_click_from_level {
            Duration::from_millis(self.slow_click_delay_ms)
        } else {
            Duration::from_millis(self.fast_click_delay_ms)
        }
    }

    /// How long each entry stays highlighted at the given level.
    pub fn press_duration(&self, level: usize) -> Duration {
        if level < self.short_press_from_level {
            Duration::from_millis(self.long_press_ms)
        } else {
            Duration::from_millis(self.short_press_ms)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_delay_thresholds() {
        let pacing = PacingConfig::default();
        assert_eq!(pacing.click_delay(1), Duration::from_millis(600));
        assert_eq!(pacing.click_delay(4), Duration::from_millis(600));
        assert_eq!(pacing.click_delay(5), Duration::from_millis(400));
        assert_eq!(pacing.click_delay(40), Duration::from_millis(400));
    }

    #[test]
    fn test_press_duration_thresholds() {
        let pacing = PacingConfig::default();
        assert_eq!(pacing.press_duration(1), Duration::from_millis(500));
        assert_eq!(pacing.press_duration(7), Duration::from_millis(500));
        assert_eq!(pacing.press_duration(8), Duration::from_millis(300));
        assert_eq!(pacing.press_duration(100), Duration::from_millis(300));
    }

    #[test]
    fn test_lead_in_default() {
        assert_eq!(PacingConfig::default().lead_in(), Duration::from_millis(1500));
    }
}
