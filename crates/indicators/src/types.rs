use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Window configuration for the dual moving-average crossover signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaCrossSettings {
    /// Length of the fast moving average, in bars.
    pub fast_window: usize,
    /// Length of the slow moving average, in bars.
    pub slow_window: usize,
    /// Minimum rows the input series must carry. Defaults to the slow window.
    #[serde(default)]
    pub minimum_rows: Option<usize>,
}

impl Default for MaCrossSettings {
    fn default() -> Self {
        Self {
            fast_window: 50,
            slow_window: 200,
            minimum_rows: None,
        }
    }
}

impl MaCrossSettings {
    /// Rejects unusable window combinations before any computation runs.
    pub fn validate(&self) -> Result<()> {
        if self.fast_window == 0 || self.slow_window == 0 {
            return Err(Error::Configuration {
                reason: "window lengths must be positive".to_string(),
            });
        }
        if self.fast_window >= self.slow_window {
            return Err(Error::Configuration {
                reason: format!(
                    "fast_window ({}) must be smaller than slow_window ({})",
                    self.fast_window, self.slow_window
                ),
            });
        }
        if self.minimum_rows == Some(0) {
            return Err(Error::Configuration {
                reason: "minimum_rows must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// The number of rows the loader must see before the pipeline may run.
    pub fn required_rows(&self) -> usize {
        self.minimum_rows.unwrap_or(self.slow_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_50_over_200() {
        let settings = MaCrossSettings::default();
        assert_eq!(settings.fast_window, 50);
        assert_eq!(settings.slow_window, 200);
        assert_eq!(settings.required_rows(), 200);
        settings.validate().unwrap();
    }

    #[test]
    fn minimum_rows_overrides_the_slow_window() {
        let settings = MaCrossSettings {
            minimum_rows: Some(250),
            ..MaCrossSettings::default()
        };
        assert_eq!(settings.required_rows(), 250);
    }

    #[test]
    fn fast_window_must_be_smaller() {
        let settings = MaCrossSettings {
            fast_window: 200,
            slow_window: 200,
            minimum_rows: None,
        };
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("fast_window"));
    }

    #[test]
    fn zero_windows_are_rejected() {
        let settings = MaCrossSettings {
            fast_window: 0,
            slow_window: 200,
            minimum_rows: None,
        };
        assert!(settings.validate().is_err());
    }
}
