//! Check configuration, loadable from JSON.

use std::fs;
use std::path::Path;

use graycheck_core::{Tolerance, DEFAULT_TOLERANCE, MAX_LABEL_WIDTH};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Parameters of a Gray-code check.
///
/// ```json
/// { "tolerance": 1e-6, "label_width": 4 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Slack added to the minimum distance when selecting edges
    pub tolerance: f64,
    /// Label width in bits; derived from the largest index when absent
    pub label_width: Option<u32>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            label_width: None,
        }
    }
}

impl CheckConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.tolerance()?;
        if let Some(width) = self.label_width {
            if width == 0 || width > MAX_LABEL_WIDTH {
                return Err(Error::InvalidConfig(format!(
                    "label_width must be between 1 and {MAX_LABEL_WIDTH}, got {width}"
                )));
            }
        }
        Ok(())
    }

    /// Validated tolerance.
    pub fn tolerance(&self) -> Result<Tolerance> {
        Tolerance::new(self.tolerance).map_err(|_| {
            Error::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            ))
        })
    }
}
