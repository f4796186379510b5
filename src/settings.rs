//! Controller settings - gesture thresholds and scroll axis.
//!
//! Settings are plain JSON. Missing fields fall back to the defaults in
//! [`crate::constants`], so an empty object is a valid settings file.

use crate::constants::{
    DEFAULT_SCROLL_AXIS, PARALLEL_EPSILON, PINCH_DAMPING, SCROLL_DEADBAND, WHEEL_DIVISOR,
    ZOOM_QUANTUM, ZOOM_QUANTUM_TOLERANCE,
};
use crate::error::{ZoomPanError, ZoomPanResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomPanSettings {
    /// Minimum vertical travel before a parallel two-finger drag scrolls
    pub scroll_deadband: f64,
    /// Wheel delta mapping to a zoom step of 1.0
    pub wheel_divisor: f64,
    /// Pinch zoom gate period
    pub zoom_quantum: f64,
    /// Accepted band within each gate period
    pub zoom_quantum_tolerance: f64,
    /// Divides `length_ratio - 1` into the pinch zoom amount
    pub pinch_damping: f64,
    /// Axis stepped by a parallel two-finger drag
    pub scroll_axis: usize,
    /// Tolerance on `|length_ratio - 1|` for a parallel move
    pub parallel_epsilon: f64,
}

impl Default for ZoomPanSettings {
    fn default() -> Self {
        Self {
            scroll_deadband: SCROLL_DEADBAND,
            wheel_divisor: WHEEL_DIVISOR,
            zoom_quantum: ZOOM_QUANTUM,
            zoom_quantum_tolerance: ZOOM_QUANTUM_TOLERANCE,
            pinch_damping: PINCH_DAMPING,
            scroll_axis: DEFAULT_SCROLL_AXIS,
            parallel_epsilon: PARALLEL_EPSILON,
        }
    }
}

impl ZoomPanSettings {
    /// Load and validate settings from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> ZoomPanResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        debug!("Loaded zoom/pan settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> ZoomPanResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> ZoomPanResult<()> {
        let positive = [
            ("wheel_divisor", self.wheel_divisor),
            ("zoom_quantum", self.zoom_quantum),
            ("pinch_damping", self.pinch_damping),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ZoomPanError::InvalidSettings(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("scroll_deadband", self.scroll_deadband),
            ("zoom_quantum_tolerance", self.zoom_quantum_tolerance),
            ("parallel_epsilon", self.parallel_epsilon),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ZoomPanError::InvalidSettings(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if self.zoom_quantum_tolerance > self.zoom_quantum {
            return Err(ZoomPanError::InvalidSettings(format!(
                "zoom_quantum_tolerance ({}) exceeds zoom_quantum ({})",
                self.zoom_quantum_tolerance, self.zoom_quantum
            )));
        }
        Ok(())
    }
}

/// Default location of the settings file in the platform config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("zoompan").join("settings.json"))
}
