//! Configuration for engine operations
//!
//! Defines the default display locale and the pedigree chart geometry.

use crate::{EngineError, Locale};
use serde::{Deserialize, Serialize};

/// Geometry of the pedigree chart
///
/// All distances are in canvas units. `x`/`y` of a laid-out node are the
/// node's center.
///
/// # Examples
///
/// ```
/// use kindred_engine::LayoutConfig;
///
/// let config = LayoutConfig::default();
/// assert_eq!(config.compact_threshold, 4);
///
/// // Tighter rows for small screens
/// let compact = LayoutConfig::compact();
/// assert!(compact.horizontal_gap < config.horizontal_gap);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Width of a person card
    /// Default: 160
    #[serde(default = "default_node_width")]
    pub node_width: f64,

    /// Height of a person card
    /// Default: 80
    #[serde(default = "default_node_height")]
    pub node_height: f64,

    /// Gap between cards in a row of up to `compact_threshold` members
    /// Default: 48
    #[serde(default = "default_horizontal_gap")]
    pub horizontal_gap: f64,

    /// Gap between cards in a row with more than `compact_threshold` members
    /// Default: 16
    #[serde(default = "default_compact_gap")]
    pub compact_gap: f64,

    /// Row size above which the compact gap is used
    /// Default: 4
    #[serde(default = "default_compact_threshold")]
    pub compact_threshold: usize,

    /// Distance between the centers of adjacent generation rows
    /// Default: 180
    #[serde(default = "default_row_gap")]
    pub row_gap: f64,

    /// Empty border around the chart
    /// Default: 40
    #[serde(default = "default_margin")]
    pub margin: f64,
}

fn default_node_width() -> f64 {
    160.0
}

fn default_node_height() -> f64 {
    80.0
}

fn default_horizontal_gap() -> f64 {
    48.0
}

fn default_compact_gap() -> f64 {
    16.0
}

fn default_compact_threshold() -> usize {
    4
}

fn default_row_gap() -> f64 {
    180.0
}

fn default_margin() -> f64 {
    40.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: default_node_width(),
            node_height: default_node_height(),
            horizontal_gap: default_horizontal_gap(),
            compact_gap: default_compact_gap(),
            compact_threshold: default_compact_threshold(),
            row_gap: default_row_gap(),
            margin: default_margin(),
        }
    }
}

impl LayoutConfig {
    /// Smaller cards and gaps, for phones and thumbnails
    pub fn compact() -> Self {
        Self {
            node_width: 120.0,
            node_height: 60.0,
            horizontal_gap: 24.0,
            compact_gap: 8.0,
            compact_threshold: 4,
            row_gap: 120.0,
            margin: 16.0,
        }
    }

    /// Larger cards and gaps, for print and export
    pub fn spacious() -> Self {
        Self {
            node_width: 200.0,
            node_height: 100.0,
            horizontal_gap: 72.0,
            compact_gap: 32.0,
            compact_threshold: 6,
            row_gap: 240.0,
            margin: 64.0,
        }
    }

    /// Horizontal gap for a row with `members` cards
    pub fn gap_for(&self, members: usize) -> f64 {
        if members > self.compact_threshold {
            self.compact_gap
        } else {
            self.horizontal_gap
        }
    }

    /// Width taken by a row of `members` cards
    pub fn row_width(&self, members: usize) -> f64 {
        if members == 0 {
            return 0.0;
        }
        members as f64 * self.node_width + (members - 1) as f64 * self.gap_for(members)
    }

    /// Reject geometry that would overlap cards or rows
    pub fn validate(&self) -> Result<(), EngineError> {
        let positive = [
            ("node_width", self.node_width),
            ("node_height", self.node_height),
            ("row_gap", self.row_gap),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(EngineError::Config(format!("{} must be positive, got {}", name, value)));
            }
        }

        let non_negative = [
            ("horizontal_gap", self.horizontal_gap),
            ("compact_gap", self.compact_gap),
            ("margin", self.margin),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(EngineError::Config(format!("{} must not be negative, got {}", name, value)));
            }
        }

        if self.row_gap <= self.node_height {
            return Err(EngineError::Config(format!(
                "row_gap ({}) must exceed node_height ({})",
                self.row_gap, self.node_height
            )));
        }
        Ok(())
    }
}

/// Configuration for the engine facade
///
/// Can be loaded from TOML:
///
/// ```toml
/// default_locale = "zh"
///
/// [layout]
/// node_width = 140
/// compact_threshold = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Locale used when a call does not name one
    /// Default: English
    #[serde(default)]
    pub default_locale: Locale,

    /// Pedigree chart geometry
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl EngineConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = toml::from_str(contents)?;
        config.layout.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.node_width, 160.0);
        assert_eq!(config.compact_threshold, 4);
        assert!(config.compact_gap < config.horizontal_gap);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(LayoutConfig::compact().validate().is_ok());
        assert!(LayoutConfig::spacious().validate().is_ok());
        assert!(LayoutConfig::compact().node_width < LayoutConfig::spacious().node_width);
    }

    #[test]
    fn test_dense_rows_use_compact_gap() {
        let config = LayoutConfig::default();
        assert_eq!(config.gap_for(4), config.horizontal_gap);
        assert_eq!(config.gap_for(5), config.compact_gap);
        assert_eq!(config.row_width(0), 0.0);
        assert_eq!(config.row_width(1), 160.0);
        assert_eq!(config.row_width(3), 3.0 * 160.0 + 2.0 * 48.0);
        assert_eq!(config.row_width(5), 5.0 * 160.0 + 4.0 * 16.0);
    }

    #[test]
    fn test_invalid_geometry_rejected() {
        let mut config = LayoutConfig::default();
        config.row_gap = 50.0;
        assert!(config.validate().is_err());

        let mut config = LayoutConfig::default();
        config.node_width = -1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_with_partial_layout() {
        let config = EngineConfig::from_toml_str(
            r#"
            default_locale = "zh"

            [layout]
            node_width = 140
            compact_threshold = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.default_locale, Locale::Zh);
        assert_eq!(config.layout.node_width, 140.0);
        assert_eq!(config.layout.compact_threshold, 5);
        assert_eq!(config.layout.row_gap, 180.0);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = EngineConfig::from_toml_str("default_locale = \"fr\"").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        let err = EngineConfig::from_toml_str("[layout]\nrow_gap = 10").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = EngineConfig {
            default_locale: Locale::Es,
            layout: LayoutConfig::spacious(),
        };
        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}
