// ============================================================================
// Display Configuration
// How containers render as text
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest number of fractional digits that still means something for f64.
pub const MAX_PRECISION: usize = 17;

// ============================================================================
// Display Mode
// ============================================================================

/// Whether the rendered value carries a label prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayMode {
    /// `value:(1, 2, 3)`
    #[default]
    Visual,

    /// `(1, 2, 3)`
    Value,
}

// ============================================================================
// Display Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Labelled or bare rendering
    pub mode: DisplayMode,

    /// Label written before the value in visual mode
    pub label: String,

    /// Optional: fixed number of fractional digits for float elements
    /// None renders floats in shortest round-trip form
    pub precision: Option<usize>,
}

impl DisplayConfig {
    pub fn new(mode: DisplayMode) -> Self {
        Self {
            mode,
            label: "value".to_string(),
            precision: None,
        }
    }

    /// Builder method: Set the display mode
    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Builder method: Set the visual-mode label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Builder method: Set float precision
    pub fn with_precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(digits) = self.precision {
            if digits > MAX_PRECISION {
                return Err(format!(
                    "Precision must not exceed {} digits, got {}",
                    MAX_PRECISION, digits
                ));
            }
        }

        if self.mode == DisplayMode::Visual && self.label.is_empty() {
            return Err("Label cannot be empty in visual mode".to_string());
        }

        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::visual()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl DisplayConfig {
    /// `value:` prefixed rendering
    pub fn visual() -> Self {
        Self::new(DisplayMode::Visual)
    }

    /// Bare value rendering
    pub fn value_only() -> Self {
        Self::new(DisplayMode::Value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = DisplayConfig::default();
        assert_eq!(config.mode, DisplayMode::Visual);
        assert_eq!(config.label, "value");
        assert_eq!(config.precision, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DisplayConfig::visual()
            .with_mode(DisplayMode::Value)
            .with_precision(3)
            .with_label("x");

        assert_eq!(config.mode, DisplayMode::Value);
        assert_eq!(config.precision, Some(3));
        assert_eq!(config.label, "x");
    }

    #[test]
    fn test_validation() {
        assert!(DisplayConfig::visual().with_precision(17).validate().is_ok());
        assert!(DisplayConfig::visual().with_precision(18).validate().is_err());
        assert!(DisplayConfig::visual().with_label("").validate().is_err());
        assert!(DisplayConfig::value_only().with_label("").validate().is_ok());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = DisplayConfig::value_only().with_precision(2);
        let json = serde_json::to_string(&config).unwrap();
        let back: DisplayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
