// ============================================================================
// Configuration Module
// Rendering configuration for numeric containers
// ============================================================================

pub mod display;

pub use display::{DisplayConfig, DisplayMode};
