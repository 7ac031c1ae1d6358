/// Command-line demo driver
pub mod cli;
/// Constants and generator configuration
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Stderr logging backend
pub mod logging;
/// Tick progress display
pub mod progress;
/// Rule presets and rule files
pub mod ruleset;
/// Text renderings for debugging
pub mod visualization;
