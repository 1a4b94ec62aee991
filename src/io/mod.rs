/// Command-line parsing and sweep orchestration
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Sweep progress display
pub mod progress;
/// Text rendering of the tile map
pub mod render;
