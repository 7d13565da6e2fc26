/// Command-line parsing and single-run orchestration
pub mod cli;
/// Output naming and parameter constants
pub mod configuration;
/// Error types for every failure category
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Progress display while writing tiles
pub mod progress;
