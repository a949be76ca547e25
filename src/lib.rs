// hhconvert - Hand history converter for hand trackers
//
// This is the library crate containing the conversion pipeline.
// The binary crate (main.rs) provides the command line entry point.

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod services;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use error::ConvertError;
pub use models::{ConverterSettings, RunConfig};
pub use pipeline::run;
pub use services::{HandHistoryTransformer, RunReport};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
