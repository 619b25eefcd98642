//! CLI argument parsing and processing

pub mod args;
pub mod process;

// Re-exports
pub use args::{Args, LogFormat};
pub use process::{merge_default_options, resolve_metadata_url};
