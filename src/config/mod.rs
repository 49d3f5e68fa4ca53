//! Configuration module for tfaffected
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TFAFFECTED_*)
//! 3. Project config (`.tfaffected.toml` at the tree root, or `--config`)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, CONFIG_FILE_NAME};
pub use types::{
    ChangesSection, Config, FilterSection, OutputFormat, OutputSection, ResolverSection,
};
