//! Settings for building a store from a workspace.
/// Settings file loader
mod loader;
/// Configuration types and validation
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use types::{
    ConfigError,
    LingoSettings,
    ValidationError,
};
