//! Catalog inputs: the flat key/template model and the sources that produce it.

/// Flat key/template catalog and JSON flattening
pub mod catalog;
/// Catalog loading errors
mod error;
/// Catalog sources (JSON directory, in-memory)
pub mod loader;

pub use catalog::{
    Catalog,
    flatten_json,
};
pub use error::LoadError;
pub use loader::{
    CatalogLoader,
    JsonDirectoryLoader,
    MemoryLoader,
};
