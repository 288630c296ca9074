use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building catalogs. Fatal to store construction.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The default locale has no catalog in the loader's source
    #[error("No catalog found for default locale '{locale}' in {origin}")]
    MissingDefault { locale: String, origin: String },
    /// A loader was asked for a locale it does not provide
    #[error("No catalog source for locale '{locale}'")]
    UnknownLocale { locale: String },
    /// A catalog file or directory could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A catalog file is not valid JSON
    #[error("Failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A catalog file parsed, but its top-level value is not an object
    #[error("Catalog {} must contain a JSON object at the top level", path.display())]
    NotAnObject { path: PathBuf },
    /// The catalog file pattern is not a valid glob
    #[error("Invalid catalog file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    /// Directory traversal failed
    #[error("Failed to walk catalog directory: {0}")]
    Walk(#[from] ignore::Error),
}
