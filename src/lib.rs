//! lingo
//!
//! Locale-aware message catalogs: per-locale JSON catalogs with fallback to a
//! default locale, `Accept-Language` negotiation against the loaded locales,
//! and printf-style placeholder filling.
//!
//! ```
//! use lingo::{MemoryLoader, TranslationStore};
//!
//! let loader = MemoryLoader::new()
//!     .with_catalog("en_US", [("error.500", "Something went wrong")].into_iter().collect())
//!     .with_catalog("de_DE", [("error.500", "Etwas ist schiefgelaufen")].into_iter().collect());
//! let store = TranslationStore::with_loader("en_US", &loader)?;
//!
//! let view = store.view_for_header("de-at, en-gb;q=0.8, en;q=0.7");
//! assert_eq!(view.locale().as_str(), "de_DE");
//! assert_eq!(view.value("error.500"), "Etwas ist schiefgelaufen");
//! # Ok::<(), lingo::LoadError>(())
//! ```

pub mod config;
pub mod format;
pub mod input;
pub mod negotiate;
pub mod request;
pub mod store;
pub mod types;
pub mod view;

pub use input::{
    Catalog,
    CatalogLoader,
    JsonDirectoryLoader,
    LoadError,
    MemoryLoader,
};
pub use negotiate::{
    LocaleNegotiator,
    PreferenceEntry,
    Quality,
    parse_preferences,
};
pub use request::HeaderSource;
pub use store::TranslationStore;
pub use types::Locale;
pub use view::TranslationView;
