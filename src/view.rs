//! Per-locale lookup handle.

use std::fmt::Display;
use std::sync::Arc;

use crate::format::fill_placeholders;
use crate::input::Catalog;
use crate::types::Locale;

/// Resolves keys for one locale, falling back to the default catalog.
///
/// A view only reads immutable catalogs, so it is cheap to clone and safe to
/// share between threads. Lookups never fail: a key missing from both
/// catalogs resolves to the key itself.
#[derive(Debug, Clone)]
pub struct TranslationView {
    /// Locale the view was requested for.
    locale: Locale,
    /// Catalog of `locale`, or an empty one if it is not loaded.
    primary: Arc<Catalog>,
    /// Catalog of the default locale.
    fallback: Arc<Catalog>,
}

impl TranslationView {
    /// Binds a view to its catalogs.
    #[must_use]
    pub const fn new(locale: Locale, primary: Arc<Catalog>, fallback: Arc<Catalog>) -> Self {
        Self { locale, primary, fallback }
    }

    #[must_use]
    pub const fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Raw template for `key` from the primary or fallback catalog.
    #[must_use]
    pub fn template(&self, key: &str) -> Option<&str> {
        self.primary.get(key).or_else(|| self.fallback.get(key))
    }

    /// Whether `key` resolves to a template rather than to itself.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.template(key).is_some()
    }

    /// Text for `key`, or `key` itself when no catalog has it.
    ///
    /// The template is returned verbatim; use [`Self::value_with`] to fill placeholders.
    #[must_use]
    pub fn value(&self, key: &str) -> String {
        self.value_with(key, &[])
    }

    /// Text for `key` with `args` substituted into its placeholders.
    ///
    /// # Examples
    /// ```
    /// use lingo::{MemoryLoader, TranslationStore};
    ///
    /// let loader = MemoryLoader::new()
    ///     .with_catalog("en_US", [("error.404", "Page %s not found!")].into_iter().collect());
    /// let store = TranslationStore::with_loader("en_US", &loader)?;
    ///
    /// let view = store.view_for("de_DE");
    /// assert_eq!(view.value_with("error.404", &[&"idnex.html"]), "Page idnex.html not found!");
    /// assert_eq!(view.value("menu.missing"), "menu.missing");
    /// # Ok::<(), lingo::LoadError>(())
    /// ```
    #[must_use]
    pub fn value_with(&self, key: &str, args: &[&dyn Display]) -> String {
        let Some(template) = self.template(key) else {
            tracing::trace!(locale = %self.locale, key, "Missing translation");
            return key.to_string();
        };

        if args.is_empty() { template.to_string() } else { fill_placeholders(template, args) }
    }
}
