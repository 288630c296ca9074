//! Loaded catalogs and view construction.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};
use std::sync::Arc;

use crate::config::LingoSettings;
use crate::input::{
    Catalog,
    CatalogLoader,
    JsonDirectoryLoader,
    LoadError,
};
use crate::negotiate::LocaleNegotiator;
use crate::request::{
    ACCEPT_LANGUAGE,
    HeaderSource,
};
use crate::types::Locale;
use crate::view::TranslationView;

/// Every loaded catalog plus the default locale they fall back to.
///
/// Built once at startup and read-only afterwards; share it by reference or
/// behind an `Arc`. The default locale always has a catalog.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    /// Catalog per loaded locale.
    catalogs: HashMap<Locale, Arc<Catalog>>,
    /// Locale used for fallback and for the `*` wildcard.
    default_locale: Locale,
    /// Catalog of `default_locale`.
    default_catalog: Arc<Catalog>,
    /// Primary catalog for views of locales that are not loaded.
    empty: Arc<Catalog>,
    /// Matches preference headers against the loaded locales in load order.
    negotiator: LocaleNegotiator,
}

impl TranslationStore {
    /// Loads every catalog under `catalog_dir`, or from `loader_override` if given.
    ///
    /// # Errors
    /// Returns error if any catalog fails to load or the default locale has none.
    pub fn new(
        default_locale: impl Into<Locale>,
        catalog_dir: impl AsRef<Path>,
        loader_override: Option<&dyn CatalogLoader>,
    ) -> Result<Self, LoadError> {
        if let Some(loader) = loader_override {
            return Self::with_loader(default_locale, loader);
        }

        let loader = JsonDirectoryLoader::new(catalog_dir.as_ref())?;
        Self::with_loader(default_locale, &loader)
    }

    /// Builds a store from the catalog directory and options in `settings`.
    ///
    /// A relative `catalogDir` is resolved against `workspace_root`.
    ///
    /// # Errors
    /// Returns error if the file pattern is invalid or loading fails.
    pub fn from_settings(
        settings: &LingoSettings,
        workspace_root: Option<&Path>,
    ) -> Result<Self, LoadError> {
        let catalog_dir = workspace_root.map_or_else(
            || PathBuf::from(&settings.catalog_dir),
            |root| root.join(&settings.catalog_dir),
        );
        let loader = JsonDirectoryLoader::with_options(
            catalog_dir,
            settings.key_separator.as_str(),
            settings.file_pattern.as_str(),
        )?;

        Self::with_loader(settings.default_locale.as_str(), &loader)
    }

    /// Loads every locale `loader` provides.
    ///
    /// # Errors
    /// Returns error if any catalog fails to load or the default locale has none.
    pub fn with_loader(
        default_locale: impl Into<Locale>,
        loader: &dyn CatalogLoader,
    ) -> Result<Self, LoadError> {
        let default_locale: Locale = default_locale.into();
        let locales = loader.locales()?;

        if !locales.contains(&default_locale) {
            return Err(LoadError::MissingDefault {
                locale: default_locale.to_string(),
                origin: loader.origin(),
            });
        }

        let mut catalogs = HashMap::with_capacity(locales.len());
        let mut load_order = Vec::with_capacity(locales.len());
        for locale in locales {
            if catalogs.contains_key(&locale) {
                continue;
            }
            let catalog = loader.load(&locale)?;
            tracing::debug!(%locale, keys = catalog.len(), "Registered catalog");
            catalogs.insert(locale.clone(), Arc::new(catalog));
            load_order.push(locale);
        }

        let default_catalog = catalogs.get(&default_locale).cloned().ok_or_else(|| {
            LoadError::MissingDefault {
                locale: default_locale.to_string(),
                origin: loader.origin(),
            }
        })?;

        tracing::debug!(
            default = %default_locale,
            locales = load_order.len(),
            origin = %loader.origin(),
            "Translation store ready"
        );

        Ok(Self {
            catalogs,
            negotiator: LocaleNegotiator::new(load_order, default_locale.clone()),
            default_locale,
            default_catalog,
            empty: Arc::new(Catalog::new()),
        })
    }

    #[must_use]
    pub const fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Loaded locales in load order.
    #[must_use]
    pub fn locales(&self) -> &[Locale] {
        self.negotiator.available()
    }

    #[must_use]
    pub fn has_locale(&self, locale: impl Into<Locale>) -> bool {
        let locale: Locale = locale.into();
        self.catalogs.contains_key(&locale)
    }

    /// Catalog of `locale`, if loaded.
    #[must_use]
    pub fn catalog(&self, locale: impl Into<Locale>) -> Option<&Catalog> {
        let locale: Locale = locale.into();
        self.catalogs.get(&locale).map(Arc::as_ref)
    }

    #[must_use]
    pub const fn negotiator(&self) -> &LocaleNegotiator {
        &self.negotiator
    }

    /// View for `locale`. An unknown locale gets a view that only uses the default catalog.
    #[must_use]
    pub fn view_for(&self, locale: impl Into<Locale>) -> TranslationView {
        let locale: Locale = locale.into();
        let primary = self.catalogs.get(&locale).map_or_else(
            || {
                tracing::debug!(%locale, "Locale not loaded, using default catalog only");
                Arc::clone(&self.empty)
            },
            Arc::clone,
        );

        TranslationView::new(locale, primary, Arc::clone(&self.default_catalog))
    }

    /// View for the best locale in a preference header, or the default locale.
    #[must_use]
    pub fn view_for_header(&self, header_value: &str) -> TranslationView {
        let locale = self.negotiator.select(header_value).unwrap_or(&self.default_locale);
        self.view_for(locale)
    }

    /// View for a request's `Accept-Language` header, or the default locale if absent.
    #[must_use]
    pub fn view_for_request<R: HeaderSource + ?Sized>(&self, request: &R) -> TranslationView {
        request.header(ACCEPT_LANGUAGE).map_or_else(
            || self.view_for(&self.default_locale),
            |header_value| self.view_for_header(header_value),
        )
    }
}
