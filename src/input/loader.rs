//! Catalog sources.

use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};
use ignore::WalkBuilder;

use super::catalog::load_catalog_file;
use super::{
    Catalog,
    LoadError,
};
use crate::types::Locale;

/// Source of per-locale catalogs.
///
/// Implementations enumerate which locales exist and produce one flat catalog
/// per locale. The order returned by [`CatalogLoader::locales`] is the load
/// order used to break ties during negotiation.
pub trait CatalogLoader {
    /// Locales this source provides, in load order.
    ///
    /// # Errors
    /// Returns error if the source cannot be enumerated.
    fn locales(&self) -> Result<Vec<Locale>, LoadError>;

    /// Builds the catalog for `locale`.
    ///
    /// # Errors
    /// Returns error if the catalog is missing, unreadable or malformed.
    fn load(&self, locale: &Locale) -> Result<Catalog, LoadError>;

    /// Human-readable description of the source, used in error messages.
    fn origin(&self) -> String;
}

/// Catalog file or locale directory found directly under the root.
#[derive(Debug, Clone)]
struct RootEntry {
    /// Locale derived from the file stem or directory name.
    locale: Locale,
    /// Path of the file or directory.
    path: PathBuf,
    /// Whether `path` is a locale directory.
    is_dir: bool,
}

/// Loads JSON catalogs from a root directory.
///
/// Each `<locale>.json` file directly under the root is one catalog, and each
/// `<locale>/` directory is one catalog assembled from every file inside it
/// matching the file pattern. Directories with no matching file are ignored.
/// Nested objects are flattened with the key separator.
#[derive(Debug, Clone)]
pub struct JsonDirectoryLoader {
    /// Root directory holding one entry per locale.
    root: PathBuf,
    /// Separator used when flattening nested keys.
    separator: String,
    /// Pattern selecting catalog files inside locale directories.
    file_pattern: String,
    /// Compiled `file_pattern`.
    file_set: GlobSet,
}

impl JsonDirectoryLoader {
    /// Default pattern for files inside a locale directory.
    pub const DEFAULT_FILE_PATTERN: &'static str = "**/*.json";

    /// Creates a loader with the default `.` separator and file pattern.
    ///
    /// # Errors
    /// Never fails for the built-in pattern; the `Result` mirrors [`Self::with_options`].
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, LoadError> {
        Self::with_options(root, ".", Self::DEFAULT_FILE_PATTERN)
    }

    /// Creates a loader with an explicit key separator and file pattern.
    ///
    /// # Errors
    /// Returns error if `file_pattern` is not a valid glob.
    pub fn with_options(
        root: impl Into<PathBuf>,
        separator: impl Into<String>,
        file_pattern: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let file_pattern = file_pattern.into();
        let glob = Glob::new(&file_pattern).map_err(|source| LoadError::InvalidPattern {
            pattern: file_pattern.clone(),
            source,
        })?;
        let file_set = GlobSetBuilder::new().add(glob).build().map_err(|source| {
            LoadError::InvalidPattern { pattern: file_pattern.clone(), source }
        })?;

        Ok(Self { root: root.into(), separator: separator.into(), file_pattern, file_set })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    #[must_use]
    pub fn file_pattern(&self) -> &str {
        &self.file_pattern
    }

    /// Lists locale files and directories under the root, sorted by locale then path.
    fn root_entries(&self) -> Result<Vec<RootEntry>, LoadError> {
        let io_err = |source| LoadError::Io { path: self.root.clone(), source };
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(&self.root).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let path = entry.path();
            let file_name = entry.file_name().to_string_lossy().to_string();
            if file_name.starts_with('.') {
                continue;
            }

            let file_type = entry
                .file_type()
                .map_err(|source| LoadError::Io { path: path.clone(), source })?;

            if file_type.is_dir() {
                entries.push(RootEntry { locale: Locale::new(&file_name), path, is_dir: true });
            } else if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                let locale = Locale::new(&stem.to_string_lossy());
                entries.push(RootEntry { locale, path, is_dir: false });
            }
        }

        // Files sort before directories of the same locale.
        entries.sort_by(|a, b| {
            a.locale
                .key()
                .cmp(b.locale.key())
                .then(a.is_dir.cmp(&b.is_dir))
                .then_with(|| a.path.cmp(&b.path))
        });
        Ok(entries)
    }

    /// Finds catalog files inside a locale directory, sorted by path.
    fn find_catalog_files(&self, dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        let mut found_files = Vec::new();

        for result in WalkBuilder::new(dir)
            .hidden(true)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .follow_links(true)
            .build()
        {
            let entry = result?;

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let path = entry.path();
            let Ok(relative_path) = path.strip_prefix(dir) else {
                continue;
            };
            if !self.file_set.is_match(relative_path) {
                continue;
            }

            found_files.push(path.to_path_buf());
        }

        found_files.sort();
        Ok(found_files)
    }
}

impl CatalogLoader for JsonDirectoryLoader {
    fn locales(&self) -> Result<Vec<Locale>, LoadError> {
        let mut locales = Vec::new();
        for entry in self.root_entries()? {
            if entry.is_dir && self.find_catalog_files(&entry.path)?.is_empty() {
                tracing::debug!(
                    path = %entry.path.display(),
                    "Skipping directory without catalog files"
                );
                continue;
            }
            locales.push(entry.locale);
        }
        locales.dedup();
        Ok(locales)
    }

    fn load(&self, locale: &Locale) -> Result<Catalog, LoadError> {
        let mut files = Vec::new();
        for entry in self.root_entries()?.into_iter().filter(|entry| &entry.locale == locale) {
            if entry.is_dir {
                files.extend(self.find_catalog_files(&entry.path)?);
            } else {
                files.push(entry.path);
            }
        }

        if files.is_empty() {
            return Err(LoadError::UnknownLocale { locale: locale.to_string() });
        }

        let mut catalog = Catalog::new();
        for file in &files {
            let overwritten = catalog.merge(load_catalog_file(file, &self.separator)?);
            for key in overwritten {
                tracing::warn!(
                    %locale,
                    path = %file.display(),
                    key = key.as_str(),
                    "Catalog key defined twice"
                );
            }
        }

        tracing::debug!(%locale, files = files.len(), keys = catalog.len(), "Loaded locale catalog");
        Ok(catalog)
    }

    fn origin(&self) -> String {
        self.root.display().to_string()
    }
}

/// Catalogs held in memory, in insertion order.
///
/// Useful for tests and for callers that embed their messages in the binary.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    /// Registered catalogs.
    catalogs: Vec<(Locale, Catalog)>,
}

impl MemoryLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog, replacing any earlier catalog for the same locale.
    #[must_use]
    pub fn with_catalog(mut self, locale: impl Into<Locale>, catalog: Catalog) -> Self {
        self.insert(locale, catalog);
        self
    }

    /// Adds a catalog, replacing any earlier catalog for the same locale.
    pub fn insert(&mut self, locale: impl Into<Locale>, catalog: Catalog) {
        let locale = locale.into();
        if let Some(slot) = self.catalogs.iter_mut().find(|(l, _)| *l == locale) {
            slot.1 = catalog;
        } else {
            self.catalogs.push((locale, catalog));
        }
    }
}

impl CatalogLoader for MemoryLoader {
    fn locales(&self) -> Result<Vec<Locale>, LoadError> {
        Ok(self.catalogs.iter().map(|(locale, _)| locale.clone()).collect())
    }

    fn load(&self, locale: &Locale) -> Result<Catalog, LoadError> {
        self.catalogs
            .iter()
            .find(|(l, _)| l == locale)
            .map(|(_, catalog)| catalog.clone())
            .ok_or_else(|| LoadError::UnknownLocale { locale: locale.to_string() })
    }

    fn origin(&self) -> String {
        "in-memory catalogs".to_string()
    }
}
