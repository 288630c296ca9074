//! Message catalog definitions

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use super::LoadError;

/// Flat, immutable mapping from dotted key to message template for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Flattened message map (e.g., "menu.products.self" -> "Products").
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a nested JSON object, joining nested keys with `separator`.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use lingo::input::Catalog;
    ///
    /// let catalog = Catalog::from_json(&json!({
    ///     "menu": { "products": { "self": "Products" } }
    /// }), ".");
    ///
    /// assert_eq!(catalog.get("menu.products.self"), Some("Products"));
    /// ```
    #[must_use]
    pub fn from_json(json: &Value, separator: &str) -> Self {
        Self { entries: flatten_json(json, separator, None) }
    }

    /// Returns the template for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds every entry of `other`, returning the keys that were overwritten.
    pub(crate) fn merge(&mut self, other: Self) -> Vec<String> {
        let mut overwritten = Vec::new();
        for (key, template) in other.entries {
            if self.entries.contains_key(&key) {
                overwritten.push(key.clone());
            }
            self.entries.insert(key, template);
        }
        overwritten
    }
}

impl<K, V> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

/// Flatten nested JSON object into dot-separated key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use lingo::input::flatten_json;
///
/// let json = json!({
///     "error": {
///         "404": "Page %s not found!",
///         "500": "Something is wrong on our side, please try again."
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("error.404"), Some(&"Page %s not found!".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker for [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// Parse catalog text read from `path`.
///
/// # Errors
/// Returns error if the text is not JSON or not a JSON object.
pub fn parse_catalog(content: &str, path: &Path, separator: &str) -> Result<Catalog, LoadError> {
    let json: Value = serde_json::from_str(content)
        .map_err(|source| LoadError::Parse { path: path.to_path_buf(), source })?;

    if !json.is_object() {
        return Err(LoadError::NotAnObject { path: path.to_path_buf() });
    }

    Ok(Catalog::from_json(&json, separator))
}

/// Load a single catalog file.
///
/// # Errors
/// Returns error if file read or JSON parse fails.
pub fn load_catalog_file(file_path: &Path, separator: &str) -> Result<Catalog, LoadError> {
    let content = std::fs::read_to_string(file_path)
        .map_err(|source| LoadError::Io { path: file_path.to_path_buf(), source })?;

    let catalog = parse_catalog(&content, file_path, separator)?;
    tracing::debug!(path = %file_path.display(), keys = catalog.len(), "Loaded catalog file");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;

    #[googletest::test]
    fn test_flatten_json_nested() {
        let json = json!({
            "menu": {
                "products": { "self": "Products" },
                "about": "About"
            },
            "home": { "title": "Welcome to CutleryPlus!" }
        });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("menu.products.self"), some(eq(&"Products".to_string())));
        expect_that!(result.get("menu.about"), some(eq(&"About".to_string())));
        expect_that!(result.get("home.title"), some(eq(&"Welcome to CutleryPlus!".to_string())));
        expect_that!(result.len(), eq(3));
    }

    #[googletest::test]
    fn test_flatten_json_custom_separator() {
        let json = json!({ "error": { "404": "Not found" } });

        let result = flatten_json(&json, "/", None);

        expect_that!(result.get("error/404"), some(eq(&"Not found".to_string())));
    }

    #[googletest::test]
    fn test_flatten_json_non_string_and_arrays() {
        let json = json!({
            "count": 42,
            "enabled": true,
            "steps": ["one", "two"]
        });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("count"), some(eq(&"42".to_string())));
        expect_that!(result.get("enabled"), some(eq(&"true".to_string())));
        expect_that!(result.get("steps[0]"), some(eq(&"one".to_string())));
        expect_that!(result.get("steps[1]"), some(eq(&"two".to_string())));
    }

    #[googletest::test]
    fn test_parse_catalog_rejects_non_object() {
        let result = parse_catalog(r#"["a", "b"]"#, Path::new("en_US.json"), ".");

        expect_that!(matches!(result, Err(LoadError::NotAnObject { .. })), eq(true));
    }

    #[googletest::test]
    fn test_parse_catalog_rejects_invalid_json() {
        let result = parse_catalog("{ not json", Path::new("en_US.json"), ".");

        expect_that!(matches!(result, Err(LoadError::Parse { .. })), eq(true));
    }

    #[googletest::test]
    fn test_merge_reports_overwritten_keys() {
        let mut base: Catalog = [("a", "1"), ("b", "2")].into_iter().collect();
        let other: Catalog = [("b", "3"), ("c", "4")].into_iter().collect();

        let overwritten = base.merge(other);

        expect_that!(overwritten, elements_are![eq("b")]);
        expect_that!(base.get("b"), some(eq("3")));
        expect_that!(base.len(), eq(3));
    }

    #[googletest::test]
    fn test_load_catalog_file_missing() {
        let result = load_catalog_file(Path::new("/nonexistent/en_US.json"), ".");

        expect_that!(matches!(result, Err(LoadError::Io { .. })), eq(true));
    }
}
