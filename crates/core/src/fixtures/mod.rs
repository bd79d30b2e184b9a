//! Fixtures

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::catalog::CatalogError;

pub mod prices;
pub mod store;

pub use store::StoreData;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices in the set
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Catalog assembly error
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Locates fixture sets on disk.
///
/// A set named `demo` lives at `<base>/store/demo.yml`.
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Fixture {
    /// Create a fixture loader rooted at `./fixtures`
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a fixture loader with a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path of the store file for set `name`.
    pub fn store_path(&self, name: &str) -> PathBuf {
        self.base_path.join("store").join(format!("{name}.yml"))
    }

    /// Load and parse store set `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the data
    /// is inconsistent.
    pub fn load_store(&self, name: &str) -> Result<StoreData, FixtureError> {
        let contents = fs::read_to_string(self.store_path(name))?;

        StoreData::from_yaml(&contents)
    }

    /// Load store set `name` from `./fixtures`.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture cannot be loaded.
    pub fn from_set(name: &str) -> Result<StoreData, FixtureError> {
        Self::new().load_store(name)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use testresult::TestResult;

    use super::*;

    #[test]
    fn store_path_joins_kind_and_name() {
        let fixture = Fixture::with_base_path("/data");

        assert_eq!(fixture.store_path("demo"), Path::new("/data/store/demo.yml"));
    }

    #[test]
    fn missing_set_is_an_io_error() {
        let fixture = Fixture::with_base_path("/nonexistent");

        assert!(matches!(
            fixture.load_store("demo"),
            Err(FixtureError::Io(_))
        ));
    }

    #[test]
    fn loads_set_from_disk() -> TestResult {
        let dir = tempfile::tempdir()?;
        let store_dir = dir.path().join("store");

        fs::create_dir_all(&store_dir)?;
        fs::write(
            store_dir.join("tiny.yml"),
            "settings:\n  name: Tiny\n  delivery_fee: \"1.00 GBP\"\n",
        )?;

        let store = Fixture::with_base_path(dir.path()).load_store("tiny")?;

        assert_eq!(store.settings.name, "Tiny");
        assert!(store.catalog.is_empty());

        Ok(())
    }
}
