//! Content factory for loading matrix data from a data directory.

use std::path::{Path, PathBuf};

use matrix_core::{CollectibleItem, MatrixConfig, SocketGrid};

use crate::loaders::{
    ConfigLoader, FilterLoader, FilterPresets, GridLoader, InventoryLoader, LoadResult,
};

/// Content factory that loads all matrix content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── inventory.ron
/// ├── filters.ron
/// └── grids/
///     ├── starter.ron
///     └── eco_pairs.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load matrix configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<MatrixConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load inventory slots from `inventory.ron`.
    pub fn load_inventory(&self) -> LoadResult<Vec<Option<CollectibleItem>>> {
        InventoryLoader::load(&self.data_dir.join("inventory.ron"))
    }

    /// Load filter presets from `filters.ron`.
    pub fn load_filters(&self) -> LoadResult<FilterPresets> {
        FilterLoader::load(&self.data_dir.join("filters.ron"))
    }

    /// Load a grid from `grids/{grid_name}.ron`.
    pub fn load_grid(&self, grid_name: &str) -> LoadResult<SocketGrid> {
        let path = self.data_dir.join("grids").join(format!("{}.ron", grid_name));
        GridLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The bundled sample data must always load.
    fn bundled() -> ContentFactory {
        ContentFactory::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_bundled_content_loads() {
        let factory = bundled();
        let config = factory.load_config().expect("config.toml");
        let inventory = factory.load_inventory().expect("inventory.ron");
        let filters = factory.load_filters().expect("filters.ron");

        assert_eq!(config.protected_slots, MatrixConfig::DEFAULT_PROTECTED_SLOTS);
        assert!(inventory.len() > config.protected_slots);
        assert!(!filters.is_empty());
        for name in ["starter", "eco_pairs"] {
            let grid = factory.load_grid(name).expect("bundled grid");
            assert!(!grid.is_empty(), "{name}");
        }
    }

    #[test]
    fn test_missing_grid_names_the_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = ContentFactory::new(dir.path()).load_grid("nowhere").unwrap_err();
        assert!(err.to_string().contains("nowhere.ron"), "{err}");
    }
}
