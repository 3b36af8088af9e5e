//! Utility functions for xtask commands

use anyhow::Result;
use std::path::{Path, PathBuf};

use matrix_content::{ContentFactory, GridLoader};
use matrix_core::SocketGrid;

/// Get the content data directory
///
/// Reads `MATRIX_DATA_DIR` (a `.env` file is honored); falls back to the
/// sample data bundled with `matrix-content`.
pub fn data_dir() -> PathBuf {
    std::env::var_os("MATRIX_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("../game/content/data"))
}

/// Load a grid from a file path, or by name from the data directory
pub fn load_grid(grid: &str) -> Result<SocketGrid> {
    let path = Path::new(grid);
    if path.is_file() {
        tracing::debug!(path = %path.display(), "loading grid from file");
        GridLoader::load(path)
    } else {
        let factory = ContentFactory::new(data_dir());
        tracing::debug!(data_dir = %factory.data_dir().display(), grid, "loading named grid");
        factory.load_grid(grid)
    }
}
