//! Process-wide table cache keyed by source path

use crate::error::Result;
use crate::input::loader::{SkillTable, TableLoader};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Holds the most recently loaded table.
///
/// The table is reloaded only when a different path is requested or after
/// [`TableCache::invalidate`]. Requests for the cached path are served without
/// touching the file system.
pub struct TableCache {
    loader: TableLoader,
    cached: Option<(PathBuf, Arc<SkillTable>)>,
    enable_cache: bool,
    load_count: usize,
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new(TableLoader::default())
    }
}

impl TableCache {
    pub fn new(loader: TableLoader) -> Self {
        Self {
            loader,
            cached: None,
            enable_cache: true,
            load_count: 0,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub fn get_or_load(&mut self, path: &Path) -> Result<Arc<SkillTable>> {
        if self.enable_cache {
            if let Some((cached_path, table)) = &self.cached {
                if cached_path == path {
                    info!("Using cached table for: {}", path.display());
                    return Ok(Arc::clone(table));
                }
            }
        }

        let table = Arc::new(self.loader.load(path)?);
        self.load_count += 1;

        if self.enable_cache {
            self.cached = Some((path.to_path_buf(), Arc::clone(&table)));
        }

        Ok(table)
    }

    pub fn is_cached(&self, path: &Path) -> bool {
        matches!(&self.cached, Some((cached_path, _)) if cached_path == path)
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    /// Number of times a table was actually read from disk.
    pub fn load_count(&self) -> usize {
        self.load_count
    }
}
