//! Size source reading an offline JSON catalogue
//!
//! The file holds the same JSON array the size API returns.

use std::path::{Path, PathBuf};

use log::debug;

use skipsize_domain::model::{Location, SizeRecord};
use skipsize_domain::repository::SkipSizeSource;
use skipsize_types::{Error, Result};

/// File-based size catalogue
pub struct FileSkipSizeSource {
    path: PathBuf,
}

impl FileSkipSizeSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SkipSizeSource for FileSkipSizeSource {
    /// Returns the records matching the postcode; area is not compared since
    /// the API itself leaves it blank on many records.
    fn fetch_sizes(&self, location: &Location) -> Result<Vec<SizeRecord>> {
        if !self.path.exists() {
            return Err(Error::FileNotFound(self.path.display().to_string()));
        }
        let content = std::fs::read_to_string(&self.path)?;
        let sizes: Vec<SizeRecord> = serde_json::from_str(&content)?;
        let total = sizes.len();
        let sizes: Vec<SizeRecord> = sizes
            .into_iter()
            .filter(|r| r.postcode.eq_ignore_ascii_case(&location.postcode))
            .collect();
        debug!(
            "Loaded {}/{} sizes for {} from {}",
            sizes.len(),
            total,
            location,
            self.path.display()
        );
        Ok(sizes)
    }
}
