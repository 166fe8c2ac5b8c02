//! Local collaborators used by the command-line tool: a JSON file as the data
//! source, the mounted disk as the storage check and the output directory as
//! the artifact sink.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sysinfo::Disks;
use tracing::{debug, warn};

use super::collaborators::{DataSource, FetchRequest, FileRenderer, StorageChecker};
use crate::error::{ReportError, Result};
use crate::model::{AnalyticsBundle, CategoryRecord};

/// Serves categories from a JSON document shaped like [`AnalyticsBundle`].
#[derive(Debug, Clone, Default)]
pub struct JsonFileDataSource {
    bundle: AnalyticsBundle,
}

impl JsonFileDataSource {
    /// Read and parse the file once.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid bundle.
    pub async fn load(path: &Path) -> Result<Self> {
        let content =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ReportError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;
        let source = Self::from_json(&content)?;
        debug!(
            path = %path.display(),
            categories = source.bundle.populated().len(),
            "Loaded analytics data"
        );
        Ok(source)
    }

    /// # Errors
    /// Returns an error if `json` is not a valid bundle.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_bundle(serde_json::from_str(json)?))
    }

    #[must_use]
    pub const fn from_bundle(bundle: AnalyticsBundle) -> Self {
        Self { bundle }
    }

    #[must_use]
    pub const fn bundle(&self) -> &AnalyticsBundle {
        &self.bundle
    }
}

#[async_trait]
impl DataSource for JsonFileDataSource {
    async fn fetch(&self, request: FetchRequest) -> Result<Option<CategoryRecord>> {
        Ok(self.bundle.record(request.category))
    }
}

/// Checks free space on the disk that holds the output directory.
#[derive(Debug, Clone)]
pub struct DiskSpaceChecker {
    output_dir: PathBuf,
}

impl DiskSpaceChecker {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Available bytes on the disk holding the output directory, if known.
    #[must_use]
    pub fn available_space(&self) -> Option<u64> {
        let target = existing_ancestor(&self.output_dir)?;
        let disks = Disks::new_with_refreshed_list();
        available_on(
            &target,
            disks
                .list()
                .iter()
                .map(|disk| (disk.mount_point(), disk.available_space())),
        )
    }
}

impl StorageChecker for DiskSpaceChecker {
    fn has_free_space(&self, bytes: u64) -> bool {
        match self.available_space() {
            Some(available) => {
                debug!(available, required = bytes, "Checked free space");
                available >= bytes
            }
            None => {
                warn!(
                    dir = %self.output_dir.display(),
                    "Could not determine free space, continuing"
                );
                true
            }
        }
    }
}

/// Canonical form of the nearest existing ancestor of `path` (itself included).
fn existing_ancestor(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .find(|p| p.exists())
        .or_else(|| Some(Path::new(".")))
        .and_then(|p| dunce::canonicalize(p).ok())
}

/// Available space of the mount with the longest mount point containing `target`.
pub(crate) fn available_on<'a>(
    target: &Path,
    mounts: impl IntoIterator<Item = (&'a Path, u64)>,
) -> Option<u64> {
    mounts
        .into_iter()
        .filter(|(mount, _)| target.starts_with(mount))
        .max_by_key(|(mount, _)| mount.components().count())
        .map(|(_, available)| available)
}

/// Writes documents as `.html` files into an output directory.
#[derive(Debug, Clone)]
pub struct HtmlFileRenderer {
    output_dir: PathBuf,
}

impl HtmlFileRenderer {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl FileRenderer for HtmlFileRenderer {
    fn extension(&self) -> &str {
        "html"
    }

    async fn render(&self, document: &str, file_name: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| ReportError::FileAccess {
                path: self.output_dir.clone(),
                source,
            })?;

        let path = self.output_dir.join(file_name);
        tokio::fs::write(&path, document)
            .await
            .map_err(|source| ReportError::FileAccess {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), bytes = document.len(), "Report written");
        Ok(path)
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod tests;
