use crate::error::Result;
use crate::properties;
use crate::ui;
use crate::version::SemVer;
use std::fs;
use std::path::{Path, PathBuf};

/// Key under which the version triple is stored in the properties file.
pub const VERSION_KEY: &str = "version";

/// Default version file path, relative to the project root.
pub const DEFAULT_VERSION_FILE: &str = "version.properties";

/// Single source of truth for the project's persisted semantic version.
///
/// Reads are cached for the lifetime of the store (one store per build
/// invocation); the cache advances only on a successful [persist](Self::persist),
/// so it always reflects durable state.
pub struct VersionStore {
    path: PathBuf,
    cached: Option<SemVer>,
}

impl VersionStore {
    /// Create a store backed by the given properties file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionStore {
            path: path.into(),
            cached: None,
        }
    }

    /// Path of the backing properties file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the current version, reading the file at most once.
    ///
    /// A missing file or a present file without a `version` entry reads as
    /// `0.0.0`; the default is cached but the file is only materialized by
    /// the first persist. An unparsable stored value is fatal.
    pub fn current_version(&mut self) -> Result<SemVer> {
        if let Some(version) = self.cached {
            return Ok(version);
        }

        let version = if !self.path.exists() {
            SemVer::ZERO
        } else {
            let content = fs::read_to_string(&self.path)?;
            match properties::parse(&content).get(VERSION_KEY) {
                Some(raw) => SemVer::parse(raw)?,
                None => SemVer::ZERO,
            }
        };

        self.cached = Some(version);
        Ok(version)
    }

    /// Overwrite the properties file with the given version.
    ///
    /// Parent directories are created if absent. The file is replaced in
    /// full via a sibling temp file and rename, so a failed write never
    /// leaves a truncated version file behind. The cache is updated only
    /// after the write has succeeded.
    pub fn persist(&mut self, version: SemVer) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let rendered = properties::render(&[(VERSION_KEY, &version.to_string())]);
        let tmp = self.path.with_extension("properties.tmp");
        fs::write(&tmp, rendered)?;
        fs::rename(&tmp, &self.path)?;

        self.cached = Some(version);
        ui::display_success(&format!("Updated version: {}", version));
        Ok(())
    }
}
