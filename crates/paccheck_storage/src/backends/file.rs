use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use paccheck_core::{Error, MarkerStore, Result};

/// Marker persisted as one file under the user's config directory.
///
/// The file holds the raw body of the last acknowledged article, or is
/// empty when nothing was ever acknowledged. It is written whole-file in
/// a single call and never deleted here.
pub struct FileMarkerStore {
    path: PathBuf,
}

impl FileMarkerStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store rooted at the default config location.
    pub fn at_default_path() -> Self {
        Self::new(default_marker_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MarkerStore for FileMarkerStore {
    fn ensure_exists(&self) -> Result<bool> {
        let dir = self.path.parent().ok_or_else(|| {
            Error::Storage(format!(
                "marker path has no parent directory: {}",
                self.path.display()
            ))
        })?;
        // A present directory implies a readable marker file; only the
        // very first run creates anything.
        if !dir.exists() {
            fs::create_dir_all(dir)?;
            fs::File::create(&self.path)?;
            tracing::info!(path = %self.path.display(), "created empty marker file");
            return Ok(true);
        }
        Ok(false)
    }

    fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    fn write(&self, marker: &str) -> Result<()> {
        Ok(fs::write(&self.path, marker)?)
    }
}

/// Resolves the marker location, honoring `XDG_CONFIG_HOME` when it is
/// set and non-empty and falling back to `$HOME/.config` otherwise.
pub fn default_marker_path() -> PathBuf {
    let config_home = match env::var("XDG_CONFIG_HOME") {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(env::var("HOME").unwrap_or_default()).join(".config"),
    };
    config_home.join(".paccheck").join("news")
}
