use std::sync::Mutex;

use paccheck_core::{MarkerStore, Result};

/// In-process marker store used by tests. Mirrors the file backend's
/// create-on-first-use reporting.
#[derive(Default)]
pub struct MemoryMarkerStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    marker: String,
    initialized: bool,
}

impl MemoryMarkerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that starts out as if a previous run already saved `marker`.
    pub fn with_marker(marker: &str) -> Self {
        Self {
            inner: Mutex::new(Inner {
                marker: marker.to_string(),
                initialized: true,
            }),
        }
    }
}

impl MarkerStore for MemoryMarkerStore {
    fn ensure_exists(&self) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        if inner.initialized {
            Ok(false)
        } else {
            inner.initialized = true;
            Ok(true)
        }
    }

    fn read(&self) -> Result<String> {
        Ok(self.inner.lock().unwrap().marker.clone())
    }

    fn write(&self, marker: &str) -> Result<()> {
        self.inner.lock().unwrap().marker = marker.to_string();
        Ok(())
    }
}
