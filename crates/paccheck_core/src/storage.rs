use crate::Result;

/// Persistence seam for the acknowledgment marker: the raw body of the
/// last article the user acknowledged, stored as a single record.
pub trait MarkerStore: Send + Sync {
    /// Create the backing record if missing, reporting whether it was
    /// freshly created
    fn ensure_exists(&self) -> Result<bool>;

    /// Full contents of the record
    fn read(&self) -> Result<String>;

    /// Overwrite the whole record with a new article body
    fn write(&self, marker: &str) -> Result<()>;
}
