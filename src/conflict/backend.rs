//! Version-control capabilities the engine depends on

use crate::model::UnmergedPath;

/// Error type returned by backend implementations
pub type BackendError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Storage and staging operations consumed by the conflict engine
///
/// Each call is a blocking request/response. The engine never issues a new
/// mutation for a path before the previous one has returned, since all
/// mutating engine entry points take `&mut self`.
pub trait Backend {
    /// Unmerged paths, in the order the backend reports them
    fn list_unmerged(&self) -> Result<Vec<UnmergedPath>, BackendError>;

    /// Current working-tree contents of `path`
    fn read_file(&self, path: &str) -> Result<String, BackendError>;

    /// Replace the working-tree contents of `path`
    ///
    /// Implementations should make the write atomic: on failure the previous
    /// contents must still be in place.
    fn write_file(&self, path: &str, contents: &str) -> Result<(), BackendError>;

    /// Mark `path` as resolved (add it to the index)
    fn stage_path(&self, path: &str) -> Result<(), BackendError>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn list_unmerged(&self) -> Result<Vec<UnmergedPath>, BackendError> {
        (**self).list_unmerged()
    }

    fn read_file(&self, path: &str) -> Result<String, BackendError> {
        (**self).read_file(path)
    }

    fn write_file(&self, path: &str, contents: &str) -> Result<(), BackendError> {
        (**self).write_file(path, contents)
    }

    fn stage_path(&self, path: &str) -> Result<(), BackendError> {
        (**self).stage_path(path)
    }
}
