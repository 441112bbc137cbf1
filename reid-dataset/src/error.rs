use crate::common::*;

/// Fatal failures while loading a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// A required dataset directory does not exist.
    #[error("'{}' is not available", .path.display())]
    Unavailable { path: PathBuf },
    /// An annotation line could not be parsed.
    #[error("malformed annotation at '{}' line {}: {}", .path.display(), .line, .reason)]
    MalformedAnnotation {
        path: PathBuf,
        /// The 1-based line number.
        line: usize,
        reason: String,
    },
}
