//! Kernel error types.

use thiserror::Error;

/// Result type for kernel operations.
pub type VfsResult<T> = Result<T, VfsError>;

/// Kernel operation errors.
///
/// Every failure the core can produce is one of these variants. Command
/// errors are recovered at the command boundary and returned to the driver
/// as values; import-time per-entry errors are recovered at the entry
/// boundary and logged. Nothing here ever propagates out of the core as a
/// panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VfsError {
    /// The import source path does not exist.
    #[error("source path not found: {0}")]
    SourceNotFound(String),

    /// The import source path exists but is not a directory.
    #[error("source path is not a directory: {0}")]
    SourceNotADirectory(String),

    /// A path segment did not resolve. Carries the unresolved segment.
    #[error("no such file or directory: {0}")]
    PathNotFound(String),

    /// A directory was required but a file was found.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// A file was required but a directory was found.
    #[error("not a file: {0}")]
    NotAFile(String),

    /// Refusing to remove a non-empty directory without `-r`.
    #[error("is a directory, use -r to remove recursively: {0}")]
    DirectoryNotEmpty(String),

    /// File content is not valid UTF-8 text.
    #[error("not a text file: {0}")]
    NotText(String),

    /// A sibling with this name already exists under the parent.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// The dispatcher does not know this command name.
    #[error("command not found: {0}")]
    UnknownCommand(String),

    /// Wrong argument count or shape for a command.
    #[error("{0}")]
    Usage(String),
}
