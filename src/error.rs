//! Error types for findfiles

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised during a walk.
///
/// Filesystem access failures abort the run; there is no partial-result
/// recovery.
#[derive(Debug, Error)]
pub enum WalkError {
    /// A directory could not be opened or read.
    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
