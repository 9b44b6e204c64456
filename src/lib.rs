//! Findfiles - locate every directory containing a file with a given name

pub mod error;
pub mod output;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::WalkError;
pub use output::{dedup_sorted, print_json, print_matches, warn_duplicates};
pub use walk::{PruneSet, SearchWalker, WalkConfig, resolve_path};
