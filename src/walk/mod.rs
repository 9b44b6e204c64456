//! Directory walking logic
//!
//! The walker performs a depth-first traversal of one or more search roots,
//! pruning excluded subdirectories before they are read and recording every
//! directory that directly contains the target file name.

mod config;
mod prune;
mod utils;
mod walker;

pub use config::WalkConfig;
pub use prune::PruneSet;
pub use utils::resolve_path;
pub use walker::SearchWalker;
