//! File-based repository implementations.

mod state;

pub use state::{FileStateRepository, load_from_path, save_to_path};
