//! Repository layer for dynamic game data.
//!
//! Repositories handle data that CHANGES during gameplay: saved game states.
//! The JSON schema lives in [`snapshot`]; [`file`] and [`memory`] provide the
//! storage backends behind the [`StateRepository`] trait.

mod error;
pub mod file;
pub mod memory;
pub mod snapshot;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileStateRepository, load_from_path, save_to_path};
pub use memory::InMemoryStateRepo;
pub use snapshot::{SaveFile, decode_state, encode_state};
pub use traits::StateRepository;
