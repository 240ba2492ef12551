//! Runtime layer around the pure game rules.
//!
//! This crate wires the engine from `game-core` to persistence and
//! configuration. Consumers open a [`Session`] to apply actions, and save or
//! restore the world through the repositories.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the facade drivers interact with
//! - [`repository`] provides the JSON schema and storage backends
//! - [`config`] loads runtime settings from the environment
pub mod config;
pub mod error;
pub mod repository;
pub mod session;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use repository::{
    FileStateRepository, InMemoryStateRepo, RepositoryError, SaveFile, StateRepository,
    decode_state, encode_state, load_from_path, save_to_path,
};
pub use session::Session;
