//! Core module - Application infrastructure around the rules engine
//!
//! - [`config`] - [`EngineConfig`] and its JSON persistence
//! - [`error`] - [`CoreError`] for configuration I/O

pub mod config;
pub mod error;

pub use config::{EngineConfig, NoMoveRule};
pub use error::{CoreError, CoreResult};
