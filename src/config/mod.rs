// src/config/mod.rs

//! Runtime configuration for taskbot.
//!
//! Everything is read from the process environment exactly once, at startup,
//! and turned into an explicit [`Config`] value that is handed to the
//! notifier and the task runner.
//!
//! - [`model`] defines the raw and validated shapes.
//! - [`loader`] reads the environment (or an injected lookup for tests).
//! - [`validate`] applies defaults and rejects unusable values.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_from_env, load_from_lookup, read_raw};
pub use model::{Config, RawConfig};
