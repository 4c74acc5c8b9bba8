//! Types shared by every layer of `dirule`.
//!
//! Nothing in here knows about ports or adapters, so every other crate may depend on it.

pub mod config;
pub mod error;

pub use config::{Config, MissingKeyPolicy};
pub use error::DiError;
