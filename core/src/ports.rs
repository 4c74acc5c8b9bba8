//! # Ports (Capability Contracts)
//!
//! Traits describing what the domain needs, never how it is done.
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed.
//! 3. Every method takes `&self`, so one adapter can be shared by many consumers.
//!    Stateful adapters use interior mutability.
//! 4. These traits are implemented in the `dirule-adapters` crate.

pub mod speaker;
pub mod storage;

pub use speaker::Speaker;
pub use storage::Storage;
