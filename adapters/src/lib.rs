//! # Adapters Layer (Infrastructure)
//!
//! Concrete implementations of the [`dirule_core::ports`].
//!
//! ## Rules
//! * Adapters **MUST** depend on `ports` and nothing else from the core.
//! * The core **MUST NOT** depend on this crate. Whoever assembles the program picks
//!   adapters from here and injects them.
//!
//! ## Contents
//! * **[`storage`]**: Places a poem can be saved to.
//! * **[`speakers`]**: Voices an announcement can be delivered through.

pub mod speakers;
pub mod storage;

pub use speakers::{Newscaster, Preacher, SalesPromoter};
pub use storage::{Napkin, Notebook};
