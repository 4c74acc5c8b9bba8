//! # dirule core
//!
//! The inner layers of `dirule`, built around the **Dependency Rule**: source dependencies
//! only ever point inward, toward the more abstract code.
//!
//! * **[`domain`]**: The entities (`Poem`, `Announcement`) and pure calculations.
//!     * *Center of the onion*. Depends on [`ports`] only through traits.
//! * **[`ports`]**: The capability contracts the entities need from the outside world.
//!     * *Boundary*. Implemented by the `dirule-adapters` crate.
//!
//! This crate has no dependency on any concrete adapter. Whoever assembles the program
//! builds the adapters and injects them into the entities.

pub mod domain;
pub mod ports;
