//! # Domain Layer (Core)
//!
//! The entities of `dirule`.
//!
//! ## Characteristics
//! * **No concrete dependencies**: Entities hold `&dyn` references to [`crate::ports`]
//!   traits and never name an adapter.
//! * **Injected, not constructed**: Every capability is handed in from outside, either at
//!   construction time or through a setter.
//!
//! ## Contents
//! * [`poem::Poem`]: Content that can be saved to and loaded from a [`crate::ports::Storage`].
//! * [`announcement::Announcement`]: A message delivered through a [`crate::ports::Speaker`].
//! * [`arm`]: Pure two-link arm calculations, free of any shared state.

pub mod announcement;
pub mod arm;
pub mod poem;

pub use announcement::Announcement;
pub use poem::Poem;
