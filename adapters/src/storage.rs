//! [`dirule_core::ports::Storage`] implementations. Both keep their content in process
//! memory behind a lock, so one instance can back many poems.

pub mod napkin;
pub mod notebook;

pub use napkin::Napkin;
pub use notebook::Notebook;
