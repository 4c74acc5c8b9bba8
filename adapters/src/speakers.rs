//! [`dirule_core::ports::Speaker`] implementations. None of them remember anything; each
//! one renders the message on the spot and returns the result.

pub mod newscaster;
pub mod preacher;
pub mod sales_promoter;

pub use newscaster::Newscaster;
pub use preacher::Preacher;
pub use sales_promoter::SalesPromoter;
