//! Domain models for the pharmacy assistant

mod alert;
mod customer;
mod drug;
mod order;
mod requisition;

pub use alert::*;
pub use customer::*;
pub use drug::*;
pub use order::*;
pub use requisition::*;
