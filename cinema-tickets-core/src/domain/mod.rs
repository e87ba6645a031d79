//!
//! Tickets, requests for them and everything derived while purchasing
//!

mod purchase;
mod purchase_summary;
mod ticket_type;
mod ticket_type_request;
mod validation;

pub use purchase::*;
pub use purchase_summary::*;
pub use ticket_type::*;
pub use ticket_type_request::*;
pub(crate) use validation::*;
