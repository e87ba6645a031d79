mod purchase;
mod ticket_type_request;

pub use purchase::*;
pub use ticket_type_request::*;
