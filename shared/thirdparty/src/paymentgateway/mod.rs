mod error;
mod ticket_payment_service;
mod ticket_payment_service_impl;

pub use error::*;
pub use ticket_payment_service::*;
pub use ticket_payment_service_impl::*;
