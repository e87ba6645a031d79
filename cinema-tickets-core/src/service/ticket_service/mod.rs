mod dto;
mod ticket_service;
mod ticket_service_impl;

pub use dto::*;
pub use ticket_service::*;
pub use ticket_service_impl::*;
