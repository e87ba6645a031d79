mod error;
mod seat_reservation_service;
mod seat_reservation_service_impl;

pub use error::*;
pub use seat_reservation_service::*;
pub use seat_reservation_service_impl::*;
