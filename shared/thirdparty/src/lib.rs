//!
//! Clients of services owned by other teams.
//!
//! Implementations provided here only acknowledge calls,
//! behaviour of the real services is out of our control.
//!

pub mod paymentgateway;
pub mod seatbooking;
