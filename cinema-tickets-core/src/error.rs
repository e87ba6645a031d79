use thirdparty::{paymentgateway::PaymentError, seatbooking::SeatReservationError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid purchase: {0}")]
    InvalidPurchase(String),

    ///
    /// Errors of external services are passed to the caller untouched
    ///
    #[error(transparent)]
    Payment(#[from] PaymentError),

    #[error(transparent)]
    SeatReservation(#[from] SeatReservationError),
}

impl Error {
    pub(crate) fn invalid_purchase(reason: impl Into<String>) -> Self {
        Self::InvalidPurchase(reason.into())
    }
}
