#[derive(Debug, thiserror::Error)]
#[error("seat reservation failed: {reason}")]
pub struct SeatReservationError {
    pub reason: String,
}
