use super::SeatReservationError;

#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
pub trait SeatReservationService: Send + Sync {
    ///
    /// Reserve seats for the account.
    ///
    /// ### Errors
    /// - [SeatReservationError] when seats could not be reserved
    ///
    fn reserve_seat(
        &self,
        account_id: i64,
        total_seats_to_allocate: u32,
    ) -> Result<(), SeatReservationError>;
}
