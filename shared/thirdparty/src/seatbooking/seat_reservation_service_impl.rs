use super::{SeatReservationError, SeatReservationService};

#[derive(Debug, Default)]
pub struct SeatReservationServiceImpl;

impl SeatReservationService for SeatReservationServiceImpl {
    fn reserve_seat(
        &self,
        account_id: i64,
        total_seats_to_allocate: u32,
    ) -> Result<(), SeatReservationError> {
        tracing::info!(account_id, total_seats_to_allocate, "seats reserved");

        Ok(())
    }
}
