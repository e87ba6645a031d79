use crate::{domain::TicketTypeRequest, error::Error};

pub trait TicketService: Send + Sync {
    ///
    /// Validate purchase, then charge the account and reserve seats.
    /// Payment is always made before reservation and each happens exactly once.
    ///
    /// ### Errors
    /// - [Error::InvalidPurchase] when
    ///     - account_id is not positive
    ///     - ticket_type_requests is empty
    ///     - more tickets than allowed in a single purchase were requested
    ///     - child or infant tickets were requested without an adult ticket
    ///     - there are more infants than adults
    /// - [Error::Payment] when payment gateway failed, seats are not reserved then
    /// - [Error::SeatReservation] when seat reservation failed,
    ///     payment is not reverted
    ///
    fn purchase_tickets(
        &self,
        account_id: i64,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<(), Error>;
}
