use super::{TicketService, TicketServiceConfig};
use crate::{
    domain::{
        validate_account_id, validate_ticket_type_requests_not_empty, PurchaseSummary,
        TicketTypeRequest,
    },
    error::Error,
};
use std::sync::Arc;
use thirdparty::{paymentgateway::TicketPaymentService, seatbooking::SeatReservationService};

pub struct TicketServiceImpl {
    config: TicketServiceConfig,
    ticket_payment_service: Arc<dyn TicketPaymentService>,
    seat_reservation_service: Arc<dyn SeatReservationService>,
}

impl TicketServiceImpl {
    pub fn new(
        config: TicketServiceConfig,
        ticket_payment_service: Arc<dyn TicketPaymentService>,
        seat_reservation_service: Arc<dyn SeatReservationService>,
    ) -> Self {
        Self {
            config,
            ticket_payment_service,
            seat_reservation_service,
        }
    }

    fn validate_purchase(
        &self,
        account_id: i64,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<PurchaseSummary, Error> {
        validate_account_id(account_id)?;
        validate_ticket_type_requests_not_empty(ticket_type_requests)?;

        let summary = PurchaseSummary::from_requests(ticket_type_requests)?;
        tracing::trace!(?summary);

        self.validate_max_tickets(&summary)?;
        Self::validate_adult_present(&summary)?;
        Self::validate_infants_accompanied(&summary)?;

        Ok(summary)
    }

    fn validate_max_tickets(&self, summary: &PurchaseSummary) -> Result<(), Error> {
        let max_tickets = self.config.max_tickets_per_purchase;
        if summary.total_tickets > max_tickets {
            return Err(Error::invalid_purchase(format!(
                "Cannot purchase more than {max_tickets} tickets at a time"
            )));
        }

        Ok(())
    }

    fn validate_adult_present(summary: &PurchaseSummary) -> Result<(), Error> {
        let counts = &summary.counts;
        if counts.adult == 0 && (counts.child > 0 || counts.infant > 0) {
            return Err(Error::invalid_purchase(
                "Child or Infant tickets cannot be purchased without at least one Adult ticket",
            ));
        }

        Ok(())
    }

    ///
    /// Every infant sits on a lap of a different adult
    ///
    fn validate_infants_accompanied(summary: &PurchaseSummary) -> Result<(), Error> {
        if summary.counts.infant > summary.counts.adult {
            return Err(Error::invalid_purchase(
                "Each infant must be accompanied by an adult. Too many infants.",
            ));
        }

        Ok(())
    }
}

impl TicketService for TicketServiceImpl {
    fn purchase_tickets(
        &self,
        account_id: i64,
        ticket_type_requests: &[TicketTypeRequest],
    ) -> Result<(), Error> {
        tracing::info!(account_id, "purchasing tickets");

        let summary = self
            .validate_purchase(account_id, ticket_type_requests)
            .inspect_err(|err| tracing::warn!(%err, "purchase rejected"))?;

        self.ticket_payment_service
            .make_payment(account_id, summary.total_amount)?;
        tracing::info!(total_amount = summary.total_amount, "made payment");

        self.seat_reservation_service
            .reserve_seat(account_id, summary.total_seats)?;
        tracing::info!(total_seats = summary.total_seats, "reserved seats");

        Ok(())
    }
}
