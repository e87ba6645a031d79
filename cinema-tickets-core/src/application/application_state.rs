use super::ApplicationEnv;
use crate::service::{TicketService, TicketServiceConfig, TicketServiceImpl};
use std::sync::Arc;
use thirdparty::{
    paymentgateway::TicketPaymentServiceImpl, seatbooking::SeatReservationServiceImpl,
};

#[derive(Clone)]
pub struct ApplicationState {
    pub ticket_service: Arc<dyn TicketService>,
}

pub fn create_state(env: &ApplicationEnv) -> ApplicationState {
    tracing::info!("creating services");
    let ticket_service = TicketServiceImpl::new(
        TicketServiceConfig {
            max_tickets_per_purchase: env.max_tickets_per_purchase,
        },
        Arc::new(TicketPaymentServiceImpl),
        Arc::new(SeatReservationServiceImpl),
    );

    ApplicationState {
        ticket_service: Arc::new(ticket_service),
    }
}
