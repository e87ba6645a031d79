#![allow(dead_code)]

use cinema_tickets_core::{
    domain::{TicketType, TicketTypeRequest},
    service::{TicketServiceConfig, TicketServiceImpl},
};
use mockall::{predicate::eq, Sequence};
use std::sync::Arc;
use thirdparty::{
    paymentgateway::MockTicketPaymentService, seatbooking::MockSeatReservationService,
};

pub fn adult(no_of_tickets: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Adult, no_of_tickets).unwrap()
}

pub fn child(no_of_tickets: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Child, no_of_tickets).unwrap()
}

pub fn infant(no_of_tickets: i64) -> TicketTypeRequest {
    TicketTypeRequest::new(TicketType::Infant, no_of_tickets).unwrap()
}

///
/// Service that panics unless payment and then reservation
/// are made exactly once per each of the expected purchases
///
pub fn service_expecting_purchases(purchases: &[(i64, u32, u32)]) -> TicketServiceImpl {
    let mut sequence = Sequence::new();
    let mut payment_service = MockTicketPaymentService::new();
    let mut reservation_service = MockSeatReservationService::new();

    for &(account_id, amount, seats) in purchases {
        payment_service
            .expect_make_payment()
            .with(eq(account_id), eq(amount))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok(()));
        reservation_service
            .expect_reserve_seat()
            .with(eq(account_id), eq(seats))
            .times(1)
            .in_sequence(&mut sequence)
            .returning(|_, _| Ok(()));
    }

    TicketServiceImpl::new(
        TicketServiceConfig::default(),
        Arc::new(payment_service),
        Arc::new(reservation_service),
    )
}

pub fn service_expecting_purchase(account_id: i64, amount: u32, seats: u32) -> TicketServiceImpl {
    service_expecting_purchases(&[(account_id, amount, seats)])
}

///
/// Service that panics when any external service is called
///
pub fn service_expecting_rejection() -> TicketServiceImpl {
    service_expecting_purchases(&[])
}
