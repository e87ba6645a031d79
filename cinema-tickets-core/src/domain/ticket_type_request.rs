use super::{whole_number, TicketType, WholeNumber};
use crate::{dto::input, error::Error};
use std::{num::NonZeroU32, str::FromStr};

///
/// Request for a number of tickets of a single type.
///
/// Can only be built through [TicketTypeRequest::new] (or from [input::TicketTypeRequest]),
/// so holding one means the number of tickets is positive.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    no_of_tickets: NonZeroU32,
}

impl TicketTypeRequest {
    ///
    /// ### Errors
    /// - [Error::InvalidPurchase] when
    ///     - no_of_tickets is zero or negative
    ///     - no_of_tickets does not fit in u32
    ///
    pub fn new(ticket_type: TicketType, no_of_tickets: i64) -> Result<Self, Error> {
        if no_of_tickets <= 0 {
            return Err(Error::invalid_purchase(format!(
                "Ticket count must be a positive integer. Received: {no_of_tickets} for {ticket_type}"
            )));
        }

        let no_of_tickets = u32::try_from(no_of_tickets)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| {
                Error::invalid_purchase(format!(
                    "Ticket count out of range. Received: {no_of_tickets} for {ticket_type}"
                ))
            })?;

        Ok(Self {
            ticket_type,
            no_of_tickets,
        })
    }

    pub fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub fn no_of_tickets(&self) -> u32 {
        self.no_of_tickets.get()
    }
}

impl TryFrom<input::TicketTypeRequest> for TicketTypeRequest {
    type Error = Error;

    fn try_from(value: input::TicketTypeRequest) -> Result<Self, Self::Error> {
        let ticket_type = TicketType::from_str(&value.ticket_type)
            .map_err(|_| Error::invalid_purchase("Ticket type must be ADULT, CHILD, or INFANT"))?;

        match whole_number(&value.no_of_tickets) {
            Some(WholeNumber::InRange(no_of_tickets)) => Self::new(ticket_type, no_of_tickets),
            Some(WholeNumber::OutOfRange) => Err(Error::invalid_purchase(format!(
                "Ticket count out of range. Received: {} for {ticket_type}",
                value.no_of_tickets
            ))),
            None => Err(Error::invalid_purchase(
                "Number of tickets must be an integer",
            )),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn untyped(ticket_type: &str, no_of_tickets: serde_json::Value) -> input::TicketTypeRequest {
        input::TicketTypeRequest {
            ticket_type: ticket_type.to_string(),
            no_of_tickets,
        }
    }

    fn assert_invalid(result: Result<TicketTypeRequest, Error>, expected: &str) {
        assert!(matches!(result, Err(Error::InvalidPurchase(ref reason)) if reason == expected));
    }

    #[test]
    fn new_ok() {
        let request = TicketTypeRequest::new(TicketType::Adult, 3).unwrap();

        assert_eq!(request.ticket_type(), TicketType::Adult);
        assert_eq!(request.no_of_tickets(), 3);
    }

    #[test]
    fn new_zero() {
        assert_invalid(
            TicketTypeRequest::new(TicketType::Adult, 0),
            "Ticket count must be a positive integer. Received: 0 for ADULT",
        );
    }

    #[test]
    fn new_negative() {
        assert_invalid(
            TicketTypeRequest::new(TicketType::Child, -2),
            "Ticket count must be a positive integer. Received: -2 for CHILD",
        );
    }

    #[test]
    fn new_above_u32() {
        let result = TicketTypeRequest::new(TicketType::Infant, i64::from(u32::MAX) + 1);

        assert!(matches!(result, Err(Error::InvalidPurchase(_))));
    }

    #[test]
    fn try_from_every_type_ok() {
        for (text, ticket_type) in [
            ("ADULT", TicketType::Adult),
            ("CHILD", TicketType::Child),
            ("INFANT", TicketType::Infant),
        ] {
            let request = TicketTypeRequest::try_from(untyped(text, json!(2))).unwrap();

            assert_eq!(request.ticket_type(), ticket_type);
            assert_eq!(request.no_of_tickets(), 2);
        }
    }

    #[test]
    fn try_from_unrecognized_type() {
        assert_invalid(
            TicketTypeRequest::try_from(untyped("STUDENT", json!(1))),
            "Ticket type must be ADULT, CHILD, or INFANT",
        );
    }

    #[test]
    fn try_from_empty_type() {
        assert_invalid(
            TicketTypeRequest::try_from(untyped("", json!(2))),
            "Ticket type must be ADULT, CHILD, or INFANT",
        );
    }

    #[test]
    fn try_from_fractional_count() {
        assert_invalid(
            TicketTypeRequest::try_from(untyped("ADULT", json!(1.5))),
            "Number of tickets must be an integer",
        );
    }

    #[test]
    fn try_from_whole_float_count() {
        let request = TicketTypeRequest::try_from(untyped("CHILD", json!(2.0))).unwrap();

        assert_eq!(request.no_of_tickets(), 2);
    }

    #[test]
    fn try_from_count_above_i64() {
        assert_invalid(
            TicketTypeRequest::try_from(untyped("ADULT", json!(u64::MAX))),
            "Ticket count out of range. Received: 18446744073709551615 for ADULT",
        );
    }

    #[test]
    fn try_from_string_count() {
        assert_invalid(
            TicketTypeRequest::try_from(untyped("ADULT", json!("3"))),
            "Number of tickets must be an integer",
        );
    }

    #[test]
    fn try_from_null_count() {
        assert_invalid(
            TicketTypeRequest::try_from(untyped("INFANT", serde_json::Value::Null)),
            "Number of tickets must be an integer",
        );
    }

    #[test]
    fn try_from_zero_count() {
        let result = TicketTypeRequest::try_from(untyped("ADULT", json!(0)));

        assert!(matches!(result, Err(Error::InvalidPurchase(_))));
    }
}
