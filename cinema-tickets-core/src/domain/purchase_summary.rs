use super::{TicketType, TicketTypeRequest};
use crate::error::Error;
use strum::IntoEnumIterator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketCounts {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl TicketCounts {
    pub fn get(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }

    fn checked_add(self, ticket_type: TicketType, no_of_tickets: u32) -> Option<Self> {
        let mut counts = self;
        let count = match ticket_type {
            TicketType::Adult => &mut counts.adult,
            TicketType::Child => &mut counts.child,
            TicketType::Infant => &mut counts.infant,
        };
        *count = count.checked_add(no_of_tickets)?;

        Some(counts)
    }
}

///
/// Totals of a single purchase
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseSummary {
    pub counts: TicketCounts,
    pub total_tickets: u32,
    pub total_amount: u32,
    pub total_seats: u32,
}

impl PurchaseSummary {
    ///
    /// Requests of the same type are accumulated
    ///
    /// ### Errors
    /// - [Error::InvalidPurchase] when any of the totals does not fit in u32
    ///
    pub fn from_requests(ticket_type_requests: &[TicketTypeRequest]) -> Result<Self, Error> {
        let counts = ticket_type_requests
            .iter()
            .try_fold(TicketCounts::default(), |counts, request| {
                counts.checked_add(request.ticket_type(), request.no_of_tickets())
            })
            .ok_or_else(Self::out_of_range)?;

        let total_tickets = Self::sum(&counts, |_| 1)?;
        let total_amount = Self::sum(&counts, TicketType::price)?;
        let total_seats = Self::sum(&counts, TicketType::seats)?;

        Ok(Self {
            counts,
            total_tickets,
            total_amount,
            total_seats,
        })
    }

    fn sum(counts: &TicketCounts, per_ticket: impl Fn(TicketType) -> u32) -> Result<u32, Error> {
        TicketType::iter()
            .try_fold(0u32, |total, ticket_type| {
                counts
                    .get(ticket_type)
                    .checked_mul(per_ticket(ticket_type))?
                    .checked_add(total)
            })
            .ok_or_else(Self::out_of_range)
    }

    fn out_of_range() -> Error {
        Error::invalid_purchase("Ticket totals out of range")
    }
}
