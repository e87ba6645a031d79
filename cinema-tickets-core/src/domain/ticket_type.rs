use strum::{AsRefStr, Display, EnumIter, EnumString};

pub const ADULT_TICKET_PRICE: u32 = 25;
pub const CHILD_TICKET_PRICE: u32 = 15;
pub const INFANT_TICKET_PRICE: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Adult,
    Child,
    Infant,
}

impl TicketType {
    ///
    /// Price of a single ticket in whole currency units
    ///
    pub fn price(self) -> u32 {
        match self {
            TicketType::Adult => ADULT_TICKET_PRICE,
            TicketType::Child => CHILD_TICKET_PRICE,
            TicketType::Infant => INFANT_TICKET_PRICE,
        }
    }

    ///
    /// Number of seats taken by a single ticket.
    /// Infants sit on an adult's lap.
    ///
    pub fn seats(self) -> u32 {
        match self {
            TicketType::Adult | TicketType::Child => 1,
            TicketType::Infant => 0,
        }
    }
}
