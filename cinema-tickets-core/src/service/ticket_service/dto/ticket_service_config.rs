pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

#[derive(Debug, Clone)]
pub struct TicketServiceConfig {
    pub max_tickets_per_purchase: u32,
}

impl Default for TicketServiceConfig {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
        }
    }
}
