use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TicketTypeRequest {
    pub ticket_type: String,
    pub no_of_tickets: Value,
}
