use super::{
    validate_account_id, validate_ticket_type_requests_not_empty, whole_number, TicketTypeRequest,
    WholeNumber,
};
use crate::{dto::input, error::Error};

///
/// Purchase rebuilt from untyped input,
/// ready to be passed to [crate::service::TicketService::purchase_tickets]
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Purchase {
    pub account_id: i64,
    pub ticket_type_requests: Vec<TicketTypeRequest>,
}

impl TryFrom<input::Purchase> for Purchase {
    type Error = Error;

    ///
    /// Checks are done in the same order as in the service,
    /// so the first reported problem does not depend on the entry point
    ///
    fn try_from(value: input::Purchase) -> Result<Self, Self::Error> {
        let account_id = match whole_number(&value.account_id) {
            Some(WholeNumber::InRange(account_id)) => account_id,
            _ => {
                return Err(Error::invalid_purchase(format!(
                    "Invalid account ID: {}",
                    value.account_id
                )))
            }
        };
        validate_account_id(account_id)?;

        let ticket_type_requests = value.ticket_type_requests.unwrap_or_default();
        validate_ticket_type_requests_not_empty(&ticket_type_requests)?;

        let ticket_type_requests = ticket_type_requests
            .into_iter()
            .map(|request| {
                serde_json::from_value::<input::TicketTypeRequest>(request)
                    .map_err(|_| Error::invalid_purchase("Invalid ticket type request"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ticket_type_requests = ticket_type_requests
            .into_iter()
            .map(TicketTypeRequest::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            account_id,
            ticket_type_requests,
        })
    }
}
