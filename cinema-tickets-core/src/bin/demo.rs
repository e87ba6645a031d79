//!
//! Runs a fixed set of purchases against stand-in external services
//!

use cinema_tickets_core::{
    application::{self, ApplicationEnv, ApplicationState},
    domain::Purchase,
    dto::input,
    error::Error,
};
use serde_json::{json, Value};

fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    let _guard = application::setup_tracing(&env)?;

    let state = application::create_state(&env);

    for purchase in demo_purchases() {
        let purchase = serde_json::from_value::<input::Purchase>(purchase)?;
        match process_purchase(&state, purchase) {
            Ok(()) => tracing::info!("purchase completed"),
            Err(err) => tracing::warn!(%err, "purchase failed"),
        }
    }

    Ok(())
}

fn process_purchase(state: &ApplicationState, purchase: input::Purchase) -> Result<(), Error> {
    let Purchase {
        account_id,
        ticket_type_requests,
    } = Purchase::try_from(purchase)?;

    state
        .ticket_service
        .purchase_tickets(account_id, &ticket_type_requests)
}

fn demo_purchases() -> Vec<Value> {
    vec![
        json!({
            "accountId": 1,
            "ticketTypeRequests": [
                { "ticketType": "ADULT", "noOfTickets": 2 },
                { "ticketType": "CHILD", "noOfTickets": 1 },
                { "ticketType": "INFANT", "noOfTickets": 1 }
            ]
        }),
        json!({
            "accountId": 2,
            "ticketTypeRequests": [{ "ticketType": "CHILD", "noOfTickets": 1 }]
        }),
        json!({
            "accountId": 3,
            "ticketTypeRequests": [{ "type": "ADULT", "noOfTickets": 1 }]
        }),
        json!({
            "accountId": 0,
            "ticketTypeRequests": [{ "ticketType": "ADULT", "noOfTickets": 1 }]
        }),
    ]
}
