mod ticket_service_config;

pub use ticket_service_config::*;
