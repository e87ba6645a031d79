use super::{PaymentError, TicketPaymentService};

#[derive(Debug, Default)]
pub struct TicketPaymentServiceImpl;

impl TicketPaymentService for TicketPaymentServiceImpl {
    fn make_payment(&self, account_id: i64, total_amount_to_pay: u32) -> Result<(), PaymentError> {
        tracing::info!(account_id, total_amount_to_pay, "payment taken");

        Ok(())
    }
}
