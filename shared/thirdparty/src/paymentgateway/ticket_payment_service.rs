use super::PaymentError;

///
/// Gateway charging accounts for purchased tickets
///
#[cfg_attr(any(test, feature = "test_utils"), mockall::automock)]
pub trait TicketPaymentService: Send + Sync {
    ///
    /// Charge the account with amount given in whole currency units.
    ///
    /// ### Errors
    /// - [PaymentError] when gateway did not take the payment
    ///
    fn make_payment(&self, account_id: i64, total_amount_to_pay: u32) -> Result<(), PaymentError>;
}
