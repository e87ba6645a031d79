#[derive(Debug, thiserror::Error)]
#[error("payment failed: {reason}")]
pub struct PaymentError {
    pub reason: String,
}
