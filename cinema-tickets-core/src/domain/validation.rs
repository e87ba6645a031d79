use crate::error::Error;
use serde_json::Value;

/// 2^63, first float above i64 range
const I64_RANGE_END: f64 = 9_223_372_036_854_775_808.0;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum WholeNumber {
    InRange(i64),
    OutOfRange,
}

///
/// Reads JSON number without fractional part, `2` and `2.0` alike.
/// Returns None for fractions and anything that is not a number.
///
pub(crate) fn whole_number(value: &Value) -> Option<WholeNumber> {
    if let Some(number) = value.as_i64() {
        return Some(WholeNumber::InRange(number));
    }
    if value.is_u64() {
        return Some(WholeNumber::OutOfRange);
    }

    let number = value.as_f64()?;
    if number.fract() != 0.0 {
        return None;
    }
    if (-I64_RANGE_END..I64_RANGE_END).contains(&number) {
        Some(WholeNumber::InRange(number as i64))
    } else {
        Some(WholeNumber::OutOfRange)
    }
}

pub(crate) fn validate_account_id(account_id: i64) -> Result<(), Error> {
    if account_id <= 0 {
        return Err(Error::invalid_purchase(format!("Invalid account ID: {account_id}")));
    }

    Ok(())
}

pub(crate) fn validate_ticket_type_requests_not_empty<T>(
    ticket_type_requests: &[T],
) -> Result<(), Error> {
    if ticket_type_requests.is_empty() {
        return Err(Error::invalid_purchase(
            "At least one ticket type request must be provided",
        ));
    }

    Ok(())
}
