use serde::Deserialize;
use serde_json::Value;

///
/// Fields are kept raw, so every malformed value
/// is reported as invalid purchase instead of deserialization error
///
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(default)]
    pub account_id: Value,
    #[serde(default)]
    pub ticket_type_requests: Option<Vec<Value>>,
}
