use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecordId;

/// Record returned by `/users/me`. Profile fields the client does not know are kept as-is.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: RecordId,
    pub email: String,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}
