use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecordId;

/// Trip as returned by the server. Attributes are opaque to the client.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Trip {
    pub id: RecordId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Trip {
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }
}
