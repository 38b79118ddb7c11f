use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecordId;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Device {
    pub id: RecordId,
    pub name: String,
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

/// Body of `POST /devices/`
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewDevice {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_survive() {
        let device: Device =
            serde_json::from_str(r#"{"id":7,"name":"Tracker","imei":"3569","owner_id":2}"#).unwrap();
        assert_eq!(device.id, RecordId::Int(7));
        assert_eq!(device.metadata.get("imei"), Some(&Value::from("3569")));

        let back = serde_json::to_value(&device).unwrap();
        assert_eq!(back["owner_id"], 2);
    }
}
