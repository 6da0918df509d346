use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Identity and metadata shared by devices and appliances.
///
/// Every field accepts `null` as its zero value, the same as a missing key.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DeviceCore {
    #[serde(
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature_offset: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub humidity_offset: i32,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_at: DateTime<Utc>,
    #[serde(deserialize_with = "null_as_default")]
    pub firmware_version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mac_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub serial_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Device {
    #[serde(flatten)]
    pub core: DeviceCore,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub newest_events: Events,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nickname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub superuser: bool,
}

/// Latest reading of each sensor at the time the response was built.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Events {
    #[serde(rename = "hu", default, deserialize_with = "null_as_default")]
    pub humidity: SensorValue,
    #[serde(rename = "il", default, deserialize_with = "null_as_default")]
    pub illumination: SensorValue,
    #[serde(rename = "mo", default, deserialize_with = "null_as_default")]
    pub motion: SensorValue,
    #[serde(rename = "te", default, deserialize_with = "null_as_default")]
    pub temperature: SensorValue,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SensorValue {
    #[serde(deserialize_with = "null_as_default")]
    pub val: f64,
    // ISO-8601, passed through untouched
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
}
