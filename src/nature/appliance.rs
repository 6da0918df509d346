use serde::{Deserialize, Serialize};
use std::fmt;

use super::device::DeviceCore;
use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Appliance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Shares the record's keys; its own `id` stays empty because `Appliance::id` claims it.
    #[serde(flatten)]
    pub core: DeviceCore,
    /// Zero-valued for anything that is not a TV.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tv: Tv,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Tv {
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: TvState,
    #[serde(default, deserialize_with = "null_as_default")]
    pub buttons: Vec<Button>,
}

impl Tv {
    pub fn is_present(&self) -> bool {
        *self != Tv::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TvState {
    #[serde(deserialize_with = "null_as_default")]
    pub input: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Button {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

/// Buttons this client knows how to press on a TV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TvButton {
    VolUp,
    VolDown,
}

impl TvButton {
    pub fn as_str(&self) -> &'static str {
        match self {
            TvButton::VolUp => "vol-up",
            TvButton::VolDown => "vol-down",
        }
    }
}

impl fmt::Display for TvButton {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
