//! Unvalidated entry records as submitted by clients.
//!
//! Every field is optional and `type` is a free string: deciding what is
//! missing or wrong is the admission gate's job, not the decoder's.

use serde::{Deserialize, Serialize};

/// A raw `{name, quantity}` pair from a recipe submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequiredItemRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl RequiredItemRecord {
    pub fn new(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
        }
    }
}

/// A raw entry submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRecord {
    #[serde(rename = "type", default)]
    pub entry_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub cook_time: Option<i64>,
    #[serde(default)]
    pub required_items: Option<Vec<RequiredItemRecord>>,
}

impl EntryRecord {
    /// A well-formed ingredient submission.
    pub fn ingredient(name: impl Into<String>, cook_time: i64) -> Self {
        Self {
            entry_type: Some("ingredient".into()),
            name: Some(name.into()),
            cook_time: Some(cook_time),
            required_items: None,
        }
    }

    /// A well-formed recipe submission.
    pub fn recipe(name: impl Into<String>, items: Vec<RequiredItemRecord>) -> Self {
        Self {
            entry_type: Some("recipe".into()),
            name: Some(name.into()),
            cook_time: None,
            required_items: Some(items),
        }
    }
}
