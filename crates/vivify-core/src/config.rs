//! Mapping configuration: which signal drives which element or group, and
//! what each signal value sets on the schematic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::VivifyError;

/// Nested CSS map carried by the reserved `style` attribute.
pub type StyleMap = BTreeMap<String, String>;

/// One attribute value: either a plain string, or for the reserved `style`
/// attribute a nested CSS property map that is merged into the element's
/// existing inline style instead of replacing it (see [`crate::merge_style`]).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Style(StyleMap),
}

/// Attribute name → value, applied to one element when a point is active.
pub type AttrSet = BTreeMap<String, AttrValue>;

/// Signal value string ("point", e.g. "0"/"1") → attribute set.
pub type ValueTable = BTreeMap<String, AttrSet>;

/// Parsed mapping configuration.
///
/// BTreeMaps keep iteration and serialization deterministic, which the
/// resolver's output guarantees depend on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "animStart")]
    pub anim_start: f64,
    #[serde(rename = "animEnd")]
    pub anim_end: f64,
    #[serde(rename = "animScale")]
    pub anim_scale: f64,
    /// Signal name → target name. Signals absent here are ignored everywhere.
    pub mapping: BTreeMap<String, String>,
    /// Target name → value table.
    pub elements: BTreeMap<String, ValueTable>,
    /// Group name → member element name → value table. A group fans one
    /// signal out to many elements, each with its own table.
    pub groups: BTreeMap<String, BTreeMap<String, ValueTable>>,
}

const REQUIRED_FIELDS: [&str; 6] = [
    "animStart",
    "animEnd",
    "animScale",
    "mapping",
    "elements",
    "groups",
];

/// Parse a JSON config document.
///
/// Required keys are checked in order before typed deserialization so an
/// absent key reports `MissingField` rather than a generic parse error.
pub fn parse_config_json(s: &str) -> Result<Config, VivifyError> {
    let value: serde_json::Value =
        serde_json::from_str(s).map_err(|e| VivifyError::format("config", e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| VivifyError::format("config", "expected a JSON object"))?;
    for field in REQUIRED_FIELDS {
        if !object.contains_key(field) {
            return Err(VivifyError::MissingField {
                field: field.to_string(),
            });
        }
    }

    serde_json::from_value(value).map_err(|e| VivifyError::format("config", e.to_string()))
}
