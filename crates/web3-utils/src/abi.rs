//! ABI entry helpers.
//!
//! Only the parts of a JSON ABI entry needed to build a canonical
//! `name(type1,type2,...)` signature are modelled; other fields are ignored
//! on deserialization.

use serde::{Deserialize, Serialize};

use crate::error::UtilsError;

/// A single function or event parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiInput {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A function or event description from a JSON ABI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiEntry {
    pub name: String,
    #[serde(default)]
    pub inputs: Vec<AbiInput>,
}

impl AbiEntry {
    /// Parses a single ABI entry from JSON.
    pub fn from_json(json: &str) -> Result<Self, UtilsError> {
        serde_json::from_str(json)
            .map_err(|e| UtilsError::InvalidAbi(format!("malformed ABI entry: {e}")))
    }

    /// Canonical signature, see [`json_interface_method_to_string`].
    pub fn signature(&self) -> String {
        json_interface_method_to_string(self)
    }
}

/// Builds the full function/event name of an ABI entry.
///
/// A name that already contains `(` is taken as a complete signature and
/// returned unchanged.
pub fn json_interface_method_to_string(entry: &AbiEntry) -> String {
    if entry.name.contains('(') {
        return entry.name.clone();
    }

    let types: Vec<&str> = entry.inputs.iter().map(|i| i.kind.as_str()).collect();
    format!("{}({})", entry.name, types.join(","))
}
