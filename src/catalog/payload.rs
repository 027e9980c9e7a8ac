use serde::{Deserialize, Serialize};

use crate::error::PayloadError;

/// State carried in a reference item's `target` so the plugin can find the
/// site again when the item comes back from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ItemPayload {
    pub site: String,
}

impl ItemPayload {
    pub fn new(site: impl Into<String>) -> Self {
        Self { site: site.into() }
    }
}

/// Encode `payload` for an item's `target`. Serializing a single string
/// field cannot fail, so the result is never empty.
pub fn encode_payload(payload: &ItemPayload) -> String {
    serde_json::to_string(payload).unwrap_or_default()
}

pub fn decode_payload(target: &str) -> Result<ItemPayload, PayloadError> {
    let payload: ItemPayload = serde_json::from_str(target)?;
    if payload.site.is_empty() {
        return Err(PayloadError::EmptySite);
    }
    Ok(payload)
}
