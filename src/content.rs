use crate::constants::{DEFAULT_DESCRIPTION, DEFAULT_TITLE};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum HydrationError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("malformed content document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("content document is null")]
    NullDocument,
}

/// Optional display fields served by the content document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentPayload {
    pub title: Option<String>,
    pub description: Option<String>,
}

// Fields are read loosely; only non-empty strings count as present.
#[derive(Deserialize, Default)]
struct RawPayload {
    #[serde(default)]
    title: Value,
    #[serde(default)]
    description: Value,
}

#[inline]
fn present_text(v: Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    }
}

pub fn decode_payload(body: &str) -> Result<ContentPayload, HydrationError> {
    let doc: Value = serde_json::from_str(body)?;
    let raw = match doc {
        Value::Null => return Err(HydrationError::NullDocument),
        Value::Object(_) => RawPayload::deserialize(doc)?,
        // Scalars and arrays carry no fields.
        _ => RawPayload::default(),
    };
    Ok(ContentPayload {
        title: present_text(raw.title),
        description: present_text(raw.description),
    })
}

#[inline]
pub fn check_status(status: u16) -> Result<(), HydrationError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(HydrationError::Status(status))
    }
}

/// Text shown by the landing view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentText {
    pub title: String,
    pub description: String,
}

impl Default for ContentText {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl ContentText {
    /// Overlay present fields; returns true if anything changed.
    pub fn apply(&mut self, payload: ContentPayload) -> bool {
        let mut changed = false;
        if let Some(title) = payload.title {
            changed |= self.title != title;
            self.title = title;
        }
        if let Some(description) = payload.description {
            changed |= self.description != description;
            self.description = description;
        }
        changed
    }
}

/// Settle one hydration attempt: apply on success, report once on failure.
pub fn hydrate(
    text: &mut ContentText,
    result: Result<ContentPayload, HydrationError>,
    mut report: impl FnMut(&HydrationError),
) -> bool {
    match result {
        Ok(payload) => text.apply(payload),
        Err(e) => {
            report(&e);
            false
        }
    }
}
