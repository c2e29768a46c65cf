use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Outcome of interpreting a completion's text as a structured list.
///
/// Both variants are terminal successes from the caller's point of view;
/// the tag only records provenance (real model output vs. substituted
/// fallback), which is logged but does not change the returned type.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded<T> {
    /// The full text parsed as a JSON list of the target shape.
    Structured(Vec<T>),
    /// The text was not a valid list of the target shape; carries the raw
    /// text for fallback construction.
    Malformed(String),
}

impl<T> Decoded<T> {
    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    /// Resolve to a list, substituting the fallback built from the raw
    /// text when interpretation failed. Interpretation failures never
    /// propagate as errors.
    pub fn or_fallback(self, fallback: impl FnOnce(&str) -> Vec<T>) -> Vec<T> {
        match self {
            Self::Structured(items) => items,
            Self::Malformed(raw) => {
                warn!("model ignored the requested output format, substituting fallback");
                fallback(&raw)
            }
        }
    }
}

/// Schema-validated decode of a completion into a list of `T`.
pub fn decode_list<T: DeserializeOwned>(raw: &str) -> Decoded<T> {
    match serde_json::from_str::<Vec<T>>(raw) {
        Ok(items) => Decoded::Structured(items),
        Err(err) => {
            debug!(error = %err, "completion text is not a structured list");
            Decoded::Malformed(raw.to_string())
        }
    }
}

/// First `limit` characters of the raw text, always with a trailing
/// ellipsis, for embedding model prose into fallback records.
pub fn excerpt(raw: &str, limit: usize) -> String {
    let head: String = raw.chars().take(limit).collect();
    format!("{head}...")
}
