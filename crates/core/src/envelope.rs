//! Normalization of the backend's inconsistent response envelopes.
//!
//! The backend wraps payloads in one of several shapes depending on the
//! endpoint (and sometimes on the serializer it happened to use): a raw
//! array, `{data: [...]}`, `{$values: [...]}` or `{success, data}`. Each
//! shape is decoded here, once, as a tagged union; callers never sniff
//! response bodies themselves.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The `{success, data}` wrapper used by the newer endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: T,
}

/// The three wrappers the backend is known to use around list payloads.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Items(Vec<T>),
    Data { data: Vec<T> },
    Values {
        #[serde(rename = "$values")]
        values: Vec<T>,
    },
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Items(items) => items,
            Self::Data { data } => data,
            Self::Values { values } => values,
        }
    }
}

/// Decode a list body under any recognized envelope.
///
/// `None` means the shape is not one we know; callers treat that as an
/// empty result and log a warning rather than failing the operation.
pub fn unwrap_list<T: DeserializeOwned>(body: &Value) -> Option<Vec<T>> {
    serde_json::from_value::<ListEnvelope<T>>(body.clone())
        .ok()
        .map(ListEnvelope::into_items)
}

/// Decode a single-object body, preferring `{success, data}` over the raw
/// body. `None` when neither decodes.
pub fn unwrap_object<T: DeserializeOwned>(body: &Value) -> Option<T> {
    if let Ok(envelope) = serde_json::from_value::<ApiEnvelope<T>>(body.clone()) {
        return Some(envelope.data);
    }
    serde_json::from_value(body.clone()).ok()
}
