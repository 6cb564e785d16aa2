//! Category client: CRUD for record groups against the backend API.

use std::sync::Arc;

use reqwest::RequestBuilder;
use serde_json::{Value, json};
use tracing::{debug, warn};

use recordshop_core::envelope::ApiEnvelope;
use recordshop_core::http::read_json;
use recordshop_core::{ClientConfig, ClientError, ClientResult, TokenProvider};

use crate::group::{Group, GroupPayload, GroupWire};

/// Client for the group endpoints.
///
/// Create and update validate required fields before any network I/O and
/// fail with a synthesized 400 when something is missing. A bearer token is
/// attached when one is available but is not a precondition here.
pub struct GroupClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl GroupClient {
    pub fn new(config: ClientConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
        }
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.tokens.bearer_token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// List all groups.
    ///
    /// Requires the `{success: true, data: [...]}` envelope; anything else
    /// is an empty result, not an error. Image references are resolved to
    /// browsable URLs on the way through.
    pub async fn list(&self) -> ClientResult<Vec<Group>> {
        let url = self.config.endpoint("groups");
        let response = self.with_auth(self.http.get(&url)).send().await?;
        let body = read_json(response).await?;

        match serde_json::from_value::<ApiEnvelope<Vec<GroupWire>>>(body) {
            Ok(envelope) if envelope.success => {
                let groups: Vec<Group> = envelope.data.into_iter().map(Group::from).collect();
                debug!(count = groups.len(), "fetched group list");
                Ok(groups)
            }
            Ok(_) => {
                warn!(%url, "group list flagged unsuccessful, returning empty list");
                Ok(Vec::new())
            }
            Err(err) => {
                warn!(%url, %err, "unrecognized group-list envelope, returning empty list");
                Ok(Vec::new())
            }
        }
    }

    /// Create a group.
    ///
    /// Missing name or genre fail locally with a message naming exactly the
    /// missing field(s); the network is never contacted in that case.
    pub async fn create(&self, payload: &GroupPayload) -> ClientResult<Group> {
        let missing = payload.missing_for_create();
        if !missing.is_empty() {
            return Err(ClientError::validation(missing.join(", ")));
        }

        let url = self.config.endpoint("groups");
        let response = self
            .with_auth(self.http.post(&url))
            .json(payload)
            .send()
            .await?;
        let body = read_json(response).await?;
        Ok(Self::unwrap_written(&body).unwrap_or_else(|| payload.echo()))
    }

    /// Update a group. Requires id, name and genre to all be present.
    pub async fn update(&self, payload: &GroupPayload) -> ClientResult<Group> {
        let missing = payload.missing_for_update();
        if !missing.is_empty() {
            return Err(ClientError::validation(missing.join(", ")));
        }

        // missing_for_update checked the id above.
        let id = payload.id.unwrap_or_default();
        let url = self.config.endpoint(&format!("groups/{id}"));
        let response = self
            .with_auth(self.http.put(&url))
            .json(payload)
            .send()
            .await?;
        let body = read_json(response).await?;
        Ok(Self::unwrap_written(&body).unwrap_or_else(|| payload.echo()))
    }

    /// Delete a group by id; passthrough, no special unwrapping.
    pub async fn delete(&self, id: i64) -> ClientResult<Value> {
        let url = self.config.endpoint(&format!("groups/{id}"));
        let response = self.with_auth(self.http.delete(&url)).send().await?;
        let body = read_json(response).await?;
        if body.is_null() {
            Ok(json!({"success": true}))
        } else {
            Ok(body)
        }
    }

    /// Fetch a single group and extract its display name.
    ///
    /// The backend answers either with a direct object carrying `nameGroup`
    /// or with a `{$values: ...}` wrapper; anything else is an empty string.
    pub async fn group_name(&self, id: i64) -> ClientResult<String> {
        let url = self.config.endpoint(&format!("groups/{id}"));
        let response = self.with_auth(self.http.get(&url)).send().await?;
        let body = read_json(response).await?;
        Ok(extract_group_name(&body))
    }

    /// Write responses come back as `{success, data}`, as the raw entity, or
    /// as a bare ack like `{"success": true}`. A raw object without a group
    /// id is an ack, not an entity; `None` tells the caller to echo its
    /// input instead of surfacing a zeroed group.
    fn unwrap_written(body: &Value) -> Option<Group> {
        if let Ok(envelope) = serde_json::from_value::<ApiEnvelope<GroupWire>>(body.clone()) {
            return Some(Group::from(envelope.data));
        }
        serde_json::from_value::<GroupWire>(body.clone())
            .ok()
            .filter(|wire| wire.id != 0)
            .map(Group::from)
    }
}

fn name_of(value: &Value) -> Option<String> {
    value
        .get("nameGroup")
        .or_else(|| value.get("NameGroup"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn extract_group_name(body: &Value) -> String {
    if let Some(name) = name_of(body) {
        return name;
    }
    if let Some(values) = body.get("$values") {
        let candidate = match values.as_array() {
            Some(items) => items.first(),
            None => Some(values),
        };
        if let Some(name) = candidate.and_then(name_of) {
            return name;
        }
    }
    String::new()
}
