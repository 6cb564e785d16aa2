//! Catalog-item client: CRUD + stock adjustment against the backend API.

use std::sync::Arc;

use reqwest::Method;
use serde_json::{Value, json};
use tracing::{debug, warn};

use recordshop_core::envelope::{self, ApiEnvelope};
use recordshop_core::http::{ensure_success, read_json};
use recordshop_core::{ClientConfig, ClientError, ClientResult, TokenProvider};
use recordshop_events::{StockFeed, notify_stock};

use crate::record::{GroupRecordsWire, Record, RecordPayload, RecordWire};

/// Client for the record endpoints.
///
/// Every method performs exactly one network round trip; dropping the
/// returned future aborts the in-flight request. Writes require a bearer
/// token and fail locally when none is stored.
pub struct RecordClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenProvider>,
    stock_feed: Arc<StockFeed>,
}

impl RecordClient {
    pub fn new(
        config: ClientConfig,
        tokens: Arc<dyn TokenProvider>,
        stock_feed: Arc<StockFeed>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            tokens,
            stock_feed,
        }
    }

    /// The notification channel this client publishes stock changes into.
    pub fn stock_feed(&self) -> Arc<StockFeed> {
        Arc::clone(&self.stock_feed)
    }

    fn require_token(&self) -> ClientResult<String> {
        self.tokens
            .bearer_token()
            .ok_or(ClientError::Unauthenticated)
    }

    /// Write responses come back as `{success, data}`, as the raw entity, or
    /// as a bare ack like `{"message": "ok"}`. A raw object without a record
    /// id is an ack, not an entity; `None` tells the caller to echo its
    /// input instead of surfacing a zeroed record.
    fn unwrap_written(body: &Value) -> Option<Record> {
        if let Ok(envelope) = serde_json::from_value::<ApiEnvelope<RecordWire>>(body.clone()) {
            return Some(Record::from(envelope.data));
        }
        serde_json::from_value::<RecordWire>(body.clone())
            .ok()
            .filter(|wire| wire.id != 0)
            .map(Record::from)
    }

    /// List all records.
    ///
    /// Unwraps any of the three known list envelopes; an unrecognized shape
    /// is an empty result, not an error. On success, broadcasts the current
    /// stock of every returned record.
    pub async fn list(&self) -> ClientResult<Vec<Record>> {
        let url = self.config.endpoint("records");
        let response = self.http.get(&url).send().await?;
        let body = read_json(response).await?;

        let Some(wires) = envelope::unwrap_list::<RecordWire>(&body) else {
            warn!(%url, "unrecognized record-list envelope, returning empty list");
            return Ok(Vec::new());
        };

        let records: Vec<Record> = wires.into_iter().map(Record::from).collect();
        debug!(count = records.len(), "fetched record list");
        for record in &records {
            notify_stock(&self.stock_feed, record.id, record.stock);
        }
        Ok(records)
    }

    /// Fetch a single record by id.
    pub async fn get(&self, id: i64) -> ClientResult<Record> {
        let url = self.config.endpoint(&format!("records/{id}"));
        let response = self.http.get(&url).send().await?;
        let body = read_json(response).await?;

        envelope::unwrap_object::<RecordWire>(&body)
            .map(Record::from)
            .ok_or_else(|| ClientError::Parse(format!("unrecognized record body for id {id}")))
    }

    /// Create a record. Requires a bearer token; fails locally without one.
    pub async fn create(&self, payload: &RecordPayload) -> ClientResult<Record> {
        let token = self.require_token()?;
        let url = self.config.endpoint("records");
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        let body = read_json(response).await?;
        Ok(Self::unwrap_written(&body).unwrap_or_else(|| payload.echo(0)))
    }

    /// Update a record by id. Requires a bearer token; fails locally
    /// without one.
    pub async fn update(&self, id: i64, payload: &RecordPayload) -> ClientResult<Record> {
        let token = self.require_token()?;
        let url = self.config.endpoint(&format!("records/{id}"));
        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await?;
        let body = read_json(response).await?;
        Ok(Self::unwrap_written(&body).unwrap_or_else(|| payload.echo(id)))
    }

    /// Delete a record by id.
    ///
    /// Any 2xx counts as success; a bodyless response is answered with a
    /// synthesized `{"success": true}`.
    pub async fn delete(&self, id: i64) -> ClientResult<Value> {
        let token = self.require_token()?;
        let url = self.config.endpoint(&format!("records/{id}"));
        let response = self.http.delete(&url).bearer_auth(token).send().await?;
        let body = read_json(response).await?;
        if body.is_null() {
            Ok(json!({"success": true}))
        } else {
            Ok(body)
        }
    }

    /// List the records of one group, with the group name denormalized onto
    /// each record.
    ///
    /// Requires the `{success, data: {Records, NameGroup, ...}}` envelope; a
    /// malformed shape yields an empty list.
    pub async fn list_by_group(&self, group_id: i64) -> ClientResult<Vec<Record>> {
        let url = self.config.endpoint(&format!("records/group/{group_id}"));
        let response = self.http.get(&url).send().await?;
        let body = read_json(response).await?;

        let envelope = match serde_json::from_value::<ApiEnvelope<GroupRecordsWire>>(body) {
            Ok(envelope) if envelope.success => envelope,
            Ok(_) => {
                warn!(%url, "by-group response flagged unsuccessful, returning empty list");
                return Ok(Vec::new());
            }
            Err(err) => {
                warn!(%url, %err, "unrecognized by-group envelope, returning empty list");
                return Ok(Vec::new());
            }
        };

        let group_name = envelope.data.group_name;
        let fallback_group_id = envelope.data.group_id;
        Ok(envelope
            .data
            .records
            .into_iter()
            .map(|wire| {
                let mut record = Record::from(wire);
                record.group_name = Some(group_name.clone());
                if record.group_id == 0 {
                    record.group_id = fallback_group_id;
                }
                record
            })
            .collect())
    }

    /// Raise stock by one and broadcast the +1 delta.
    pub async fn increment_stock(&self, id: i64) -> ClientResult<()> {
        self.adjust_stock(id, 1).await
    }

    /// Lower stock by one and broadcast the -1 delta.
    pub async fn decrement_stock(&self, id: i64) -> ClientResult<()> {
        self.adjust_stock(id, -1).await
    }

    /// Send a signed stock delta.
    ///
    /// The request is built manually before execution so the transport-level
    /// call is torn down when the returned future is dropped. On HTTP
    /// success the same delta is broadcast locally, whatever the response
    /// body said.
    async fn adjust_stock(&self, id: i64, delta: i64) -> ClientResult<()> {
        let url = self.config.endpoint(&format!("records/{id}/stock"));
        let mut builder = self
            .http
            .request(Method::POST, &url)
            .json(&json!({"delta": delta}));
        if let Some(token) = self.tokens.bearer_token() {
            builder = builder.bearer_auth(token);
        }
        let request = builder.build()?;

        let response = self.http.execute(request).await?;
        ensure_success(response).await?;

        notify_stock(&self.stock_feed, id, delta);
        Ok(())
    }
}
