//! `recordshop-catalog` — catalog-item client.
//!
//! CRUD and stock-adjustment calls for records, with response-envelope
//! normalization and stock-change broadcasting over
//! [`recordshop_events::StockFeed`].

pub mod client;
pub mod record;

pub use client::RecordClient;
pub use record::{Record, RecordPayload, RecordWire};
