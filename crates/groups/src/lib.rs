//! `recordshop-groups` — category client.
//!
//! CRUD calls for record groups and their music-genre metadata, with
//! response-envelope normalization and image-URL resolution.

pub mod client;
pub mod group;

pub use client::GroupClient;
pub use group::{ASSET_BASE, Group, GroupPayload, GroupWire, UNKNOWN_GENRE, resolve_image_url};
