//! `recordshop-core` — shared foundation for the data-access clients.
//!
//! Error model, connection settings, bearer-token lookup and response
//! envelope normalization. No domain entities live here.

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod token;

pub use config::ClientConfig;
pub use envelope::{ApiEnvelope, ListEnvelope, unwrap_list, unwrap_object};
pub use error::{ClientError, ClientResult};
pub use token::{MemoryTokenStore, TokenProvider, TokenScope};
