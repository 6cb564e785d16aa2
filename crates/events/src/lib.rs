//! `recordshop-events` — stock-notification broadcast channel.
//!
//! A small pub/sub bus the catalog client pushes [`StockChange`]
//! notifications into, so UI components can react to stock movement without
//! polling.

pub mod bus;
pub mod in_memory_bus;
pub mod stock;

pub use bus::{EventBus, Subscription};
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
pub use stock::{StockChange, StockFeed, notify_stock};
