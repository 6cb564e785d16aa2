//! Stock-change notification payload.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::bus::EventBus;
use crate::in_memory_bus::InMemoryEventBus;

/// Notification that a record's stock changed.
///
/// `quantity` is either a signed delta (stock adjustment) or an absolute
/// stock value (list refresh). Consumers are expected to treat it as display
/// state, not as an authoritative counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockChange {
    pub record_id: i64,
    pub quantity: i64,
}

/// The shared stock-notification channel UI components subscribe to.
pub type StockFeed = InMemoryEventBus<StockChange>;

/// Fire-and-forget publish; a poisoned bus is logged and dropped.
pub fn notify_stock(feed: &Arc<StockFeed>, record_id: i64, quantity: i64) {
    if feed
        .publish(StockChange {
            record_id,
            quantity,
        })
        .is_err()
    {
        tracing::warn!(record_id, quantity, "stock feed unavailable, notification dropped");
    }
}
