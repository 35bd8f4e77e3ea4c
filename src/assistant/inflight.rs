//! Per-visitor, per-widget request guard.

use crate::assistant::prompts::Widget;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use uuid::Uuid;

/// Registry of questions currently waiting on the backend.
///
/// A visitor has at most one pending question per widget; a second
/// submission is refused until the guard of the first is dropped.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    active: Arc<Mutex<HashSet<(Uuid, Widget)>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot, or `None` when the visitor already has a question
    /// pending for this widget.
    pub fn try_acquire(&self, visitor: Uuid, widget: Widget) -> Option<InFlightGuard> {
        let key = (visitor, widget);
        if !self.active.lock().insert(key) {
            return None;
        }
        Some(InFlightGuard {
            registry: self.clone(),
            key,
        })
    }
}

/// Releases the slot on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    registry: InFlight,
    key: (Uuid, Widget),
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry.active.lock().remove(&self.key);
    }
}
