use std::sync::{Arc, Mutex, MutexGuard};

use crate::events::BridgeEvent;

/// Shared queue between webview callbacks and the shell's event loop.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<BridgeEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: BridgeEvent) {
        self.lock().push(event);
    }

    /// Take every pending event, oldest first.
    pub fn drain(&self) -> Vec<BridgeEvent> {
        std::mem::take(&mut *self.lock())
    }

    // A callback that panicked mid-push leaves a valid Vec behind.
    fn lock(&self) -> MutexGuard<'_, Vec<BridgeEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_in_order_and_empties() {
        let sink = EventSink::new();
        let callback_side = sink.clone();
        callback_side.push(BridgeEvent::Message { body: "a".into() });
        callback_side.push(BridgeEvent::Closed);

        assert_eq!(
            sink.drain(),
            vec![BridgeEvent::Message { body: "a".into() }, BridgeEvent::Closed]
        );
        assert!(sink.drain().is_empty());
    }
}
