//! Process-wide client-side store.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::mvi::Intent;
use crate::state::action::Event;
use crate::state::root::RootState;

const EVENT_CAPACITY: usize = 256;

/// Holds the root state and applies dispatched events to it.
///
/// Dispatch is serialised by the `watch` sender; subscribers are woken
/// only when an event actually changed a slice.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: watch::Sender<RootState>,
    events: broadcast::Sender<Event>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(RootState::default())
    }

    pub fn with_state(state: RootState) -> Self {
        let (state, _) = watch::channel(state);
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(StoreInner { state, events }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> RootState {
        self.inner.state.borrow().clone()
    }

    /// Reduce `event` into the state. Returns whether anything changed.
    pub fn dispatch(&self, event: Event) -> bool {
        let changed = self.inner.state.send_if_modified(|state| {
            let next = state.clone().reduce(&event.action);
            if next.ptr_eq(state) {
                false
            } else {
                *state = next;
                true
            }
        });

        if event.action.is_failure() {
            tracing::warn!(action = event.action.name(), "failure dispatched");
        } else {
            tracing::debug!(
                action = event.action.name(),
                received_at = event.received_at_millis() as u64,
                changed,
                "action dispatched"
            );
        }

        // No event subscribers is fine.
        let _ = self.inner.events.send(event);
        changed
    }

    /// Watch the root state; `changed()` resolves after each effective dispatch.
    pub fn subscribe(&self) -> watch::Receiver<RootState> {
        self.inner.state.subscribe()
    }

    /// Receive every dispatched event, including ones that changed nothing.
    pub fn subscribe_events(&self) -> broadcast::Receiver<Event> {
        self.inner.events.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
