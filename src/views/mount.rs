//! Mount/unmount lifecycle for containers.

use parking_lot::Mutex;
use scopeguard::ScopeGuard;
use tokio::task::{AbortHandle, JoinHandle};

use crate::actions::{ActionRequest, Dispatcher};
use crate::state::Event;

type Cleanup = Box<dyn FnOnce() + Send>;

fn run_cleanups(cleanups: Vec<Cleanup>) {
    for cleanup in cleanups.into_iter().rev() {
        cleanup();
    }
}

/// Handle for a mounted container.
///
/// Requests triggered through the guard are aborted when it is dropped,
/// so nothing dispatches on behalf of an unmounted view. Registered
/// cleanups run exactly once, in reverse registration order.
pub struct MountGuard {
    dispatcher: Dispatcher,
    /// Join handles not yet awaited by `settle`.
    tasks: Mutex<Vec<JoinHandle<Event>>>,
    /// One per triggered request. Outlives a cancelled `settle`.
    aborts: Mutex<Vec<AbortHandle>>,
    cleanups: ScopeGuard<Vec<Cleanup>, fn(Vec<Cleanup>)>,
}

impl MountGuard {
    /// Mount and trigger `requests`.
    pub fn mount(dispatcher: Dispatcher, requests: Vec<ActionRequest>) -> Self {
        let guard = Self {
            dispatcher,
            tasks: Mutex::new(Vec::new()),
            aborts: Mutex::new(Vec::new()),
            cleanups: scopeguard::guard(Vec::new(), run_cleanups as fn(Vec<Cleanup>)),
        };
        for request in requests {
            guard.trigger(request);
        }
        guard
    }

    /// Start another request owned by this mount.
    pub fn trigger(&self, request: ActionRequest) {
        let handle = self.dispatcher.spawn(request);
        {
            let mut aborts = self.aborts.lock();
            aborts.retain(|abort| !abort.is_finished());
            aborts.push(handle.abort_handle());
        }
        self.tasks.lock().push(handle);
    }

    /// Register a side effect to undo on unmount.
    pub fn on_unmount(&mut self, cleanup: impl FnOnce() + Send + 'static) {
        self.cleanups.push(Box::new(cleanup));
    }

    /// Wait for every request triggered so far and return their events.
    pub async fn settle(&self) -> Vec<Event> {
        let handles = std::mem::take(&mut *self.tasks.lock());
        let mut events = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(event) => events.push(event),
                Err(err) => tracing::debug!(error = %err, "mounted request did not complete"),
            }
        }
        events
    }
}

impl Drop for MountGuard {
    fn drop(&mut self) {
        let aborts = std::mem::take(&mut *self.aborts.lock());
        let pending = aborts.iter().filter(|abort| !abort.is_finished()).count();
        if pending > 0 {
            tracing::debug!(pending, "unmounting, aborting in-flight requests");
        }
        for abort in aborts {
            abort.abort();
        }
    }
}
