use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::actions::handler::handle_errors;
use crate::actions::request::ActionRequest;
use crate::api::ApiClient;
use crate::state::{Action, Event, Store};

/// Runs action creators against the API and dispatches their outcome.
#[derive(Clone)]
pub struct Dispatcher {
    client: Arc<ApiClient>,
    store: Store,
}

impl Dispatcher {
    pub fn new(client: ApiClient, store: Store) -> Self {
        Self {
            client: Arc::new(client),
            store,
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Perform `request` and dispatch exactly one terminal event:
    /// the success action, or `FAILED` from the shared error handler.
    pub async fn run(&self, request: ActionRequest) -> Event {
        tracing::debug!(creator = request.label(), "running action creator");
        let action = match request.perform(&self.client).await {
            Ok(action) => action,
            Err(error) => handle_errors(error, request),
        };
        let event = Event::now(action);
        self.store.dispatch(event.clone());
        event
    }

    /// Run `request` on the tokio runtime.
    pub fn spawn(&self, request: ActionRequest) -> JoinHandle<Event> {
        let dispatcher = self.clone();
        tokio::spawn(async move { dispatcher.run(request).await })
    }

    /// Clear the failure and run the request that caused it again.
    ///
    /// Returns `None` when no failure is recorded.
    pub async fn retry_failed(&self) -> Option<Event> {
        let origin = self.store.state().error.origin.clone()?;
        tracing::info!(creator = origin.label(), "retrying failed action creator");
        self.store.dispatch(Event::now(Action::ResetFailed));
        Some(self.run(origin).await)
    }
}
