//! Action creators: request descriptions, the shared error handler and
//! the dispatcher that runs them.

mod dispatcher;
mod handler;
mod request;

pub use dispatcher::Dispatcher;
pub use handler::handle_errors;
pub use request::ActionRequest;
