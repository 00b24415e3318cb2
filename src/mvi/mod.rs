//! Unidirectional data-flow primitives.
//!
//! # Architecture
//!
//! ```text
//! ActionRequest ──→ API ──→ Intent ──→ Reducer ──→ State ──→ View
//!       ↑                                                      │
//!       └──────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable slice of the client-side cache
//! - **Intent**: Event dispatched after a request settles
//! - **Reducer**: Pure function that transforms a slice based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::SliceState;
