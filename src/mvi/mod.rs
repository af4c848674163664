//! Model-View-Intent (MVI) primitives.
//!
//! The quiz session is driven by unidirectional data flow:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: representation of session progress
//! - **Intent**: user actions or system events (timer ticks, fetch results)
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ModelState;
