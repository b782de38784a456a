//! Model-View-Intent primitives shared by the collection store and the
//! listing form.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Front end
//!    ↑                                │
//!    └────────────────────────────────┘
//! ```
//!
//! - **State**: an immutable snapshot the front end renders from
//! - **Intent**: a request lifecycle event or a user edit
//! - **Reducer**: pure function producing the next state

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::ViewState;
