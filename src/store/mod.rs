//! In-memory mirror of the remote listing collection.

mod collection;
mod intent;
mod reducer;
mod state;

pub use collection::CollectionStore;
pub use intent::{CollectionIntent, Operation};
pub use reducer::CollectionReducer;
pub use state::{CollectionState, LoadStatus};
