//! Name search over the local mirror.

mod debounce;

pub use debounce::{QueryInput, SearchDebouncer};

use crate::listing::Record;

/// Case-insensitive substring match on the listing name.
///
/// A blank query matches everything. Order is preserved.
pub fn filter_by_name<'a>(items: &'a [Record], query: &str) -> Vec<&'a Record> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}
