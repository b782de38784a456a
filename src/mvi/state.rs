//! Marker trait for observable state.

/// State snapshots are cloned out to readers and compared to detect change.
///
/// `Sync` is required so snapshots can be published through a
/// `tokio::sync::watch` channel.
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
