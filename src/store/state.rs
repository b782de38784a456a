use std::fmt;

use crate::listing::{Record, RecordId};
use crate::mvi::ViewState;

/// Where the last `list` call stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoadStatus::Idle => "idle",
            LoadStatus::Loading => "loading",
            LoadStatus::Succeeded => "succeeded",
            LoadStatus::Failed => "failed",
        })
    }
}

/// Local mirror of the remote collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionState {
    /// Server order. At most one entry per id.
    pub items: Vec<Record>,
    pub status: LoadStatus,
    /// Message of the last failed `list`; cleared when any request starts.
    pub last_error: Option<String>,
}

impl ViewState for CollectionState {}

impl CollectionState {
    pub fn find(&self, id: &RecordId) -> Option<&Record> {
        self.items.iter().find(|r| &r.id == id)
    }

    pub fn position(&self, id: &RecordId) -> Option<usize> {
        self.items.iter().position(|r| &r.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }
}
