use std::fmt;

use crate::listing::{Record, RecordId};
use crate::mvi::Intent;

/// The four store operations, for logging and the `Started` intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        })
    }
}

#[derive(Debug, Clone)]
pub enum CollectionIntent {
    /// A request is about to be sent.
    Started { operation: Operation },
    ListLoaded { items: Vec<Record> },
    ListFailed { message: String },
    Created { record: Record },
    Updated { record: Record },
    Deleted { id: RecordId },
}

impl Intent for CollectionIntent {}
