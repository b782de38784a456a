use std::collections::HashSet;

use crate::listing::Record;
use crate::mvi::Reducer;
use crate::store::intent::{CollectionIntent, Operation};
use crate::store::state::{CollectionState, LoadStatus};

pub struct CollectionReducer;

impl Reducer for CollectionReducer {
    type State = CollectionState;
    type Intent = CollectionIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CollectionIntent::Started { operation } => {
                state.last_error = None;
                if operation == Operation::List {
                    state.status = LoadStatus::Loading;
                }
                state
            }
            CollectionIntent::ListLoaded { items } => CollectionState {
                items: dedup_by_id(items),
                status: LoadStatus::Succeeded,
                last_error: None,
            },
            CollectionIntent::ListFailed { message } => CollectionState {
                status: LoadStatus::Failed,
                last_error: Some(message),
                ..state
            },
            CollectionIntent::Created { record } => {
                match state.position(&record.id) {
                    Some(index) => state.items[index] = record,
                    None => state.items.push(record),
                }
                state
            }
            CollectionIntent::Updated { record } => {
                // Unknown id: the remote accepted it but the mirror stays as is.
                if let Some(index) = state.position(&record.id) {
                    state.items[index] = record;
                }
                state
            }
            CollectionIntent::Deleted { id } => {
                state.items.retain(|r| r.id != id);
                state
            }
        }
    }
}

/// Keeps the first occurrence of every id, preserving server order.
fn dedup_by_id(items: Vec<Record>) -> Vec<Record> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|r| seen.insert(r.id.clone()))
        .collect()
}
