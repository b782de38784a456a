//! The remote collection store.
//!
//! Owns the [`CollectionState`] and changes it only through
//! [`CollectionReducer`]. Each operation is one HTTP round trip; the state
//! is updated before the request (`Started`) and after it settles.
//!
//! Operations may run concurrently from clones of the same store. Nothing
//! orders them: the response that resolves last wins.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::Instrument;
use uuid::Uuid;

use crate::error::StoreError;
use crate::listing::{Draft, ListingForm, Record, RecordId};
use crate::mvi::Reducer;
use crate::remote::ResourceClient;
use crate::store::intent::{CollectionIntent, Operation};
use crate::store::reducer::CollectionReducer;
use crate::store::state::CollectionState;

#[derive(Clone)]
pub struct CollectionStore {
    client: ResourceClient,
    state: Arc<watch::Sender<CollectionState>>,
}

impl CollectionStore {
    pub fn new(client: ResourceClient) -> Self {
        let (state, _) = watch::channel(CollectionState::default());
        Self {
            client,
            state: Arc::new(state),
        }
    }

    /// Current state, cloned.
    pub fn snapshot(&self) -> CollectionState {
        self.state.borrow().clone()
    }

    /// Observe every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<CollectionState> {
        self.state.subscribe()
    }

    /// Fetch the whole collection and replace the local items with it.
    ///
    /// On failure the items are kept and the message lands in `last_error`.
    pub async fn list(&self) -> Result<Vec<Record>, StoreError> {
        self.dispatch(CollectionIntent::Started {
            operation: Operation::List,
        });

        let result = self
            .client
            .fetch_all()
            .instrument(operation_span(Operation::List))
            .await;

        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "Listings loaded");
                self.dispatch(CollectionIntent::ListLoaded {
                    items: items.clone(),
                });
                Ok(items)
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Listing load failed");
                self.dispatch(CollectionIntent::ListFailed {
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Validate `form`, then create it remotely and append the result.
    pub async fn create(&self, form: &ListingForm) -> Result<Record, StoreError> {
        let draft = form.validate()?;
        self.create_draft(&draft).await
    }

    /// Create an already validated `draft` remotely and append the result.
    pub async fn create_draft(&self, draft: &Draft) -> Result<Record, StoreError> {
        self.dispatch(CollectionIntent::Started {
            operation: Operation::Create,
        });

        let record = self
            .client
            .insert(draft)
            .instrument(operation_span(Operation::Create))
            .await
            .inspect_err(|err| log_failure(Operation::Create, err))?;

        tracing::info!(id = %record.id, "Listing created");
        self.dispatch(CollectionIntent::Created {
            record: record.clone(),
        });
        Ok(record)
    }

    /// Validate `form`, then replace listing `id` remotely.
    ///
    /// The local entry is replaced in place when present. When it is not,
    /// the mirror is left alone even though the remote accepted the update.
    pub async fn update(&self, id: &RecordId, form: &ListingForm) -> Result<Record, StoreError> {
        let draft = form.validate()?;
        self.update_draft(id, draft).await
    }

    /// Replace listing `id` remotely with an already validated `draft`.
    pub async fn update_draft(&self, id: &RecordId, draft: Draft) -> Result<Record, StoreError> {
        let record = draft.with_id(id.clone());
        self.dispatch(CollectionIntent::Started {
            operation: Operation::Update,
        });

        let updated = self
            .client
            .replace(&record)
            .instrument(operation_span(Operation::Update))
            .await
            .inspect_err(|err| log_failure(Operation::Update, err))?;

        if self.state.borrow().position(&updated.id).is_none() {
            tracing::debug!(id = %updated.id, "Updated listing not in local mirror");
        }
        self.dispatch(CollectionIntent::Updated {
            record: updated.clone(),
        });
        Ok(updated)
    }

    /// Delete listing `id` remotely, then drop it locally.
    ///
    /// The request is sent whether or not the id is known locally.
    pub async fn delete(&self, id: &RecordId) -> Result<(), StoreError> {
        self.dispatch(CollectionIntent::Started {
            operation: Operation::Delete,
        });

        self.client
            .remove(id)
            .instrument(operation_span(Operation::Delete))
            .await
            .inspect_err(|err| log_failure(Operation::Delete, err))?;

        tracing::info!(id = %id, "Listing deleted");
        self.dispatch(CollectionIntent::Deleted { id: id.clone() });
        Ok(())
    }

    fn dispatch(&self, intent: CollectionIntent) {
        self.state.send_modify(|state| {
            let current = std::mem::take(state);
            *state = CollectionReducer::reduce(current, intent);
        });
    }
}

fn operation_span(operation: Operation) -> tracing::Span {
    tracing::info_span!(
        "store_op",
        op = %operation,
        request_id = %Uuid::new_v4()
    )
}

fn log_failure(operation: Operation, err: &StoreError) {
    tracing::warn!(op = %operation, kind = err.kind(), error = %err, "Operation failed");
}
