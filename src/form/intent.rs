use crate::listing::{Field, ListingForm};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Replace the whole form, e.g. prefilled from a record being edited.
    Load { form: ListingForm },
    /// One field edited. Clears that field's error.
    Change { field: Field, value: String },
    /// Validate and, when valid, enter `submitting`. Ignored while already submitting.
    Submit,
    /// The request finished. `error` carries the failure message, if any.
    Finished { error: Option<String> },
}

impl Intent for FormIntent {}
