//! Listing data model: records, drafts, and the validated form.

mod form;
mod types;

pub use form::{Field, FieldError, ListingForm, Problem, ValidationError};
pub use types::{Draft, Record, RecordId};
