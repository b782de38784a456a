use crate::listing::{Draft, Field, FieldError, ListingForm, Problem};
use crate::mvi::ViewState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub form: ListingForm,
    pub errors: Vec<FieldError>,
    pub submitting: bool,
    /// Validated payload of the submission in flight.
    pub pending: Option<Draft>,
    /// Message of the last failed submission.
    pub last_failure: Option<String>,
}

impl ViewState for FormState {}

impl FormState {
    pub fn error_for(&self, field: Field) -> Option<Problem> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.problem)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
