use crate::form::intent::FormIntent;
use crate::form::state::FormState;
use crate::mvi::Reducer;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::Load { form } => FormState {
                form,
                ..FormState::default()
            },
            FormIntent::Change { field, value } => {
                state.form.set(field, value);
                state.errors.retain(|e| e.field != field);
                state
            }
            FormIntent::Submit => {
                // Double submit while a request is in flight.
                if state.submitting {
                    return state;
                }
                match state.form.validate() {
                    Ok(draft) => FormState {
                        errors: Vec::new(),
                        submitting: true,
                        pending: Some(draft),
                        last_failure: None,
                        ..state
                    },
                    Err(err) => FormState {
                        errors: err.errors,
                        pending: None,
                        ..state
                    },
                }
            }
            FormIntent::Finished { error } => FormState {
                submitting: false,
                pending: None,
                last_failure: error,
                ..state
            },
        }
    }
}
