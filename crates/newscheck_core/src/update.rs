use crate::{AppState, Effect, Msg, Phase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited { field, value } => {
            // Inputs are locked while a request is in flight.
            if state.phase() == Phase::Submitting {
                return (state, Vec::new());
            }
            state.edit_field(field, &value);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if !state.draft().is_submittable() {
                return (state, Vec::new());
            }
            match state.begin_submit() {
                Some((request_id, draft)) => vec![Effect::SubmitPrediction { request_id, draft }],
                None => Vec::new(),
            }
        }
        Msg::ResetClicked => {
            state.reset();
            Vec::new()
        }
        Msg::ThemeToggled => {
            let theme = state.toggle_theme();
            vec![Effect::PersistTheme { theme }]
        }
        Msg::PredictionCompleted {
            request_id,
            outcome,
        } => {
            state.resolve(request_id, outcome);
            Vec::new()
        }
    };

    (state, effects)
}
