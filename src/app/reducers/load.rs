//! Load sub-reducer: fetch requests and payload arrival.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::helpers::after_window_change;
use crate::app::action::Action;
use crate::app::display_text::sanitize_for_display;
use crate::app::effect::Effect;
use crate::app::engine::WindowChange;
use crate::app::input_mode::InputMode;
use crate::app::session::{DataState, TableSession};
use crate::app::state::AppState;
use crate::domain::LoadOutcome;

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_load(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::Load => {
            state.load_generation += 1;
            state.data = DataState::Loading;
            info!(generation = state.load_generation, source = %state.source, "Loading payload");
            Some(vec![Effect::FetchPayload {
                generation: state.load_generation,
            }])
        }
        Action::Refresh => {
            // The current table stays on screen until the new payload lands
            state.load_generation += 1;
            state
                .messages
                .set_info_at("Refresh requested".to_string(), now);
            info!(generation = state.load_generation, "Refresh requested");
            Some(vec![Effect::FetchPayload {
                generation: state.load_generation,
            }])
        }
        Action::PayloadLoaded { generation, result } => {
            if *generation != state.load_generation {
                debug!(
                    generation,
                    current = state.load_generation,
                    "Discarding stale payload"
                );
                return Some(vec![]);
            }
            apply_outcome(state, result.clone(), now);
            Some(vec![])
        }
        _ => None,
    }
}

fn apply_outcome(state: &mut AppState, result: Result<LoadOutcome, String>, now: Instant) {
    let keeps_table = matches!(result, Ok(LoadOutcome::Pending)) && state.session().is_some();
    if !keeps_table {
        state.timers.filter.cancel();
        if state.ui.input_mode == InputMode::FilterEdit {
            state.ui.input_mode = InputMode::Normal;
        }
    }

    match result {
        Ok(LoadOutcome::Loaded(payload)) => {
            info!(
                rows = payload.len(),
                columns = payload.width(),
                "Payload loaded"
            );
            let session = TableSession::new(payload, state.config.view_options());
            let first_batch = WindowChange::Reset(session.view().window().visible());
            state.data = DataState::Ready(Box::new(session));
            state.ui.selected_column = 0;
            state.ui.horizontal_offset = 0;
            after_window_change(state, &first_batch, now);
        }
        Ok(LoadOutcome::Failed(message)) => {
            warn!(error = %message, "Source reported an error");
            state.data = DataState::Failed(sanitize_for_display(&message));
        }
        Ok(LoadOutcome::Pending) => {
            debug!("Payload not ready yet");
            // A refresh that finds nothing new leaves the current table up
            if !keeps_table {
                state.data = DataState::Loading;
            }
            state.messages.set_info_at(
                "No data yet, press r to retry".to_string(),
                now,
            );
        }
        Err(message) => {
            warn!(error = %message, "Payload unavailable");
            state.data = DataState::Unavailable(sanitize_for_display(&message));
        }
    }
}
