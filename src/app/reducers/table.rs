//! Table sub-reducer: sorting, filter editing, column widths, clipboard.

use std::time::Instant;

use tracing::{debug, warn};

use super::helpers::{after_window_change, filter_text};
use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::app::yank::{YankError, row_as_tsv};

/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_table(state: &mut AppState, action: &Action, now: Instant) -> Option<Vec<Effect>> {
    match action {
        Action::HeaderClick(column) => {
            sort_column(state, *column, now);
            Some(vec![])
        }
        Action::SortSelectedColumn => {
            sort_column(state, state.ui.selected_column, now);
            Some(vec![])
        }
        Action::ClearAll => {
            state.timers.filter.cancel();
            if let Some(session) = state.session_mut() {
                let change = session.update(|view| view.clear_all());
                after_window_change(state, &change, now);
                state
                    .messages
                    .set_info_at("Cleared filters and sorting".to_string(), now);
            }
            Some(vec![])
        }

        Action::EditFilter(column) => {
            if state.session().is_some() {
                let count = state.column_count();
                state.ui.select_column(*column, count);
                state.ui.input_mode = InputMode::FilterEdit;
            }
            Some(vec![])
        }
        Action::OpenFilterEditor => {
            if state.session().is_some() {
                state.ui.input_mode = InputMode::FilterEdit;
            }
            Some(vec![])
        }
        Action::FilterInput(c) => {
            let mut text = filter_text(state, state.ui.selected_column);
            text.push(*c);
            edit_selected_filter(state, text, now);
            Some(vec![])
        }
        Action::FilterBackspace => {
            let mut text = filter_text(state, state.ui.selected_column);
            text.pop();
            edit_selected_filter(state, text, now);
            Some(vec![])
        }
        Action::FilterClearField => {
            edit_selected_filter(state, String::new(), now);
            Some(vec![])
        }
        Action::FilterCommit => {
            state.timers.filter.cancel();
            apply_pending_filters(state, now);
            state.ui.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::FilterClose => {
            // A pending debounce still fires after the editor closes
            state.ui.input_mode = InputMode::Normal;
            Some(vec![])
        }

        Action::ColumnResizeStart {
            column,
            pointer_x,
            current_width,
        } => {
            if let Some(session) = state.session_mut() {
                session.begin_resize(*column, *pointer_x, *current_width);
            }
            Some(vec![])
        }
        Action::ColumnResizeDrag { pointer_x } => {
            if let Some(session) = state.session_mut() {
                session.drag_resize(*pointer_x);
            }
            Some(vec![])
        }
        Action::ColumnResizeEnd => {
            if let Some(session) = state.session_mut() {
                session.end_resize();
            }
            Some(vec![])
        }
        Action::NudgeColumnWidth(delta) => {
            let column = state.ui.selected_column;
            let drawn = state.ui.grid.slot(column).map(|slot| slot.width);
            if let Some(session) = state.session_mut() {
                let current = session
                    .view()
                    .column_width(column)
                    .or(drawn)
                    .unwrap_or_else(|| session.view().min_column_width());
                let width = session.nudge_width(column, current, *delta);
                debug!(column, width, "Column width nudged");
            }
            Some(vec![])
        }

        Action::YankCell => Some(yank_cell(state, now)),
        Action::YankRow => Some(yank_row(state, now)),
        Action::CopySucceeded(description) => {
            state
                .messages
                .set_info_at(format!("Copied {description}"), now);
            Some(vec![])
        }
        Action::CopyFailed(message) => {
            state.messages.set_error_at(message.clone(), now);
            Some(vec![])
        }

        _ => None,
    }
}

/// Runs the filter recomputation if an edit is waiting for it.
pub fn apply_pending_filters(state: &mut AppState, now: Instant) {
    if let Some(session) = state.session_mut() {
        let change = session.update(|view| view.apply_pending_filters());
        after_window_change(state, &change, now);
    }
}

fn sort_column(state: &mut AppState, column: usize, now: Instant) {
    // The sort pass folds in any pending filter edit
    state.timers.filter.cancel();
    let count = state.column_count();
    if let Some(session) = state.session_mut() {
        let change = session.update(|view| view.toggle_sort(column));
        after_window_change(state, &change, now);
        state.ui.select_column(column, count);
    }
}

fn edit_selected_filter(state: &mut AppState, text: String, now: Instant) {
    let column = state.ui.selected_column;
    if let Some(session) = state.session_mut() {
        session.edit_filter(column, text);
        state.timers.filter.schedule(now);
    }
}

fn selected_cells(state: &AppState) -> Option<(usize, &[String])> {
    let session = state.session()?;
    let row = session.view().display_row(state.ui.selected_row)?;
    Some((row.row_number(), row.cells))
}

fn yank_cell(state: &mut AppState, now: Instant) -> Vec<Effect> {
    let column = state.ui.selected_column;
    let Some((row_number, cells)) = selected_cells(state) else {
        state
            .messages
            .set_error_at(YankError::NothingSelected.to_string(), now);
        return vec![];
    };
    let content = cells.get(column).cloned().unwrap_or_default();
    vec![Effect::CopyToClipboard {
        content,
        description: format!("cell (row {row_number})"),
    }]
}

fn yank_row(state: &mut AppState, now: Instant) -> Vec<Effect> {
    let result = selected_cells(state)
        .ok_or(YankError::NothingSelected)
        .and_then(|(row_number, cells)| row_as_tsv(cells).map(|tsv| (row_number, tsv)));

    match result {
        Ok((row_number, content)) => vec![Effect::CopyToClipboard {
            content,
            description: format!("row {row_number}"),
        }],
        Err(e) => {
            warn!(error = %e, "Row yank failed");
            state.messages.set_error_at(e.to_string(), now);
            vec![]
        }
    }
}
