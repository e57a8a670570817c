//! Navigation sub-reducer: cursor, scrolling, help overlay.

use std::time::Instant;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;

/// Handles cursor, scroll and help actions.
/// Returns Some(effects) if action was handled, None otherwise.
pub fn reduce_navigation(
    state: &mut AppState,
    action: &Action,
    now: Instant,
) -> Option<Vec<Effect>> {
    let rendered = state.rendered_rows();
    let columns = state.column_count();

    match action {
        Action::ScrollRows(delta) => {
            state.ui.scroll_by(*delta, rendered);
            state.timers.scroll.schedule(now);
            Some(vec![])
        }
        Action::SelectNextRow => {
            state.ui.select_row(state.ui.selected_row + 1, rendered);
            state.timers.scroll.schedule(now);
            Some(vec![])
        }
        Action::SelectPrevRow => {
            state
                .ui
                .select_row(state.ui.selected_row.saturating_sub(1), rendered);
            Some(vec![])
        }
        Action::SelectFirstRow => {
            state.ui.select_row(0, rendered);
            Some(vec![])
        }
        Action::SelectLastRow => {
            state.ui.select_row(usize::MAX, rendered);
            state.timers.scroll.schedule(now);
            Some(vec![])
        }
        Action::PageDown => {
            let page = state.ui.body_rows();
            state.ui.scroll_by(page as isize, rendered);
            state.timers.scroll.schedule(now);
            Some(vec![])
        }
        Action::PageUp => {
            let page = state.ui.body_rows();
            state.ui.scroll_by(-(page as isize), rendered);
            Some(vec![])
        }
        Action::SelectNextColumn => {
            state
                .ui
                .select_column(state.ui.selected_column + 1, columns);
            Some(vec![])
        }
        Action::SelectPrevColumn => {
            state
                .ui
                .select_column(state.ui.selected_column.saturating_sub(1), columns);
            Some(vec![])
        }
        Action::SelectCell { row_offset, column } => {
            let row = state.ui.scroll_offset + row_offset;
            if row < rendered {
                state.ui.select_row(row, rendered);
            }
            if let Some(column) = column {
                state.ui.select_column(*column, columns);
            }
            Some(vec![])
        }

        Action::OpenHelp => {
            state.ui.input_mode = InputMode::Help;
            state.ui.help_scroll_offset = 0;
            Some(vec![])
        }
        Action::CloseHelp => {
            state.ui.input_mode = InputMode::Normal;
            Some(vec![])
        }
        Action::HelpScrollDown => {
            let max = state.ui.help_max_scroll();
            state.ui.help_scroll_offset = (state.ui.help_scroll_offset + 1).min(max);
            Some(vec![])
        }
        Action::HelpScrollUp => {
            state.ui.help_scroll_offset = state.ui.help_scroll_offset.saturating_sub(1);
            Some(vec![])
        }

        _ => None,
    }
}
