//! Shared helper functions for sub-reducers.

use std::time::Instant;

use crate::app::engine::WindowChange;
use crate::app::state::AppState;

/// Brings the cursor back to the top after the row sequence was replaced and
/// queues a window-extension check for the new sequence.
pub fn after_window_change(state: &mut AppState, change: &WindowChange, now: Instant) {
    match change {
        WindowChange::Reset(_) => {
            state.ui.reset_position();
            state.timers.scroll.schedule(now);
        }
        WindowChange::Append(_) => state.timers.scroll.schedule(now),
        WindowChange::Unchanged => {}
    }
}

/// Current text of `column`'s filter, or empty.
pub fn filter_text(state: &AppState, column: usize) -> String {
    state
        .session()
        .and_then(|s| s.view().filters().get(column))
        .unwrap_or_default()
        .to_string()
}
