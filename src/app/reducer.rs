//! Pure reducer: state transitions only, no I/O.
//!
//! # Purity Rules
//!
//! The reducer MUST NOT:
//! - Call `Instant::now()` (time is passed as `now` parameter)
//! - Perform I/O operations
//! - Spawn async tasks
//!
//! This keeps the reducer testable without mocking time or I/O.

use std::time::Instant;

use tracing::trace;

use crate::app::action::Action;
use crate::app::effect::Effect;
use crate::app::reducers::{
    after_window_change, apply_pending_filters, reduce_load, reduce_navigation, reduce_table,
};
use crate::app::state::AppState;

pub fn reduce(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    // Ticks mark dirty themselves, only when a timer actually changed something
    let should_mark_dirty = !matches!(action, Action::None | Action::Render | Action::Tick);

    let effects = reduce_inner(state, action, now);

    if should_mark_dirty {
        state.mark_dirty();
    }

    effects
}

fn reduce_inner(state: &mut AppState, action: Action, now: Instant) -> Vec<Effect> {
    if let Some(effects) = reduce_load(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_table(state, &action, now) {
        return effects;
    }
    if let Some(effects) = reduce_navigation(state, &action, now) {
        return effects;
    }

    match action {
        Action::None => vec![],
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(_w, h) => {
            state.ui.terminal_height = h;
            state.timers.scroll.schedule(now);
            vec![]
        }
        Action::Render => {
            state.clear_expired_timers(now);
            state.clear_dirty();
            vec![Effect::Render]
        }
        Action::Tick => {
            run_timers(state, now);
            vec![]
        }
        Action::DispatchActions(actions) => vec![Effect::DispatchActions(actions)],
        _ => vec![],
    }
}

/// Fires whichever debounces are due.
fn run_timers(state: &mut AppState, now: Instant) {
    state.clear_expired_timers(now);

    if state.timers.filter.fire(now) {
        trace!("Filter debounce fired");
        apply_pending_filters(state, now);
        state.mark_dirty();
    }

    if state.timers.scroll.fire(now) {
        let bottom = state.ui.viewport_bottom();
        let threshold = state.config.extend_threshold_rows;
        if let Some(session) = state.session_mut()
            && session.view().window().near_end(bottom, threshold)
        {
            let change = session.update(|view| view.extend_window());
            trace!(?change, "Render window extended");
            after_window_change(state, &change, now);
            state.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::app::config::ViewerConfig;
    use crate::app::session::{DataState, TableSession};
    use crate::domain::{LoadOutcome, Payload};

    fn numbered_payload(count: usize) -> Arc<Payload> {
        Arc::new(Payload::new(
            vec!["n".to_string(), "label".to_string()],
            (0..count)
                .map(|i| vec![i.to_string(), format!("row {i}")])
                .collect(),
        ))
    }

    fn ready_state(count: usize) -> AppState {
        let mut state =
            AppState::new("df".to_string(), "test".to_string(), ViewerConfig::default());
        state.data = DataState::Ready(Box::new(TableSession::new(
            numbered_payload(count),
            state.config.view_options(),
        )));
        state.ui.body_height = 20;
        state
    }

    fn rendered(state: &AppState) -> usize {
        state.rendered_rows()
    }

    mod dirty_tracking {
        use super::*;

        #[test]
        fn state_changing_action_marks_dirty() {
            let mut state = ready_state(5);
            state.clear_dirty();

            reduce(&mut state, Action::SelectNextRow, Instant::now());

            assert!(state.render_dirty);
        }

        #[test]
        fn idle_tick_stays_clean() {
            let mut state = ready_state(5);
            state.clear_dirty();

            reduce(&mut state, Action::Tick, Instant::now());

            assert!(!state.render_dirty);
        }

        #[test]
        fn render_clears_dirty_and_emits_render() {
            let mut state = ready_state(5);

            let effects = reduce(&mut state, Action::Render, Instant::now());

            assert!(!state.render_dirty);
            assert!(matches!(effects.as_slice(), [Effect::Render]));
        }
    }

    mod filter_debounce {
        use super::*;

        #[test]
        fn burst_of_edits_recomputes_once_after_quiet_period() {
            let mut state = ready_state(30);
            let start = Instant::now();
            let generation_before = state.session().unwrap().view().generation();

            reduce(&mut state, Action::FilterInput('1'), start);
            reduce(&mut state, Action::FilterInput('2'), start + Duration::from_millis(100));
            reduce(&mut state, Action::Tick, start + Duration::from_millis(350));

            // Second keystroke pushed the deadline to 400ms
            assert_eq!(state.session().unwrap().view().generation(), generation_before);

            reduce(&mut state, Action::Tick, start + Duration::from_millis(400));

            let view = state.session().unwrap().view();
            assert_eq!(view.generation(), generation_before + 1);
            assert_eq!(view.len(), 1);
        }
    }

    mod window_extension {
        use super::*;

        #[test]
        fn scrolling_near_bottom_extends_after_debounce() {
            let mut state = ready_state(250);
            let start = Instant::now();

            reduce(&mut state, Action::ScrollRows(75), start);
            assert_eq!(rendered(&state), 100);

            reduce(&mut state, Action::Tick, start + Duration::from_millis(100));

            assert_eq!(rendered(&state), 200);
        }

        #[test]
        fn scrolling_far_from_bottom_does_not_extend() {
            let mut state = ready_state(250);
            let start = Instant::now();

            reduce(&mut state, Action::ScrollRows(10), start);
            reduce(&mut state, Action::Tick, start + Duration::from_millis(100));

            assert_eq!(rendered(&state), 100);
        }

        #[test]
        fn sort_after_extension_resets_window() {
            let mut state = ready_state(250);
            let start = Instant::now();
            reduce(&mut state, Action::ScrollRows(80), start);
            reduce(&mut state, Action::Tick, start + Duration::from_millis(100));
            assert_eq!(rendered(&state), 200);

            reduce(&mut state, Action::HeaderClick(0), start + Duration::from_millis(200));

            assert_eq!(rendered(&state), 100);
            assert_eq!(state.ui.scroll_offset, 0);
        }
    }

    #[test]
    fn load_cycle_ends_in_ready_state() {
        let mut state =
            AppState::new("df".to_string(), "test".to_string(), ViewerConfig::default());
        let now = Instant::now();

        let effects = reduce(&mut state, Action::Load, now);
        assert!(matches!(
            effects.as_slice(),
            [Effect::FetchPayload { generation: 1 }]
        ));

        reduce(
            &mut state,
            Action::PayloadLoaded {
                generation: 1,
                result: Ok(LoadOutcome::Loaded(numbered_payload(3))),
            },
            now,
        );

        assert_eq!(rendered(&state), 3);
    }

    #[test]
    fn quit_sets_flag() {
        let mut state = ready_state(1);

        reduce(&mut state, Action::Quit, Instant::now());

        assert!(state.should_quit);
    }
}
