//! Pure functions for calculating timer deadlines.
//!
//! These functions are I/O-free and deterministic, suitable for use in the app layer.
//! The main loop sleeps until the returned deadline and then dispatches `Action::Tick`.

use std::time::Instant;

use crate::app::state::AppState;

/// Earliest pending deadline, or `None` when the loop can wait for input indefinitely.
///
/// # Sources
/// 1. Filter debounce: recompute after typing stops
/// 2. Scroll debounce: check whether the render window should grow
/// 3. Message timeout: status messages with expiration
pub fn next_deadline(state: &AppState) -> Option<Instant> {
    [
        state.timers.filter.due(),
        state.timers.scroll.due(),
        state.messages.expires_at,
    ]
    .into_iter()
    .fold(None, min_instant)
}

/// Returns the earlier of two optional instants.
fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::app::config::ViewerConfig;

    fn create_test_state() -> AppState {
        AppState::new("df".to_string(), "test".to_string(), ViewerConfig::default())
    }

    mod next_deadline_tests {
        use super::*;

        #[test]
        fn idle_state_returns_none() {
            let state = create_test_state();

            assert!(next_deadline(&state).is_none());
        }

        #[test]
        fn pending_filter_returns_its_deadline() {
            let mut state = create_test_state();
            let now = Instant::now();
            state.timers.filter.schedule(now);

            assert_eq!(next_deadline(&state), Some(now + Duration::from_millis(300)));
        }

        #[test]
        fn message_timeout_returns_expiration() {
            let mut state = create_test_state();
            let expires_at = Instant::now() + Duration::from_secs(2);
            state.messages.expires_at = Some(expires_at);

            assert_eq!(next_deadline(&state), Some(expires_at));
        }

        #[test]
        fn multiple_sources_return_earliest() {
            let mut state = create_test_state();
            let now = Instant::now();
            state.timers.filter.schedule(now);
            state.timers.scroll.schedule(now);
            state.messages.expires_at = Some(now + Duration::from_secs(2));

            // Scroll debounce (100ms) is earliest
            assert_eq!(next_deadline(&state), Some(now + Duration::from_millis(100)));
        }
    }

    mod min_instant_tests {
        use super::*;

        #[test]
        fn both_none_returns_none() {
            assert!(min_instant(None, None).is_none());
        }

        #[test]
        fn one_some_returns_it() {
            let now = Instant::now();
            assert_eq!(min_instant(Some(now), None), Some(now));
            assert_eq!(min_instant(None, Some(now)), Some(now));
        }

        #[test]
        fn both_some_returns_earlier() {
            let now = Instant::now();
            let later = now + Duration::from_secs(1);

            assert_eq!(min_instant(Some(now), Some(later)), Some(now));
            assert_eq!(min_instant(Some(later), Some(now)), Some(now));
        }
    }
}
