mod harness;

use std::time::{Duration, Instant};

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use harness::fixtures;
use harness::{create_test_state, create_test_terminal, deliver, line, load_payload, render, render_to_string};

use tabpeek::app::action::Action;
use tabpeek::app::reducer::reduce;
use tabpeek::domain::LoadOutcome;
use tabpeek::ui::event::Event;
use tabpeek::ui::event::handler::handle_event;

// 80x24 frame: header line 0, grid border line 1, column header line 2,
// filter row line 3, body from line 4, status line 22, key hints line 23.
const HEADER_ROW: usize = 2;
const FILTER_ROW: usize = 3;
const FIRST_BODY_ROW: usize = 4;
const STATUS_ROW: usize = 22;

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

mod data_states {
    use super::*;

    #[test]
    fn loading_state_shows_waiting_message() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();

        let screen = render_to_string(&mut terminal, &mut state);

        assert!(screen.contains("Waiting for data..."));
        assert!(line(&screen, 0).contains("loading..."));
    }

    #[test]
    fn error_payload_is_shown_verbatim() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        deliver(
            &mut state,
            LoadOutcome::Failed("object not found".to_string()),
            Instant::now(),
        );

        let screen = render_to_string(&mut terminal, &mut state);

        assert!(screen.contains("object not found"));
        assert!(screen.contains(" Error "));
        assert!(!screen.contains("Showing"));
    }

    #[test]
    fn unreadable_payload_shows_no_data_available() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        let now = Instant::now();
        reduce(&mut state, Action::Load, now);
        let generation = state.load_generation;
        reduce(
            &mut state,
            Action::PayloadLoaded {
                generation,
                result: Err("Payload is not valid JSON: EOF".to_string()),
            },
            now,
        );

        let screen = render_to_string(&mut terminal, &mut state);

        assert!(screen.contains("No data available"));
        assert!(screen.contains("Payload is not valid JSON"));
    }
}

mod table {
    use super::*;

    #[test]
    fn loaded_table_renders_rows_with_row_numbers() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        load_payload(&mut state, fixtures::people(), Instant::now());

        let screen = render_to_string(&mut terminal, &mut state);

        let header = line(&screen, HEADER_ROW);
        assert!(header.contains("name"));
        assert!(header.contains("age"));
        assert!(header.contains("city"));
        assert!(line(&screen, FIRST_BODY_ROW).contains(" 1 │Alice  │25    │Paris  │"));
        assert!(line(&screen, FIRST_BODY_ROW + 2).contains(" 3 │Carol"));
        assert!(line(&screen, STATUS_ROW).starts_with("Showing 3 of 3 rows"));
        assert!(line(&screen, 0).contains("3 rows × 3 columns"));
    }

    #[test]
    fn sorted_rows_keep_original_row_numbers() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        let now = Instant::now();
        load_payload(&mut state, fixtures::people(), now);

        reduce(&mut state, Action::HeaderClick(1), now);
        reduce(&mut state, Action::HeaderClick(1), now);
        let screen = render_to_string(&mut terminal, &mut state);

        assert!(line(&screen, HEADER_ROW).contains("age ▼"));
        assert!(line(&screen, FIRST_BODY_ROW).contains(" 3 │Carol"));
        assert!(line(&screen, FIRST_BODY_ROW + 2).contains(" 1 │Alice"));
    }

    #[test]
    fn multiple_sort_keys_show_precedence() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        let now = Instant::now();
        load_payload(&mut state, fixtures::people(), now);

        reduce(&mut state, Action::HeaderClick(2), now);
        reduce(&mut state, Action::HeaderClick(1), now);
        let screen = render_to_string(&mut terminal, &mut state);

        let header = line(&screen, HEADER_ROW);
        assert!(header.contains("age ▲1"));
        assert!(header.contains("city ▲2"));
    }

    #[test]
    fn filter_applies_after_debounce() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        let now = Instant::now();
        load_payload(&mut state, fixtures::people(), now);

        reduce(&mut state, Action::EditFilter(0), now);
        reduce(&mut state, Action::FilterInput('b'), now);
        let before = render_to_string(&mut terminal, &mut state);
        assert!(line(&before, STATUS_ROW).starts_with("Showing 3 of 3 rows"));

        reduce(&mut state, Action::Tick, now + Duration::from_millis(300));
        let after = render_to_string(&mut terminal, &mut state);

        assert!(line(&after, FILTER_ROW).contains("b▏"));
        assert!(line(&after, FIRST_BODY_ROW).contains(" 2 │Bob"));
        assert!(line(&after, STATUS_ROW).starts_with("Showing 1 of 3 rows"));
    }

    #[test]
    fn empty_filter_result_is_a_valid_state() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        let now = Instant::now();
        load_payload(&mut state, fixtures::people(), now);

        reduce(&mut state, Action::EditFilter(2), now);
        for c in "zzz".chars() {
            reduce(&mut state, Action::FilterInput(c), now);
        }
        reduce(&mut state, Action::FilterCommit, now);
        let screen = render_to_string(&mut terminal, &mut state);

        assert!(screen.contains("No rows match the current filters"));
        assert!(line(&screen, STATUS_ROW).starts_with("Showing 0 of 3 rows"));
    }

    #[test]
    fn help_overlay_lists_bindings() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        reduce(&mut state, Action::OpenHelp, Instant::now());

        let screen = render_to_string(&mut terminal, &mut state);

        assert!(screen.contains("=== Global ==="));
        assert!(screen.contains("Quit application"));
    }
}

mod mouse {
    use super::*;

    // Gutter is 3 cells plus a separator, so "name" starts at x=5 with an
    // automatic width of 7 and its resize handle at x=12.
    const NAME_HANDLE_X: u16 = 12;

    #[test]
    fn render_publishes_grid_geometry() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        load_payload(&mut state, fixtures::people(), Instant::now());

        render(&mut terminal, &mut state);

        assert_eq!(state.ui.grid.header_y, 2);
        assert_eq!(state.ui.grid.slots.len(), 3);
        assert_eq!(state.ui.grid.slots[0].x, 5);
        assert_eq!(state.ui.grid.slots[0].width, 7);
        assert_eq!(state.ui.body_height, 17);
    }

    #[test]
    fn clicking_a_header_sorts_that_column() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        let now = Instant::now();
        load_payload(&mut state, fixtures::people(), now);
        render(&mut terminal, &mut state);

        let action = handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 7, 2), &state);
        reduce(&mut state, action, now);

        let sort = state.session().unwrap().view().sort().keys().to_vec();
        assert_eq!(sort.len(), 1);
        assert_eq!(sort[0].column, 0);
    }

    #[test]
    fn dragging_a_handle_resizes_only_that_column() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        let now = Instant::now();
        load_payload(&mut state, fixtures::people(), now);
        render(&mut terminal, &mut state);

        let press = handle_event(
            mouse(MouseEventKind::Down(MouseButton::Left), NAME_HANDLE_X, 2),
            &state,
        );
        reduce(&mut state, press, now);
        let drag = handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 2), &state);
        reduce(&mut state, drag, now);

        // Live width is drawn before the drag ends
        render(&mut terminal, &mut state);
        assert_eq!(state.ui.grid.slots[0].width, 15);

        let release = handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 20, 2), &state);
        reduce(&mut state, release, now);

        let view = state.session().unwrap().view();
        assert_eq!(view.widths().get(0), Some(15));
        assert_eq!(view.widths().get(1), None);
        assert!(!view.is_resizing());

        render(&mut terminal, &mut state);
        assert_eq!(state.ui.grid.slots[1].x, 21);
    }

    #[test]
    fn dragging_left_stops_at_minimum_width() {
        let mut state = create_test_state();
        let mut terminal = create_test_terminal();
        let now = Instant::now();
        load_payload(&mut state, fixtures::people(), now);
        render(&mut terminal, &mut state);

        for event in [
            mouse(MouseEventKind::Down(MouseButton::Left), NAME_HANDLE_X, 2),
            mouse(MouseEventKind::Drag(MouseButton::Left), 0, 2),
            mouse(MouseEventKind::Up(MouseButton::Left), 0, 2),
        ] {
            let action = handle_event(event, &state);
            reduce(&mut state, action, now);
        }

        let view = state.session().unwrap().view();
        assert_eq!(view.widths().get(0), Some(view.min_column_width()));
    }
}
