use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::action::Action;
use crate::app::input_mode::InputMode;
use crate::app::state::AppState;
use crate::app::ui_state::GridHit;

use super::Event;

const WHEEL_ROWS: isize = 3;
const NUDGE_STEP: i16 = 2;

pub fn handle_event(event: Event, state: &AppState) -> Action {
    match event {
        Event::Init => Action::Render,
        Event::Resize(w, h) => Action::Resize(w, h),
        Event::Key(key) => handle_key_event(key, state),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state),
    }
}

fn handle_key_event(key: KeyEvent, state: &AppState) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    match state.ui.input_mode {
        InputMode::Normal => handle_normal_mode(key),
        InputMode::FilterEdit => handle_filter_edit_keys(key),
        InputMode::Help => handle_help_keys(key),
    }
}

fn handle_normal_mode(key: KeyEvent) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('d') if ctrl => Action::PageDown,
        KeyCode::Char('u') if ctrl => Action::PageUp,

        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,
        KeyCode::Char('r') => Action::Refresh,

        // Navigation
        KeyCode::Down | KeyCode::Char('j') => Action::SelectNextRow,
        KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevRow,
        KeyCode::Left | KeyCode::Char('h') => Action::SelectPrevColumn,
        KeyCode::Right | KeyCode::Char('l') => Action::SelectNextColumn,
        KeyCode::Home | KeyCode::Char('g') => Action::SelectFirstRow,
        KeyCode::End | KeyCode::Char('G') => Action::SelectLastRow,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,

        // Table operations
        KeyCode::Enter | KeyCode::Char('s') => Action::SortSelectedColumn,
        KeyCode::Char('/') => Action::OpenFilterEditor,
        KeyCode::Char('x') => Action::ClearAll,
        KeyCode::Char('<') => Action::NudgeColumnWidth(-NUDGE_STEP),
        KeyCode::Char('>') => Action::NudgeColumnWidth(NUDGE_STEP),
        KeyCode::Char('y') => Action::YankCell,
        KeyCode::Char('Y') => Action::YankRow,

        _ => Action::None,
    }
}

fn handle_filter_edit_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::FilterClearField
        }
        KeyCode::Enter => Action::FilterCommit,
        KeyCode::Esc => Action::FilterClose,
        KeyCode::Backspace => Action::FilterBackspace,
        KeyCode::Char(c) => Action::FilterInput(c),
        _ => Action::None,
    }
}

fn handle_help_keys(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Esc | KeyCode::Char('?') => Action::CloseHelp,
        KeyCode::Char('j') | KeyCode::Down => Action::HelpScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::HelpScrollUp,
        _ => Action::None,
    }
}

fn handle_mouse_event(mouse: MouseEvent, state: &AppState) -> Action {
    if state.ui.input_mode == InputMode::Help {
        return match mouse.kind {
            MouseEventKind::ScrollDown => Action::HelpScrollDown,
            MouseEventKind::ScrollUp => Action::HelpScrollUp,
            _ => Action::None,
        };
    }

    let resizing = state.session().is_some_and(|s| s.view().is_resizing());

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match state.ui.grid.hit(mouse.column, mouse.row) {
                Some(GridHit::ResizeHandle { column, width }) => Action::ColumnResizeStart {
                    column,
                    pointer_x: mouse.column,
                    current_width: width,
                },
                Some(GridHit::Sort(column)) => Action::HeaderClick(column),
                Some(GridHit::Filter(column)) => Action::EditFilter(column),
                Some(GridHit::Body { row_offset, column }) => {
                    Action::SelectCell { row_offset, column }
                }
                None => Action::None,
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if resizing => Action::ColumnResizeDrag {
            pointer_x: mouse.column,
        },
        MouseEventKind::Up(MouseButton::Left) if resizing => Action::ColumnResizeEnd,
        MouseEventKind::ScrollDown => Action::ScrollRows(WHEEL_ROWS),
        MouseEventKind::ScrollUp => Action::ScrollRows(-WHEEL_ROWS),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crossterm::event::KeyEventState;
    use rstest::rstest;

    use super::*;
    use crate::app::config::ViewerConfig;
    use crate::app::session::{DataState, TableSession};
    use crate::app::ui_state::{ColumnSlot, GridLayout};
    use crate::domain::Payload;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: crossterm::event::KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char(c))
        }
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn state_in(mode: InputMode) -> AppState {
        let mut state =
            AppState::new("df".to_string(), "test".to_string(), ViewerConfig::default());
        state.ui.input_mode = mode;
        state
    }

    fn state_with_grid() -> AppState {
        let mut state = state_in(InputMode::Normal);
        let payload = Payload::new(
            vec!["name".to_string(), "age".to_string()],
            vec![vec!["Alice".to_string(), "25".to_string()]],
        );
        state.data = DataState::Ready(Box::new(TableSession::new(
            Arc::new(payload),
            state.config.view_options(),
        )));
        state.ui.grid = GridLayout {
            header_y: 2,
            filter_y: 3,
            body_y: 4,
            body_height: 10,
            slots: vec![
                ColumnSlot {
                    column: 0,
                    x: 5,
                    width: 10,
                },
                ColumnSlot {
                    column: 1,
                    x: 16,
                    width: 6,
                },
            ],
        };
        state
    }

    mod keys {
        use super::*;

        #[rstest]
        #[case(KeyCode::Char('q'), "Quit")]
        #[case(KeyCode::Char('j'), "SelectNextRow")]
        #[case(KeyCode::Down, "SelectNextRow")]
        #[case(KeyCode::Char('G'), "SelectLastRow")]
        #[case(KeyCode::Char('s'), "SortSelectedColumn")]
        #[case(KeyCode::Enter, "SortSelectedColumn")]
        #[case(KeyCode::Char('/'), "OpenFilterEditor")]
        #[case(KeyCode::Char('x'), "ClearAll")]
        #[case(KeyCode::Char('r'), "Refresh")]
        #[case(KeyCode::Char('Y'), "YankRow")]
        #[case(KeyCode::Char('Z'), "None")]
        fn normal_mode_keys(#[case] code: KeyCode, #[case] expected: &str) {
            let action = handle_event(Event::Key(key(code)), &state_in(InputMode::Normal));

            assert_eq!(format!("{action:?}"), expected);
        }

        #[test]
        fn width_keys_nudge_both_ways() {
            let state = state_in(InputMode::Normal);

            assert!(matches!(
                handle_event(Event::Key(key(KeyCode::Char('<'))), &state),
                Action::NudgeColumnWidth(d) if d < 0
            ));
            assert!(matches!(
                handle_event(Event::Key(key(KeyCode::Char('>'))), &state),
                Action::NudgeColumnWidth(d) if d > 0
            ));
        }

        #[test]
        fn filter_edit_captures_letters() {
            let state = state_in(InputMode::FilterEdit);

            assert!(matches!(
                handle_event(Event::Key(key(KeyCode::Char('q'))), &state),
                Action::FilterInput('q')
            ));
            assert!(matches!(
                handle_event(Event::Key(key(KeyCode::Esc)), &state),
                Action::FilterClose
            ));
            assert!(matches!(
                handle_event(Event::Key(ctrl('u')), &state),
                Action::FilterClearField
            ));
        }

        #[test]
        fn ctrl_c_quits_from_any_mode() {
            for mode in [InputMode::Normal, InputMode::FilterEdit, InputMode::Help] {
                assert!(matches!(
                    handle_event(Event::Key(ctrl('c')), &state_in(mode)),
                    Action::Quit
                ));
            }
        }

        #[test]
        fn help_mode_scrolls_and_closes() {
            let state = state_in(InputMode::Help);

            assert!(matches!(
                handle_event(Event::Key(key(KeyCode::Char('j'))), &state),
                Action::HelpScrollDown
            ));
            assert!(matches!(
                handle_event(Event::Key(key(KeyCode::Char('?'))), &state),
                Action::CloseHelp
            ));
        }
    }

    mod mouse_input {
        use super::*;

        #[test]
        fn header_click_sorts() {
            let action = handle_event(
                Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 18, 2)),
                &state_with_grid(),
            );

            assert!(matches!(action, Action::HeaderClick(1)));
        }

        #[test]
        fn press_on_separator_starts_resize() {
            let action = handle_event(
                Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 15, 2)),
                &state_with_grid(),
            );

            assert!(matches!(
                action,
                Action::ColumnResizeStart {
                    column: 0,
                    pointer_x: 15,
                    current_width: 10
                }
            ));
        }

        #[test]
        fn drag_without_active_resize_is_ignored() {
            let action = handle_event(
                Event::Mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 2)),
                &state_with_grid(),
            );

            assert!(action.is_none());
        }

        #[test]
        fn drag_and_release_during_resize() {
            let mut state = state_with_grid();
            if let Some(session) = state.session_mut() {
                session.begin_resize(0, 15, 10);
            }

            assert!(matches!(
                handle_event(
                    Event::Mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30, 9)),
                    &state
                ),
                Action::ColumnResizeDrag { pointer_x: 30 }
            ));
            assert!(matches!(
                handle_event(
                    Event::Mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 9)),
                    &state
                ),
                Action::ColumnResizeEnd
            ));
        }

        #[test]
        fn filter_row_click_edits_filter() {
            let action = handle_event(
                Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 6, 3)),
                &state_with_grid(),
            );

            assert!(matches!(action, Action::EditFilter(0)));
        }

        #[test]
        fn body_click_selects_cell() {
            let action = handle_event(
                Event::Mouse(mouse(MouseEventKind::Down(MouseButton::Left), 17, 6)),
                &state_with_grid(),
            );

            assert!(matches!(
                action,
                Action::SelectCell {
                    row_offset: 2,
                    column: Some(1)
                }
            ));
        }

        #[rstest]
        #[case(MouseEventKind::ScrollDown, 3)]
        #[case(MouseEventKind::ScrollUp, -3)]
        fn wheel_scrolls_rows(#[case] kind: MouseEventKind, #[case] expected: isize) {
            let action = handle_event(Event::Mouse(mouse(kind, 0, 0)), &state_with_grid());

            assert!(matches!(action, Action::ScrollRows(d) if d == expected));
        }
    }
}
