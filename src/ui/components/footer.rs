use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use super::molecules::hint_line;
use super::status_message::StatusMessage;
use crate::app::input_mode::InputMode;
use crate::app::keybindings::{
    FILTER_EDIT_KEYS, FOOTER_NAV_KEYS, GLOBAL_KEYS, HELP_KEYS, TABLE_KEYS, idx,
};
use crate::app::state::AppState;

pub struct Footer;

impl Footer {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        frame.render_widget(Paragraph::new(Self::build_line(state)), area);
    }

    pub fn build_line(state: &AppState) -> Line<'static> {
        if let Some((level, message)) = state.messages.current() {
            return StatusMessage::render_line(message, level);
        }
        hint_line(&Self::get_context_hints(state))
    }

    /// Hint ordering: Actions → Navigation → Help → Close/Cancel → Quit
    fn get_context_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
        match state.ui.input_mode {
            InputMode::Normal if state.session().is_some() => vec![
                TABLE_KEYS[idx::table::SORT].as_hint(),
                TABLE_KEYS[idx::table::FILTER].as_hint(),
                TABLE_KEYS[idx::table::CLEAR_ALL].as_hint(),
                TABLE_KEYS[idx::table::WIDTH].as_hint(),
                TABLE_KEYS[idx::table::YANK_CELL].as_hint(),
                FOOTER_NAV_KEYS[idx::footer_nav::ROWS].as_hint(),
                FOOTER_NAV_KEYS[idx::footer_nav::COLUMNS].as_hint(),
                GLOBAL_KEYS[idx::global::REFRESH].as_hint(),
                GLOBAL_KEYS[idx::global::HELP].as_hint(),
                GLOBAL_KEYS[idx::global::QUIT].as_hint(),
            ],
            InputMode::Normal => vec![
                GLOBAL_KEYS[idx::global::REFRESH].as_hint(),
                GLOBAL_KEYS[idx::global::HELP].as_hint(),
                GLOBAL_KEYS[idx::global::QUIT].as_hint(),
            ],
            InputMode::FilterEdit => vec![
                FILTER_EDIT_KEYS[idx::filter_edit::APPLY].as_hint(),
                FILTER_EDIT_KEYS[idx::filter_edit::CLEAR_FIELD].as_hint(),
                FILTER_EDIT_KEYS[idx::filter_edit::CLOSE].as_hint(),
            ],
            InputMode::Help => vec![
                HELP_KEYS[idx::help::SCROLL].as_hint(),
                HELP_KEYS[idx::help::CLOSE].as_hint(),
                HELP_KEYS[idx::help::QUIT].as_hint(),
            ],
        }
    }
}
