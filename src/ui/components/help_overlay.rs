use ratatui::Frame;
use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::molecules::chip_hint_line;
use super::overlay::centered_rect;
use crate::app::keybindings::{
    FILTER_EDIT_KEYS, GLOBAL_KEYS, KeyBinding, MOUSE_BINDINGS, NAVIGATION_KEYS, TABLE_KEYS,
};
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = centered_rect(
            frame.area(),
            Constraint::Percentage(70),
            Constraint::Percentage(80),
        );

        frame.render_widget(Clear, area);

        let block = Block::default()
            .title(" Help (press ? or Esc to close) ")
            .borders(Borders::ALL)
            .style(Style::default().bg(Theme::HELP_BG));

        let scroll = u16::try_from(state.ui.help_scroll_offset).unwrap_or(u16::MAX);
        let help = Paragraph::new(Self::lines())
            .block(block)
            .scroll((scroll, 0));

        frame.render_widget(help, area);
    }

    /// Section order matches the line count in `HELP_TOTAL_LINES`.
    pub fn lines() -> Vec<Line<'static>> {
        let sections: [(&str, &[KeyBinding]); 5] = [
            ("Global", GLOBAL_KEYS),
            ("Table", TABLE_KEYS),
            ("Navigation", NAVIGATION_KEYS),
            ("Filter editing", FILTER_EDIT_KEYS),
            ("Mouse", MOUSE_BINDINGS),
        ];

        let mut lines = Vec::new();
        for (i, (title, bindings)) in sections.iter().enumerate() {
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Self::section_header(title));
            lines.extend(bindings.iter().map(|b| chip_hint_line(b.key, b.description)));
        }
        lines
    }

    fn section_header(title: &str) -> Line<'static> {
        Line::from(Span::styled(
            format!("=== {title} ==="),
            Style::default()
                .fg(Theme::FOCUS_BORDER)
                .add_modifier(Modifier::BOLD),
        ))
    }
}
