use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::message_state::MessageLevel;
use crate::ui::theme::Theme;

pub struct StatusMessage;

impl StatusMessage {
    pub fn render_line(message: &str, level: MessageLevel) -> Line<'static> {
        let (prefix, color) = match level {
            MessageLevel::Error => ("✗ ", Theme::STATUS_ERROR),
            MessageLevel::Info => ("✓ ", Theme::STATUS_SUCCESS),
        };

        Line::from(vec![Span::styled(
            format!("{prefix}{message}"),
            Style::default().fg(color),
        )])
    }
}
