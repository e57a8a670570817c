use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::session::DataState;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

/// Body shown while there is no table to draw.
pub struct StatusPane;

impl StatusPane {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let (title, color, lines) = match &state.data {
            DataState::Failed(message) => (
                " Error ",
                Theme::STATUS_ERROR,
                Self::message_lines("The data source reported an error:", message),
            ),
            DataState::Unavailable(message) => (
                " Unavailable ",
                Theme::STATUS_ERROR,
                Self::message_lines("No data available:", message),
            ),
            // Ready never reaches here; the grid draws it
            DataState::Loading | DataState::Ready(_) => (
                " Loading ",
                Theme::STATUS_LOADING,
                vec![Line::from(Span::styled(
                    "Waiting for data...",
                    Style::default().fg(Theme::TEXT_SECONDARY),
                ))],
            ),
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    fn message_lines(lead: &str, message: &str) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                lead.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        lines.extend(message.lines().map(|l| Line::from(l.to_string())));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press r to retry",
            Style::default().fg(Theme::TEXT_MUTED),
        )));
        lines
    }
}
