use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::session::DataState;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let (status_text, status_color) = match &state.data {
            DataState::Ready(_) => ("ready", Theme::STATUS_SUCCESS),
            DataState::Loading => ("loading...", Theme::STATUS_LOADING),
            DataState::Failed(_) => ("error", Theme::STATUS_ERROR),
            DataState::Unavailable(_) => ("unavailable", Theme::STATUS_ERROR),
        };

        let mut spans = vec![
            Span::styled(
                state.label.clone(),
                Style::default()
                    .fg(Theme::FOCUS_BORDER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                state.source.clone(),
                Style::default().fg(Theme::TEXT_SECONDARY),
            ),
        ];

        if let Some(session) = state.session() {
            spans.push(Span::raw(" | "));
            spans.push(Span::raw(session.view().payload().shape_display()));
        }

        spans.push(Span::raw(" | "));
        spans.push(Span::styled(status_text, Style::default().fg(status_color)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
