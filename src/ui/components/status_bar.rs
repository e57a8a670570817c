use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::session::TableSession;
use crate::app::state::AppState;
use crate::ui::theme::Theme;

/// Row counts and the active filter/sort summary, above the key hints.
pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
        let Some(session) = state.session() else {
            return;
        };

        frame.render_widget(Paragraph::new(Self::build_line(session)), area);
    }

    pub fn build_line(session: &TableSession) -> Line<'static> {
        let view = session.view();
        let mut spans = vec![Span::raw(Self::row_count_text(view.len(), view.total_rows()))];

        let filters = view.filters().active_count();
        if filters > 0 {
            let noun = if filters == 1 { "filter" } else { "filters" };
            spans.push(Span::styled(
                format!(" · {filters} {noun}"),
                Style::default().fg(Theme::TEXT_ACCENT),
            ));
        }
        if view.has_pending_filters() {
            spans.push(Span::styled(
                " (filtering…)",
                Style::default().fg(Theme::TEXT_MUTED),
            ));
        }

        if !view.sort().is_empty() {
            let payload = view.payload();
            let keys: Vec<String> = view
                .sort()
                .keys()
                .iter()
                .map(|key| {
                    let name = payload.columns.get(key.column).map_or("?", String::as_str);
                    format!("{name} {}", key.direction.arrow())
                })
                .collect();
            spans.push(Span::styled(
                format!(" · sorted by {}", keys.join(", ")),
                Style::default().fg(Theme::SORT_INDICATOR),
            ));
        }

        let window = view.window();
        if !window.is_exhausted() {
            spans.push(Span::styled(
                format!(" · {} rendered", window.end()),
                Style::default().fg(Theme::TEXT_MUTED),
            ));
        }

        Line::from(spans)
    }

    pub fn row_count_text(shown: usize, total: usize) -> String {
        let noun = if total == 1 { "row" } else { "rows" };
        format!("Showing {shown} of {total} {noun}")
    }
}
