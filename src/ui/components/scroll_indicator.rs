use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::ui::theme::Theme;

/// Column position indicator on the bottom line of `area`.
/// `area` should be the inner area (without border).
pub fn render_horizontal_scroll_indicator(
    frame: &mut Frame,
    area: Rect,
    current_start: usize,
    current_end: usize,
    total: usize,
) {
    if total <= 1 {
        return;
    }

    let can_scroll_left = current_start > 0;
    let can_scroll_right = current_end < total;

    if !can_scroll_left && !can_scroll_right {
        return;
    }

    let left_margin: u16 = 1;
    let available_width = area.width.saturating_sub(left_margin) as usize;
    if available_width < 15 {
        return;
    }

    let position_text = format!("col {}-{}/{}", current_start + 1, current_end, total);

    // "< col X-Y/Z ───█─── >"
    let fixed_parts_len = 1 + 1 + position_text.len() + 1 + 1 + 1;
    let track_width = available_width
        .saturating_sub(fixed_parts_len)
        .clamp(5, 20);

    let scrollbar = build_scrollbar_track(current_start, total, track_width);

    let arrow_active = Style::default().fg(Theme::TEXT_ACCENT);
    let arrow_inactive = Style::default().fg(Theme::TEXT_MUTED);
    let text_style = Style::default().fg(Theme::TEXT_ACCENT);

    let line = Line::from(vec![
        Span::styled("<", if can_scroll_left { arrow_active } else { arrow_inactive }),
        Span::styled(format!(" {position_text} "), text_style),
        Span::styled(scrollbar, text_style),
        Span::styled(" >", if can_scroll_right { arrow_active } else { arrow_inactive }),
    ]);

    let indicator_area = Rect {
        x: area.x + left_margin,
        y: area.y + area.height.saturating_sub(1),
        width: (line.width() as u16).min(available_width as u16),
        height: 1,
    };

    frame.render_widget(Paragraph::new(line), indicator_area);
}

fn build_scrollbar_track(position: usize, total: usize, width: usize) -> String {
    if total <= 1 || width < 3 {
        return "─".repeat(width);
    }

    let thumb_size = if width >= 10 { 2 } else { 1 };
    let thumb_pos = (position * (width - thumb_size)) / total.max(1);

    (0..width)
        .map(|i| {
            if i >= thumb_pos && i < thumb_pos + thumb_size {
                '█'
            } else {
                '─'
            }
        })
        .collect()
}

/// Row position indicator at the bottom-right of `area`.
/// `area` should be the inner area (without border).
pub fn render_vertical_scroll_indicator(
    frame: &mut Frame,
    area: Rect,
    current_start: usize,
    visible_count: usize,
    total: usize,
) {
    if total <= visible_count {
        return;
    }

    let current_end = (current_start + visible_count).min(total);
    let indicator = format!("[{}-{}/{}]", current_start + 1, current_end, total);

    let indicator_area = Rect {
        x: area.x + area.width.saturating_sub(indicator.len() as u16),
        y: area.y + area.height.saturating_sub(1),
        width: (indicator.len() as u16).min(area.width),
        height: 1,
    };

    frame.render_widget(
        Paragraph::new(indicator).style(Style::default().fg(Theme::TEXT_MUTED)),
        indicator_area,
    );
}
