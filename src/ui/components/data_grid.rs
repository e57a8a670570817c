use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

use super::scroll_indicator::{
    render_horizontal_scroll_indicator, render_vertical_scroll_indicator,
};
use super::text_utils::{auto_column_width, display_width, tail_to_width, truncate_to_width};
use super::viewport_columns::select_viewport_columns;
use crate::app::display_text::sanitize_for_display;
use crate::app::input_mode::InputMode;
use crate::app::ports::RenderOutput;
use crate::app::session::TableSession;
use crate::app::state::AppState;
use crate::app::ui_state::{ColumnSlot, GridLayout};
use crate::ui::theme::Theme;

const SEPARATOR: &str = "│";
const FILTER_CURSOR: &str = "▏";

/// Header, filter row and body of the loaded table.
///
/// ```text
///  # │name ▲1   │age ▼2│
///    │ali       │      │
///  1 │Alice     │25    │
/// ```
pub struct DataGrid;

impl DataGrid {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        session: &TableSession,
    ) -> RenderOutput {
        let editing = state.ui.input_mode == InputMode::FilterEdit;
        let border_color = if editing {
            Theme::FOCUS_BORDER
        } else {
            Theme::UNFOCUS_BORDER
        };
        let block = Block::default()
            .title(format!(" {} ", state.label))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < 3 || inner.width < 4 {
            return RenderOutput::default();
        }

        let view = session.view();
        let gutter = gutter_width(view.total_rows());
        let widths = column_widths(state, session);
        let available = inner.width.saturating_sub(gutter + 1);

        let mut slots = Vec::new();
        let mut x = inner.x + gutter + 1;
        for (column, width) in select_viewport_columns(&widths, state.ui.horizontal_offset, available)
        {
            slots.push(ColumnSlot { column, x, width });
            x += width + 1;
        }

        let grid = GridLayout {
            header_y: inner.y,
            filter_y: inner.y + 1,
            body_y: inner.y + 2,
            body_height: inner.height - 2,
            slots,
        };

        let buf = frame.buffer_mut();
        Self::render_header(buf, inner, gutter, &grid, state, session);
        Self::render_filter_row(buf, inner, gutter, &grid, state, session);
        Self::render_body(buf, inner, gutter, &grid, state, session);

        let body_area = Rect::new(inner.x, grid.body_y, inner.width, grid.body_height);
        render_vertical_scroll_indicator(
            frame,
            body_area,
            state.ui.scroll_offset,
            usize::from(grid.body_height),
            view.len(),
        );

        let last_visible_column = grid
            .slots
            .last()
            .map_or(state.ui.horizontal_offset, |s| s.column);
        if let Some(first) = grid.slots.first() {
            render_horizontal_scroll_indicator(
                frame,
                body_area,
                first.column,
                last_visible_column + 1,
                view.column_count(),
            );
        }

        let body_height = grid.body_height;
        RenderOutput {
            grid,
            body_height,
            last_visible_column,
        }
    }

    fn render_header(
        buf: &mut Buffer,
        inner: Rect,
        gutter: u16,
        grid: &GridLayout,
        state: &AppState,
        session: &TableSession,
    ) {
        let view = session.view();
        let y = grid.header_y;
        let base = Style::default()
            .bg(Theme::TABLE_HEADER_BG)
            .add_modifier(Modifier::BOLD);
        buf.set_style(Rect::new(inner.x, y, inner.width, 1), base);

        put(buf, inner.x, y, &format!("{:>w$}", "#", w = usize::from(gutter - 1)), gutter, base.fg(Theme::ROW_NUMBER));
        separator(buf, inner.x + gutter, y, Style::default().fg(Theme::SEPARATOR));

        let multi_key = view.sort().len() > 1;
        let resizing = view.resizing_column();

        for slot in &grid.slots {
            let name = view
                .payload()
                .columns
                .get(slot.column)
                .map(|n| sanitize_for_display(n))
                .unwrap_or_default();

            let indicator = view
                .sort()
                .key_for(slot.column)
                .map(|(position, key)| {
                    if multi_key {
                        format!(" {}{}", key.direction.arrow(), position + 1)
                    } else {
                        format!(" {}", key.direction.arrow())
                    }
                })
                .unwrap_or_default();

            let name_room = slot.width.saturating_sub(display_width(&indicator));
            let label = truncate_to_width(&name, name_room);
            let style = if slot.column == state.ui.selected_column {
                base.add_modifier(Modifier::UNDERLINED)
            } else {
                base
            };
            let label_end = put(buf, slot.x, y, &label, name_room, style);
            put(
                buf,
                label_end,
                y,
                &indicator,
                slot.x + slot.width - label_end,
                base.fg(Theme::SORT_INDICATOR),
            );

            let handle_style = if resizing == Some(slot.column) {
                Style::default().fg(Theme::RESIZE_ACTIVE).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::SEPARATOR)
            };
            separator(buf, slot.x + slot.width, y, handle_style);
        }
    }

    fn render_filter_row(
        buf: &mut Buffer,
        inner: Rect,
        gutter: u16,
        grid: &GridLayout,
        state: &AppState,
        session: &TableSession,
    ) {
        let view = session.view();
        let y = grid.filter_y;
        buf.set_style(
            Rect::new(inner.x, y, inner.width, 1),
            Style::default().bg(Theme::FILTER_ROW_BG),
        );
        separator(buf, inner.x + gutter, y, Style::default().fg(Theme::SEPARATOR));

        let editing = state.ui.input_mode == InputMode::FilterEdit;

        for slot in &grid.slots {
            let text = view.filters().get(slot.column).unwrap_or("");
            let text = sanitize_for_display(text);

            if editing && slot.column == state.ui.selected_column {
                let style = Style::default()
                    .bg(Theme::SELECTED_CELL_BG)
                    .fg(Theme::TEXT_ACCENT);
                buf.set_style(Rect::new(slot.x, y, slot.width, 1), style);
                let shown = tail_to_width(&text, slot.width.saturating_sub(1));
                let end = put(buf, slot.x, y, &shown, slot.width, style);
                put(buf, end, y, FILTER_CURSOR, slot.x + slot.width - end, style);
            } else {
                put(
                    buf,
                    slot.x,
                    y,
                    &truncate_to_width(&text, slot.width),
                    slot.width,
                    Style::default().fg(Theme::TEXT_ACCENT),
                );
            }

            separator(buf, slot.x + slot.width, y, Style::default().fg(Theme::SEPARATOR));
        }
    }

    fn render_body(
        buf: &mut Buffer,
        inner: Rect,
        gutter: u16,
        grid: &GridLayout,
        state: &AppState,
        session: &TableSession,
    ) {
        let view = session.view();
        let cache = session.cache();

        if cache.is_empty() {
            let message = if view.total_rows() == 0 {
                "(empty table)"
            } else {
                "No rows match the current filters"
            };
            put(
                buf,
                inner.x + gutter + 2,
                grid.body_y,
                message,
                inner.width.saturating_sub(gutter + 2),
                Style::default().fg(Theme::TEXT_MUTED),
            );
            return;
        }

        for offset in 0..grid.body_height {
            let position = state.ui.scroll_offset + usize::from(offset);
            let Some(row) = cache.get(position) else {
                break;
            };
            let y = grid.body_y + offset;
            let selected = position == state.ui.selected_row;

            if selected {
                buf.set_style(
                    Rect::new(inner.x, y, inner.width, 1),
                    Style::default().bg(Theme::SELECTED_ROW_BG),
                );
            }

            let number = format!("{:>w$}", row.row_number(), w = usize::from(gutter - 1));
            put(buf, inner.x, y, &number, gutter, Style::default().fg(Theme::ROW_NUMBER));
            separator(buf, inner.x + gutter, y, Style::default().fg(Theme::SEPARATOR));

            for slot in &grid.slots {
                let style = if selected && slot.column == state.ui.selected_column {
                    Style::default()
                        .bg(Theme::SELECTED_CELL_BG)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                if style != Style::default() {
                    buf.set_style(Rect::new(slot.x, y, slot.width, 1), style);
                }
                put(
                    buf,
                    slot.x,
                    y,
                    &truncate_to_width(row.cell(slot.column), slot.width),
                    slot.width,
                    style,
                );
                separator(buf, slot.x + slot.width, y, Style::default().fg(Theme::SEPARATOR));
            }
        }
    }
}

/// Digits of the largest row number plus one padding cell, at least 2 digits.
pub fn gutter_width(total_rows: usize) -> u16 {
    let digits = total_rows.max(1).to_string().len().max(2);
    u16::try_from(digits).unwrap_or(u16::MAX - 1) + 1
}

/// Effective width of every column: user-set or live drag width first, then
/// an automatic width from the header and the rendered cells.
pub fn column_widths(state: &AppState, session: &TableSession) -> Vec<u16> {
    let view = session.view();
    let cache = session.cache();
    let min = view.min_column_width();
    let cap = state.config.auto_width_cap();

    view.payload()
        .columns
        .iter()
        .enumerate()
        .map(|(column, header)| {
            view.column_width(column).unwrap_or_else(|| {
                auto_column_width(
                    header,
                    cache.rows().iter().map(|row| row.cell(column)),
                    min,
                    cap,
                )
            })
        })
        .collect()
}

/// Writes `text` clipped to `max_width` cells; returns the x after the last cell written.
fn put(buf: &mut Buffer, x: u16, y: u16, text: &str, max_width: u16, style: Style) -> u16 {
    if max_width == 0 || !buf.area.contains((x, y).into()) {
        return x;
    }
    let (end, _) = buf.set_stringn(x, y, text, usize::from(max_width), style);
    end
}

fn separator(buf: &mut Buffer, x: u16, y: u16, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(SEPARATOR);
        cell.set_style(style);
    }
}
