//! One open view over a payload: filter, sort, render window and column widths
//! composed into a single engine.
//!
//! A view is built fresh for every delivered payload and dropped with it, so
//! none of its state outlives a reload.

use std::ops::Range;
use std::sync::Arc;

use tracing::debug;

use super::column_width::{ColumnResizer, ColumnWidths, DEFAULT_MIN_COLUMN_WIDTH};
use super::filter::{FilterState, filter_rows};
use super::render_window::{DEFAULT_BATCH_SIZE, RenderWindow, WindowChange};
use super::sort::{SortState, sort_rows};
use crate::domain::{DisplayRow, Payload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    pub batch_size: usize,
    pub min_column_width: u16,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            min_column_width: DEFAULT_MIN_COLUMN_WIDTH,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TableView {
    payload: Arc<Payload>,
    filters: FilterState,
    sort: SortState,
    /// Filtered and sorted payload indices
    rows: Vec<usize>,
    /// Bumped whenever `rows` is replaced
    generation: u64,
    window: RenderWindow,
    widths: ColumnWidths,
    resizer: ColumnResizer,
    filter_pending: bool,
}

impl TableView {
    pub fn new(payload: Arc<Payload>, options: ViewOptions) -> Self {
        let rows: Vec<usize> = (0..payload.len()).collect();
        let window = RenderWindow::new(options.batch_size, rows.len());
        Self {
            payload,
            filters: FilterState::default(),
            sort: SortState::default(),
            rows,
            generation: 0,
            window,
            widths: ColumnWidths::default(),
            resizer: ColumnResizer::new(options.min_column_width),
            filter_pending: false,
        }
    }

    pub fn payload(&self) -> &Arc<Payload> {
        &self.payload
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn window(&self) -> &RenderWindow {
        &self.window
    }

    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// Rows surviving the filter.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_rows(&self) -> usize {
        self.payload.len()
    }

    pub fn column_count(&self) -> usize {
        self.payload.width()
    }

    /// Records a predicate edit. The row sequence is only recomputed by
    /// [`TableView::apply_pending_filters`] or a sort change.
    pub fn edit_filter(&mut self, column: usize, text: impl Into<String>) {
        self.filters.set(column, text);
        self.filter_pending = true;
    }

    pub fn has_pending_filters(&self) -> bool {
        self.filter_pending
    }

    pub fn apply_pending_filters(&mut self) -> WindowChange {
        if !self.filter_pending {
            return WindowChange::Unchanged;
        }
        self.recompute()
    }

    /// Header click on `column`. Any pending filter edit is folded into the same pass.
    pub fn toggle_sort(&mut self, column: usize) -> WindowChange {
        if column >= self.column_count() {
            return WindowChange::Unchanged;
        }
        self.sort.toggle(column);
        self.recompute()
    }

    pub fn clear_all(&mut self) -> WindowChange {
        self.filters.clear();
        self.sort.clear();
        self.recompute()
    }

    pub fn extend_window(&mut self) -> WindowChange {
        self.window.extend()
    }

    fn recompute(&mut self) -> WindowChange {
        let filtered = filter_rows(&self.payload, &self.filters);
        self.rows = sort_rows(&self.payload, &filtered, &self.sort);
        self.filter_pending = false;
        self.generation += 1;
        debug!(
            generation = self.generation,
            matching = self.rows.len(),
            filters = self.filters.active_count(),
            sort_keys = self.sort.len(),
            "Recomputed row sequence"
        );
        self.window.reset(self.rows.len())
    }

    /// Row at `position` in the filtered and sorted sequence.
    pub fn display_row(&self, position: usize) -> Option<DisplayRow<'_>> {
        let original = *self.rows.get(position)?;
        let cells = self.payload.rows.get(original)?;
        Some(DisplayRow::new(original, cells))
    }

    pub fn rows_in(&self, range: Range<usize>) -> impl Iterator<Item = DisplayRow<'_>> {
        let end = range.end.min(self.rows.len());
        let start = range.start.min(end);
        (start..end).filter_map(|position| self.display_row(position))
    }

    pub fn visible_rows(&self) -> impl Iterator<Item = DisplayRow<'_>> {
        self.rows_in(self.window.visible())
    }

    /// Manual width for `column`, preferring the in-progress drag width.
    pub fn column_width(&self, column: usize) -> Option<u16> {
        self.resizer
            .live_width(column)
            .or_else(|| self.widths.get(column))
    }

    pub fn min_column_width(&self) -> u16 {
        self.resizer.min_width()
    }

    pub fn begin_resize(&mut self, column: usize, pointer_x: u16, current_width: u16) {
        self.resizer.begin(column, pointer_x, current_width);
    }

    pub fn drag_resize(&mut self, pointer_x: u16) -> Option<(usize, u16)> {
        self.resizer.drag_to(pointer_x)
    }

    pub fn end_resize(&mut self) -> Option<(usize, u16)> {
        let committed = self.resizer.end(&mut self.widths);
        if let Some((column, width)) = committed {
            debug!(column, width, "Column resized");
        }
        committed
    }

    pub fn is_resizing(&self) -> bool {
        self.resizer.is_dragging()
    }

    pub fn resizing_column(&self) -> Option<usize> {
        self.resizer.dragging_column()
    }

    pub fn nudge_width(&mut self, column: usize, current: u16, delta: i16) -> u16 {
        self.resizer.nudge(&mut self.widths, column, current, delta)
    }
}
