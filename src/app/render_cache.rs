//! Display-ready copy of the rows inside the render window.
//!
//! A window reset rebuilds the cache; an append only formats the new rows.

use tracing::trace;

use crate::app::display_text::sanitize_for_display;
use crate::app::engine::{TableView, WindowChange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub original_index: usize,
    pub cells: Vec<String>,
}

impl RenderedRow {
    pub fn row_number(&self) -> usize {
        self.original_index + 1
    }

    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map_or("", String::as_str)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    generation: u64,
    rows: Vec<RenderedRow>,
    full_rebuilds: usize,
    appended_rows: usize,
}

impl RenderCache {
    pub fn build(view: &TableView) -> Self {
        let mut cache = Self::default();
        cache.rebuild(view);
        cache
    }

    pub fn apply(&mut self, view: &TableView, change: &WindowChange) {
        match change {
            WindowChange::Unchanged => {}
            WindowChange::Reset(_) => self.rebuild(view),
            WindowChange::Append(range) if self.generation == view.generation() => {
                let before = self.rows.len();
                self.rows
                    .extend(view.rows_in(range.clone()).map(|row| render_row(&row)));
                self.appended_rows += self.rows.len() - before;
                trace!(appended = self.rows.len() - before, "Appended rows to render cache");
            }
            // A stale append means the sequence moved underneath us
            WindowChange::Append(_) => self.rebuild(view),
        }
    }

    fn rebuild(&mut self, view: &TableView) {
        self.generation = view.generation();
        self.rows = view.visible_rows().map(|row| render_row(&row)).collect();
        self.full_rebuilds += 1;
        trace!(
            generation = self.generation,
            rows = self.rows.len(),
            "Rebuilt render cache"
        );
    }

    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    pub fn get(&self, position: usize) -> Option<&RenderedRow> {
        self.rows.get(position)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn full_rebuilds(&self) -> usize {
        self.full_rebuilds
    }

    pub fn appended_rows(&self) -> usize {
        self.appended_rows
    }
}

fn render_row(row: &crate::domain::DisplayRow<'_>) -> RenderedRow {
    RenderedRow {
        original_index: row.original_index,
        cells: row.cells.iter().map(|c| sanitize_for_display(c)).collect(),
    }
}
