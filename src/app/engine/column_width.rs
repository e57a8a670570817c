use std::collections::HashMap;

pub const DEFAULT_MIN_COLUMN_WIDTH: u16 = 6;

/// Manually set widths. Columns without an entry use their automatic width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths(HashMap<usize, u16>);

impl ColumnWidths {
    pub fn get(&self, column: usize) -> Option<u16> {
        self.0.get(&column).copied()
    }

    pub fn set(&mut self, column: usize, width: u16) {
        self.0.insert(column, width);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResizeDrag {
    column: usize,
    start_x: u16,
    captured_width: u16,
    live_width: u16,
}

/// Pointer-driven width changes for one column at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResizer {
    drag: Option<ResizeDrag>,
    min_width: u16,
}

impl ColumnResizer {
    pub fn new(min_width: u16) -> Self {
        Self {
            drag: None,
            min_width: min_width.max(1),
        }
    }

    pub fn min_width(&self) -> u16 {
        self.min_width
    }

    /// Starts a drag on `column`'s handle. A drag already in progress is dropped.
    pub fn begin(&mut self, column: usize, pointer_x: u16, current_width: u16) {
        self.drag = Some(ResizeDrag {
            column,
            start_x: pointer_x,
            captured_width: current_width,
            live_width: current_width,
        });
    }

    /// Applies a pointer move; returns the resized column and its live width.
    /// Ignored when no drag is active.
    pub fn drag_to(&mut self, pointer_x: u16) -> Option<(usize, u16)> {
        let min_width = self.min_width;
        let drag = self.drag.as_mut()?;
        let delta = i32::from(pointer_x) - i32::from(drag.start_x);
        let width = (i32::from(drag.captured_width) + delta)
            .clamp(i32::from(min_width), i32::from(u16::MAX));
        drag.live_width = width as u16;
        Some((drag.column, drag.live_width))
    }

    /// Ends the drag unconditionally, committing the live width into `widths`.
    pub fn end(&mut self, widths: &mut ColumnWidths) -> Option<(usize, u16)> {
        let drag = self.drag.take()?;
        let width = drag.live_width.max(self.min_width);
        widths.set(drag.column, width);
        Some((drag.column, width))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn dragging_column(&self) -> Option<usize> {
        self.drag.map(|d| d.column)
    }

    /// Width to draw `column` with while a drag is in progress.
    pub fn live_width(&self, column: usize) -> Option<u16> {
        self.drag
            .filter(|d| d.column == column)
            .map(|d| d.live_width)
    }

    /// Keyboard resize: `current` shifted by `delta`, floored at the minimum.
    pub fn nudge(
        &self,
        widths: &mut ColumnWidths,
        column: usize,
        current: u16,
        delta: i16,
    ) -> u16 {
        let width = (i32::from(current) + i32::from(delta))
            .clamp(i32::from(self.min_width), i32::from(u16::MAX)) as u16;
        widths.set(column, width);
        width
    }
}

impl Default for ColumnResizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_COLUMN_WIDTH)
    }
}
