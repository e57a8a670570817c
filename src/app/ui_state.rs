use super::input_mode::InputMode;
use super::keybindings::HELP_TOTAL_LINES;

/// Screen position of one drawn column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSlot {
    pub column: usize,
    pub x: u16,
    pub width: u16,
}

impl ColumnSlot {
    fn contains(&self, x: u16) -> bool {
        x >= self.x && x < self.x + self.width
    }

    /// The separator cell right of the column doubles as its resize handle.
    fn handle_x(&self) -> u16 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    Sort(usize),
    ResizeHandle { column: usize, width: u16 },
    Filter(usize),
    Body { row_offset: usize, column: Option<usize> },
}

/// Where the last frame drew the grid, for mouse hit testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub header_y: u16,
    pub filter_y: u16,
    pub body_y: u16,
    pub body_height: u16,
    pub slots: Vec<ColumnSlot>,
}

impl GridLayout {
    pub fn hit(&self, x: u16, y: u16) -> Option<GridHit> {
        if self.slots.is_empty() {
            return None;
        }

        if y == self.header_y {
            if let Some(slot) = self.slots.iter().find(|s| s.handle_x() == x) {
                return Some(GridHit::ResizeHandle {
                    column: slot.column,
                    width: slot.width,
                });
            }
            return self.column_at(x).map(GridHit::Sort);
        }

        if y == self.filter_y {
            return self.column_at(x).map(GridHit::Filter);
        }

        if y >= self.body_y && y < self.body_y + self.body_height {
            return Some(GridHit::Body {
                row_offset: usize::from(y - self.body_y),
                column: self.column_at(x),
            });
        }

        None
    }

    pub fn column_at(&self, x: u16) -> Option<usize> {
        self.slots.iter().find(|s| s.contains(x)).map(|s| s.column)
    }

    pub fn slot(&self, column: usize) -> Option<&ColumnSlot> {
        self.slots.iter().find(|s| s.column == column)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub input_mode: InputMode,

    /// Position in the filtered and sorted sequence
    pub selected_row: usize,
    pub selected_column: usize,
    /// First body row drawn
    pub scroll_offset: usize,
    /// First column drawn
    pub horizontal_offset: usize,

    pub grid: GridLayout,
    pub body_height: u16,
    pub last_visible_column: usize,

    pub help_scroll_offset: usize,
    pub terminal_height: u16,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            terminal_height: 24,
            ..Default::default()
        }
    }

    pub fn body_rows(&self) -> usize {
        usize::from(self.body_height.max(1))
    }

    /// Index of the last row inside the viewport.
    pub fn viewport_bottom(&self) -> usize {
        self.scroll_offset + self.body_rows().saturating_sub(1)
    }

    /// Moves the row cursor within `0..rendered`, scrolling to keep it in view.
    pub fn select_row(&mut self, row: usize, rendered: usize) {
        if rendered == 0 {
            self.selected_row = 0;
            self.scroll_offset = 0;
            return;
        }
        self.selected_row = row.min(rendered - 1);
        let height = self.body_rows();
        if self.selected_row < self.scroll_offset {
            self.scroll_offset = self.selected_row;
        } else if self.selected_row >= self.scroll_offset + height {
            self.scroll_offset = self.selected_row + 1 - height;
        }
    }

    /// Scrolls the viewport by `delta` rows, dragging the cursor along.
    pub fn scroll_by(&mut self, delta: isize, rendered: usize) {
        if rendered == 0 {
            return;
        }
        let height = self.body_rows();
        let max_offset = rendered.saturating_sub(height);
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta).min(max_offset);
        let top = self.scroll_offset;
        let bottom = (top + height).min(rendered) - 1;
        self.selected_row = self.selected_row.clamp(top, bottom);
    }

    pub fn select_column(&mut self, column: usize, column_count: usize) {
        if column_count == 0 {
            self.selected_column = 0;
            self.horizontal_offset = 0;
            return;
        }
        self.selected_column = column.min(column_count - 1);
        if self.selected_column < self.horizontal_offset {
            self.horizontal_offset = self.selected_column;
        } else if self.selected_column > self.last_visible_column {
            let shift = self.selected_column - self.last_visible_column;
            self.horizontal_offset = (self.horizontal_offset + shift).min(column_count - 1);
        }
    }

    pub fn reset_position(&mut self) {
        self.selected_row = 0;
        self.scroll_offset = 0;
    }

    /// Estimate max scroll for the help overlay; the modal is 80% of the terminal
    /// height with a 2-line border.
    pub fn help_max_scroll(&self) -> usize {
        let viewport = (self.terminal_height as usize * 80 / 100).saturating_sub(2);
        HELP_TOTAL_LINES.saturating_sub(viewport)
    }
}
