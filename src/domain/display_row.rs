/// A view over one payload record plus its position in the untouched payload.
///
/// `original_index` drives the row-number gutter so numbering reflects the
/// source order regardless of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayRow<'a> {
    pub original_index: usize,
    pub cells: &'a [String],
}

impl<'a> DisplayRow<'a> {
    pub fn new(original_index: usize, cells: &'a [String]) -> Self {
        Self {
            original_index,
            cells,
        }
    }

    /// 1-based label shown in the gutter.
    pub fn row_number(&self) -> usize {
        self.original_index + 1
    }

    pub fn cell(&self, column: usize) -> &'a str {
        self.cells.get(column).map_or("", String::as_str)
    }
}
