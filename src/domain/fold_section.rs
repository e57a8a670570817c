/// A foldable region delimited by comment markers. Lines are 0-based and inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldSection {
    pub title: String,
    pub level: usize,
    pub start_line: usize,
    pub end_line: usize,
}

impl FoldSection {
    pub fn line_span(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}
