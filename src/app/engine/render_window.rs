use std::ops::Range;

pub const DEFAULT_BATCH_SIZE: usize = 100;

/// How the rendered range moved, so the display layer knows whether to rebuild
/// everything or append only the new rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowChange {
    /// The sequence was replaced; render this range from scratch
    Reset(Range<usize>),
    /// Same sequence, these rows were added at the end
    Append(Range<usize>),
    Unchanged,
}

/// Virtualized `[start, end)` range over the filtered and sorted sequence.
///
/// `end` only grows within one sequence; [`RenderWindow::reset`] starts a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderWindow {
    start: usize,
    end: usize,
    batch_size: usize,
    total: usize,
}

impl RenderWindow {
    pub fn new(batch_size: usize, total: usize) -> Self {
        let batch_size = batch_size.max(1);
        Self {
            start: 0,
            end: batch_size.min(total),
            batch_size,
            total,
        }
    }

    /// Set window: a new sequence of `total` rows, first batch only.
    pub fn reset(&mut self, total: usize) -> WindowChange {
        self.total = total;
        self.start = 0;
        self.end = self.batch_size.min(total);
        WindowChange::Reset(self.visible())
    }

    /// Grow window by one batch, clamped to the sequence length.
    pub fn extend(&mut self) -> WindowChange {
        if self.is_exhausted() {
            return WindowChange::Unchanged;
        }
        let previous_end = self.end;
        self.end = (self.end + self.batch_size).min(self.total);
        WindowChange::Append(previous_end..self.end)
    }

    pub fn visible(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn is_exhausted(&self) -> bool {
        self.end >= self.total
    }

    /// True when the viewport's last row sits within `threshold` rows of the
    /// rendered end and more rows remain.
    pub fn near_end(&self, viewport_bottom: usize, threshold: usize) -> bool {
        !self.is_exhausted() && viewport_bottom + threshold >= self.end
    }
}

impl Default for RenderWindow {
    fn default() -> Self {
        Self::new(DEFAULT_BATCH_SIZE, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(250, 0..100)]
    #[case(40, 0..40)]
    #[case(0, 0..0)]
    fn new_window_covers_first_batch(#[case] total: usize, #[case] expected: Range<usize>) {
        assert_eq!(RenderWindow::new(100, total).visible(), expected);
    }

    #[test]
    fn zero_batch_size_is_bumped_to_one() {
        let window = RenderWindow::new(0, 5);

        assert_eq!(window.batch_size(), 1);
        assert_eq!(window.visible(), 0..1);
    }

    mod extend {
        use super::*;

        #[test]
        fn grows_by_one_batch_and_reports_appended_range() {
            let mut window = RenderWindow::new(100, 250);

            assert_eq!(window.extend(), WindowChange::Append(100..200));
            assert_eq!(window.extend(), WindowChange::Append(200..250));
            assert_eq!(window.visible(), 0..250);
        }

        #[test]
        fn stops_at_sequence_length() {
            let mut window = RenderWindow::new(100, 250);
            for _ in 0..10 {
                window.extend();
                assert!(window.end() <= window.total());
            }

            assert!(window.is_exhausted());
            assert_eq!(window.extend(), WindowChange::Unchanged);
        }

        #[test]
        fn end_never_decreases_within_a_sequence() {
            let mut window = RenderWindow::new(7, 30);
            let mut last_end = window.end();
            for _ in 0..6 {
                window.extend();
                assert!(window.end() >= last_end);
                last_end = window.end();
            }
        }
    }

    mod reset {
        use super::*;

        #[test]
        fn returns_to_first_batch_of_new_sequence() {
            let mut window = RenderWindow::new(100, 1000);
            window.extend();
            window.extend();

            assert_eq!(window.reset(450), WindowChange::Reset(0..100));
            assert_eq!(window.total(), 450);
        }

        #[test]
        fn shrinks_to_short_sequence() {
            let mut window = RenderWindow::new(100, 1000);

            assert_eq!(window.reset(3), WindowChange::Reset(0..3));
            assert!(window.is_exhausted());
        }
    }

    #[rstest]
    #[case(92, 8, true)]
    #[case(99, 8, true)]
    #[case(91, 8, false)]
    #[case(50, 8, false)]
    fn near_end_uses_threshold(
        #[case] bottom: usize,
        #[case] threshold: usize,
        #[case] expected: bool,
    ) {
        let window = RenderWindow::new(100, 500);

        assert_eq!(window.near_end(bottom, threshold), expected);
    }

    #[test]
    fn near_end_is_false_once_exhausted() {
        let window = RenderWindow::new(100, 20);

        assert!(!window.near_end(19, 8));
    }
}
