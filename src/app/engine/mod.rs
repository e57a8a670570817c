//! In-memory tabular engine: payload → filter → sort → render window.

pub mod collate;
pub mod column_width;
pub mod filter;
pub mod render_window;
pub mod sort;
pub mod table_view;

pub use collate::compare_cells;
pub use column_width::{ColumnResizer, ColumnWidths, DEFAULT_MIN_COLUMN_WIDTH};
pub use filter::{FilterState, filter_rows};
pub use render_window::{DEFAULT_BATCH_SIZE, RenderWindow, WindowChange};
pub use sort::{MAX_SORT_KEYS, SortState, sort_rows};
pub use table_view::{TableView, ViewOptions};
