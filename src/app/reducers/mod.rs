mod helpers;
mod load;
mod navigation;
mod table;

pub use helpers::{after_window_change, filter_text};
pub use load::reduce_load;
pub use navigation::reduce_navigation;
pub use table::{apply_pending_filters, reduce_table};
