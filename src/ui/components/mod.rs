pub mod atoms;
pub mod data_grid;
pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod layout;
pub mod molecules;
pub mod overlay;
pub mod scroll_indicator;
pub mod status_bar;
pub mod status_message;
pub mod status_pane;
pub mod text_utils;
pub mod viewport_columns;
