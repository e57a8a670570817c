pub mod arboard_clipboard;
pub mod json_file_source;

pub use arboard_clipboard::ArboardClipboard;
pub use json_file_source::JsonFileSource;
