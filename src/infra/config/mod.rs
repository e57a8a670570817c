pub mod viewer_toml;

pub use viewer_toml::{ConfigError, load_viewer_config};
