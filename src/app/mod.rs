pub mod action;
pub mod config;
pub mod debounce;
pub mod detector;
pub mod display_text;
pub mod effect;
pub mod effect_runner;
pub mod engine;
pub mod folding;
pub mod input_mode;
pub mod keybindings;
pub mod message_state;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod render_cache;
pub mod render_schedule;
pub mod session;
pub mod state;
pub mod ui_state;
pub mod yank;
