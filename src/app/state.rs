use std::time::Instant;

use super::config::ViewerConfig;
use super::debounce::Debounce;
use super::message_state::MessageState;
use super::session::{DataState, TableSession};
use super::ui_state::UiState;

/// Pending timer deadlines owned by the reducer.
#[derive(Debug, Clone)]
pub struct Timers {
    /// Filter recomputation after typing stops
    pub filter: Debounce,
    /// Window extension check after scrolling stops
    pub scroll: Debounce,
}

impl Timers {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            filter: Debounce::new(config.filter_debounce()),
            scroll: Debounce::new(config.scroll_debounce()),
        }
    }
}

pub struct AppState {
    pub should_quit: bool,
    /// Title shown in the header, usually the inspected variable's name
    pub label: String,
    /// Where payloads come from, for the header
    pub source: String,
    pub config: ViewerConfig,

    pub data: DataState,
    /// Bumped on every fetch; results for older generations are discarded
    pub load_generation: u64,

    pub ui: UiState,
    pub messages: MessageState,
    pub timers: Timers,

    pub render_dirty: bool,
}

impl AppState {
    pub fn new(label: String, source: String, config: ViewerConfig) -> Self {
        let timers = Timers::new(&config);
        Self {
            should_quit: false,
            label,
            source,
            config,
            data: DataState::Loading,
            load_generation: 0,
            ui: UiState::new(),
            messages: MessageState::default(),
            timers,
            render_dirty: true,
        }
    }

    pub fn session(&self) -> Option<&TableSession> {
        self.data.session()
    }

    pub fn session_mut(&mut self) -> Option<&mut TableSession> {
        self.data.session_mut()
    }

    /// Rows currently formatted for display.
    pub fn rendered_rows(&self) -> usize {
        self.session().map_or(0, |s| s.cache().len())
    }

    pub fn column_count(&self) -> usize {
        self.session().map_or(0, |s| s.view().column_count())
    }

    pub fn mark_dirty(&mut self) {
        self.render_dirty = true;
    }

    pub fn clear_dirty(&mut self) {
        self.render_dirty = false;
    }

    pub fn clear_expired_timers(&mut self, now: Instant) {
        if self.messages.clear_expired_at(now) {
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_loading_and_dirty() {
        let state = AppState::new("df".to_string(), "df.json".to_string(), ViewerConfig::default());

        assert!(state.data.is_loading());
        assert!(state.render_dirty);
        assert_eq!(state.rendered_rows(), 0);
        assert_eq!(state.load_generation, 0);
    }

    #[test]
    fn timers_use_configured_delays() {
        let config = ViewerConfig {
            filter_debounce_ms: 50,
            ..ViewerConfig::default()
        };

        let timers = Timers::new(&config);

        assert_eq!(timers.filter.delay(), std::time::Duration::from_millis(50));
    }
}
