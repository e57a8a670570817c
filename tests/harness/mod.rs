#![allow(dead_code, reason = "each test binary uses a different subset")]

pub mod fixtures;

use std::sync::Arc;
use std::time::Instant;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use tabpeek::app::action::Action;
use tabpeek::app::config::ViewerConfig;
use tabpeek::app::reducer::reduce;
use tabpeek::app::state::AppState;
use tabpeek::domain::{LoadOutcome, Payload};
use tabpeek::ui::components::layout::MainLayout;

pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

pub fn create_test_state() -> AppState {
    let mut state = AppState::new(
        "df".to_string(),
        "df.json".to_string(),
        ViewerConfig::default(),
    );
    state.ui.terminal_height = TEST_HEIGHT;
    state
}

pub fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(TEST_WIDTH, TEST_HEIGHT);
    Terminal::new(backend).unwrap()
}

/// Runs a full load cycle through the reducer, as the effect runner would.
pub fn deliver(state: &mut AppState, outcome: LoadOutcome, now: Instant) {
    reduce(state, Action::Load, now);
    let generation = state.load_generation;
    reduce(
        state,
        Action::PayloadLoaded {
            generation,
            result: Ok(outcome),
        },
        now,
    );
}

pub fn load_payload(state: &mut AppState, payload: Payload, now: Instant) {
    deliver(state, LoadOutcome::Loaded(Arc::new(payload)), now);
}

/// Draws one frame and feeds the measured layout back into `state`, like the
/// `Render` effect does.
pub fn render_to_string(terminal: &mut Terminal<TestBackend>, state: &mut AppState) -> String {
    render(terminal, state);
    buffer_to_string(terminal.backend().buffer())
}

pub fn render(terminal: &mut Terminal<TestBackend>, state: &mut AppState) {
    let mut output = None;
    terminal
        .draw(|frame| {
            output = Some(MainLayout::render(frame, state));
        })
        .unwrap();

    let output = output.unwrap();
    state.ui.grid = output.grid;
    state.ui.body_height = output.body_height;
    state.ui.last_visible_column = output.last_visible_column;
}

pub fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            let cell = buffer.cell((x, y)).unwrap();
            result.push_str(cell.symbol());
        }
        if y < buffer.area.height - 1 {
            result.push('\n');
        }
    }
    result
}

pub fn line(screen: &str, y: usize) -> &str {
    screen.lines().nth(y).unwrap_or("")
}
