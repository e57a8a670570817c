use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use super::data_grid::DataGrid;
use super::footer::Footer;
use super::header::Header;
use super::help_overlay::HelpOverlay;
use super::status_bar::StatusBar;
use super::status_pane::StatusPane;
use crate::app::input_mode::InputMode;
use crate::app::ports::RenderOutput;
use crate::app::state::AppState;

pub struct MainLayout;

impl MainLayout {
    pub fn render(frame: &mut Frame, state: &AppState) -> RenderOutput {
        let area = frame.area();

        let [header_area, main_area, status_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::render(frame, header_area, state);

        let output = match state.session() {
            Some(session) => DataGrid::render(frame, main_area, state, session),
            None => {
                StatusPane::render(frame, main_area, state);
                RenderOutput::default()
            }
        };

        StatusBar::render(frame, status_area, state);
        Footer::render(frame, footer_area, state);

        if state.ui.input_mode == InputMode::Help {
            HelpOverlay::render(frame, state);
        }

        output
    }
}
