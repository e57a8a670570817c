use color_eyre::eyre::Result;

use crate::app::state::AppState;
use crate::app::ui_state::GridLayout;

/// What the last frame measured, fed back into `UiState`.
#[derive(Debug, Default)]
pub struct RenderOutput {
    pub grid: GridLayout,
    pub body_height: u16,
    pub last_visible_column: usize,
}

pub trait Renderer {
    fn draw(&mut self, state: &AppState) -> Result<RenderOutput>;
}
