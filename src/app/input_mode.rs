#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    /// Typing into the filter cell of `UiState::selected_column`
    FilterEdit,
    Help,
}
