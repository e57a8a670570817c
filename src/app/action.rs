use crate::domain::LoadOutcome;

#[derive(Debug, Clone)]
pub enum Action {
    None,
    Quit,
    /// A timer deadline passed (debounces, message expiry)
    Tick,
    Render,
    Resize(u16, u16),

    // Payload loading
    Load,
    Refresh,
    PayloadLoaded {
        generation: u64,
        result: Result<LoadOutcome, String>,
    },

    // Sorting
    HeaderClick(usize),
    SortSelectedColumn,

    // Filter editing
    EditFilter(usize),
    OpenFilterEditor,
    FilterInput(char),
    FilterBackspace,
    FilterClearField,
    FilterCommit,
    FilterClose,
    ClearAll,

    // Column width
    ColumnResizeStart {
        column: usize,
        pointer_x: u16,
        current_width: u16,
    },
    ColumnResizeDrag {
        pointer_x: u16,
    },
    ColumnResizeEnd,
    NudgeColumnWidth(i16),

    // Navigation
    ScrollRows(isize),
    SelectNextRow,
    SelectPrevRow,
    SelectFirstRow,
    SelectLastRow,
    PageDown,
    PageUp,
    SelectNextColumn,
    SelectPrevColumn,
    SelectCell {
        row_offset: usize,
        column: Option<usize>,
    },

    // Help overlay
    OpenHelp,
    CloseHelp,
    HelpScrollUp,
    HelpScrollDown,

    // Clipboard
    YankCell,
    YankRow,
    CopySucceeded(String),
    CopyFailed(String),

    DispatchActions(Vec<Action>),
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
