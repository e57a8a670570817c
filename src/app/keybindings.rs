//! Centralized keybinding definitions.
//! Single source of truth for key/description used by Footer and Help.

use super::action::Action;

#[derive(Clone)]
pub struct KeyBinding {
    /// Short key for Footer (e.g., "j/k", "/")
    pub key_short: &'static str,
    /// Display key for Help (e.g., "j / ↓")
    pub key: &'static str,
    /// Short description for Footer (e.g., "Quit", "Sort")
    pub desc_short: &'static str,
    /// Full description for Help (e.g., "Quit application")
    pub description: &'static str,
    pub action: Action,
}

impl KeyBinding {
    /// Returns (key_short, desc_short) tuple for Footer display
    pub const fn as_hint(&self) -> (&'static str, &'static str) {
        (self.key_short, self.desc_short)
    }
}

// =============================================================================
// Index Constants for Footer Lookup
// =============================================================================

pub mod idx {
    pub mod global {
        pub const QUIT: usize = 0;
        pub const HELP: usize = 1;
        pub const REFRESH: usize = 2;
    }

    pub mod table {
        pub const SORT: usize = 0;
        pub const FILTER: usize = 1;
        pub const CLEAR_ALL: usize = 2;
        pub const WIDTH: usize = 3;
        pub const YANK_CELL: usize = 4;
        pub const YANK_ROW: usize = 5;
    }

    /// Indexes for FOOTER_NAV_KEYS
    pub mod footer_nav {
        pub const ROWS: usize = 0;
        pub const COLUMNS: usize = 1;
        pub const TOP_BOTTOM: usize = 2;
    }

    pub mod filter_edit {
        pub const APPLY: usize = 0;
        pub const CLOSE: usize = 1;
        pub const CLEAR_FIELD: usize = 2;
    }

    pub mod help {
        pub const SCROLL: usize = 0;
        pub const CLOSE: usize = 1;
        pub const QUIT: usize = 2;
    }
}

// =============================================================================
// Global Keys (Normal mode)
// =============================================================================

pub const GLOBAL_KEYS: &[KeyBinding] = &[
    // idx 0: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
    // idx 1: HELP
    KeyBinding {
        key_short: "?",
        key: "?",
        desc_short: "Help",
        description: "Toggle help",
        action: Action::OpenHelp,
    },
    // idx 2: REFRESH
    KeyBinding {
        key_short: "r",
        key: "r",
        desc_short: "Refresh",
        description: "Request a fresh payload (filters and widths reset)",
        action: Action::Refresh,
    },
];

// =============================================================================
// Table Keys (Normal mode, data loaded)
// =============================================================================

pub const TABLE_KEYS: &[KeyBinding] = &[
    // idx 0: SORT
    KeyBinding {
        key_short: "s",
        key: "s / Enter",
        desc_short: "Sort",
        description: "Cycle sort on column (asc → desc → off)",
        action: Action::SortSelectedColumn,
    },
    // idx 1: FILTER
    KeyBinding {
        key_short: "/",
        key: "/",
        desc_short: "Filter",
        description: "Edit filter of selected column",
        action: Action::OpenFilterEditor,
    },
    // idx 2: CLEAR_ALL
    KeyBinding {
        key_short: "x",
        key: "x",
        desc_short: "Clear",
        description: "Clear all filters and sorts",
        action: Action::ClearAll,
    },
    // idx 3: WIDTH
    KeyBinding {
        key_short: "</>",
        key: "< / >",
        desc_short: "Width",
        description: "Narrow / widen selected column",
        action: Action::None,
    },
    // idx 4: YANK_CELL
    KeyBinding {
        key_short: "y",
        key: "y",
        desc_short: "Yank",
        description: "Copy selected cell",
        action: Action::YankCell,
    },
    // idx 5: YANK_ROW
    KeyBinding {
        key_short: "Y",
        key: "Y",
        desc_short: "Yank row",
        description: "Copy selected row as TSV",
        action: Action::YankRow,
    },
];

/// Navigation keys for Help overlay (individual key display)
pub const NAVIGATION_KEYS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "j",
        key: "j / ↓",
        desc_short: "Down",
        description: "Next row",
        action: Action::SelectNextRow,
    },
    KeyBinding {
        key_short: "k",
        key: "k / ↑",
        desc_short: "Up",
        description: "Previous row",
        action: Action::SelectPrevRow,
    },
    KeyBinding {
        key_short: "h",
        key: "h / ←",
        desc_short: "Left",
        description: "Previous column",
        action: Action::SelectPrevColumn,
    },
    KeyBinding {
        key_short: "l",
        key: "l / →",
        desc_short: "Right",
        description: "Next column",
        action: Action::SelectNextColumn,
    },
    KeyBinding {
        key_short: "g",
        key: "g / Home",
        desc_short: "Top",
        description: "First row",
        action: Action::SelectFirstRow,
    },
    KeyBinding {
        key_short: "G",
        key: "G / End",
        desc_short: "Bottom",
        description: "Last rendered row",
        action: Action::SelectLastRow,
    },
    KeyBinding {
        key_short: "PgDn",
        key: "PgDn / Ctrl+D",
        desc_short: "Page down",
        description: "Scroll one page down",
        action: Action::PageDown,
    },
    KeyBinding {
        key_short: "PgUp",
        key: "PgUp / Ctrl+U",
        desc_short: "Page up",
        description: "Scroll one page up",
        action: Action::PageUp,
    },
];

/// Combined hints for the footer
pub const FOOTER_NAV_KEYS: &[KeyBinding] = &[
    // idx 0: ROWS
    KeyBinding {
        key_short: "j/k",
        key: "j/k",
        desc_short: "Rows",
        description: "Move between rows",
        action: Action::None,
    },
    // idx 1: COLUMNS
    KeyBinding {
        key_short: "h/l",
        key: "h/l",
        desc_short: "Cols",
        description: "Move between columns",
        action: Action::None,
    },
    // idx 2: TOP_BOTTOM
    KeyBinding {
        key_short: "g/G",
        key: "g/G",
        desc_short: "Top/Bottom",
        description: "First / last rendered row",
        action: Action::None,
    },
];

// =============================================================================
// Filter Edit Keys
// =============================================================================

pub const FILTER_EDIT_KEYS: &[KeyBinding] = &[
    // idx 0: APPLY
    KeyBinding {
        key_short: "Enter",
        key: "Enter",
        desc_short: "Apply",
        description: "Apply filter now",
        action: Action::FilterCommit,
    },
    // idx 1: CLOSE
    KeyBinding {
        key_short: "Esc",
        key: "Esc",
        desc_short: "Close",
        description: "Stop editing (pending edits still apply)",
        action: Action::FilterClose,
    },
    // idx 2: CLEAR_FIELD
    KeyBinding {
        key_short: "^U",
        key: "Ctrl+U",
        desc_short: "Clear",
        description: "Clear this filter",
        action: Action::FilterClearField,
    },
];

// =============================================================================
// Mouse
// =============================================================================

pub const MOUSE_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key_short: "click",
        key: "Click header",
        desc_short: "Sort",
        description: "Cycle sort on clicked column",
        action: Action::None,
    },
    KeyBinding {
        key_short: "drag",
        key: "Drag │ in header",
        desc_short: "Resize",
        description: "Resize the column left of the separator",
        action: Action::None,
    },
    KeyBinding {
        key_short: "click",
        key: "Click filter row",
        desc_short: "Filter",
        description: "Edit that column's filter",
        action: Action::None,
    },
    KeyBinding {
        key_short: "wheel",
        key: "Wheel",
        desc_short: "Scroll",
        description: "Scroll rows",
        action: Action::None,
    },
];

// =============================================================================
// Help Overlay
// =============================================================================

pub const HELP_KEYS: &[KeyBinding] = &[
    // idx 0: SCROLL
    KeyBinding {
        key_short: "j/k",
        key: "j / k",
        desc_short: "Scroll",
        description: "Scroll help",
        action: Action::None,
    },
    // idx 1: CLOSE
    KeyBinding {
        key_short: "Esc/?",
        key: "Esc / ?",
        desc_short: "Close",
        description: "Close help",
        action: Action::CloseHelp,
    },
    // idx 2: QUIT
    KeyBinding {
        key_short: "q",
        key: "q",
        desc_short: "Quit",
        description: "Quit application",
        action: Action::Quit,
    },
];

/// Section headers (5) + blank separators (4) + all listed bindings
pub const HELP_TOTAL_LINES: usize = 9
    + GLOBAL_KEYS.len()
    + TABLE_KEYS.len()
    + NAVIGATION_KEYS.len()
    + FILTER_EDIT_KEYS.len()
    + MOUSE_BINDINGS.len();
