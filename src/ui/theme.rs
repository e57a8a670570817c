use ratatui::style::Color;

/// Base color palette
pub struct Palette;

impl Palette {
    pub const CATPPUCCIN_MOCHA: Color = Color::Rgb(0x1e, 0x1e, 0x2e);
    pub const DUCKBONES: Color = Color::Rgb(0x15, 0x19, 0x26);
}

/// Application color theme constants
pub struct Theme;

impl Theme {
    // Overlay backgrounds
    pub const MODAL_BG: Color = Palette::DUCKBONES;
    pub const HELP_BG: Color = Palette::CATPPUCCIN_MOCHA;

    // Grid
    pub const TABLE_HEADER_BG: Color = Color::Rgb(0x2a, 0x2a, 0x2e);
    pub const FILTER_ROW_BG: Color = Color::Rgb(0x20, 0x20, 0x26);
    pub const SELECTED_ROW_BG: Color = Color::Rgb(0x31, 0x32, 0x44);
    pub const SELECTED_CELL_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const SEPARATOR: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const RESIZE_ACTIVE: Color = Color::Yellow;
    pub const SORT_INDICATOR: Color = Color::Cyan;
    pub const ROW_NUMBER: Color = Color::DarkGray;

    // Borders
    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;

    // Text
    pub const TEXT_ACCENT: Color = Color::Yellow;
    pub const TEXT_SECONDARY: Color = Color::Gray;
    pub const TEXT_MUTED: Color = Color::DarkGray;
    pub const KEY_CHIP_BG: Color = Color::Rgb(0x45, 0x47, 0x5a);
    pub const KEY_CHIP_FG: Color = Color::White;

    // Status
    pub const STATUS_SUCCESS: Color = Color::Green;
    pub const STATUS_ERROR: Color = Color::Red;
    pub const STATUS_LOADING: Color = Color::Yellow;
}
