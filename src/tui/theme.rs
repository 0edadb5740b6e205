use ratatui::style::Color;

// Header
pub const TITLE_WHITE: Color = Color::Rgb(255, 255, 255);     // #FFFFFF
pub const SUBTITLE_DIM: Color = Color::Rgb(136, 136, 136);    // #888888

// Cells
pub const CELL_BORDER: Color = Color::Rgb(96, 96, 96);        // #606060
pub const CELL_FOCUS_BG: Color = Color::Rgb(211, 211, 211);   // light gray
pub const CELL_FOCUS_FG: Color = Color::Rgb(0, 0, 0);         // #000000
pub const CELL_TEXT: Color = Color::Rgb(220, 220, 220);       // #DCDCDC

// Cancel control
pub const CANCEL_IDLE: Color = Color::Rgb(124, 175, 194);     // #7CAFC2
pub const CANCEL_PRESSED: Color = Color::Rgb(232, 131, 136);  // #E88388

// Overlay chrome
pub const OVERLAY_BORDER: Color = Color::Rgb(161, 193, 129);  // #A1C181
