//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(8, 11, 16);
pub const CARD_BG: Color = Color::Rgb(15, 20, 28);

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(45, 55, 68);
pub const BORDER_ACTIVE: Color = Color::Rgb(34, 211, 238);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(34, 211, 238); // Scanner cyan

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(226, 232, 240);
pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184);
pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Rgb(16, 185, 129);
pub const STATUS_RED: Color = Color::Rgb(244, 63, 94);
pub const STATUS_YELLOW: Color = Color::Rgb(234, 179, 8);
pub const STATUS_BLUE: Color = Color::Rgb(56, 189, 248);

// --- Scanner ---
pub const SCAN_LINE: Color = Color::Rgb(103, 232, 249);
pub const SCAN_GRID: Color = Color::Rgb(30, 41, 59);
pub const BAR_EMPTY: Color = Color::Rgb(30, 41, 59);
