use ratatui::style::Color;

pub const MARVEL_RED: Color = Color::Rgb(0x9f, 0x00, 0x13);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PANEL_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const SKELETON: Color = Color::Rgb(0x3a, 0x3a, 0x3a);
pub const LINK_SECONDARY: Color = Color::Rgb(0x5c, 0x5c, 0x5c);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
