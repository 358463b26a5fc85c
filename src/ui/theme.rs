use crate::domain::{CardColor, LineStatus};
use ratatui::style::Color;

pub const BRAND: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const BRAND_DARK: Color = Color::Rgb(0x0f, 0x1e, 0x4a);
pub const ACCENT: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn card_color(color: CardColor) -> Color {
    match color {
        CardColor::Blue => Color::Rgb(0x3b, 0x82, 0xf6),
        CardColor::Purple => Color::Rgb(0x4f, 0x46, 0xe5),
        CardColor::Green => Color::Rgb(0x05, 0x96, 0x69),
        CardColor::Orange => Color::Rgb(0xf9, 0x73, 0x16),
    }
}

pub fn line_status_color(status: LineStatus) -> Color {
    match status {
        LineStatus::Normal => STATUS_OK,
        LineStatus::Lento => STATUS_WARN,
        LineStatus::Paralisado => STATUS_ERROR,
    }
}
