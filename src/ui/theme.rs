use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(140, 115, 200);
pub const HEADER_BG: Color = Color::Rgb(25, 25, 38);
pub const STATUS_BG: Color = Color::Rgb(30, 30, 40);
pub const SELECTED_BG: Color = Color::Rgb(50, 50, 80);
pub const BORDER_COLOR: Color = Color::Rgb(55, 55, 75);
pub const ACTIVE_BORDER: Color = Color::Rgb(120, 120, 180);
pub const FILTER_COLOR: Color = Color::Cyan;
pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
pub const LINK_COLOR: Color = Color::LightBlue;
pub const STAR_COLOR: Color = Color::Yellow;
pub const ERROR_FG: Color = Color::LightRed;
pub const SECTION_HEADER_FG: Color = Color::White;

pub fn border(focused: bool) -> Color {
    if focused {
        ACTIVE_BORDER
    } else {
        BORDER_COLOR
    }
}
