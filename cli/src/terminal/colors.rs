use colored::Color;

pub const PRIMARY: Color = Color::TrueColor {
    r: 102,
    g: 204,
    b: 255,
};
pub const SECONDARY: Color = Color::TrueColor {
    r: 255,
    g: 204,
    b: 102,
};
pub const ACCENT: Color = Color::BrightMagenta;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;
pub const QUOTE: Color = Color::TrueColor {
    r: 170,
    g: 230,
    b: 150,
};
