//! Colors and font mapping.

use iced::font::{Family, Style, Weight};
use iced::Font;
use quill_core::{FontFamily, FontSpec};

pub mod colors {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const BG_MEDIUM: Color = Color::from_rgb(0.14, 0.14, 0.16);
    pub const BG_LIGHT: Color = Color::from_rgb(0.18, 0.18, 0.20);
    pub const BG_HOVER: Color = Color::from_rgb(0.22, 0.22, 0.25);
    pub const BG_ACTIVE: Color = Color::from_rgb(0.25, 0.25, 0.28);

    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.65, 0.68);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.48);

    pub const ACCENT: Color = Color::from_rgb(0.36, 0.54, 0.90);
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.40, 0.58, 0.95);

    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);

    pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);
    pub const SELECTION: Color = Color::from_rgba(0.25, 0.46, 0.85, 0.55);
}

/// Maps the editor font onto an iced font.
///
/// iced's text editor has no underline decoration, so `underline` is only
/// reflected in the menu check mark and status bar.
pub fn iced_font(spec: &FontSpec) -> Font {
    let family = match spec.family {
        FontFamily::Monospace => Family::Monospace,
        FontFamily::SansSerif => Family::SansSerif,
        FontFamily::Serif => Family::Serif,
        FontFamily::Cursive => Family::Cursive,
        FontFamily::Fantasy => Family::Fantasy,
    };

    Font {
        family,
        weight: if spec.bold { Weight::Bold } else { Weight::Normal },
        style: if spec.italic { Style::Italic } else { Style::Normal },
        ..Font::DEFAULT
    }
}
