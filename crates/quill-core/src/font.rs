//! Whole-document font model.
//!
//! The editor applies one font to the entire surface. Style toggles
//! (bold, italic, underline) flip flags on that font rather than
//! formatting individual characters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest point size the font picker offers.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Largest point size the font picker offers.
pub const MAX_FONT_SIZE: f32 = 48.0;

/// Generic font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    Monospace,
    SansSerif,
    Serif,
    Cursive,
    Fantasy,
}

impl FontFamily {
    /// Every family, in the order the font picker lists them.
    pub const ALL: [FontFamily; 5] = [
        FontFamily::Monospace,
        FontFamily::SansSerif,
        FontFamily::Serif,
        FontFamily::Cursive,
        FontFamily::Fantasy,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            FontFamily::Monospace => "Monospace",
            FontFamily::SansSerif => "Sans-serif",
            FontFamily::Serif => "Serif",
            FontFamily::Cursive => "Cursive",
            FontFamily::Fantasy => "Fantasy",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Font applied to the whole text surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    pub family: FontFamily,

    /// Point size
    pub size: f32,

    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FontSpec {
    /// Returns a copy with the size clamped to the supported range.
    pub fn clamped(mut self) -> Self {
        self.size = self.size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        self
    }

    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self.clamped()
    }

    /// Short human readable description, e.g. `Monospace 14pt Bold`.
    pub fn describe(&self) -> String {
        let mut out = format!("{} {}pt", self.family, self.size);
        for (on, name) in [
            (self.bold, "Bold"),
            (self.italic, "Italic"),
            (self.underline, "Underline"),
        ] {
            if on {
                out.push(' ');
                out.push_str(name);
            }
        }
        out
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: FontFamily::Monospace,
            size: 14.0,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}
