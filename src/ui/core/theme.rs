use crate::settings::{parse_color, ThemeSettings};
use crate::ui::core::style::{Color, Font};

/// Flat presentation defaults shared by every element of a window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub font: Font,
    pub text_color: Color,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: Font::default(),
            text_color: Color::BLACK,
            background: Color::LIGHT_GRAY,
        }
    }
}

impl Theme {
    /// Unparseable colours and a zero font size keep their defaults.
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let defaults = Self::default();
        let family = if settings.font_family.trim().is_empty() {
            defaults.font.family.clone()
        } else {
            settings.font_family.clone()
        };
        let size = if settings.font_size == 0 {
            defaults.font.size
        } else {
            settings.font_size
        };
        Self {
            font: Font::new(family, size),
            text_color: parse_color(&settings.text_color).unwrap_or(defaults.text_color),
            background: parse_color(&settings.background_color).unwrap_or(defaults.background),
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/theme.rs"]
mod tests;
