//! # Appearance
//!
//! Visual options for the code cells. None of them change how a cell reacts
//! to input; they only decide how `CellView` paints it.
//!
//! Colors come from the config as strings and are parsed with ratatui's
//! `Color::from_str`, so names (`"darkgray"`), hex (`"#ff8800"`) and indexed
//! (`"42"`) values all work. Anything unparseable falls back to the default
//! with a warning in the log.

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::AppearanceConfig;

/// Default cell width in columns.
pub const DEFAULT_TEXT_SIZE: u16 = 5;
/// Narrowest cell that still fits a wide glyph with padding.
pub const MIN_TEXT_SIZE: u16 = 3;

/// Terminal stand-in for a font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    Dim,
}

impl FontStyle {
    /// Looks up a font by name, `None` when the terminal has no equivalent.
    pub fn resolve(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "" | "regular" | "system" => Some(FontStyle::Regular),
            "bold" => Some(FontStyle::Bold),
            "italic" => Some(FontStyle::Italic),
            "dim" | "light" => Some(FontStyle::Dim),
            _ => None,
        }
    }

    pub fn modifier(self) -> Modifier {
        match self {
            FontStyle::Regular => Modifier::empty(),
            FontStyle::Bold => Modifier::BOLD,
            FontStyle::Italic => Modifier::ITALIC,
            FontStyle::Dim => Modifier::DIM,
        }
    }
}

/// Dark or light input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Surface {
    #[default]
    Light,
    Dark,
}

impl Surface {
    fn background(self) -> Color {
        match self {
            Surface::Light => Color::Reset,
            Surface::Dark => Color::Black,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Underline of an empty (or blank) cell.
    pub underline_color: Color,
    /// Underline of a filled cell.
    pub underline_selected_color: Color,
    pub text_color: Color,
    /// Cell width in columns.
    pub text_size: u16,
    pub font: FontStyle,
    /// `Color::Reset` lets the surface decide.
    pub background_color: Color,
    /// Caret color on the focused cell.
    pub tint_color: Color,
    pub surface: Surface,
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            underline_color: Color::DarkGray,
            underline_selected_color: Color::White,
            text_color: Color::Reset,
            text_size: DEFAULT_TEXT_SIZE,
            font: FontStyle::Regular,
            background_color: Color::Reset,
            tint_color: Color::Blue,
            surface: Surface::Light,
        }
    }
}

impl Appearance {
    /// Builds an appearance from the sparse config section.
    pub fn from_config(config: &AppearanceConfig) -> Self {
        let defaults = Self::default();
        let mut appearance = Self {
            underline_color: parse_color(
                "underline_color",
                config.underline_color.as_deref(),
                defaults.underline_color,
            ),
            underline_selected_color: parse_color(
                "underline_selected_color",
                config.underline_selected_color.as_deref(),
                defaults.underline_selected_color,
            ),
            text_color: parse_color(
                "text_color",
                config.text_color.as_deref(),
                defaults.text_color,
            ),
            background_color: parse_color(
                "background_color",
                config.background_color.as_deref(),
                defaults.background_color,
            ),
            tint_color: parse_color(
                "tint_color",
                config.tint_color.as_deref(),
                defaults.tint_color,
            ),
            ..defaults
        };

        if let Some(size) = config.text_size {
            appearance.set_text_size(size);
        }
        if let Some(ref font) = config.text_font {
            appearance.set_text_font(font);
        }
        appearance.set_dark_surface(config.dark_surface.unwrap_or(false));
        appearance
    }

    pub fn set_underline_color(&mut self, color: Color) {
        self.underline_color = color;
    }

    pub fn set_underline_selected_color(&mut self, color: Color) {
        self.underline_selected_color = color;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_text_size(&mut self, size: u16) {
        self.text_size = size.max(MIN_TEXT_SIZE);
    }

    /// Unknown font names fall back to the regular face.
    pub fn set_text_font(&mut self, name: &str) {
        self.font = FontStyle::resolve(name).unwrap_or_else(|| {
            warn!("Unknown font '{}', falling back to regular", name);
            FontStyle::Regular
        });
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    pub fn set_tint_color(&mut self, color: Color) {
        self.tint_color = color;
    }

    pub fn set_dark_surface(&mut self, dark: bool) {
        self.surface = if dark { Surface::Dark } else { Surface::Light };
    }

    /// Base style of a cell: glyph color, font and background.
    pub fn cell_style(&self) -> Style {
        let background = if self.background_color == Color::Reset {
            self.surface.background()
        } else {
            self.background_color
        };
        Style::default()
            .fg(self.text_color)
            .bg(background)
            .add_modifier(self.font.modifier())
    }
}

fn parse_color(field: &str, value: Option<&str>, default: Color) -> Color {
    match value {
        None => default,
        Some(raw) => Color::from_str(raw.trim()).unwrap_or_else(|_| {
            warn!("Invalid {} '{}', using {:?}", field, raw, default);
            default
        }),
    }
}
