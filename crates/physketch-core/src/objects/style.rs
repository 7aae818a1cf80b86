//! Cosmetic style types shared across scene objects.
//!
//! None of these influence handle extraction, snapping, or hit testing.

use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    /// Muted gray used by measurement markers.
    pub fn gray() -> Self {
        Self::new(85, 85, 85, 255)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl From<peniko::Color> for Color {
    fn from(color: peniko::Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<Color> for peniko::Color {
    fn from(color: Color) -> Self {
        peniko::Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Font settings for labels and text content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontStyle {
    /// Font size in world units.
    pub size: f64,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

impl FontStyle {
    pub fn sized(size: f64) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
        }
    }
}

impl Default for FontStyle {
    fn default() -> Self {
        Self::sized(20.0)
    }
}

/// A text label attached to an object. Empty text means no label is drawn.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub text: String,
    /// Draw the label on the opposite side of the object.
    #[serde(default)]
    pub flipped: bool,
    #[serde(default)]
    pub font: FontStyle,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

/// Stroke rendering style for arrows and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
}

/// Arrow head rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadStyle {
    /// Solid filled triangle.
    #[default]
    Filled,
    /// Outlined triangle.
    Hollow,
    /// Two plain strokes, no fill.
    Simple,
}
