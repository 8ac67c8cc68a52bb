// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fonts and text measurement.
//!
//! Plottables need text extents to size label backgrounds before drawing them. Shaping stays
//! with the drawing surface, so measurement goes through the small [`TextMeasurer`] trait and a
//! surface may forward it to whatever text engine it owns.

use alloc::sync::Arc;

use kurbo::Size;
use peniko::Color;
use peniko::color::palette::css;

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// A font description: family, size, weight and paint.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family to render with.
    pub family: FontFamily,
    /// Size in pixels.
    pub size: f64,
    /// Bold weight when `true`.
    pub bold: bool,
    /// Text color.
    pub color: Color,
}

impl Font {
    /// A regular-weight black sans-serif font of the given size.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            family: FontFamily::SansSerif,
            size,
            bold: false,
            color: css::BLACK,
        }
    }

    /// Sets the weight.
    #[must_use]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Sets the text color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }

    /// The box a single line occupies.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.advance_width, self.line_height())
    }
}

/// Measures a single line of text.
pub trait TextMeasurer {
    /// Measure `text` as one line set in `font`.
    fn measure(&self, text: &str, font: &Font) -> TextMetrics;
}

/// A heuristic measurer: ~0.6em per glyph, baseline at ~0.8em.
///
/// Bold text is assumed to run about 10% wider.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font: &Font) -> TextMetrics {
        let glyph = if font.bold { 0.66 } else { 0.6 };
        TextMetrics {
            advance_width: glyph * font.size * text.chars().count() as f64,
            ascent: 0.8 * font.size,
            descent: 0.2 * font.size,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn heuristic_width_scales_with_glyph_count() {
        let font = Font::new(10.0);
        let one = HeuristicTextMeasurer.measure("a", &font);
        let four = HeuristicTextMeasurer.measure("abcd", &font);
        assert!((four.advance_width - 4.0 * one.advance_width).abs() < 1e-9);
        assert!((one.line_height() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn bold_text_measures_wider() {
        let regular = Font::new(12.0);
        let bold = regular.clone().with_bold(true);
        let a = HeuristicTextMeasurer.measure("12.50", &regular);
        let b = HeuristicTextMeasurer.measure("12.50", &bold);
        assert!(b.advance_width > a.advance_width);
        assert_eq!(a.line_height(), b.line_height());
    }
}
