// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain style descriptors shared by plottables and surfaces.

use kurbo::{Cap, Stroke};

/// Dash pattern for stroked lines.
///
/// Patterns are expressed in multiples of the stroke width, so thick dashed lines keep their
/// proportions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// A continuous line.
    #[default]
    Solid,
    /// Long dashes.
    Dash,
    /// Alternating dashes and dots.
    DashDot,
    /// A dash followed by two dots.
    DashDotDot,
    /// Dots.
    Dot,
    /// Nothing is stroked.
    None,
}

impl LineStyle {
    /// The dash pattern in units of stroke width; empty for solid lines.
    pub fn dash_pattern(self) -> &'static [f64] {
        match self {
            Self::Solid | Self::None => &[],
            Self::Dash => &[8.0, 4.0],
            Self::DashDot => &[8.0, 4.0, 2.0, 4.0],
            Self::DashDotDot => &[8.0, 4.0, 2.0, 4.0, 2.0, 4.0],
            Self::Dot => &[2.0, 4.0],
        }
    }

    /// Returns `true` if lines in this style produce any ink.
    pub fn is_visible(self) -> bool {
        self != Self::None
    }

    /// Builds a `kurbo` stroke of the given width in this style.
    pub fn stroke(self, width: f64) -> Stroke {
        let stroke = Stroke::new(width);
        let pattern = self.dash_pattern();
        if pattern.is_empty() {
            return stroke;
        }
        stroke
            .with_caps(Cap::Round)
            .with_dashes(0.0, pattern.iter().map(|d| d * width))
    }
}

/// Marker drawn next to a legend entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    /// No marker.
    #[default]
    None,
    /// A filled circle.
    FilledCircle,
    /// A filled square.
    FilledSquare,
}

/// Horizontal text anchoring relative to the draw position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HorizontalAlignment {
    /// The text starts at the position.
    #[default]
    Left,
    /// The text is centered on the position.
    Center,
    /// The text ends at the position.
    Right,
}

/// Vertical text anchoring relative to the draw position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// The top of the text is at the position.
    #[default]
    Upper,
    /// The text is centered on the position.
    Middle,
    /// The bottom of the text is at the position.
    Lower,
}

/// Pointer cursor a draggable element asks for while hovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// The platform default arrow.
    #[default]
    Arrow,
    /// Two-headed vertical arrow (for elements that move up and down).
    NorthSouth,
    /// Two-headed horizontal arrow (for elements that move left and right).
    WestEast,
    /// Four-headed arrow.
    All,
}
