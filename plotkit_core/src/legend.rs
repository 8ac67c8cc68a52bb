// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend entries produced by plottables.
//!
//! Plottables do not draw their own legend. They describe each entry as a neutral
//! (label, color, stroke) record and leave layout and drawing to the container.

use alloc::string::String;

use peniko::Color;

use crate::style::{LineStyle, MarkerShape};

/// A single legend entry.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// Text shown next to the swatch; unlabeled items are usually skipped by legend drawers.
    pub label: Option<String>,
    /// Swatch color.
    pub color: Color,
    /// Swatch line style.
    pub line_style: LineStyle,
    /// Swatch line width in pixels.
    pub line_width: f64,
    /// Marker drawn on the swatch.
    pub marker_shape: MarkerShape,
}

impl LegendItem {
    /// A solid 1px line entry with no marker.
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: Some(label.into()),
            color,
            line_style: LineStyle::Solid,
            line_width: 1.0,
            marker_shape: MarkerShape::None,
        }
    }

    /// Sets the line style and width.
    #[must_use]
    pub fn with_line(mut self, line_style: LineStyle, line_width: f64) -> Self {
        self.line_style = line_style;
        self.line_width = line_width;
        self
    }

    /// Sets the marker shape.
    #[must_use]
    pub fn with_marker(mut self, marker_shape: MarkerShape) -> Self {
        self.marker_shape = marker_shape;
        self
    }
}
