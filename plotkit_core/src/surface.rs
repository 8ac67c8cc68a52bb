// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface plottables render onto.
//!
//! A [`Surface`] is the boundary to whatever owns the pixels: a raster backend, a GPU scene
//! builder, or the recording [`DisplayList`](crate::DisplayList). Plottables never hold on to
//! a surface between calls; they borrow it for the duration of one render through a scoped
//! [`Graphics`](crate::Graphics) context.

use alloc::sync::Arc;

use kurbo::{BezPath, Line, Point, Rect, Size, Stroke};
use peniko::Brush;

use crate::style::{HorizontalAlignment, VerticalAlignment};
use crate::text::{Font, HeuristicTextMeasurer, TextMeasurer, TextMetrics};

/// A small image drawn at a fixed pixel size, resolved by the surface.
///
/// Bitmap storage belongs to the surface; plottables only refer to icons by name.
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    /// Key the surface uses to look the image up.
    pub name: Arc<str>,
    /// Drawn size in pixels.
    pub size: Size,
}

impl Icon {
    /// Creates an icon reference.
    pub fn new(name: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

/// Drawing primitives in pixel coordinates.
pub trait Surface {
    /// Strokes a straight segment.
    fn stroke_line(&mut self, line: Line, stroke: &Stroke, brush: &Brush);

    /// Strokes an arbitrary path.
    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, brush: &Brush);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, brush: &Brush);

    /// Fills an arbitrary path (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, brush: &Brush);

    /// Draws a single line of text anchored at `pos`.
    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        font: &Font,
        h_align: HorizontalAlignment,
        v_align: VerticalAlignment,
    );

    /// Draws an icon scaled into `rect`.
    fn draw_icon(&mut self, icon: &Icon, rect: Rect);

    /// Measures a single line of text as this surface would draw it.
    fn measure_text(&self, text: &str, font: &Font) -> TextMetrics {
        HeuristicTextMeasurer.measure(text, font)
    }

    /// Restricts subsequent drawing to `rect`, intersected with any clip already in force.
    fn push_clip(&mut self, rect: Rect);

    /// Removes the most recently pushed clip.
    fn pop_clip(&mut self);

    /// Enables or disables anti-aliasing for subsequent drawing.
    fn set_antialias(&mut self, antialias: bool);

    /// Returns the current anti-aliasing setting.
    fn antialias(&self) -> bool;
}
