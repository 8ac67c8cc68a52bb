// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoped drawing contexts.
//!
//! A [`Graphics`] borrows a [`Surface`] for one drawing pass, applies the quality setting and
//! an optional clip to the data area, and restores both when dropped. Because restoration lives
//! in `Drop`, early returns inside a render method cannot leak clip or quality state into the
//! next plottable.

use core::ops::{Deref, DerefMut};

use kurbo::{Point, Stroke};
use peniko::{Brush, Color};

use crate::dimensions::PlotDimensions;
use crate::style::LineStyle;
use crate::surface::Surface;

/// A stroke plus the paint to stroke it with.
#[derive(Clone, Debug)]
pub struct Pen {
    /// Stroke geometry (width, caps, dashes).
    pub stroke: Stroke,
    /// Stroke paint.
    pub brush: Brush,
}

impl Pen {
    /// Builds a pen, or `None` when the style would not produce any ink.
    pub fn new(color: Color, width: f64, style: LineStyle) -> Option<Self> {
        if !style.is_visible() || width.is_nan() || width <= 0.0 {
            return None;
        }
        Some(Self {
            stroke: style.stroke(width),
            brush: Brush::Solid(color),
        })
    }
}

/// A drawing context scoped to a single render pass.
pub struct Graphics<'a> {
    surface: &'a mut dyn Surface,
    clipped: bool,
    previous_antialias: bool,
}

impl<'a> Graphics<'a> {
    /// Opens a context on `surface`.
    ///
    /// `low_quality` turns anti-aliasing off; it never changes geometry. When
    /// `clip_to_data_area` is set, drawing is restricted to the data rectangle of `dims`.
    pub fn new(
        surface: &'a mut dyn Surface,
        dims: &PlotDimensions,
        low_quality: bool,
        clip_to_data_area: bool,
    ) -> Self {
        let previous_antialias = surface.antialias();
        surface.set_antialias(!low_quality);
        if clip_to_data_area {
            surface.push_clip(dims.data_rect());
        }
        Self {
            surface,
            clipped: clip_to_data_area,
            previous_antialias,
        }
    }

    /// Strokes a segment between two pixel points.
    pub fn draw_line(&mut self, pen: &Pen, p0: Point, p1: Point) {
        self.surface
            .stroke_line(kurbo::Line::new(p0, p1), &pen.stroke, &pen.brush);
    }
}

impl<'a> Deref for Graphics<'a> {
    type Target = dyn Surface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl DerefMut for Graphics<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for Graphics<'_> {
    fn drop(&mut self) {
        if self.clipped {
            self.surface.pop_clip();
        }
        self.surface.set_antialias(self.previous_antialias);
    }
}

impl core::fmt::Debug for Graphics<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Graphics")
            .field("clipped", &self.clipped)
            .field("antialias", &self.surface.antialias())
            .finish_non_exhaustive()
    }
}
