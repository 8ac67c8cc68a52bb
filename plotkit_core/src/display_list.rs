// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that records drawing commands.
//!
//! The display list is the in-memory render target: exporters (SVG, raster backends) replay
//! it, and tests inspect it. Each op carries the clip and anti-aliasing state that was in force
//! when it was recorded, so replaying needs no state machine.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Line, Point, Rect, Stroke};
use peniko::Brush;
use smallvec::SmallVec;

use crate::style::{HorizontalAlignment, VerticalAlignment};
use crate::surface::{Icon, Surface};
use crate::text::Font;

/// One recorded drawing command.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// A stroked segment.
    StrokeLine {
        /// Segment in pixels.
        line: Line,
        /// Stroke geometry.
        stroke: Stroke,
        /// Stroke paint.
        brush: Brush,
        /// Effective clip, if any.
        clip: Option<Rect>,
        /// Whether anti-aliasing was on.
        antialias: bool,
    },
    /// A stroked path.
    StrokePath {
        /// Path in pixels.
        path: BezPath,
        /// Stroke geometry.
        stroke: Stroke,
        /// Stroke paint.
        brush: Brush,
        /// Effective clip, if any.
        clip: Option<Rect>,
        /// Whether anti-aliasing was on.
        antialias: bool,
    },
    /// A filled rectangle.
    FillRect {
        /// Rectangle in pixels.
        rect: Rect,
        /// Fill paint.
        brush: Brush,
        /// Effective clip, if any.
        clip: Option<Rect>,
        /// Whether anti-aliasing was on.
        antialias: bool,
    },
    /// A filled path.
    FillPath {
        /// Path in pixels.
        path: BezPath,
        /// Fill paint.
        brush: Brush,
        /// Effective clip, if any.
        clip: Option<Rect>,
        /// Whether anti-aliasing was on.
        antialias: bool,
    },
    /// A line of text.
    Text {
        /// The string drawn.
        text: String,
        /// Anchor position in pixels.
        pos: Point,
        /// Font (including color).
        font: Font,
        /// Horizontal anchoring.
        h_align: HorizontalAlignment,
        /// Vertical anchoring.
        v_align: VerticalAlignment,
        /// Effective clip, if any.
        clip: Option<Rect>,
        /// Whether anti-aliasing was on.
        antialias: bool,
    },
    /// An icon.
    Icon {
        /// Which icon.
        icon: Icon,
        /// Destination rectangle in pixels.
        rect: Rect,
        /// Effective clip, if any.
        clip: Option<Rect>,
        /// Whether anti-aliasing was on.
        antialias: bool,
    },
}

impl DrawOp {
    /// The clip in force when this op was recorded.
    pub fn clip(&self) -> Option<Rect> {
        match self {
            Self::StrokeLine { clip, .. }
            | Self::StrokePath { clip, .. }
            | Self::FillRect { clip, .. }
            | Self::FillPath { clip, .. }
            | Self::Text { clip, .. }
            | Self::Icon { clip, .. } => *clip,
        }
    }

    /// Whether anti-aliasing was on when this op was recorded.
    pub fn antialias(&self) -> bool {
        match self {
            Self::StrokeLine { antialias, .. }
            | Self::StrokePath { antialias, .. }
            | Self::FillRect { antialias, .. }
            | Self::FillPath { antialias, .. }
            | Self::Text { antialias, .. }
            | Self::Icon { antialias, .. } => *antialias,
        }
    }
}

/// A recording [`Surface`].
#[derive(Clone, Debug)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
    clips: SmallVec<[Rect; 4]>,
    antialias: bool,
}

impl DisplayList {
    /// Creates an empty list with anti-aliasing on and no clip.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            clips: SmallVec::new(),
            antialias: true,
        }
    }

    /// The recorded ops, in drawing order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Number of recorded ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Drops all recorded ops. Clip and anti-aliasing state are kept.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Number of clips currently pushed.
    pub fn clip_depth(&self) -> usize {
        self.clips.len()
    }

    /// The clip currently in force.
    pub fn current_clip(&self) -> Option<Rect> {
        self.clips.last().copied()
    }

    fn record(&mut self, op: DrawOp) {
        self.ops.push(op);
    }
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DisplayList {
    fn stroke_line(&mut self, line: Line, stroke: &Stroke, brush: &Brush) {
        self.record(DrawOp::StrokeLine {
            line,
            stroke: stroke.clone(),
            brush: brush.clone(),
            clip: self.current_clip(),
            antialias: self.antialias,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, brush: &Brush) {
        self.record(DrawOp::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            brush: brush.clone(),
            clip: self.current_clip(),
            antialias: self.antialias,
        });
    }

    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.record(DrawOp::FillRect {
            rect,
            brush: brush.clone(),
            clip: self.current_clip(),
            antialias: self.antialias,
        });
    }

    fn fill_path(&mut self, path: &BezPath, brush: &Brush) {
        self.record(DrawOp::FillPath {
            path: path.clone(),
            brush: brush.clone(),
            clip: self.current_clip(),
            antialias: self.antialias,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        font: &Font,
        h_align: HorizontalAlignment,
        v_align: VerticalAlignment,
    ) {
        self.record(DrawOp::Text {
            text: text.into(),
            pos,
            font: font.clone(),
            h_align,
            v_align,
            clip: self.current_clip(),
            antialias: self.antialias,
        });
    }

    fn draw_icon(&mut self, icon: &Icon, rect: Rect) {
        self.record(DrawOp::Icon {
            icon: icon.clone(),
            rect,
            clip: self.current_clip(),
            antialias: self.antialias,
        });
    }

    fn push_clip(&mut self, rect: Rect) {
        let effective = match self.current_clip() {
            Some(outer) => outer.intersect(rect),
            None => rect,
        };
        self.clips.push(effective);
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
    }

    fn set_antialias(&mut self, antialias: bool) {
        self.antialias = antialias;
    }

    fn antialias(&self) -> bool {
        self.antialias
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn nested_clips_intersect_and_unwind() {
        let mut list = DisplayList::new();
        list.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        list.push_clip(Rect::new(50.0, -10.0, 150.0, 40.0));
        assert_eq!(list.current_clip(), Some(Rect::new(50.0, 0.0, 100.0, 40.0)));
        list.pop_clip();
        assert_eq!(list.current_clip(), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        list.pop_clip();
        assert_eq!(list.current_clip(), None);
    }

    #[test]
    fn ops_capture_state_at_record_time() {
        let mut list = DisplayList::new();
        let brush = Brush::Solid(css::BLUE);
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), &brush);
        list.set_antialias(false);
        list.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        list.fill_rect(Rect::new(2.0, 2.0, 3.0, 3.0), &brush);

        assert_eq!(list.len(), 2);
        assert_eq!(list.ops()[0].clip(), None);
        assert!(list.ops()[0].antialias());
        assert_eq!(list.ops()[1].clip(), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert!(!list.ops()[1].antialias());
    }

    #[test]
    fn clear_keeps_state() {
        let mut list = DisplayList::new();
        list.set_antialias(false);
        list.draw_text(
            "x",
            Point::ORIGIN,
            &Font::default(),
            HorizontalAlignment::Left,
            VerticalAlignment::Upper,
        );
        list.clear();
        assert!(list.is_empty());
        assert!(!list.antialias());
    }
}
