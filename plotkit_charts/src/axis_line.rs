// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal and vertical reference lines.
//!
//! An [`AxisLine`] marks a single data value across the plot: a horizontal line at some Y, or
//! a vertical line at some X. It can label its own position on the edge of the data area and can
//! be dragged along its free axis.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Line, Point, Rect};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use plotkit_core::{
    AxisLimits, Cursor, Draggable, Font, Graphics, HorizontalAlignment, LegendItem, LineStyle,
    MarkerShape, Pen, PlotDimensions, Plottable, Surface, ValidationError, VerticalAlignment,
};

use crate::format::format_position;

/// Which way an [`AxisLine`] runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// The line runs left to right; its position is a Y value.
    Horizontal,
    /// The line runs top to bottom; its position is an X value.
    Vertical,
}

/// Turns a line position into label text.
pub type PositionFormatter = Arc<dyn Fn(f64) -> String>;

type DragObserver = Box<dyn FnMut(f64)>;

/// A reference line at a fixed data position.
pub struct AxisLine {
    orientation: Orientation,
    position: f64,
    /// Lower bound of the line's extent along its own axis.
    pub min: f64,
    /// Upper bound of the line's extent along its own axis.
    pub max: f64,
    /// Whether the line reacts to [`Draggable::drag_to`].
    pub drag_enabled: bool,
    /// Dragging cannot move the line below this position.
    pub drag_limit_min: f64,
    /// Dragging cannot move the line above this position.
    pub drag_limit_max: f64,
    /// When set, the line does not contribute to auto-scaling.
    pub ignore_axis_auto: bool,
    /// Whether the line is drawn.
    pub visible: bool,
    /// Index of the X axis this line is plotted against.
    pub x_axis_index: usize,
    /// Index of the Y axis this line is plotted against.
    pub y_axis_index: usize,
    /// Line color.
    pub color: Color,
    /// Line width in pixels.
    pub line_width: f64,
    /// Dash style.
    pub line_style: LineStyle,
    /// Legend text.
    pub label: Option<String>,
    /// Draw the position value on the edge of the data area.
    pub position_label: bool,
    /// Font for the position label.
    pub position_label_font: Font,
    /// Fill behind the position label.
    pub position_label_background: Color,
    /// Place the position label on the right (horizontal lines) or top (vertical lines) edge.
    pub position_label_opposite_axis: bool,
    /// Produces the position label text.
    pub position_formatter: Option<PositionFormatter>,
    dragged: Vec<DragObserver>,
}

impl AxisLine {
    /// Creates a line with the given orientation at `position`.
    pub fn new(orientation: Orientation, position: f64) -> Self {
        Self {
            orientation,
            position,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            drag_enabled: false,
            drag_limit_min: f64::NEG_INFINITY,
            drag_limit_max: f64::INFINITY,
            ignore_axis_auto: false,
            visible: true,
            x_axis_index: 0,
            y_axis_index: 0,
            color: css::BLACK,
            line_width: 1.0,
            line_style: LineStyle::Solid,
            label: None,
            position_label: false,
            position_label_font: Font::default().with_bold(true).with_color(css::WHITE),
            position_label_background: css::BLACK,
            position_label_opposite_axis: false,
            position_formatter: Some(Arc::new(format_position)),
            dragged: Vec::new(),
        }
    }

    /// A horizontal line at `y`.
    pub fn horizontal(y: f64) -> Self {
        Self::new(Orientation::Horizontal, y)
    }

    /// A vertical line at `x`.
    pub fn vertical(x: f64) -> Self {
        Self::new(Orientation::Vertical, x)
    }

    /// Which way the line runs.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns `true` for horizontal lines.
    pub fn is_horizontal(&self) -> bool {
        self.orientation == Orientation::Horizontal
    }

    /// The line's position: Y for horizontal lines, X for vertical lines.
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Moves the line. Observers are not notified; they only hear about drags.
    pub fn set_position(&mut self, position: f64) {
        self.position = position;
    }

    /// Registers a callback that runs after every successful drag with the new position.
    pub fn on_dragged(&mut self, observer: impl FnMut(f64) + 'static) {
        self.dragged.push(Box::new(observer));
    }

    /// Sets the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the line width and dash style.
    #[must_use]
    pub fn with_line(mut self, line_width: f64, line_style: LineStyle) -> Self {
        self.line_width = line_width;
        self.line_style = line_style;
        self
    }

    /// Sets the legend text.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Limits the drawn extent of the line along its own axis.
    #[must_use]
    pub fn with_extent(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Enables dragging within `[min, max]`.
    #[must_use]
    pub fn with_drag_limits(mut self, min: f64, max: f64) -> Self {
        self.drag_enabled = true;
        self.drag_limit_min = min;
        self.drag_limit_max = max;
        self
    }

    /// Enables the position label.
    #[must_use]
    pub fn with_position_label(mut self, opposite_axis: bool) -> Self {
        self.position_label = true;
        self.position_label_opposite_axis = opposite_axis;
        self
    }

    /// Sets the position label formatter.
    #[must_use]
    pub fn with_position_formatter(mut self, formatter: impl Fn(f64) -> String + 'static) -> Self {
        self.position_formatter = Some(Arc::new(formatter));
        self
    }

    /// The segment the line occupies in pixel space.
    ///
    /// The extent `[min, max]` is clamped to the visible window first, so unbounded lines stay
    /// within the data area instead of overflowing pixel coordinates.
    pub fn line_segment(&self, dims: &PlotDimensions) -> Line {
        match self.orientation {
            Orientation::Horizontal => {
                let y = dims.pixel_y(self.position);
                let x0 = dims.pixel_x(self.min.max(dims.x_min));
                let x1 = dims.pixel_x(self.max.min(dims.x_max));
                Line::new((x0, y), (x1, y))
            }
            Orientation::Vertical => {
                let x = dims.pixel_x(self.position);
                let y0 = dims.pixel_y(self.min.max(dims.y_min));
                let y1 = dims.pixel_y(self.max.min(dims.y_max));
                Line::new((x, y0), (x, y1))
            }
        }
    }

    /// Draws only the line, clipped to the data area.
    pub fn render_line(&self, dims: &PlotDimensions, surface: &mut dyn Surface, low_quality: bool) {
        let Some(pen) = Pen::new(self.color, self.line_width, self.line_style) else {
            return;
        };
        let mut gfx = Graphics::new(surface, dims, low_quality, true);
        let line = self.line_segment(dims);
        gfx.draw_line(&pen, line.p0, line.p1);
    }

    fn position_in_view(&self, dims: &PlotDimensions) -> bool {
        match self.orientation {
            Orientation::Horizontal => dims.contains_y(self.position),
            Orientation::Vertical => dims.contains_x(self.position),
        }
    }

    fn render_position_label(
        &self,
        dims: &PlotDimensions,
        surface: &mut dyn Surface,
        low_quality: bool,
    ) {
        let Some(formatter) = self.position_formatter.as_ref() else {
            return;
        };
        if !self.position_in_view(dims) {
            tracing::trace!(
                position = self.position,
                "position label outside the visible window; skipped"
            );
            return;
        }

        let mut gfx = Graphics::new(surface, dims, low_quality, false);
        let font = &self.position_label_font;
        let background = Brush::Solid(self.position_label_background);
        let text = formatter(self.position);
        let size = gfx.measure_text(&text, font).size();

        match self.orientation {
            Orientation::Horizontal => {
                let pixel_y = dims.pixel_y(self.position);
                let x = if self.position_label_opposite_axis {
                    dims.data_offset_x + dims.data_width
                } else {
                    dims.data_offset_x - size.width
                };
                let y = pixel_y - size.height / 2.0;
                gfx.fill_rect(Rect::from_origin_size((x, y), size), &background);
                gfx.draw_text(
                    &text,
                    Point::new(x, pixel_y),
                    font,
                    HorizontalAlignment::Left,
                    VerticalAlignment::Middle,
                );
            }
            Orientation::Vertical => {
                let pixel_x = dims.pixel_x(self.position);
                let x = pixel_x - size.width / 2.0;
                let y = if self.position_label_opposite_axis {
                    dims.data_offset_y - size.height
                } else {
                    dims.data_offset_y + dims.data_height
                };
                gfx.fill_rect(Rect::from_origin_size((x, y), size), &background);
                gfx.draw_text(
                    &text,
                    Point::new(pixel_x, y),
                    font,
                    HorizontalAlignment::Center,
                    VerticalAlignment::Upper,
                );
            }
        }
    }
}

impl Plottable for AxisLine {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn axis_indices(&self) -> (usize, usize) {
        (self.x_axis_index, self.y_axis_index)
    }

    fn validate(&self, _deep: bool) -> Result<(), ValidationError> {
        if !self.position.is_finite() {
            return Err(ValidationError::NonFinitePosition);
        }
        if self.position_formatter.is_none() {
            return Err(ValidationError::MissingFormatter);
        }
        Ok(())
    }

    fn axis_limits(&self) -> AxisLimits {
        if self.ignore_axis_auto {
            return AxisLimits::NONE;
        }
        match self.orientation {
            Orientation::Horizontal => AxisLimits::y_only(self.position, self.position),
            Orientation::Vertical => AxisLimits::x_only(self.position, self.position),
        }
    }

    fn render(&self, dims: &PlotDimensions, surface: &mut dyn Surface, low_quality: bool) {
        if !self.visible {
            return;
        }
        self.render_line(dims, surface, low_quality);
        if self.position_label {
            self.render_position_label(dims, surface, low_quality);
        }
    }

    fn legend_items(&self) -> Option<Vec<LegendItem>> {
        let label = self.label.as_ref()?;
        Some(alloc::vec![
            LegendItem::new(label.clone(), self.color)
                .with_line(self.line_style, self.line_width)
                .with_marker(MarkerShape::None),
        ])
    }
}

impl Draggable for AxisLine {
    fn is_drag_enabled(&self) -> bool {
        self.drag_enabled
    }

    fn drag_cursor(&self) -> Cursor {
        match self.orientation {
            Orientation::Horizontal => Cursor::NorthSouth,
            Orientation::Vertical => Cursor::WestEast,
        }
    }

    fn drag_to(&mut self, x: f64, y: f64, _fixed_size: bool) -> bool {
        if !self.drag_enabled {
            return false;
        }
        let mut target = match self.orientation {
            Orientation::Horizontal => y,
            Orientation::Vertical => x,
        };
        if target.is_nan() {
            return false;
        }
        if target < self.drag_limit_min {
            target = self.drag_limit_min;
        }
        if target > self.drag_limit_max {
            target = self.drag_limit_max;
        }
        tracing::debug!(from = self.position, to = target, "axis line dragged");
        self.position = target;

        for observer in &mut self.dragged {
            observer(target);
        }
        true
    }

    fn is_under_mouse(&self, x: f64, y: f64, snap_x: f64, snap_y: f64) -> bool {
        match self.orientation {
            Orientation::Horizontal => (self.position - y).abs() <= snap_y,
            Orientation::Vertical => (self.position - x).abs() <= snap_x,
        }
    }
}

impl core::fmt::Debug for AxisLine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AxisLine")
            .field("orientation", &self.orientation)
            .field("position", &self.position)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("drag_enabled", &self.drag_enabled)
            .field("drag_limit_min", &self.drag_limit_min)
            .field("drag_limit_max", &self.drag_limit_max)
            .field("ignore_axis_auto", &self.ignore_axis_auto)
            .field("visible", &self.visible)
            .field("x_axis_index", &self.x_axis_index)
            .field("y_axis_index", &self.y_axis_index)
            .field("color", &self.color)
            .field("line_width", &self.line_width)
            .field("line_style", &self.line_style)
            .field("label", &self.label)
            .field("position_label", &self.position_label)
            .field("position_label_font", &self.position_label_font)
            .field("position_label_background", &self.position_label_background)
            .field(
                "position_label_opposite_axis",
                &self.position_label_opposite_axis,
            )
            .field("position_formatter", &self.position_formatter.is_some())
            .field("dragged", &self.dragged.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::Size;
    use plotkit_core::{DisplayList, DrawOp, HeuristicTextMeasurer, TextMeasurer};

    use super::*;

    fn dims() -> PlotDimensions {
        PlotDimensions::new(
            Size::new(400.0, 300.0),
            Rect::new(40.0, 20.0, 360.0, 260.0),
            (0.0, 10.0),
            (-5.0, 5.0),
        )
        .unwrap()
    }

    fn render(line: &AxisLine) -> DisplayList {
        let mut list = DisplayList::new();
        line.render(&dims(), &mut list, false);
        list
    }

    #[test]
    fn horizontal_line_spans_the_clamped_extent_at_one_row() {
        let d = dims();
        for (min, max) in [
            (f64::NEG_INFINITY, f64::INFINITY),
            (2.0, 7.5),
            (-3.0, 4.0),
            (6.0, 42.0),
        ] {
            let line = AxisLine::horizontal(1.25).with_extent(min, max);
            let seg = line.line_segment(&d);
            assert_eq!(seg.p0.y, seg.p1.y);
            assert_eq!(seg.p0.y, d.pixel_y(1.25));
            assert_eq!(seg.p0.x, d.pixel_x(min.max(d.x_min)));
            assert_eq!(seg.p1.x, d.pixel_x(max.min(d.x_max)));
        }
    }

    #[test]
    fn vertical_line_spans_the_clamped_extent_at_one_column() {
        let d = dims();
        let line = AxisLine::vertical(3.0).with_extent(-1.0, 100.0);
        let seg = line.line_segment(&d);
        assert_eq!(seg.p0.x, seg.p1.x);
        assert_eq!(seg.p0.x, d.pixel_x(3.0));
        assert_eq!(seg.p0.y, d.pixel_y(-1.0));
        assert_eq!(seg.p1.y, d.pixel_y(5.0));
    }

    #[test]
    fn render_strokes_one_clipped_segment() {
        let line = AxisLine::horizontal(0.0).with_line(2.0, LineStyle::Dash);
        let list = render(&line);
        let [
            DrawOp::StrokeLine {
                line: seg,
                stroke,
                clip,
                ..
            },
        ] = list.ops()
        else {
            panic!("expected a single line op");
        };
        assert_eq!(*seg, line.line_segment(&dims()));
        assert_eq!(stroke.width, 2.0);
        assert!(!stroke.dash_pattern.is_empty());
        assert_eq!(*clip, Some(dims().data_rect()));
    }

    #[test]
    fn hidden_line_draws_nothing() {
        let mut line = AxisLine::vertical(5.0).with_position_label(false);
        line.set_visible(false);
        assert!(render(&line).is_empty());
    }

    #[test]
    fn low_quality_keeps_geometry() {
        let line = AxisLine::vertical(5.0);
        let mut hq = DisplayList::new();
        let mut lq = DisplayList::new();
        line.render(&dims(), &mut hq, false);
        line.render(&dims(), &mut lq, true);
        let (DrawOp::StrokeLine { line: a, .. }, DrawOp::StrokeLine { line: b, .. }) =
            (&hq.ops()[0], &lq.ops()[0])
        else {
            panic!("expected line ops");
        };
        assert_eq!(a, b);
        assert!(hq.ops()[0].antialias());
        assert!(!lq.ops()[0].antialias());
    }

    #[test]
    fn rendering_is_repeatable() {
        let line = AxisLine::horizontal(2.0).with_position_label(true);
        assert_eq!(render(&line).ops(), render(&line).ops());
    }

    #[test]
    fn horizontal_label_sits_left_of_the_data_area() {
        let d = dims();
        let line = AxisLine::horizontal(2.0).with_position_label(false);
        let list = render(&line);
        assert_eq!(list.len(), 3);

        let font = &line.position_label_font;
        let size = HeuristicTextMeasurer.measure("2.00", font).size();
        let DrawOp::FillRect { rect, clip, .. } = &list.ops()[1] else {
            panic!("expected label background");
        };
        assert_eq!(*clip, None);
        assert!((rect.x1 - d.data_offset_x).abs() < 1e-9);
        assert!((rect.width() - size.width).abs() < 1e-9);
        assert!((rect.center().y - d.pixel_y(2.0)).abs() < 1e-9);

        let DrawOp::Text {
            text,
            pos,
            h_align,
            v_align,
            ..
        } = &list.ops()[2]
        else {
            panic!("expected label text");
        };
        assert_eq!(text, "2.00");
        assert_eq!(*pos, Point::new(rect.x0, d.pixel_y(2.0)));
        assert_eq!(*h_align, HorizontalAlignment::Left);
        assert_eq!(*v_align, VerticalAlignment::Middle);
    }

    #[test]
    fn opposite_horizontal_label_sits_right_of_the_data_area() {
        let d = dims();
        let line = AxisLine::horizontal(-4.0).with_position_label(true);
        let list = render(&line);
        let DrawOp::FillRect { rect, .. } = &list.ops()[1] else {
            panic!("expected label background");
        };
        assert_eq!(rect.x0, d.data_offset_x + d.data_width);
    }

    #[test]
    fn vertical_label_sits_below_or_above_the_data_area() {
        let d = dims();
        let below = render(&AxisLine::vertical(5.0).with_position_label(false));
        let DrawOp::FillRect { rect, .. } = &below.ops()[1] else {
            panic!("expected label background");
        };
        assert_eq!(rect.y0, d.data_offset_y + d.data_height);
        assert!((rect.center().x - d.pixel_x(5.0)).abs() < 1e-9);
        let DrawOp::Text {
            pos,
            h_align,
            v_align,
            ..
        } = &below.ops()[2]
        else {
            panic!("expected label text");
        };
        assert_eq!(*pos, Point::new(d.pixel_x(5.0), rect.y0));
        assert_eq!(*h_align, HorizontalAlignment::Center);
        assert_eq!(*v_align, VerticalAlignment::Upper);

        let above = render(&AxisLine::vertical(5.0).with_position_label(true));
        let DrawOp::FillRect { rect, .. } = &above.ops()[1] else {
            panic!("expected label background");
        };
        assert!((rect.y1 - d.data_offset_y).abs() < 1e-9);
    }

    #[test]
    fn label_is_skipped_when_position_is_out_of_view() {
        let line = AxisLine::horizontal(7.0).with_position_label(false);
        let list = render(&line);
        assert_eq!(list.len(), 1);
        assert!(matches!(list.ops()[0], DrawOp::StrokeLine { .. }));

        let line = AxisLine::vertical(-0.5).with_position_label(true);
        assert_eq!(render(&line).len(), 1);
    }

    #[test]
    fn custom_formatter_drives_label_text() {
        let line = AxisLine::vertical(2.5)
            .with_position_label(false)
            .with_position_formatter(|x| alloc::format!("t={x}"));
        let list = render(&line);
        let DrawOp::Text { text, .. } = &list.ops()[2] else {
            panic!("expected label text");
        };
        assert_eq!(text, "t=2.5");
    }

    #[test]
    fn drag_clamps_and_notifies_once() {
        let calls = Rc::new(Cell::new(0));
        let last = Rc::new(Cell::new(f64::NAN));
        let mut line = AxisLine::horizontal(0.0).with_drag_limits(-1.0, 3.0);
        {
            let calls = Rc::clone(&calls);
            let last = Rc::clone(&last);
            line.on_dragged(move |p| {
                calls.set(calls.get() + 1);
                last.set(p);
            });
        }

        for (y, expected) in [(2.0, 2.0), (10.0, 3.0), (-8.0, -1.0)] {
            let before = calls.get();
            assert!(line.drag_to(123.0, y, false));
            assert_eq!(line.position(), expected);
            assert_eq!(calls.get(), before + 1);
            assert_eq!(last.get(), expected);
        }

        assert!(!line.drag_to(0.0, f64::NAN, false));
        assert_eq!(line.position(), -1.0);
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn vertical_drag_follows_x_and_ignores_y() {
        let mut line = AxisLine::vertical(1.0).with_drag_limits(0.0, 10.0);
        assert!(line.drag_to(4.5, -99.0, false));
        assert_eq!(line.position(), 4.5);
        assert_eq!(line.drag_cursor(), Cursor::WestEast);
        assert_eq!(AxisLine::horizontal(0.0).drag_cursor(), Cursor::NorthSouth);
    }

    #[test]
    fn disabled_drag_is_a_no_op() {
        let calls = Rc::new(Cell::new(0));
        let mut line = AxisLine::horizontal(1.0);
        {
            let calls = Rc::clone(&calls);
            line.on_dragged(move |_| calls.set(calls.get() + 1));
        }
        assert!(!line.is_drag_enabled());
        assert!(!line.drag_to(0.0, 4.0, false));
        assert_eq!(line.position(), 1.0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn set_position_does_not_notify() {
        let calls = Rc::new(Cell::new(0));
        let mut line = AxisLine::horizontal(1.0).with_drag_limits(-5.0, 5.0);
        {
            let calls = Rc::clone(&calls);
            line.on_dragged(move |_| calls.set(calls.get() + 1));
        }
        line.set_position(2.0);
        assert_eq!(line.position(), 2.0);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn hit_test_band_is_symmetric() {
        let line = AxisLine::horizontal(2.0);
        assert!(line.is_under_mouse(0.0, 2.5, 0.0, 0.5));
        assert!(line.is_under_mouse(0.0, 1.5, 0.0, 0.5));
        assert!(line.is_under_mouse(1e9, 2.0, 0.0, 0.5));
        assert!(!line.is_under_mouse(0.0, 2.5001, 10.0, 0.5));
        assert!(!line.is_under_mouse(0.0, 1.4999, 10.0, 0.5));

        let line = AxisLine::vertical(-1.0);
        assert!(line.is_under_mouse(-1.25, 50.0, 0.25, 0.0));
        assert!(!line.is_under_mouse(-1.26, 0.0, 0.25, 100.0));
    }

    #[test]
    fn axis_limits_follow_orientation() {
        let h = AxisLine::horizontal(3.0);
        let l = h.axis_limits();
        assert!(!l.has_x());
        assert_eq!((l.y_min, l.y_max), (3.0, 3.0));

        let v = AxisLine::vertical(-2.0);
        let l = v.axis_limits();
        assert!(!l.has_y());
        assert_eq!((l.x_min, l.x_max), (-2.0, -2.0));

        let mut ignored = AxisLine::vertical(-2.0);
        ignored.ignore_axis_auto = true;
        assert!(ignored.axis_limits().is_none());
    }

    #[test]
    fn validation_rejects_bad_state_without_repairing_it() {
        let mut line = AxisLine::horizontal(f64::NAN);
        assert_eq!(line.validate(false), Err(ValidationError::NonFinitePosition));
        assert!(line.position().is_nan());

        line.set_position(f64::INFINITY);
        assert_eq!(line.validate(true), Err(ValidationError::NonFinitePosition));

        line.set_position(1.0);
        assert_eq!(line.validate(false), Ok(()));

        line.position_formatter = None;
        assert_eq!(line.validate(false), Err(ValidationError::MissingFormatter));
    }

    #[test]
    fn legend_needs_a_label() {
        assert!(AxisLine::horizontal(0.0).legend_items().is_none());

        let line = AxisLine::horizontal(0.0)
            .with_label("threshold")
            .with_color(css::RED)
            .with_line(3.0, LineStyle::Dot);
        let items = line.legend_items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label.as_deref(), Some("threshold"));
        assert_eq!(items[0].color, css::RED);
        assert_eq!(items[0].line_style, LineStyle::Dot);
        assert_eq!(items[0].line_width, 3.0);
        assert_eq!(items[0].marker_shape, MarkerShape::None);
    }

    #[test]
    fn debug_output_names_the_orientation() {
        let s = alloc::format!("{:?}", AxisLine::vertical(1.0));
        assert!(s.contains("Vertical"));
        assert!(s.contains("position_formatter: true"));
    }
}
