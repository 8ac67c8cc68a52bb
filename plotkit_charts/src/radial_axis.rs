// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spider-web axis drawn behind radial charts.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect, Shape, Vec2};
use peniko::Color;
use peniko::color::palette::css;
use plotkit_core::{Font, HorizontalAlignment, Icon, LineStyle, Pen, Surface, VerticalAlignment};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::format::format_compact;

/// Flattening tolerance used when rings are converted to paths.
const RING_TOLERANCE: f64 = 0.1;

/// Category labels sit this far out, as a fraction of the max radius.
const LABEL_RADIUS: f64 = 1.1;

/// A concentric ring of the web.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialTick {
    /// Ring radius as a fraction of the max radius.
    pub location: f64,
    /// Data value the ring stands for.
    pub value: f64,
}

impl RadialTick {
    /// A ring at `fraction` of the max radius, labeled `fraction * max_value`.
    pub fn scaled(fraction: f64, max_value: f64) -> Self {
        Self {
            location: fraction,
            value: fraction * max_value,
        }
    }
}

/// How the rings are drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisType {
    /// A circle per tick.
    #[default]
    Circle,
    /// A polygon through the spokes per tick.
    Polygon,
    /// No rings; spokes only.
    None,
}

/// Where category icons are placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconPlacement {
    /// Halfway along the category direction.
    #[default]
    Inside,
    /// Just beyond the outermost ring.
    Outside,
}

/// Rings, spokes, and category decorations around a center point.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialAxis {
    /// Rings to draw.
    pub ticks: Vec<RadialTick>,
    /// Number of spokes (categories).
    pub spoke_count: usize,
    /// Ring style.
    pub axis_type: AxisType,
    /// Color of rings, spokes, and tick values.
    pub web_color: Color,
    /// Write each tick value next to its ring.
    pub show_axis_values: bool,
    /// Write category labels around the outside.
    pub show_category_labels: bool,
    /// One label per category.
    pub category_labels: Option<Vec<String>>,
    /// One icon per category.
    pub category_icons: Option<Vec<Icon>>,
    /// Icon placement.
    pub icon_placement: IconPlacement,
    /// Font for category labels and tick values.
    pub label_font: Font,
    /// Rotates category decorations off the spokes, as a fraction of one sweep.
    pub category_offset: f64,
}

impl Default for RadialAxis {
    fn default() -> Self {
        Self {
            ticks: Vec::new(),
            spoke_count: 0,
            axis_type: AxisType::Circle,
            web_color: css::GRAY,
            show_axis_values: true,
            show_category_labels: true,
            category_labels: None,
            category_icons: None,
            icon_placement: IconPlacement::Inside,
            label_font: Font::default(),
            category_offset: 0.0,
        }
    }
}

impl RadialAxis {
    /// Degrees between neighboring spokes.
    pub fn sweep_angle(&self) -> f64 {
        360.0 / self.spoke_count as f64
    }

    /// Angle in degrees of position `index` (spoke indices are whole numbers).
    ///
    /// Angles are in pixel space, so increasing angles run clockwise from the top.
    pub fn angle(&self, index: f64) -> f64 {
        -90.0 + index * self.sweep_angle()
    }

    fn direction(&self, index: f64) -> Vec2 {
        let radians = self.angle(index).to_radians();
        Vec2::new(radians.cos(), radians.sin())
    }

    /// Draws the web centered on `center` with outermost radius `max_radius` (pixels).
    pub fn render(&self, center: Point, max_radius: f64, surface: &mut dyn Surface) {
        if self.spoke_count == 0 {
            return;
        }
        if let Some(pen) = Pen::new(self.web_color, 1.0, LineStyle::Solid) {
            self.render_rings(center, max_radius, &pen, surface);
            for i in 0..self.spoke_count {
                let tip = center + self.direction(i as f64) * max_radius;
                surface.stroke_line(kurbo::Line::new(center, tip), &pen.stroke, &pen.brush);
            }
        }
        if self.show_axis_values {
            self.render_axis_values(center, max_radius, surface);
        }
        if self.show_category_labels {
            self.render_category_labels(center, max_radius, surface);
        }
        self.render_icons(center, max_radius, surface);
    }

    fn render_rings(&self, center: Point, max_radius: f64, pen: &Pen, surface: &mut dyn Surface) {
        for tick in &self.ticks {
            let radius = tick.location * max_radius;
            let path = match self.axis_type {
                AxisType::Circle => Circle::new(center, radius).to_path(RING_TOLERANCE),
                AxisType::Polygon => {
                    let mut path = BezPath::new();
                    for i in 0..self.spoke_count {
                        let p = center + self.direction(i as f64) * radius;
                        if i == 0 {
                            path.move_to(p);
                        } else {
                            path.line_to(p);
                        }
                    }
                    path.close_path();
                    path
                }
                AxisType::None => continue,
            };
            surface.stroke_path(&path, &pen.stroke, &pen.brush);
        }
    }

    fn render_axis_values(&self, center: Point, max_radius: f64, surface: &mut dyn Surface) {
        let font = self.label_font.clone().with_color(self.web_color);
        for tick in &self.ticks {
            let pos = Point::new(center.x, center.y - tick.location * max_radius);
            surface.draw_text(
                &format_compact(tick.value, 2),
                pos,
                &font,
                HorizontalAlignment::Left,
                VerticalAlignment::Lower,
            );
        }
    }

    fn render_category_labels(&self, center: Point, max_radius: f64, surface: &mut dyn Surface) {
        let Some(labels) = self.category_labels.as_ref() else {
            return;
        };
        for (i, label) in labels.iter().enumerate().take(self.spoke_count) {
            let dir = self.direction(i as f64 + self.category_offset);
            let pos = center + dir * (LABEL_RADIUS * max_radius);
            let (h_align, v_align) = label_alignment(dir);
            surface.draw_text(label, pos, &self.label_font, h_align, v_align);
        }
    }

    fn render_icons(&self, center: Point, max_radius: f64, surface: &mut dyn Surface) {
        let Some(icons) = self.category_icons.as_ref() else {
            return;
        };
        let radius = match self.icon_placement {
            IconPlacement::Inside => 0.5 * max_radius,
            IconPlacement::Outside => LABEL_RADIUS * max_radius,
        };
        for (i, icon) in icons.iter().enumerate().take(self.spoke_count) {
            let at = center + self.direction(i as f64 + self.category_offset) * radius;
            surface.draw_icon(icon, Rect::from_center_size(at, icon.size));
        }
    }
}

/// Anchors a label so it grows away from the center.
fn label_alignment(dir: Vec2) -> (HorizontalAlignment, VerticalAlignment) {
    const EPS: f64 = 1e-6;
    let h = if dir.x > EPS {
        HorizontalAlignment::Left
    } else if dir.x < -EPS {
        HorizontalAlignment::Right
    } else {
        HorizontalAlignment::Center
    };
    let v = if dir.y > EPS {
        VerticalAlignment::Upper
    } else if dir.y < -EPS {
        VerticalAlignment::Lower
    } else {
        VerticalAlignment::Middle
    };
    (h, v)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use kurbo::Size;
    use plotkit_core::{DisplayList, DrawOp};

    use super::*;

    const CENTER: Point = Point::new(100.0, 100.0);

    fn axis(spokes: usize) -> RadialAxis {
        RadialAxis {
            ticks: vec![RadialTick::scaled(0.5, 8.0), RadialTick::scaled(1.0, 8.0)],
            spoke_count: spokes,
            ..RadialAxis::default()
        }
    }

    fn render(axis: &RadialAxis) -> DisplayList {
        let mut list = DisplayList::new();
        axis.render(CENTER, 50.0, &mut list);
        list
    }

    fn texts(list: &DisplayList) -> Vec<(String, Point)> {
        list.ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, pos, .. } => Some((text.clone(), *pos)),
                _ => None,
            })
            .collect()
    }

    fn close(a: Point, b: Point) -> bool {
        (a - b).hypot() < 1e-9
    }

    #[test]
    fn scaled_ticks_carry_fraction_and_value() {
        let t = RadialTick::scaled(0.25, 12.0);
        assert_eq!(t.location, 0.25);
        assert_eq!(t.value, 3.0);
    }

    #[test]
    fn spokes_start_at_the_top_and_run_clockwise() {
        let list = render(&axis(4));
        let tips: Vec<Point> = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokeLine { line, .. } => Some(line.p1),
                _ => None,
            })
            .collect();
        assert_eq!(tips.len(), 4);
        assert!(close(tips[0], Point::new(100.0, 50.0)));
        assert!(close(tips[1], Point::new(150.0, 100.0)));
        assert!(close(tips[2], Point::new(100.0, 150.0)));
        assert!(close(tips[3], Point::new(50.0, 100.0)));
    }

    #[test]
    fn circle_rings_follow_tick_locations() {
        let list = render(&axis(3));
        let rings: Vec<Rect> = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::StrokePath { path, .. } => Some(path.bounding_box()),
                _ => None,
            })
            .collect();
        assert_eq!(rings.len(), 2);
        assert!((rings[0].width() - 50.0).abs() < 0.5);
        assert!((rings[1].width() - 100.0).abs() < 0.5);
        assert!(close(rings[1].center(), CENTER));
    }

    #[test]
    fn polygon_rings_pass_through_spokes() {
        let mut a = axis(4);
        a.axis_type = AxisType::Polygon;
        let list = render(&a);
        let DrawOp::StrokePath { path, .. } = &list.ops()[1] else {
            panic!("expected outer ring");
        };
        let bbox = path.bounding_box();
        assert!((bbox.x0 - 50.0).abs() < 1e-9);
        assert!((bbox.x1 - 150.0).abs() < 1e-9);
        assert!((bbox.y0 - 50.0).abs() < 1e-9);
    }

    #[test]
    fn no_rings_leaves_only_spokes() {
        let mut a = axis(5);
        a.axis_type = AxisType::None;
        a.show_axis_values = false;
        let list = render(&a);
        assert_eq!(list.len(), 5);
        assert!(
            list.ops()
                .iter()
                .all(|op| matches!(op, DrawOp::StrokeLine { .. }))
        );
    }

    #[test]
    fn axis_values_sit_on_the_top_spoke() {
        let list = render(&axis(3));
        let t = texts(&list);
        assert_eq!(t.len(), 2);
        assert_eq!(t[0].0, "4");
        assert!(close(t[0].1, Point::new(100.0, 75.0)));
        assert_eq!(t[1].0, "8");
        assert!(close(t[1].1, Point::new(100.0, 50.0)));
    }

    #[test]
    fn category_labels_are_anchored_away_from_the_center() {
        let a = RadialAxis {
            show_axis_values: false,
            category_labels: Some(["N", "E", "S", "W"].map(ToString::to_string).to_vec()),
            ..axis(4)
        };
        let list = render(&a);
        let labels: Vec<_> = list
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text {
                    text,
                    pos,
                    h_align,
                    v_align,
                    ..
                } => Some((text.as_str(), *pos, *h_align, *v_align)),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 4);
        assert_eq!(labels[0].0, "N");
        assert!(close(labels[0].1, Point::new(100.0, 45.0)));
        assert_eq!(
            (labels[0].2, labels[0].3),
            (HorizontalAlignment::Center, VerticalAlignment::Lower)
        );
        assert_eq!(
            (labels[1].2, labels[1].3),
            (HorizontalAlignment::Left, VerticalAlignment::Middle)
        );
        assert_eq!(labels[2].3, VerticalAlignment::Upper);
        assert_eq!(labels[3].2, HorizontalAlignment::Right);
    }

    #[test]
    fn icons_follow_placement_and_offset() {
        let icon = Icon::new("star", Size::new(10.0, 10.0));
        let mut a = RadialAxis {
            show_axis_values: false,
            category_icons: Some(vec![icon.clone(), icon]),
            category_offset: 0.5,
            ..axis(2)
        };
        let icon_rects = |a: &RadialAxis| -> Vec<Rect> {
            render(a)
                .ops()
                .iter()
                .filter_map(|op| match op {
                    DrawOp::Icon { rect, .. } => Some(*rect),
                    _ => None,
                })
                .collect()
        };

        let inside = icon_rects(&a);
        assert_eq!(inside.len(), 2);
        assert!(close(inside[0].center(), Point::new(125.0, 100.0)));
        assert!(close(inside[1].center(), Point::new(75.0, 100.0)));
        assert_eq!(inside[0].size(), Size::new(10.0, 10.0));

        a.icon_placement = IconPlacement::Outside;
        let outside = icon_rects(&a);
        assert!(close(outside[0].center(), Point::new(155.0, 100.0)));
    }

    #[test]
    fn zero_spokes_draw_nothing() {
        assert!(render(&axis(0)).is_empty());
    }
}
