// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recipe registry.
//!
//! Recipes are listed statically; [`categorized`] groups them for output with a fixed set of
//! categories pinned to the front and back.

use kurbo::Size;
use peniko::color::palette::css;
use plotkit_charts::{AxisLine, AxisType, CoxcombPlot};
use plotkit_core::{Draggable, Icon, LineStyle, Plottable};

use crate::figure::Figure;

/// One demo figure and where it is filed.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Recipe {
    pub(crate) category: &'static str,
    pub(crate) id: &'static str,
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) build: fn() -> Figure,
}

/// Categories listed first, in this order.
const TOP_CATEGORIES: &[&str] = &[
    "Quickstart",
    "Axis and Ticks",
    "Advanced Axis Features",
    "Multi-Axis",
];

/// Categories listed last, in this order.
const BOTTOM_CATEGORIES: &[&str] = &["Style", "Palette", "Misc"];

const FIGURE_SIZE: Size = Size::new(600.0, 400.0);

pub(crate) static RECIPES: &[Recipe] = &[
    Recipe {
        category: "Misc",
        id: "misc_hidden_elements",
        title: "Hidden Elements",
        description: "Hidden plottables are skipped by rendering, auto-scaling, and the legend.",
        build: hidden_elements,
    },
    Recipe {
        category: "Axis Line",
        id: "axisline_position_labels",
        title: "Position Labels",
        description: "Axis lines can label their own position on either edge of the data area.",
        build: position_labels,
    },
    Recipe {
        category: "Quickstart",
        id: "quickstart_axis_lines",
        title: "Axis Lines",
        description: "Horizontal and vertical lines mark fixed positions across the plot.",
        build: quickstart_axis_lines,
    },
    Recipe {
        category: "Coxcomb",
        id: "coxcomb_quickstart",
        title: "Coxcomb Chart",
        description: "Equal-angle sectors whose radius follows each category's value.",
        build: coxcomb_quickstart,
    },
    Recipe {
        category: "Axis Line",
        id: "axisline_styled_extent",
        title: "Styled and Bounded Lines",
        description: "Dashed lines can be limited to part of the axis and appear in the legend.",
        build: styled_extent,
    },
    Recipe {
        category: "Axis Line",
        id: "axisline_draggable",
        title: "Draggable Lines",
        description: "Dragging moves a line within its limits and notifies observers.",
        build: draggable,
    },
    Recipe {
        category: "Coxcomb",
        id: "coxcomb_polygon_icons",
        title: "Polygon Web with Icons",
        description: "A polygon web and per-category icons placed inside each sector.",
        build: coxcomb_polygon_icons,
    },
];

/// Sort rank of a category: top categories first, bottom categories last.
fn category_rank(category: &str) -> usize {
    if TOP_CATEGORIES.contains(&category) {
        0
    } else if BOTTOM_CATEGORIES.contains(&category) {
        2
    } else {
        1
    }
}

/// Position of a pinned category within its own list; unpinned categories share 0.
fn index_within_category(category: &str) -> usize {
    TOP_CATEGORIES
        .iter()
        .position(|c| *c == category)
        .or_else(|| BOTTOM_CATEGORIES.iter().position(|c| *c == category))
        .unwrap_or(0)
}

/// Groups recipes by category and orders the groups for output.
///
/// Unpinned categories keep the order in which they first appear.
pub(crate) fn categorized(recipes: &[Recipe]) -> Vec<(&'static str, Vec<&Recipe>)> {
    let mut groups: Vec<(&'static str, Vec<&Recipe>)> = Vec::new();
    for recipe in recipes {
        match groups.iter_mut().find(|(c, _)| *c == recipe.category) {
            Some((_, members)) => members.push(recipe),
            None => groups.push((recipe.category, vec![recipe])),
        }
    }
    groups.sort_by_key(|(c, _)| (category_rank(c), index_within_category(c)));
    groups
}

/// Looks a recipe up by id.
pub(crate) fn find(id: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.id == id)
}

fn quickstart_axis_lines() -> Figure {
    Figure::new(FIGURE_SIZE)
        .with_window((-5.0, 5.0), (-5.0, 5.0))
        .with(AxisLine::horizontal(1.23).with_color(css::RED))
        .with(AxisLine::vertical(-2.5).with_color(css::BLUE))
}

fn position_labels() -> Figure {
    Figure::new(FIGURE_SIZE)
        .with_window((0.0, 10.0), (0.0, 10.0))
        .with(AxisLine::horizontal(2.5).with_position_label(false))
        .with(
            AxisLine::horizontal(7.5)
                .with_color(css::DARK_GREEN)
                .with_position_label(true),
        )
        .with(
            AxisLine::vertical(4.0)
                .with_position_label(false)
                .with_position_formatter(|x| format!("X={x:.1}")),
        )
        .with(
            AxisLine::vertical(6.0)
                .with_color(css::PURPLE)
                .with_position_label(true),
        )
}

fn styled_extent() -> Figure {
    Figure::new(FIGURE_SIZE)
        .with_window((0.0, 20.0), (0.0, 10.0))
        .with(
            AxisLine::horizontal(3.0)
                .with_extent(5.0, 15.0)
                .with_line(2.0, LineStyle::Dash)
                .with_color(css::ORANGE)
                .with_label("bounded"),
        )
        .with(
            AxisLine::vertical(12.0)
                .with_extent(f64::NEG_INFINITY, 6.0)
                .with_line(3.0, LineStyle::DashDot)
                .with_color(css::TEAL)
                .with_label("dash-dot"),
        )
        .with(
            AxisLine::horizontal(8.0)
                .with_line(1.0, LineStyle::Dot)
                .with_label("dotted"),
        )
}

fn draggable() -> Figure {
    let mut line = AxisLine::vertical(2.0)
        .with_drag_limits(0.0, 8.0)
        .with_position_label(false)
        .with_label("drag me");
    line.on_dragged(|x| tracing::info!(x, "line moved"));
    // Simulate a pointer drag past the upper limit.
    line.drag_to(11.0, 0.0, false);
    Figure::new(FIGURE_SIZE)
        .with_window((0.0, 10.0), (0.0, 10.0))
        .with(line)
}

fn coxcomb_quickstart() -> Figure {
    let plot = CoxcombPlot::new(
        vec![11.0, 16.0, 7.0, 3.0, 14.0],
        vec![css::ROYAL_BLUE, css::CRIMSON, css::GOLD, css::SEA_GREEN, css::ORCHID],
    )
    .with_slice_labels(["Spring", "Summer", "Autumn", "Winter", "Monsoon"]);
    Figure::new(FIGURE_SIZE).with(plot)
}

fn coxcomb_polygon_icons() -> Figure {
    let icon_size = Size::new(16.0, 16.0);
    let mut plot = CoxcombPlot::new(
        vec![4.0, 8.0, 6.0, 2.0, 5.0, 7.0],
        vec![
            css::SALMON,
            css::STEEL_BLUE,
            css::OLIVE_DRAB,
            css::SLATE_GRAY,
            css::GOLDENROD,
            css::MEDIUM_PURPLE,
        ],
    )
    .with_category_icons(
        ["bike", "bus", "car", "train", "walk", "ferry"]
            .into_iter()
            .map(|name| Icon::new(name, icon_size))
            .collect(),
    );
    plot.axis_type = AxisType::Polygon;
    plot.show_axis_values = false;
    Figure::new(FIGURE_SIZE).with(plot)
}

fn hidden_elements() -> Figure {
    let mut hidden = AxisLine::horizontal(50.0).with_label("never shown");
    hidden.set_visible(false);
    Figure::new(FIGURE_SIZE)
        .with(AxisLine::horizontal(1.0).with_label("shown"))
        .with(hidden)
}
