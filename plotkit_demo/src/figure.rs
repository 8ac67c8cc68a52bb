// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal plot container: canvas, data area, plottables, and a legend.

use kurbo::{Insets, Line, Point, Rect, Shape, Size};
use peniko::Brush;
use peniko::color::palette::css;
use plotkit_core::{
    AxisLimits, DimensionsError, DisplayList, Font, HorizontalAlignment, LegendItem, LineStyle,
    Pen, PlotDimensions, Plottable, Surface, VerticalAlignment,
};

const LEGEND_PADDING: f64 = 6.0;
const LEGEND_SWATCH: f64 = 20.0;

/// A figure owns its plottables and renders them into a [`DisplayList`].
pub(crate) struct Figure {
    pub(crate) size: Size,
    pub(crate) margins: Insets,
    pub(crate) x_range: Option<(f64, f64)>,
    pub(crate) y_range: Option<(f64, f64)>,
    pub(crate) show_legend: bool,
    plottables: Vec<Box<dyn Plottable>>,
}

impl Figure {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            size,
            margins: Insets::new(60.0, 30.0, 60.0, 40.0),
            x_range: None,
            y_range: None,
            show_legend: true,
            plottables: Vec::new(),
        }
    }

    pub(crate) fn with_window(mut self, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        self.x_range = Some(x_range);
        self.y_range = Some(y_range);
        self
    }

    pub(crate) fn with(mut self, plottable: impl Plottable + 'static) -> Self {
        self.plottables.push(Box::new(plottable));
        self
    }

    pub(crate) fn plottables(&self) -> &[Box<dyn Plottable>] {
        &self.plottables
    }

    /// Auto-scaled limits of every visible plottable.
    pub(crate) fn data_limits(&self) -> AxisLimits {
        self.plottables
            .iter()
            .filter(|p| p.is_visible())
            .map(|p| p.axis_limits())
            .fold(AxisLimits::NONE, AxisLimits::union)
    }

    pub(crate) fn dimensions(&self) -> Result<PlotDimensions, DimensionsError> {
        let limits = self.data_limits();
        let x_range = self
            .x_range
            .unwrap_or_else(|| padded_range(limits.x_min, limits.x_max));
        let y_range = self
            .y_range
            .unwrap_or_else(|| padded_range(limits.y_min, limits.y_max));
        let data_area = self.size.to_rect() - self.margins;
        PlotDimensions::new(self.size, data_area, x_range, y_range)
    }

    /// Validates and draws every plottable, then the legend.
    ///
    /// Plottables that fail validation are skipped and logged rather than aborting the figure.
    pub(crate) fn render(&self, low_quality: bool) -> Result<DisplayList, DimensionsError> {
        let dims = self.dimensions()?;
        let mut list = DisplayList::new();
        list.fill_rect(self.size.to_rect(), &Brush::Solid(css::WHITE));

        for (index, plottable) in self.plottables.iter().enumerate() {
            if let Err(err) = plottable.validate(true) {
                tracing::warn!(index, %err, "skipping plottable that failed validation");
                continue;
            }
            plottable.render(&dims, &mut list, low_quality);
        }

        if let Some(pen) = Pen::new(css::BLACK, 1.0, LineStyle::Solid) {
            list.stroke_path(&dims.data_rect().to_path(0.1), &pen.stroke, &pen.brush);
        }

        if self.show_legend {
            let items: Vec<LegendItem> = self
                .plottables
                .iter()
                .filter(|p| p.is_visible())
                .filter_map(|p| p.legend_items())
                .flatten()
                .filter(|item| item.label.is_some())
                .collect();
            draw_legend(&mut list, &dims, &items);
        }
        Ok(list)
    }
}

/// A visible window around `[min, max]`, widened when the span is empty or missing.
fn padded_range(min: f64, max: f64) -> (f64, f64) {
    if min.is_nan() || max.is_nan() {
        return (-10.0, 10.0);
    }
    let span = max - min;
    if span <= 0.0 {
        return (min - 1.0, max + 1.0);
    }
    let pad = span * 0.05;
    (min - pad, max + pad)
}

/// Stacks legend entries in the top-right corner of the data area.
fn draw_legend(surface: &mut dyn Surface, dims: &PlotDimensions, items: &[LegendItem]) {
    if items.is_empty() {
        return;
    }
    let font = Font::default();
    let row_height = surface.measure_text("Ag", &font).line_height();
    let text_width = items
        .iter()
        .filter_map(|item| item.label.as_deref())
        .map(|label| surface.measure_text(label, &font).advance_width)
        .fold(0.0, f64::max);

    let data = dims.data_rect();
    let width = LEGEND_PADDING * 3.0 + LEGEND_SWATCH + text_width;
    let height = LEGEND_PADDING * 2.0 + row_height * items.len() as f64;
    let frame = Rect::new(
        data.x1 - LEGEND_PADDING - width,
        data.y0 + LEGEND_PADDING,
        data.x1 - LEGEND_PADDING,
        data.y0 + LEGEND_PADDING + height,
    );
    surface.fill_rect(frame, &Brush::Solid(css::WHITE));
    if let Some(pen) = Pen::new(css::BLACK, 1.0, LineStyle::Solid) {
        surface.stroke_path(&frame.to_path(0.1), &pen.stroke, &pen.brush);
    }

    for (row, item) in items.iter().enumerate() {
        let y = frame.y0 + LEGEND_PADDING + row_height * (row as f64 + 0.5);
        let x = frame.x0 + LEGEND_PADDING;
        if let Some(pen) = Pen::new(item.color, item.line_width, item.line_style) {
            let line = Line::new((x, y), (x + LEGEND_SWATCH, y));
            surface.stroke_line(line, &pen.stroke, &pen.brush);
        }
        if let Some(label) = item.label.as_deref() {
            surface.draw_text(
                label,
                Point::new(x + LEGEND_SWATCH + LEGEND_PADDING, y),
                &font,
                HorizontalAlignment::Left,
                VerticalAlignment::Middle,
            );
        }
    }
}
