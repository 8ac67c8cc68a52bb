// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coxcomb (polar area) charts.
//!
//! A coxcomb is a pie chart turned inside out: every category gets the same angular sweep, and
//! the value is carried by the sector's radius instead.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{BezPath, Circle, Point, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};
use plotkit_core::{
    AxisLimits, Graphics, Icon, LegendItem, LineStyle, PlotDimensions, Plottable, Surface,
    ValidationError,
};

use crate::radial_axis::{AxisType, IconPlacement, RadialAxis, RadialTick};

/// Fractions of the largest value at which web rings are drawn.
const TICK_FRACTIONS: [f64; 3] = [0.25, 0.5, 1.0];

/// Half-width of the square data window a coxcomb asks for.
const AXIS_EXTENT: f64 = 2.5;

/// Legend swatch width for slices.
const LEGEND_LINE_WIDTH: f64 = 10.0;

const SECTOR_TOLERANCE: f64 = 0.1;

/// One filled sector of a coxcomb, in pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    /// Sector apex.
    pub center: Point,
    /// Outer radius in pixels.
    pub radius: f64,
    /// Start angle in degrees, clockwise from the positive X axis.
    pub start_angle: f64,
    /// Angular extent in degrees.
    pub sweep_angle: f64,
    /// Fill color.
    pub fill: Color,
}

impl Sector {
    /// The sector outline.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        Circle::new(self.center, self.radius)
            .segment(0.0, self.start_angle.to_radians(), self.sweep_angle.to_radians())
            .to_path(tolerance)
    }
}

/// A polar area chart.
#[derive(Clone, Debug)]
pub struct CoxcombPlot {
    values: Vec<f64>,
    normalized: Vec<f64>,
    /// One fill per category.
    pub fill_colors: Vec<Color>,
    /// Color of the web behind the sectors.
    pub web_color: Color,
    /// Ring style of the web.
    pub axis_type: AxisType,
    /// Write ring values on the web.
    pub show_axis_values: bool,
    /// One label per category; enables the legend.
    pub slice_labels: Option<Vec<String>>,
    /// One icon per category, drawn inside each sector.
    pub category_icons: Option<Vec<Icon>>,
    /// Name of the chart itself.
    pub label: Option<String>,
    /// Whether the chart is drawn.
    pub visible: bool,
    /// Index of the X axis.
    pub x_axis_index: usize,
    /// Index of the Y axis.
    pub y_axis_index: usize,
}

impl CoxcombPlot {
    /// Creates a chart from category values and their fill colors.
    pub fn new(values: Vec<f64>, fill_colors: Vec<Color>) -> Self {
        let normalized = normalize(&values);
        Self {
            values,
            normalized,
            fill_colors,
            web_color: css::GRAY,
            axis_type: AxisType::Circle,
            show_axis_values: true,
            slice_labels: None,
            category_icons: None,
            label: None,
            visible: true,
            x_axis_index: 0,
            y_axis_index: 0,
        }
    }

    /// The raw category values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Each value divided by the largest value.
    pub fn normalized(&self) -> &[f64] {
        &self.normalized
    }

    /// Replaces the data and recomputes the normalized values.
    pub fn set_values(&mut self, values: Vec<f64>) {
        self.normalized = normalize(&values);
        self.values = values;
    }

    /// Sets the per-category labels.
    #[must_use]
    pub fn with_slice_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slice_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the per-category icons.
    #[must_use]
    pub fn with_category_icons(mut self, icons: Vec<Icon>) -> Self {
        self.category_icons = Some(icons);
        self
    }

    /// Sets the chart's own label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Number of categories.
    pub fn category_count(&self) -> usize {
        self.values.len()
    }

    /// Pixel radius of a sector whose normalized value is 1.
    ///
    /// The smaller of the two scale factors keeps sectors inside the data area when the axes are
    /// not equally scaled.
    pub fn max_radius(dims: &PlotDimensions) -> f64 {
        dims.px_per_unit_x.min(dims.px_per_unit_y)
    }

    /// The web drawn behind the sectors.
    pub fn radial_axis(&self) -> RadialAxis {
        let max_value = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        RadialAxis {
            ticks: TICK_FRACTIONS
                .iter()
                .map(|&f| RadialTick::scaled(f, max_value))
                .collect(),
            spoke_count: self.values.len(),
            axis_type: self.axis_type,
            web_color: self.web_color,
            show_axis_values: self.show_axis_values,
            show_category_labels: false,
            category_labels: self.slice_labels.clone(),
            category_icons: self.category_icons.clone(),
            icon_placement: IconPlacement::Inside,
            category_offset: 0.5,
            ..RadialAxis::default()
        }
    }

    /// Pixel geometry of every sector, in category order.
    pub fn sectors(&self, dims: &PlotDimensions) -> Vec<Sector> {
        let n = self.normalized.len();
        if n == 0 {
            return Vec::new();
        }
        let center = dims.pixel(Point::ORIGIN);
        let max_radius = Self::max_radius(dims);
        let sweep_angle = 360.0 / n as f64;
        self.normalized
            .iter()
            .enumerate()
            .map(|(i, &norm)| Sector {
                center,
                radius: max_radius * norm,
                start_angle: -90.0 + i as f64 * sweep_angle,
                sweep_angle,
                fill: self.fill_colors.get(i).copied().unwrap_or(css::BLACK),
            })
            .collect()
    }
}

/// Divides every value by the largest one; all zeros when nothing is positive.
fn normalize(values: &[f64]) -> Vec<f64> {
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max <= 0.0 {
        return alloc::vec![0.0; values.len()];
    }
    values.iter().map(|v| v / max).collect()
}

impl Plottable for CoxcombPlot {
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
        let expected = self.values.len();
        let check_len = |field: &'static str, actual: usize| {
            if actual == expected {
                Ok(())
            } else {
                Err(ValidationError::LengthMismatch {
                    field,
                    expected,
                    actual,
                })
            }
        };
        check_len("fill_colors", self.fill_colors.len())?;
        if let Some(labels) = &self.slice_labels {
            check_len("slice_labels", labels.len())?;
        }
        if let Some(icons) = &self.category_icons {
            check_len("category_icons", icons.len())?;
        }
        for (index, &v) in self.values.iter().enumerate() {
            if !v.is_finite() {
                return Err(ValidationError::NonFiniteValue { index });
            }
            if v < 0.0 {
                return Err(ValidationError::NegativeValue { index });
            }
        }
        Ok(())
    }

    fn axis_limits(&self) -> AxisLimits {
        AxisLimits::new(-AXIS_EXTENT, AXIS_EXTENT, -AXIS_EXTENT, AXIS_EXTENT)
    }

    fn render(&self, dims: &PlotDimensions, surface: &mut dyn Surface, low_quality: bool) {
        if !self.visible || self.values.is_empty() {
            return;
        }
        let mut gfx = Graphics::new(surface, dims, low_quality, true);
        let center = dims.pixel(Point::ORIGIN);
        self.radial_axis().render(center, Self::max_radius(dims), &mut *gfx);

        for sector in self.sectors(dims) {
            gfx.fill_path(&sector.to_path(SECTOR_TOLERANCE), &Brush::Solid(sector.fill));
        }
    }

    fn legend_items(&self) -> Option<Vec<LegendItem>> {
        let labels = self.slice_labels.as_ref()?;
        let items = labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let color = self.fill_colors.get(i).copied().unwrap_or(css::BLACK);
                LegendItem::new(label.clone(), color)
                    .with_line(LineStyle::Solid, LEGEND_LINE_WIDTH)
            })
            .collect();
        Some(items)
    }
}

impl fmt::Display for CoxcombPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PlottableCoxcomb")?;
        if let Some(label) = self.label.as_deref().filter(|l| !l.trim().is_empty()) {
            write!(f, " ({label})")?;
        }
        write!(f, " with {} categories", self.values.len())
    }
}
