// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data-space to pixel-space mapping.
//!
//! A [`PlotDimensions`] is a per-render snapshot of the visible data window and the pixel
//! rectangle it is mapped onto. Every plottable computes its pixel geometry through it.

use kurbo::{Point, Rect, Size};

/// Identifies one of the two plot axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

/// Errors returned when building a [`PlotDimensions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DimensionsError {
    /// The visible window on an axis is empty, inverted, or not finite.
    #[error("visible {axis:?} range must be finite with max > min")]
    InvalidRange {
        /// The offending axis.
        axis: Axis,
    },
    /// The data area has a zero, negative, or non-finite pixel size.
    #[error("data area must have a positive, finite pixel size")]
    EmptyDataArea,
}

/// The visible data window plus the pixel rectangle it maps onto.
///
/// Y is inverted: data values increase upward while pixel rows increase downward.
/// Values outside the visible window still map linearly; nothing here clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotDimensions {
    /// Size of the whole figure in pixels.
    pub figure_size: Size,
    /// Left edge of the data area in pixels.
    pub data_offset_x: f64,
    /// Top edge of the data area in pixels.
    pub data_offset_y: f64,
    /// Width of the data area in pixels.
    pub data_width: f64,
    /// Height of the data area in pixels.
    pub data_height: f64,
    /// Smallest visible X value.
    pub x_min: f64,
    /// Largest visible X value.
    pub x_max: f64,
    /// Smallest visible Y value.
    pub y_min: f64,
    /// Largest visible Y value.
    pub y_max: f64,
    /// Horizontal pixels per data unit.
    pub px_per_unit_x: f64,
    /// Vertical pixels per data unit.
    pub px_per_unit_y: f64,
    /// Horizontal data units per pixel.
    pub units_per_px_x: f64,
    /// Vertical data units per pixel.
    pub units_per_px_y: f64,
}

impl PlotDimensions {
    /// Creates dimensions for a data area (in pixels) showing the window
    /// `x_range` × `y_range` (in data units).
    pub fn new(
        figure_size: Size,
        data_area: Rect,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Result<Self, DimensionsError> {
        let data_area = data_area.abs();
        let (data_width, data_height) = (data_area.width(), data_area.height());
        if !(data_width.is_finite() && data_height.is_finite())
            || data_width <= 0.0
            || data_height <= 0.0
        {
            return Err(DimensionsError::EmptyDataArea);
        }
        check_range(Axis::X, x_range)?;
        check_range(Axis::Y, y_range)?;

        let (x_min, x_max) = x_range;
        let (y_min, y_max) = y_range;
        let px_per_unit_x = data_width / (x_max - x_min);
        let px_per_unit_y = data_height / (y_max - y_min);
        if !(px_per_unit_x.is_finite() && px_per_unit_x > 0.0) {
            return Err(DimensionsError::InvalidRange { axis: Axis::X });
        }
        if !(px_per_unit_y.is_finite() && px_per_unit_y > 0.0) {
            return Err(DimensionsError::InvalidRange { axis: Axis::Y });
        }

        Ok(Self {
            figure_size,
            data_offset_x: data_area.x0,
            data_offset_y: data_area.y0,
            data_width,
            data_height,
            x_min,
            x_max,
            y_min,
            y_max,
            px_per_unit_x,
            px_per_unit_y,
            units_per_px_x: 1.0 / px_per_unit_x,
            units_per_px_y: 1.0 / px_per_unit_y,
        })
    }

    /// Creates dimensions where the data area fills the whole figure.
    pub fn filling(
        figure_size: Size,
        x_range: (f64, f64),
        y_range: (f64, f64),
    ) -> Result<Self, DimensionsError> {
        Self::new(figure_size, figure_size.to_rect(), x_range, y_range)
    }

    /// Maps a data X value to a pixel column.
    pub fn pixel_x(&self, x: f64) -> f64 {
        self.data_offset_x + (x - self.x_min) * self.px_per_unit_x
    }

    /// Maps a data Y value to a pixel row.
    pub fn pixel_y(&self, y: f64) -> f64 {
        self.data_offset_y + (self.y_max - y) * self.px_per_unit_y
    }

    /// Maps a data-space point to pixel space.
    pub fn pixel(&self, point: Point) -> Point {
        Point::new(self.pixel_x(point.x), self.pixel_y(point.y))
    }

    /// Maps a pixel column back to a data X value.
    pub fn coordinate_x(&self, pixel_x: f64) -> f64 {
        (pixel_x - self.data_offset_x) / self.px_per_unit_x + self.x_min
    }

    /// Maps a pixel row back to a data Y value.
    pub fn coordinate_y(&self, pixel_y: f64) -> f64 {
        self.y_max - (pixel_y - self.data_offset_y) / self.px_per_unit_y
    }

    /// Maps a pixel-space point back to data space.
    pub fn coordinate(&self, pixel: Point) -> Point {
        Point::new(self.coordinate_x(pixel.x), self.coordinate_y(pixel.y))
    }

    /// The data area in pixel space.
    pub fn data_rect(&self) -> Rect {
        Rect::new(
            self.data_offset_x,
            self.data_offset_y,
            self.data_offset_x + self.data_width,
            self.data_offset_y + self.data_height,
        )
    }

    /// Returns `true` if `x` lies inside the visible window (inclusive).
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    /// Returns `true` if `y` lies inside the visible window (inclusive).
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y_min && y <= self.y_max
    }
}

fn check_range(axis: Axis, (min, max): (f64, f64)) -> Result<(), DimensionsError> {
    if min.is_finite() && max.is_finite() && max > min {
        Ok(())
    } else {
        Err(DimensionsError::InvalidRange { axis })
    }
}
