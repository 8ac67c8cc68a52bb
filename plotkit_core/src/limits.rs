// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-limit contributions reported by plottables.

/// The data-space extent a plottable wants auto-scaling to include.
///
/// Any bound may be `NaN`, meaning the plottable has no opinion about it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    /// Smallest X value, or `NaN`.
    pub x_min: f64,
    /// Largest X value, or `NaN`.
    pub x_max: f64,
    /// Smallest Y value, or `NaN`.
    pub y_min: f64,
    /// Largest Y value, or `NaN`.
    pub y_max: f64,
}

impl AxisLimits {
    /// Limits that do not influence auto-scaling on either axis.
    pub const NONE: Self = Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN);

    /// Creates limits from the four bounds.
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Limits that only constrain the X axis.
    pub const fn x_only(x_min: f64, x_max: f64) -> Self {
        Self::new(x_min, x_max, f64::NAN, f64::NAN)
    }

    /// Limits that only constrain the Y axis.
    pub const fn y_only(y_min: f64, y_max: f64) -> Self {
        Self::new(f64::NAN, f64::NAN, y_min, y_max)
    }

    /// Returns `true` if both X bounds are present.
    pub fn has_x(&self) -> bool {
        !self.x_min.is_nan() && !self.x_max.is_nan()
    }

    /// Returns `true` if both Y bounds are present.
    pub fn has_y(&self) -> bool {
        !self.y_min.is_nan() && !self.y_max.is_nan()
    }

    /// Returns `true` if no bound is present.
    pub fn is_none(&self) -> bool {
        self.x_min.is_nan() && self.x_max.is_nan() && self.y_min.is_nan() && self.y_max.is_nan()
    }

    /// Merges two contributions, ignoring missing bounds on either side.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        // `f64::min`/`max` return the non-NaN operand.
        Self {
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
        }
    }
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self::NONE
    }
}
