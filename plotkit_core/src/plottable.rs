// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract every plot element implements.

use alloc::vec::Vec;

use crate::dimensions::PlotDimensions;
use crate::legend::LegendItem;
use crate::limits::AxisLimits;
use crate::style::Cursor;
use crate::surface::Surface;

/// Reasons a plottable refuses to be rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A position that must be a real number is NaN or infinite.
    #[error("position must be a finite number")]
    NonFinitePosition,
    /// A label formatter is required but none is set.
    #[error("position formatter is not set")]
    MissingFormatter,
    /// Two parallel sequences have different lengths.
    #[error("{field} has {actual} entries but {expected} were expected")]
    LengthMismatch {
        /// Name of the sequence whose length is wrong.
        field: &'static str,
        /// Length it should have.
        expected: usize,
        /// Length it has.
        actual: usize,
    },
    /// A data value is NaN or infinite.
    #[error("value at index {index} is not finite")]
    NonFiniteValue {
        /// Offending index.
        index: usize,
    },
    /// A magnitude is negative.
    #[error("value at index {index} is negative")]
    NegativeValue {
        /// Offending index.
        index: usize,
    },
}

/// A renderable plot element.
///
/// Containers call [`validate`](Self::validate) before [`render`](Self::render); rendering
/// itself never reports errors.
pub trait Plottable {
    /// Whether the element draws anything.
    fn is_visible(&self) -> bool;

    /// Shows or hides the element.
    fn set_visible(&mut self, visible: bool);

    /// Indices of the `(x, y)` axes this element is plotted against.
    fn axis_indices(&self) -> (usize, usize) {
        (0, 0)
    }

    /// Checks that the element's data can be rendered.
    ///
    /// `deep` asks for exhaustive checks on large data; cheap checks run either way.
    fn validate(&self, deep: bool) -> Result<(), ValidationError>;

    /// The data extent auto-scaling should include.
    fn axis_limits(&self) -> AxisLimits;

    /// Draws the element. Does nothing when the element is hidden.
    ///
    /// `low_quality` trades anti-aliasing for speed and never changes geometry.
    fn render(&self, dims: &PlotDimensions, surface: &mut dyn Surface, low_quality: bool);

    /// Legend entries, or `None` when the element has nothing to show in a legend.
    fn legend_items(&self) -> Option<Vec<LegendItem>>;
}

/// A plot element the user can drag with the pointer.
///
/// All coordinates are in data space; the container converts pointer pixels before calling.
pub trait Draggable {
    /// Whether dragging is currently allowed.
    fn is_drag_enabled(&self) -> bool;

    /// Cursor to show while hovering the element.
    fn drag_cursor(&self) -> Cursor;

    /// Moves the element toward `(x, y)`.
    ///
    /// `fixed_size` asks elements with an extent to keep it while moving. Returns `true` if the
    /// element moved (dragging enabled), `false` if the call was ignored.
    fn drag_to(&mut self, x: f64, y: f64, fixed_size: bool) -> bool;

    /// Whether the pointer at `(x, y)` is within `(snap_x, snap_y)` data units of the element.
    fn is_under_mouse(&self, x: f64, y: f64, snap_x: f64, snap_y: f64) -> bool;
}
