// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core of the Plotkit plotting engine.
//!
//! This crate holds the pieces every plot element shares:
//! - **Coordinate transform**: [`PlotDimensions`] maps data space to pixel space and back.
//! - **Contract**: [`Plottable`] (render, validate, limits, legend) and [`Draggable`].
//! - **Drawing**: the [`Surface`] trait, the scoped [`Graphics`] context, and the recording
//!   [`DisplayList`] surface.
//!
//! Concrete elements live in `plotkit_charts`.

#![no_std]

extern crate alloc;

mod dimensions;
mod display_list;
mod graphics;
mod legend;
mod limits;
mod plottable;
mod style;
mod surface;
mod text;

pub use dimensions::{Axis, DimensionsError, PlotDimensions};
pub use display_list::{DisplayList, DrawOp};
pub use graphics::{Graphics, Pen};
pub use legend::LegendItem;
pub use limits::AxisLimits;
pub use plottable::{Draggable, Plottable, ValidationError};
pub use style::{Cursor, HorizontalAlignment, LineStyle, MarkerShape, VerticalAlignment};
pub use surface::{Icon, Surface};
pub use text::{Font, FontFamily, HeuristicTextMeasurer, TextMeasurer, TextMetrics};
