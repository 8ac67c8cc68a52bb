// Copyright 2025 the Plotkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot elements for `plotkit_core`.
//!
//! Every element here implements [`plotkit_core::Plottable`]:
//! - [`AxisLine`]: a horizontal or vertical reference line with an optional position label.
//!   It also implements [`plotkit_core::Draggable`].
//! - [`CoxcombPlot`]: a polar area chart drawn over a [`RadialAxis`] web.
//!
//! Elements draw through a [`plotkit_core::Surface`]; they never own one.

#![no_std]

extern crate alloc;

mod axis_line;
mod coxcomb;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod radial_axis;

pub use axis_line::{AxisLine, Orientation, PositionFormatter};
pub use coxcomb::{CoxcombPlot, Sector};
pub use format::{format_compact, format_fixed, format_position};
pub use radial_axis::{AxisType, IconPlacement, RadialAxis, RadialTick};
