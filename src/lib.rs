// SPDX-FileCopyrightText: 2026 mandelgrid contributors
// SPDX-License-Identifier: MIT

//! Escape-iteration grids for the Mandelbrot set.
//!
//! The crate maps a rectangular pixel grid onto a viewport of the complex
//! plane and computes, for every cell, the number of iterations of
//! $z \leftarrow z^2 + p$ needed to detect divergence (or an iteration cap
//! when the orbit never escapes). The result is a [`Grid`] of counts that a
//! consumer can feed through a color palette, dump to an image, or analyze
//! directly; no rendering or I/O happens here.
//!
//! ```
//! use mandelgrid::{render_grid, DEFAULT_LOWER_RIGHT, DEFAULT_UPPER_LEFT};
//!
//! let grid = render_grid(DEFAULT_UPPER_LEFT, DEFAULT_LOWER_RIGHT, (64, 64), 128).unwrap();
//! assert_eq!((grid.width(), grid.height()), (64, 64));
//! ```

#![warn(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]

mod mandelbrot;
mod render;

pub use crate::mandelbrot::{escape_time, DEFAULT_LOWER_RIGHT, DEFAULT_UPPER_LEFT};
pub use crate::render::{
    pixel_to_point, render_grid, render_grid_parallel, Grid, RenderError, RenderResult,
    MIN_GRID_SIZE,
};
