// SPDX-FileCopyrightText: 2026 mandelgrid contributors
// SPDX-License-Identifier: MIT

use std::fmt;
use std::ops::Index;

use log::debug;
use num::complex::{c64, Complex64};
use rayon::prelude::*;

use crate::mandelbrot::escape_time;

/// Smallest width and height for which the pixel-to-point mapping is defined.
pub const MIN_GRID_SIZE: usize = 2;

// {{{ Error

#[derive(Eq, Debug, PartialEq)]
pub enum RenderError {
    /// Width or height is below the minimum renderable size.
    InvalidSize,
    /// Corner points do not form an upper-left/lower-right pair.
    InvalidBounds,
}

impl RenderError {
    fn as_str(&self) -> &'static str {
        match *self {
            RenderError::InvalidSize => "Width and height must both be at least 2",
            RenderError::InvalidBounds => {
                "Corner points are not a proper upper-left/lower-right pair"
            }
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str(self.as_str())
    }
}

pub type RenderResult<T> = Result<T, RenderError>;

// }}}

// {{{ Grid

/// A row-major grid of escape-iteration counts.
///
/// Row *y* holds the counts for the *y*-th sample row of the viewport, with
/// row 0 on the BOTTOM imaginary edge (see [`pixel_to_point`]). Indexing with
/// `grid[y][x]` gives the count for pixel $(x, y)$.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    /// Width and height of the grid.
    bounds: (usize, usize),
    /// Escape-iteration counts, row by row.
    counts: Vec<usize>,
}

impl Grid {
    fn zeros(bounds: (usize, usize)) -> Self {
        Grid {
            bounds,
            counts: vec![0; bounds.0 * bounds.1],
        }
    }

    pub fn width(&self) -> usize {
        self.bounds.0
    }

    pub fn height(&self) -> usize {
        self.bounds.1
    }

    /// Iterate over the rows of the grid, bottom edge first.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> {
        self.counts.chunks(self.bounds.0)
    }
}

impl Index<usize> for Grid {
    type Output = [usize];

    fn index(&self, y: usize) -> &[usize] {
        let (width, _) = self.bounds;
        &self.counts[y * width..(y + 1) * width]
    }
}

// }}}

// {{{ pixel to point

/// Translate pixel coordinates to physical point coordinates.
///
/// *bounds*: width and height of the grid.
/// *pixel*: (column, row) coordinates of a grid cell.
/// *upper_left*, *lower_right*: bounding box of the domain.
///
/// Columns span the real axis left to right. Rows span the imaginary axis
/// with row 0 on the lower edge (`lower_right.im`) and the last row on the
/// upper edge, so the row index and the imaginary coordinate grow together.
/// This is upside down relative to the usual image convention and is kept
/// that way for output compatibility.
pub fn pixel_to_point(
    bounds: (usize, usize),
    pixel: (usize, usize),
    upper_left: Complex64,
    lower_right: Complex64,
) -> Complex64 {
    // NOTE: the corners are sample positions, not cell edges, so the step
    // divides by (n - 1) and the last row/column lands exactly on a corner
    let dx = (lower_right.re - upper_left.re) / ((bounds.0 - 1) as f64);
    let dy = (upper_left.im - lower_right.im) / ((bounds.1 - 1) as f64);

    c64(
        upper_left.re + (pixel.0 as f64) * dx,
        lower_right.im + (pixel.1 as f64) * dy,
    )
}

// }}}

// {{{ validation

fn check_bounds(
    bounds: (usize, usize),
    upper_left: Complex64,
    lower_right: Complex64,
) -> RenderResult<()> {
    if bounds.0 < MIN_GRID_SIZE || bounds.1 < MIN_GRID_SIZE {
        return Err(RenderError::InvalidSize);
    }

    if upper_left.re > lower_right.re || lower_right.im > upper_left.im {
        return Err(RenderError::InvalidBounds);
    }

    Ok(())
}

// }}}

// {{{ render grid

fn render_row(
    row: &mut [usize],
    y: usize,
    bounds: (usize, usize),
    upper_left: Complex64,
    lower_right: Complex64,
    maxit: usize,
) {
    for (x, count) in row.iter_mut().enumerate() {
        let p = pixel_to_point(bounds, (x, y), upper_left, lower_right);
        *count = escape_time(p, maxit);
    }
}

/// Render the escape-iteration grid for the viewport between *upper_left*
/// and *lower_right*.
///
/// *bounds*: width and height of the grid.
/// *maxit*: iteration cap passed to [`escape_time`] for every cell.
///
/// Fails with [`RenderError::InvalidSize`] when either dimension is below
/// [`MIN_GRID_SIZE`] and with [`RenderError::InvalidBounds`] when the corners
/// are inconsistent, in both cases before any cell is computed. On success
/// the grid is fully populated; there are no partial results.
pub fn render_grid(
    upper_left: Complex64,
    lower_right: Complex64,
    bounds: (usize, usize),
    maxit: usize,
) -> RenderResult<Grid> {
    check_bounds(bounds, upper_left, lower_right)?;
    debug!(
        "rendering {}x{} grid on [{}, {}] with maxit {}",
        bounds.0, bounds.1, upper_left, lower_right, maxit
    );

    let mut grid = Grid::zeros(bounds);

    for (y, row) in grid.counts.chunks_mut(bounds.0).enumerate() {
        render_row(row, y, bounds, upper_left, lower_right, maxit);
    }

    Ok(grid)
}

/// Render the same grid as [`render_grid`], one row per rayon task.
///
/// Every worker owns the rows it writes, so no synchronization is needed
/// beyond the final join. The result is bit-identical to the sequential one.
pub fn render_grid_parallel(
    upper_left: Complex64,
    lower_right: Complex64,
    bounds: (usize, usize),
    maxit: usize,
) -> RenderResult<Grid> {
    check_bounds(bounds, upper_left, lower_right)?;
    debug!(
        "rendering {}x{} grid on [{}, {}] with maxit {} (parallel)",
        bounds.0, bounds.1, upper_left, lower_right, maxit
    );

    let mut grid = Grid::zeros(bounds);

    grid.counts
        .par_chunks_mut(bounds.0)
        .enumerate()
        .for_each(|(y, row)| {
            render_row(row, y, bounds, upper_left, lower_right, maxit);
        });

    Ok(grid)
}

// }}}

// {{{ tests


// }}}
