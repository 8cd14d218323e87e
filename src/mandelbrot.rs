// SPDX-FileCopyrightText: 2026 mandelgrid contributors
// SPDX-License-Identifier: MIT

use num::complex::Complex64;

/// Upper-left corner of a default framing of the full Mandelbrot set.
pub const DEFAULT_UPPER_LEFT: Complex64 = Complex64 { re: -2.0, im: 1.4 };

/// Lower-right corner of a default framing of the full Mandelbrot set.
pub const DEFAULT_LOWER_RIGHT: Complex64 = Complex64 { re: 0.8, im: -1.4 };

// {{{ escape

/// Compute the escape time for the quadratic Mandelbrot map
///
/// $$
///     f(z) = z^2 + p,
/// $$
///
/// starting from $z_0 = p$ and iterating at most *maxit* times.
///
/// Returns the zero-based iteration index at which $|z|^2 > 4$ was first
/// observed, or *maxit* if the orbit never left the escape radius. A result
/// equal to *maxit* marks *p* as a presumed member of the set.
pub fn escape_time(p: Complex64, maxit: usize) -> usize {
    let mut z = p;

    for it in 0..maxit {
        z = z * z + p;

        // NOTE: norm_sqr() > 4 instead of norm() > 2 keeps the square root
        // out of the hot loop
        if z.norm_sqr() > 4.0 {
            return it;
        }
    }

    maxit
}

// }}}

// {{{ tests

#[cfg(test)]
mod tests {
    use super::*;
    use num::complex::c64;

    #[test]
    fn test_zero_cap() {
        assert_eq!(escape_time(c64(0.1, 0.0), 0), 0);
        assert_eq!(escape_time(c64(3.0, 0.0), 0), 0);
        assert_eq!(escape_time(c64(-2.0, 1.4), 0), 0);
    }

    #[test]
    fn test_origin_never_escapes() {
        // 0 is in the set: the orbit stays at 0 forever
        for maxit in [1, 20, 256] {
            assert_eq!(escape_time(c64(0.0, 0.0), maxit), maxit);
        }
    }

    #[test]
    fn test_far_point_escapes_immediately() {
        // z_1 = 9 + 3 = 12, so divergence is detected at index 0
        for maxit in [1, 20, 256] {
            assert_eq!(escape_time(c64(3.0, 0.0), maxit), 0);
        }
    }

    #[test]
    fn test_interior_point_reaches_cap() {
        // -1 is in the main period-2 bulb: orbit cycles -1, 0, -1, ...
        assert_eq!(escape_time(c64(-1.0, 0.0), 128), 128);
    }

    #[test]
    fn test_exterior_point_exact_index() {
        // p = 0.5: orbit 0.75, 1.0625, 1.62890625, 3.153..., whose square
        // first exceeds 4 at iteration index 3
        assert_eq!(escape_time(c64(0.5, 0.0), 20), 3);
    }
}

// }}}
