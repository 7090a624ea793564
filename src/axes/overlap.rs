//! Label overlap measurement
//!
//! Measures how close neighboring tick labels come to each other in pixel
//! space, and maps that distance to the overlap term of the legibility
//! score.

use unicode_width::UnicodeWidthStr;

use crate::axes::format::LabelScratch;
use crate::core::constants::labels::DIST_MIN;
use crate::core::constants::search::INF;
use crate::core::types::{AxisContext, AxisCoord};

/// Number of ticks on the line `lmin..=lmax` with spacing `lstep`.
///
/// Invariant: at least two ticks, and for three or more the last tick lies
/// within one step of `lmax`.
pub fn tick_count(lmin: f64, lmax: f64, lstep: f64) -> usize {
    debug_assert!(lstep > 0.0);
    debug_assert!(lmin < lmax);
    let n = (1.0 + (lmax - lmin) / lstep).floor() as usize;
    debug_assert!(n >= 2);
    if n >= 3 {
        debug_assert!(lmin + (n as f64 - 1.0) * lstep <= lmax + 1e-6 * lstep);
        debug_assert!(lmin + n as f64 * lstep >= lmax - 1e-6 * lstep);
    }
    n
}

/// Overlap term of the legibility score for a minimum label distance `d`.
///
/// Saturates at `1` once labels are [`DIST_MIN`] pixels apart, collapses to
/// `-INF` when they touch, and interpolates monotonically in between.
pub fn distance_overlap(d: f64) -> f64 {
    if d >= DIST_MIN {
        1.0
    } else if d == 0.0 {
        -INF
    } else {
        debug_assert!(d > 0.0);
        2.0 - DIST_MIN / d
    }
}

/// Minimum pixel distance between any two neighboring labels of a candidate
/// tick line.
///
/// The scratch must hold the rendered labels of that line. On the
/// horizontal axis each label occupies its character count times the glyph
/// width; on the vertical axis labels stack one glyph height apart.
pub fn min_label_distance(
    scratch: &LabelScratch,
    lmin: f64,
    lmax: f64,
    lstep: f64,
    context: &AxisContext,
) -> f64 {
    let n = tick_count(lmin, lmax, lstep);
    let size = context.size_viewport as f64;
    let glyph = context.size_glyph as f64;
    debug_assert!(size > 0.0);
    debug_assert!(glyph > 0.0);

    let mut min_d = INF;
    for i in 0..n - 1 {
        let (n0, n1) = match context.coord {
            AxisCoord::X => (
                scratch.label(i).width() as f64,
                scratch.label(i + 1).width() as f64,
            ),
            AxisCoord::Y => (1.0, 1.0),
        };
        debug_assert!(n0 > 0.0 && n1 > 0.0);
        let d = (lstep / (lmax - lmin) * size - glyph * (n0 + n1)).max(0.0);
        if d < min_d {
            min_d = d;
        }
    }
    min_d
}
