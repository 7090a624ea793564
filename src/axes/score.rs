//! Quality scoring for candidate tick lines
//!
//! Implements the four weighted components of the Extended Wilkinson score
//! (simplicity, coverage, density, legibility) together with the monotone
//! upper bounds the search prunes with. Every bound must dominate its score
//! for all states reachable deeper in the search; the pruning is only
//! correct under that invariant.

use crate::axes::format::LabelScratch;
use crate::axes::overlap::{distance_overlap, min_label_distance, tick_count};
use crate::core::constants::labels::{DECIMAL_MAX, DECIMAL_MIN, MAX_GLYPHS_PER_TICK};
use crate::core::constants::score::{NICE_NUMBERS, STEP_EPS, WEIGHTS};
use crate::core::constants::search::INF;
use crate::core::types::{AxisContext, FormatKind, TickFormat};

/// Weighted total of the four score components
pub fn weighted(simplicity: f64, coverage: f64, density: f64, legibility: f64) -> f64 {
    WEIGHTS[0] * simplicity + WEIGHTS[1] * coverage + WEIGHTS[2] * density + WEIGHTS[3] * legibility
}

/// Simplicity of a candidate: how early its nice number sits in the
/// preference table, whether the skip factor is small, and whether the tick
/// line sits on step boundaries.
pub fn simplicity(q_index: usize, j: u32, lmin: f64, lstep: f64) -> f64 {
    let n = NICE_NUMBERS.len() as f64;
    let i = (q_index + 1) as f64;
    // The remainder test also covers a range straddling zero with zero on a
    // tick, since that puts lmin on a step boundary too.
    let rem = (lmin % lstep).abs();
    let on_step = rem < STEP_EPS || lstep - rem < STEP_EPS;
    let v = if on_step { 1.0 } else { 0.0 };
    (n - i) / (n - 1.0) + v - j as f64
}

/// Upper bound of [`simplicity`] over every tick line reachable for the
/// given nice number and skip factor (assumes the boundary bonus)
pub fn simplicity_max(q_index: usize, j: u32) -> f64 {
    let n = NICE_NUMBERS.len() as f64;
    let i = (q_index + 1) as f64;
    (n - i) / (n - 1.0) + 1.0 - j as f64
}

/// Coverage: how tightly the tick endpoints hug the data range
pub fn coverage(dmin: f64, dmax: f64, lmin: f64, lmax: f64) -> f64 {
    let scale = 0.1 * (dmax - dmin);
    1.0 - 0.5 * ((dmax - lmax).powi(2) + (dmin - lmin).powi(2)) / scale.powi(2)
}

/// Upper bound of [`coverage`] over every placement of a tick line with the
/// given span
pub fn coverage_max(dmin: f64, dmax: f64, span: f64) -> f64 {
    let drange = dmax - dmin;
    if span > drange {
        1.0 - (0.5 * (span - drange)).powi(2) / (0.1 * drange).powi(2)
    } else {
        1.0
    }
}

/// Density: how close the tick rate is to the requested rate
pub fn density(k: u32, m: u32, dmin: f64, dmax: f64, lmin: f64, lmax: f64) -> f64 {
    let r = (k as f64 - 1.0) / (lmax - lmin);
    let rt = (m as f64 - 1.0) / (lmax.max(dmax) - lmin.min(dmin));
    2.0 - (r / rt).max(rt / r)
}

/// Upper bound of [`density`] for a tick count `k` against a request `m`
pub fn density_max(k: u32, m: u32) -> f64 {
    if k >= m {
        2.0 - (k as f64 - 1.0) / (m as f64 - 1.0)
    } else {
        1.0
    }
}

/// Format preference of a single tick value: decimal is ideal inside its
/// readable magnitude band, scientific is a uniform compromise.
pub fn format_score(format: TickFormat, x: f64) -> f64 {
    let ax = x.abs();
    match format.kind {
        FormatKind::Decimal => {
            if ax > DECIMAL_MIN && ax < DECIMAL_MAX {
                1.0
            } else {
                0.0
            }
        }
        FormatKind::Scientific => 0.25,
    }
}

/// Legibility of a candidate tick line under a given format.
///
/// Mean format preference, label overlap and label uniqueness, each capped
/// at `1`, averaged. A format whose labels overflow the glyph budget or
/// collide is unusable and scores `-INF`, so the optimizer skips it.
pub fn legibility(
    format: TickFormat,
    lmin: f64,
    lmax: f64,
    lstep: f64,
    context: &AxisContext,
    scratch: &mut LabelScratch,
) -> f64 {
    debug_assert!(lmin < lmax);
    debug_assert!(lstep > 0.0);
    let n = tick_count(lmin, lmax, lstep);

    // Format part.
    let mut f = 0.0;
    for i in 0..n {
        let x = lmin + i as f64 * lstep;
        debug_assert!(x <= lmax + 0.5 * lstep);
        f += format_score(format, x);
    }
    f = 0.9 * f / n.max(1) as f64;

    scratch.render(format, lmin, lstep, n);
    let labels = scratch.labels(n);
    if labels.iter().any(|l| l.len() >= MAX_GLYPHS_PER_TICK) {
        return -INF;
    }
    // The tick values are strictly increasing and rounding is monotone, so
    // colliding labels are always neighbors.
    if labels.windows(2).any(|w| w[0] == w[1]) {
        return -INF;
    }

    // Overlap part.
    let o = distance_overlap(min_label_distance(scratch, lmin, lmax, lstep, context));

    // Duplicates part: labels verified distinct above.
    let dup = 1.0;

    debug_assert!(f <= 1.0);
    debug_assert!(o <= 1.0);
    (f + o + dup) / 3.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AxisCoord;
    use approx::assert_relative_eq;

    #[test]
    fn test_simplicity_prefers_early_nice_numbers() {
        // q = 1 (index 0) on a boundary-aligned line is the ideal.
        assert_relative_eq!(simplicity(0, 1, 0.0, 0.1), 1.0);
        // q = 3 (last index) loses the whole table preference.
        assert_relative_eq!(simplicity(5, 1, 0.0, 0.3), 0.0);
    }

    #[test]
    fn test_simplicity_boundary_bonus() {
        let aligned = simplicity(0, 1, -1.0, 0.5);
        let misaligned = simplicity(0, 1, -1.1, 0.5);
        assert_relative_eq!(aligned - misaligned, 1.0);
    }

    #[test]
    fn test_simplicity_max_dominates() {
        for (q_index, j) in [(0usize, 1u32), (2, 1), (5, 3), (3, 2)] {
            for &(lmin, lstep) in &[(-1.1, 0.5), (0.0, 0.25), (3.3, 1.0)] {
                assert!(simplicity_max(q_index, j) >= simplicity(q_index, j, lmin, lstep));
            }
        }
    }

    #[test]
    fn test_coverage_exact_match() {
        assert_relative_eq!(coverage(0.0, 1.0, 0.0, 1.0), 1.0);
        assert!(coverage(0.0, 1.0, -0.5, 1.5) < 1.0);
    }

    #[test]
    fn test_coverage_max_dominates() {
        let (dmin, dmax) = (-3.2, 7.7);
        for &(lmin, lstep, k) in &[(-4.0, 2.0, 7u32), (-3.0, 2.5, 5), (0.0, 1.0, 9)] {
            let span = lstep * (k as f64 - 1.0);
            let lmax = lmin + span;
            assert!(coverage_max(dmin, dmax, span) >= coverage(dmin, dmax, lmin, lmax) - 1e-12);
        }
    }

    #[test]
    fn test_density_ideal_at_requested_rate() {
        assert_relative_eq!(density(5, 5, 0.0, 1.0, 0.0, 1.0), 1.0);
        assert!(density(11, 5, 0.0, 1.0, 0.0, 1.0) < 0.0);
    }

    #[test]
    fn test_density_max_dominates() {
        let (dmin, dmax) = (0.0, 1.0);
        for k in 2u32..12 {
            for m in 2u32..8 {
                let d = density(k, m, dmin, dmax, 0.0, 1.0);
                assert!(density_max(k, m) >= d - 1e-12, "k={} m={}", k, m);
            }
        }
    }

    #[test]
    fn test_format_score_bands() {
        let decimal = TickFormat::new(FormatKind::Decimal, 1);
        let scientific = TickFormat::new(FormatKind::Scientific, 1);
        assert_eq!(format_score(decimal, 12.5), 1.0);
        assert_eq!(format_score(decimal, 1e-5), 0.0);
        assert_eq!(format_score(decimal, 1e7), 0.0);
        assert_eq!(format_score(decimal, 0.0), 0.0);
        assert_eq!(format_score(scientific, 1e7), 0.25);
    }

    #[test]
    fn test_legibility_rejects_colliding_labels() {
        let context = AxisContext::new(AxisCoord::X, 2000.0, 5.0);
        let mut scratch = LabelScratch::new();
        // Step 0.001 cannot be told apart at one decimal digit.
        let coarse = TickFormat::new(FormatKind::Decimal, 1);
        let l = legibility(coarse, -0.131, -0.125, 0.001, &context, &mut scratch);
        assert_eq!(l, -INF);
        // Three digits distinguish every label.
        let fine = TickFormat::new(FormatKind::Decimal, 3);
        let l = legibility(fine, -0.131, -0.125, 0.001, &context, &mut scratch);
        assert!(l > 0.9);
    }

    #[test]
    fn test_legibility_penalizes_tight_labels() {
        let mut scratch = LabelScratch::new();
        let format = TickFormat::new(FormatKind::Decimal, 1);
        let wide = AxisContext::new(AxisCoord::X, 6000.0, 10.0);
        let narrow = AxisContext::new(AxisCoord::X, 1000.0, 10.0);
        let l_wide = legibility(format, 0.0, 1.0, 0.1, &wide, &mut scratch);
        let l_narrow = legibility(format, 0.0, 1.0, 0.1, &narrow, &mut scratch);
        assert!(l_wide > l_narrow);
    }
}
