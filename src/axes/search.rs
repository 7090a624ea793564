//! Extended Wilkinson tick search
//!
//! The four-level nested search over (skip factor, nice number, tick count,
//! decade) from "An Extension of Wilkinson's Algorithm for Positioning Tick
//! Labels on Axes" (Talbot, Lin, Hanrahan, InfoVis 2010), with
//! branch-and-bound pruning on the monotone upper bounds of the score
//! components.

use crate::axes::format::LabelScratch;
use crate::axes::score::{
    coverage, coverage_max, density, density_max, legibility, simplicity, simplicity_max, weighted,
};
use crate::core::constants::score::NICE_NUMBERS;
use crate::core::constants::search::{J_MAX, K_MAX, PRECISION_MAX, Z_MAX};
use crate::core::types::{AxisContext, FormatKind, TickFormat};

/// Winning tick line of a search
///
/// `lmin..=lmax` are the tick endpoints, `lstep` the spacing, and
/// `(j, q, k)` the search coordinates that produced them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickCandidate {
    pub lmin: f64,
    pub lmax: f64,
    pub lstep: f64,
    /// Skip factor among nice numbers
    pub j: u32,
    /// Chosen nice number (0 for the trivial fallback)
    pub q: f64,
    /// Tick count
    pub k: u32,
    /// Most legible label format for this line
    pub format: TickFormat,
    /// Weighted total score
    pub score: f64,
}

impl TickCandidate {
    /// Fallback when the viewport is too small to search: the data range
    /// endpoints themselves become the only two ticks.
    fn trivial(dmin: f64, dmax: f64) -> Self {
        Self {
            lmin: dmin,
            lmax: dmax,
            lstep: dmax - dmin,
            j: 1,
            q: 0.0,
            k: 2,
            format: TickFormat::new(FormatKind::Decimal, 1),
            score: 0.0,
        }
    }
}

/// Pick the most legible `(kind, precision)` for a fixed tick line.
///
/// Decimal with one digit is always a candidate, so the optimizer always
/// returns a format; ties keep the earliest candidate, preferring decimal
/// notation and low precision.
pub fn optimize_format(
    lmin: f64,
    lmax: f64,
    lstep: f64,
    context: &AxisContext,
    scratch: &mut LabelScratch,
) -> TickFormat {
    let mut best = TickFormat::default();
    let mut best_leg = f64::NEG_INFINITY;
    for kind in [FormatKind::Decimal, FormatKind::Scientific] {
        for precision in 1..=PRECISION_MAX {
            let format = TickFormat::new(kind, precision);
            let leg = legibility(format, lmin, lmax, lstep, context, scratch);
            if leg > best_leg {
                best_leg = leg;
                best = format;
            }
        }
    }
    debug_assert!(best.precision >= 1);
    best
}

/// Run the Extended Wilkinson search for the data range `dmin..dmax` with
/// `m` requested ticks.
///
/// Search coordinates:
/// - `j`: how many nice-number increments one step represents,
/// - `q`: the nice number, tried in preference order,
/// - `k`: tick count of the candidate line,
/// - `z`: base-10 exponent of the step,
/// - `start`: integer offset placing the line relative to the data range.
///
/// At each level the weighted score of the unexplored subtree is bounded
/// from above; a subtree that cannot beat the current best is skipped
/// entirely. Ties keep the first candidate, so earlier skip factors, nice
/// numbers, smaller counts and smaller decades win.
pub fn wilkinson_search(dmin: f64, dmax: f64, m: u32, context: &AxisContext) -> TickCandidate {
    debug_assert!(dmin < dmax);
    debug_assert!(m >= 1);
    debug_assert!(context.size_glyph > 0.0);
    debug_assert!(context.size_viewport > 0.0);

    if context.size_viewport < 10.0 * context.size_glyph {
        log::debug!("degenerate axes context, returning the trivial tick range");
        return TickCandidate::trivial(dmin, dmax);
    }

    let mut scratch = LabelScratch::new();
    let mut best: Option<TickCandidate> = None;
    let mut best_score = f64::NEG_INFINITY;

    'search: for j in 1..J_MAX {
        for (q_index, &q) in NICE_NUMBERS.iter().enumerate() {
            let sm = simplicity_max(q_index, j);

            // No simplicity reachable from here (nor from any later j)
            // can beat the winner.
            if weighted(sm, 1.0, 1.0, 1.0) <= best_score {
                break 'search;
            }

            for k in 2..K_MAX {
                let dm = density_max(k, m);

                if weighted(sm, 1.0, dm, 1.0) <= best_score {
                    break;
                }

                let delta = (dmax - dmin) / (k as f64 + 1.0) / j as f64 / q;
                let mut z = delta.log10().ceil() as i32;

                while z < Z_MAX {
                    let step = j as f64 * q * 10f64.powi(z);
                    debug_assert!(step > 0.0);
                    let cm = coverage_max(dmin, dmax, step * (k as f64 - 1.0));

                    if weighted(sm, cm, dm, 1.0) <= best_score {
                        break;
                    }

                    let min_start = (dmax / step).floor() * j as f64 - (k as f64 - 1.0) * j as f64;
                    let max_start = (dmin / step).ceil() * j as f64;
                    if min_start > max_start {
                        z += 1;
                        continue;
                    }

                    let mut start = min_start;
                    while start <= max_start {
                        let lmin = start * (step / j as f64);
                        let lmax = lmin + step * (k as f64 - 1.0);
                        let lstep = step;

                        let s = simplicity(q_index, j, lmin, lstep);
                        let c = coverage(dmin, dmax, lmin, lmax);
                        let d = density(k, m, dmin, dmax, lmin, lmax);
                        let format = optimize_format(lmin, lmax, lstep, context, &mut scratch);
                        let l = legibility(format, lmin, lmax, lstep, context, &mut scratch);

                        let score = weighted(s, c, d, l);
                        if score > best_score {
                            best_score = score;
                            best = Some(TickCandidate {
                                lmin,
                                lmax,
                                lstep,
                                j,
                                q,
                                k,
                                format,
                                score,
                            });
                        }
                        start += 1.0;
                    }
                    z += 1;
                }
            }
        }
    }

    // The first evaluated candidate always has a finite score, so the
    // search cannot come back empty on a non-degenerate context.
    best.unwrap_or_else(|| TickCandidate::trivial(dmin, dmax))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::AxisCoord;
    use approx::assert_relative_eq;

    fn context() -> AxisContext {
        AxisContext::new(AxisCoord::X, 2000.0, 5.0)
    }

    #[test]
    fn test_degenerate_viewport_returns_trivial_range() {
        let ctx = AxisContext::new(AxisCoord::X, 80.0, 10.0);
        let r = wilkinson_search(1.5, 3.5, 5, &ctx);
        assert_relative_eq!(r.lmin, 1.5);
        assert_relative_eq!(r.lmax, 3.5);
        assert_relative_eq!(r.lstep, 2.0);
        assert_eq!(r.k, 2);
        assert_eq!(r.format, TickFormat::new(FormatKind::Decimal, 1));
    }

    #[test]
    fn test_search_finds_decimal_steps() {
        let r = wilkinson_search(0.0, 100.0, 10, &context());
        assert!(r.lstep > 0.0);
        assert!(r.lmin <= r.lmax);
        // The step is a nice number times a power of ten.
        let mantissa = r.lstep / 10f64.powf(r.lstep.log10().floor());
        let nice = NICE_NUMBERS
            .iter()
            .any(|&q| (mantissa - q).abs() < 1e-9 || (mantissa - 10.0 * q).abs() < 1e-9);
        assert!(nice, "step {} is not nice", r.lstep);
    }

    #[test]
    fn test_search_aligns_to_data_range() {
        let r = wilkinson_search(-10.12, 20.34, 7, &context());
        assert_relative_eq!(r.lmin, -10.0);
        assert_relative_eq!(r.lmax, 20.0);
        assert_relative_eq!(r.lstep, 5.0);
        assert_eq!(r.k, 7);
    }

    #[test]
    fn test_optimizer_raises_precision_until_labels_differ() {
        let mut scratch = LabelScratch::new();
        let format = optimize_format(-0.131, -0.125, 0.001, &context(), &mut scratch);
        // One or two digits collapse neighboring labels; three are needed.
        assert_eq!(format, TickFormat::new(FormatKind::Decimal, 3));
    }

    #[test]
    fn test_optimizer_prefers_low_precision_on_ties() {
        let mut scratch = LabelScratch::new();
        let format = optimize_format(0.0, 100.0, 25.0, &context(), &mut scratch);
        assert_eq!(format.kind, FormatKind::Decimal);
        assert_eq!(format.precision, 1);
    }

    #[test]
    fn test_search_is_deterministic() {
        let a = wilkinson_search(0.37, 9.13, 8, &context());
        let b = wilkinson_search(0.37, 9.13, 8, &context());
        assert_eq!(a, b);
    }
}
