//! Tick layout entry point and result assembly
//!
//! Wraps the Extended Wilkinson search into the public [`ticks`] routine:
//! derives the requested tick count from the viewport geometry, runs the
//! search, applies the off-screen range extensions and materializes tick
//! values and label strings.

use crate::axes::format::format_tick_label;
use crate::axes::overlap::tick_count;
use crate::axes::search::wilkinson_search;
use crate::core::constants::labels::{AVG_GLYPHS_PER_LABEL, VIEWPORT_OCCUPANCY};
use crate::core::error::{Result, TicksError};
use crate::core::types::{AxisContext, TickFormat};

/// Complete tick layout for one axis
///
/// Produced by [`ticks`]; immutable afterwards. The `values` are strictly
/// increasing with uniform spacing `lstep`, and `labels[i]` is the
/// rendering of `values[i]` under `format`.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    /// Data range, widened by the extensions
    pub dmin: f64,
    pub dmax: f64,
    /// Tick endpoints of the search winner, without extensions
    pub lmin_orig: f64,
    pub lmax_orig: f64,
    /// Tick endpoints with extensions applied, and the tick spacing
    pub lmin: f64,
    pub lmax: f64,
    pub lstep: f64,
    /// Chosen label format
    pub format: TickFormat,
    /// Number of ticks emitted
    pub value_count: u32,
    /// Tick count originally requested (informational)
    pub value_count_req: u32,
    /// Tick positions, `value_count` of them
    pub values: Vec<f64>,
    /// Rendered labels, one per tick position
    pub labels: Vec<String>,
}

impl AxisTicks {
    /// Number of ticks
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the layout holds no ticks (never true for a layout produced
    /// by [`ticks`])
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(value, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, &str)> {
        self.values
            .iter()
            .zip(self.labels.iter())
            .map(|(&value, label)| (value, label.as_str()))
    }
}

/// Compute the tick layout for the data range `dmin..dmax`.
///
/// The requested tick count is derived from the viewport extent and glyph
/// size, the Extended Wilkinson search picks the best tick line and label
/// format, and the result carries `2 * extensions + 1` pages of ticks for
/// off-screen scroll buffering.
///
/// # Errors
///
/// [`TicksError::InvalidRange`] when `dmin >= dmax` or either bound is not
/// finite; [`TicksError::InvalidContext`] when the context sizes are not
/// strictly positive.
///
/// # Example
///
/// ```
/// use tickwise::{ticks, AxisContext, AxisCoord};
///
/// let context = AxisContext::new(AxisCoord::X, 6000.0, 10.0);
/// let layout = ticks(0.0, 1.0, &context)?;
/// assert!(layout.len() >= 2);
/// for (value, label) in layout.iter() {
///     println!("{value} -> {label}");
/// }
/// # Ok::<(), tickwise::TicksError>(())
/// ```
pub fn ticks(dmin: f64, dmax: f64, context: &AxisContext) -> Result<AxisTicks> {
    if !dmin.is_finite() || !dmax.is_finite() || dmin >= dmax {
        return Err(TicksError::InvalidRange { dmin, dmax });
    }
    context.validate()?;

    let glyphs_per_label = if context.coord.is_horizontal() {
        AVG_GLYPHS_PER_LABEL
    } else {
        1.0
    };
    let requested = (VIEWPORT_OCCUPANCY * context.size_viewport as f64
        / (glyphs_per_label * context.size_glyph as f64))
        .ceil();
    let requested = (requested as u32).max(2);

    log::debug!(
        "running extended Wilkinson search on {:?} axis with {} requested labels on \
         range [{:.3}, {:.3}], viewport size {:.1}, glyph size {:.1}",
        context.coord,
        requested,
        dmin,
        dmax,
        context.size_viewport,
        context.size_glyph
    );

    let winner = wilkinson_search(dmin, dmax, requested, context);
    debug_assert!(winner.lstep > 0.0);
    debug_assert!(winner.lmin < winner.lmax);

    let ext = context.extensions as f64;
    let pages = 2 * context.extensions + 1;
    let diff = dmax - dmin;

    let per_page = tick_count(winner.lmin, winner.lmax, winner.lstep) as u32;
    let n = per_page * pages;
    debug_assert!(n >= 2);

    let x0 = winner.lmin - ext * diff - ext * winner.lstep;
    let values: Vec<f64> = (0..n).map(|i| x0 + i as f64 * winner.lstep).collect();
    let labels: Vec<String> = values
        .iter()
        .map(|&x| format_tick_label(x, winner.format))
        .collect();

    log::debug!(
        "found {} labels, [{:.1}, {:.1}] with step {:.1}",
        n,
        winner.lmin - ext * diff,
        winner.lmax + ext * diff,
        winner.lstep
    );

    Ok(AxisTicks {
        dmin: dmin - ext * diff,
        dmax: dmax + ext * diff,
        lmin_orig: winner.lmin,
        lmax_orig: winner.lmax,
        lmin: winner.lmin - ext * diff,
        lmax: winner.lmax + ext * diff,
        lstep: winner.lstep,
        format: winner.format,
        value_count: n,
        value_count_req: pages * requested,
        values,
        labels,
    })
}
