//! Tick label rendering
//!
//! Converts a tick value plus a [`TickFormat`] into a short signed string,
//! and provides the reusable scratch storage the search renders candidate
//! labels into while scoring legibility.

use std::fmt::Write;

use crate::core::constants::labels::{MAX_GLYPHS_PER_TICK, MAX_LABELS};
use crate::core::types::{FormatKind, TickFormat};

/// Render a tick value into `out`, replacing its previous content.
///
/// The label is a sign character (`+` or `-`) followed by the magnitude at
/// `format.precision` digits after the decimal point, in decimal or
/// scientific notation. The literal zero renders as `"0"` with no sign.
pub fn write_tick_label(out: &mut String, value: f64, format: TickFormat) {
    out.clear();
    if value == 0.0 {
        out.push('0');
        return;
    }
    out.push(if value < 0.0 { '-' } else { '+' });
    let magnitude = value.abs();
    let precision = format.precision as usize;
    // Writing to a String is infallible.
    let _ = match format.kind {
        FormatKind::Decimal => write!(out, "{magnitude:.precision$}"),
        FormatKind::Scientific => write!(out, "{magnitude:.precision$e}"),
    };
}

/// Render a tick value into a fresh string
pub fn format_tick_label(value: f64, format: TickFormat) -> String {
    let mut out = String::with_capacity(MAX_GLYPHS_PER_TICK);
    write_tick_label(&mut out, value, format);
    out
}

/// Reusable storage for candidate labels.
///
/// The legibility score needs every candidate label rendered before it can
/// measure overlap. One scratch is allocated per search invocation and
/// threaded down the call chain, so the inner loop never allocates beyond
/// the strings it reuses.
#[derive(Debug, Default)]
pub struct LabelScratch {
    labels: Vec<String>,
}

impl LabelScratch {
    pub fn new() -> Self {
        Self {
            labels: Vec::with_capacity(MAX_LABELS),
        }
    }

    /// Render the `n` labels of a tick line starting at `x0` with spacing
    /// `lstep`, reusing the string storage from previous evaluations.
    pub fn render(&mut self, format: TickFormat, x0: f64, lstep: f64, n: usize) {
        debug_assert!(n <= MAX_LABELS);
        if self.labels.len() < n {
            self.labels
                .resize_with(n, || String::with_capacity(MAX_GLYPHS_PER_TICK));
        }
        for (i, label) in self.labels[..n].iter_mut().enumerate() {
            write_tick_label(label, x0 + i as f64 * lstep, format);
        }
    }

    /// The labels rendered by the last [`render`](Self::render) call
    pub fn labels(&self, n: usize) -> &[String] {
        &self.labels[..n]
    }

    /// One rendered label
    pub fn label(&self, i: usize) -> &str {
        &self.labels[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(precision: u32) -> TickFormat {
        TickFormat::new(FormatKind::Decimal, precision)
    }

    fn scientific(precision: u32) -> TickFormat {
        TickFormat::new(FormatKind::Scientific, precision)
    }

    #[test]
    fn test_zero_is_unsigned() {
        assert_eq!(format_tick_label(0.0, decimal(3)), "0");
        assert_eq!(format_tick_label(-0.0, scientific(2)), "0");
    }

    #[test]
    fn test_sign_prefix() {
        assert_eq!(format_tick_label(1.5, decimal(1)), "+1.5");
        assert_eq!(format_tick_label(-1.5, decimal(1)), "-1.5");
    }

    #[test]
    fn test_decimal_precision() {
        assert_eq!(format_tick_label(2.5, decimal(3)), "+2.500");
        assert_eq!(format_tick_label(-0.126, decimal(2)), "-0.13");
        assert_eq!(format_tick_label(10.0, decimal(1)), "+10.0");
    }

    #[test]
    fn test_scientific_precision() {
        assert_eq!(format_tick_label(0.0015, scientific(1)), "+1.5e-3");
        assert_eq!(format_tick_label(-1250.0, scientific(2)), "-1.25e3");
        assert_eq!(format_tick_label(2.5, scientific(1)), "+2.5e0");
    }

    #[test]
    fn test_label_fits_glyph_budget() {
        // Magnitudes the search can actually select stay under the budget.
        let label = format_tick_label(-123456.0, decimal(9));
        assert!(label.len() < MAX_GLYPHS_PER_TICK);
        let label = format_tick_label(9.87654321e17, scientific(9));
        assert!(label.len() < MAX_GLYPHS_PER_TICK);
    }

    #[test]
    fn test_scratch_renders_tick_line() {
        let mut scratch = LabelScratch::new();
        scratch.render(decimal(1), 0.0, 0.5, 4);
        let labels: Vec<_> = scratch.labels(4).iter().map(String::as_str).collect();
        assert_eq!(labels, vec!["0", "+0.5", "+1.0", "+1.5"]);

        // Reuse with a shorter line keeps only the requested prefix visible.
        scratch.render(decimal(1), -1.0, 1.0, 3);
        let labels: Vec<_> = scratch.labels(3).iter().map(String::as_str).collect();
        assert_eq!(labels, vec!["-1.0", "0", "+1.0"]);
    }
}
