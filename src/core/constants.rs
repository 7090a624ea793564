//! Centralized constants for tick layout
//!
//! This module provides named constants for the values shared across the
//! search, scoring and labeling code, eliminating magic numbers and keeping
//! the public contract in one place.

/// Bounds of the Extended Wilkinson search space
pub mod search {
    /// Maximum skip factor among nice numbers (exclusive)
    pub const J_MAX: u32 = 10;

    /// Maximum tick count per candidate (exclusive)
    pub const K_MAX: u32 = 50;

    /// Maximum base-10 exponent of the step size (exclusive)
    pub const Z_MAX: i32 = 18;

    /// Maximum digits after the decimal point in a tick label
    pub const PRECISION_MAX: u32 = 9;

    /// Finite infinity sentinel for scores.
    ///
    /// Rejected candidates score `-INF` rather than `f64::NEG_INFINITY` so
    /// that the weighted total stays totally ordered and the search always
    /// adopts a winner, even when every format of the first candidate is
    /// rejected.
    pub const INF: f64 = 1e9;
}

/// Label rendering and measurement
pub mod labels {
    /// Maximum glyphs per tick label, sign included (exclusive bound)
    pub const MAX_GLYPHS_PER_TICK: usize = 24;

    /// Maximum candidate labels rendered during one legibility evaluation
    pub const MAX_LABELS: usize = 256;

    /// Pixel distance between neighboring labels below which overlap
    /// starts to penalize legibility
    pub const DIST_MIN: f64 = 50.0;

    /// Decimal notation is preferred for magnitudes inside
    /// `(DECIMAL_MIN, DECIMAL_MAX)`; outside, scientific reads better
    pub const DECIMAL_MIN: f64 = 1e-4;
    pub const DECIMAL_MAX: f64 = 1e6;

    /// Average character count of a horizontal-axis label.
    ///
    /// Heuristic used to derive the requested tick count from the viewport
    /// width; the search refines the actual count.
    pub const AVG_GLYPHS_PER_LABEL: f64 = 6.0;

    /// Fraction of the viewport that tick labels should roughly occupy
    /// when deriving the requested tick count
    pub const VIEWPORT_OCCUPANCY: f64 = 0.1;
}

/// Scoring weights and the nice-number table
pub mod score {
    /// Weights of (simplicity, coverage, density, legibility)
    pub const WEIGHTS: [f64; 4] = [0.2, 0.25, 0.5, 0.05];

    /// Nice numbers in preference order
    pub const NICE_NUMBERS: [f64; 6] = [1.0, 5.0, 2.0, 2.5, 4.0, 3.0];

    /// Tolerance when testing whether a step divides a tick endpoint
    pub const STEP_EPS: f64 = 1e-10;
}
