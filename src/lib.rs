//! # Tickwise - Extended Wilkinson Axis Ticks
//!
//! A small, deterministic tick-label generator for 2D plotting libraries.
//! Given a numeric data range and the pixel geometry of an axis, tickwise
//! selects "nice" tick values, the most legible number format, and the
//! rendered label strings, by maximizing the weighted Extended Wilkinson
//! score (simplicity, coverage, density, legibility).
//!
//! The crate is purely computational: no rendering, no I/O, no global
//! state. Renderers call [`ticks`] whenever an axis's data range or
//! viewport changes, then place tick marks and glyph quads from the
//! returned values and labels.
//!
//! ## Quick Start
//!
//! ```
//! use tickwise::prelude::*;
//!
//! // A horizontal axis, 6000 px wide, 10 px per character.
//! let context = AxisContext::new(AxisCoord::X, 6000.0, 10.0);
//! let layout = ticks(0.0, 1.0, &context)?;
//!
//! assert!(layout.len() >= 2);
//! assert_eq!(layout.labels[0], "0");
//!
//! // Project the ticks onto a pixel interval for rendering.
//! let pixels = TickPixelLayout::compute(&layout, 0.0, 6000.0);
//! for (position, label) in pixels.iter() {
//!     let _ = (position, label);
//! }
//! # Ok::<(), tickwise::TicksError>(())
//! ```
//!
//! ## Off-screen scroll buffering
//!
//! Interactive views ask for extra tick "pages" on each side of the data
//! range, so panning can reveal pre-computed ticks before a relayout:
//!
//! ```
//! use tickwise::prelude::*;
//!
//! let context = AxisContext::new(AxisCoord::Y, 800.0, 14.0).with_extensions(1);
//! let layout = ticks(-2.5, 2.5, &context)?;
//! // Three pages of ticks: one visible, one buffered on each side.
//! assert_eq!(layout.value_count % 3, 0);
//! # Ok::<(), tickwise::TicksError>(())
//! ```

pub mod axes;
pub mod core;

pub use crate::axes::{AxisTicks, TickPixelLayout, format_tick_label, ticks};
pub use crate::core::{AxisContext, AxisCoord, FormatKind, Result, TickFormat, TicksError};

/// Convenience re-exports for common usage
pub mod prelude {
    pub use crate::axes::{
        AxisTicks, TickCandidate, TickPixelLayout, format_tick_label, ticks, wilkinson_search,
    };
    pub use crate::core::{AxisContext, AxisCoord, FormatKind, Result, TickFormat, TicksError};
}
