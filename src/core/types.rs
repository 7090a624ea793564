//! Input types describing the axis being laid out

use crate::core::error::{Result, TicksError};

/// Which axis a tick layout is computed for
///
/// The coordinate determines how much room a rendered label occupies along
/// the axis: on `X` a label spans its character count times the glyph
/// width, on `Y` the labels stack one glyph height apart regardless of
/// their length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisCoord {
    /// Horizontal axis (labels measured by character width)
    #[default]
    X,
    /// Vertical axis (labels measured by line height)
    Y,
}

impl AxisCoord {
    /// Check if this is the horizontal axis
    pub fn is_horizontal(&self) -> bool {
        matches!(self, AxisCoord::X)
    }
}

/// Rendering context for one axis
///
/// Describes the pixel geometry the tick search optimizes against, plus the
/// number of off-screen tick pages to generate for scroll buffering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisContext {
    /// Which axis is being laid out
    pub coord: AxisCoord,
    /// Pixel extent of the axis line
    pub size_viewport: f32,
    /// Pixel size of a single character (width on `X`, height on `Y`)
    pub size_glyph: f32,
    /// Number of additional tick pages on each side of the data range
    pub extensions: u32,
}

impl AxisContext {
    /// Create a context with no extensions
    pub fn new(coord: AxisCoord, size_viewport: f32, size_glyph: f32) -> Self {
        Self {
            coord,
            size_viewport,
            size_glyph,
            extensions: 0,
        }
    }

    /// Set the number of off-screen tick pages on each side
    pub fn with_extensions(mut self, extensions: u32) -> Self {
        self.extensions = extensions;
        self
    }

    /// Validate the context preconditions
    pub fn validate(&self) -> Result<()> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.size_viewport) || !positive(self.size_glyph) {
            return Err(TicksError::InvalidContext {
                size_viewport: self.size_viewport,
                size_glyph: self.size_glyph,
            });
        }
        Ok(())
    }
}

/// Notation used when rendering a tick value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatKind {
    /// Plain decimal notation, e.g. `+12.5`
    #[default]
    Decimal,
    /// Scientific notation, e.g. `+1.25e1`
    Scientific,
}

/// How a tick value is rendered into a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickFormat {
    /// Decimal or scientific notation
    pub kind: FormatKind,
    /// Digits after the decimal point, in `1..=9`
    pub precision: u32,
}

impl TickFormat {
    pub fn new(kind: FormatKind, precision: u32) -> Self {
        debug_assert!(precision >= 1);
        Self { kind, precision }
    }
}

impl Default for TickFormat {
    fn default() -> Self {
        Self {
            kind: FormatKind::Decimal,
            precision: 1,
        }
    }
}
