//! Pixel placement of computed ticks
//!
//! Bridges an [`AxisTicks`] result to the renderer: maps every tick value
//! into a pixel interval so tick marks, grid lines and glyph quads all
//! derive from the same positions.

use crate::axes::ticks::AxisTicks;

/// Tick positions projected into pixel space
///
/// This struct is a single source of truth for where ticks land on screen,
/// keeping marks and labels perfectly aligned.
#[derive(Debug, Clone)]
pub struct TickPixelLayout {
    /// Tick positions in pixel coordinates, one per tick value
    pub pixel_positions: Vec<f32>,
    /// Rendered tick labels, in the same order
    pub labels: Vec<String>,
    /// The data range that was mapped (extensions included)
    pub value_range: (f64, f64),
    /// The pixel interval that was mapped onto
    pub pixel_range: (f32, f32),
}

impl TickPixelLayout {
    /// Project a tick layout onto the pixel interval `pixel_min..pixel_max`.
    ///
    /// The result's data range (extensions included) maps linearly onto the
    /// interval; ticks from extension pages land outside it, which is what
    /// off-screen scroll buffering wants.
    pub fn compute(ticks: &AxisTicks, pixel_min: f32, pixel_max: f32) -> Self {
        let (dmin, dmax) = (ticks.dmin, ticks.dmax);
        let pixel_positions = ticks
            .values
            .iter()
            .map(|&value| project(value, dmin, dmax, pixel_min, pixel_max))
            .collect();

        Self {
            pixel_positions,
            labels: ticks.labels.clone(),
            value_range: (dmin, dmax),
            pixel_range: (pixel_min, pixel_max),
        }
    }

    /// Project a tick layout onto a vertical pixel interval with inverted
    /// orientation (pixel 0 at the top, growing downwards).
    pub fn compute_y_inverted(ticks: &AxisTicks, pixel_top: f32, pixel_bottom: f32) -> Self {
        let (dmin, dmax) = (ticks.dmin, ticks.dmax);
        let pixel_positions = ticks
            .values
            .iter()
            .map(|&value| {
                // Higher data values map to lower pixel rows.
                let p = project(value, dmin, dmax, pixel_top, pixel_bottom);
                pixel_bottom - (p - pixel_top)
            })
            .collect();

        Self {
            pixel_positions,
            labels: ticks.labels.clone(),
            value_range: (dmin, dmax),
            pixel_range: (pixel_top, pixel_bottom),
        }
    }

    /// Number of ticks
    pub fn len(&self) -> usize {
        self.pixel_positions.len()
    }

    /// Check if the layout is empty
    pub fn is_empty(&self) -> bool {
        self.pixel_positions.is_empty()
    }

    /// Convert an arbitrary data value to its pixel coordinate under the
    /// same mapping
    pub fn value_to_pixel(&self, value: f64) -> f32 {
        let (dmin, dmax) = self.value_range;
        let (pmin, pmax) = self.pixel_range;
        project(value, dmin, dmax, pmin, pmax)
    }

    /// Iterate over `(pixel_position, label)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f32, &str)> {
        self.pixel_positions
            .iter()
            .zip(self.labels.iter())
            .map(|(&pos, label)| (pos, label.as_str()))
    }
}

fn project(value: f64, dmin: f64, dmax: f64, pixel_min: f32, pixel_max: f32) -> f32 {
    let data_range = dmax - dmin;
    if data_range.abs() < f64::EPSILON {
        return pixel_min;
    }
    let normalized = (value - dmin) / data_range;
    pixel_min + normalized as f32 * (pixel_max - pixel_min)
}
