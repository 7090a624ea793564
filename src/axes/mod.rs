//! Axis tick selection, scoring and labeling

pub mod format;
pub mod layout;
pub mod overlap;
pub mod score;
pub mod search;
pub mod ticks;

pub use format::{LabelScratch, format_tick_label, write_tick_label};
pub use layout::TickPixelLayout;
pub use search::{TickCandidate, optimize_format, wilkinson_search};
pub use ticks::{AxisTicks, ticks};
