//! Core types, constants and errors shared by the tick layout code

pub mod constants;
pub mod error;
pub mod types;

pub use error::{Result, TicksError};
pub use types::{AxisContext, AxisCoord, FormatKind, TickFormat};
