//! Figureboard Core Library
//!
//! Platform-agnostic figure model and the in-memory figure registry.

pub mod registry;
pub mod shapes;

pub use registry::FigureRegistry;
pub use shapes::{Figure, FigureId, FigureKind, LineStyle, LineThickness, LineType, Point};
