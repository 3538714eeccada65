//! Animation core: the global timeline and per-part interpolation.

pub mod interpolation;
pub mod timeline;

pub use interpolation::{assembly_positions, part_position, PartProgress};
pub use timeline::{TimelineController, DEFAULT_TRAVERSAL};
