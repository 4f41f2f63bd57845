//! Geographic helpers for the pandemic map.
//!
//! - `features`: GeoJSON boundary loading into `geo` multipolygons
//! - `projection`: the Winkel tripel projection used by the world map
//! - `path`: SVG path data for projected rings and lines
//! - `graticule`: meridian/parallel lines and the sphere outline

pub mod features;
pub mod graticule;
pub mod path;
pub mod projection;

pub use features::{load_boundaries, BoundaryFeature};
pub use projection::{Projection, WinkelTripel};
