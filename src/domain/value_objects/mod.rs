//! Value objects - Immutable objects defined by their attributes

mod ids;
mod tile;

pub use ids::{Direction, MapId, Point};
pub use tile::TileKind;
