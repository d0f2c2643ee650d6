mod model_helpers;
mod models;
mod bounds;
mod tile_layer;
mod classifier;
mod effects;
mod resolver;
mod level;

pub use models::{
    Direction, GameChangeType, GameUpdate, GridCoord, ItemCategory, MoveMode, Resolution,
    TerrainCategory, TileId, UserAction,
};
pub use bounds::{bounds_of, Bounds};
pub use tile_layer::TileLayer;
pub use classifier::{CategoryTables, TileClassifier};
pub use effects::{EffectCounter, EffectSink, FnEffects, NoEffects};
pub use resolver::Board;
pub use level::Level;
