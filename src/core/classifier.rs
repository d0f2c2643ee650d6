use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::core::{ItemCategory, TerrainCategory, TileId};

/// The six identity lists a level theme assigns to semantic categories.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryTables {
    pub wall: Vec<TileId>,
    pub floor: Vec<TileId>,
    pub goal: Vec<TileId>,
    #[serde(rename = "box")]
    pub boxes: Vec<TileId>,
    pub door: Vec<TileId>,
    pub start_location: Vec<TileId>,
}

/// Maps raw tile identities to categories.
///
/// Lookups are precomputed per layer. When a theme lists one identity under several
/// categories the first one in precedence order wins:
/// terrain is `Wall` then `Open`, items are `Goal`, `Box`, `StartLocation`, `Door`.
#[derive(Clone, Debug, Default)]
pub struct TileClassifier {
    terrain: HashMap<TileId, TerrainCategory>,
    items: HashMap<TileId, ItemCategory>,
}

impl TileClassifier {
    pub fn new(tables: &CategoryTables) -> TileClassifier {
        let mut terrain = HashMap::new();
        insert_in_order(&mut terrain, &[
            (TerrainCategory::Wall, &tables.wall),
            (TerrainCategory::Open, &tables.floor),
        ]);

        let mut items = HashMap::new();
        insert_in_order(&mut items, &[
            (ItemCategory::Goal, &tables.goal),
            (ItemCategory::Box, &tables.boxes),
            (ItemCategory::StartLocation, &tables.start_location),
            (ItemCategory::Door, &tables.door),
        ]);

        TileClassifier { terrain, items }
    }

    /// Empty and unrecognized identities are walkable.
    pub fn terrain_category(&self, tile: Option<&TileId>) -> TerrainCategory {
        let Some(tile) = tile else {
            return TerrainCategory::Open;
        };
        match self.terrain.get(tile) {
            Some(&category) => category,
            None => {
                debug!(tile = %tile, "unrecognized terrain tile, treating as open");
                TerrainCategory::Open
            }
        }
    }

    pub fn item_category(&self, tile: Option<&TileId>) -> ItemCategory {
        let Some(tile) = tile else {
            return ItemCategory::None;
        };
        match self.items.get(tile) {
            Some(&category) => category,
            None => {
                debug!(tile = %tile, "unrecognized item tile, no effect");
                ItemCategory::None
            }
        }
    }
}

fn insert_in_order<C>(map: &mut HashMap<TileId, C>, ordered: &[(C, &Vec<TileId>)])
where
    C: Copy + std::fmt::Debug + PartialEq,
{
    for &(category, tiles) in ordered {
        for tile in tiles {
            match map.get(tile) {
                Some(&existing) if existing != category => {
                    warn!(tile = %tile, kept = ?existing, ignored = ?category,
                        "tile listed under several categories");
                }
                Some(_) => {}
                None => {
                    map.insert(tile.clone(), category);
                }
            }
        }
    }
}
