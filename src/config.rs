//! Level themes: which tile identities mean what, and how they are drawn as text.
//!
//! ```
//! use tilemap_rules::config::ThemeConfig;
//!
//! let theme = ThemeConfig::from_json_str(r##"{
//!     "categories": { "wall": ["brick"], "floor": ["dirt"], "box": ["crate"] },
//!     "glyphs": {
//!         "player": "@",
//!         "floor_tile": "dirt",
//!         "terrain": [{ "glyph": "#", "tile": "brick" }, { "glyph": " ", "tile": "dirt" }],
//!         "items": [{ "glyph": "$", "tile": "crate" }]
//!     }
//! }"##).unwrap();
//!
//! assert_eq!(theme.categories.boxes.len(), 1);
//! ```

use std::path::Path;
use bimap::BiMap;
use serde::{Deserialize, Serialize};
use crate::core::{CategoryTables, TileClassifier, TileId};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub categories: CategoryTables,
    pub glyphs: GlyphConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GlyphConfig {
    pub player: char,
    /// Terrain placed under items and under the player in text levels.
    pub floor_tile: TileId,
    #[serde(default)]
    pub terrain: Vec<GlyphBinding>,
    #[serde(default)]
    pub items: Vec<GlyphBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GlyphBinding {
    pub glyph: char,
    pub tile: TileId,
}

/// Glyph <-> tile lookups for both layers.
#[derive(Debug, Clone)]
pub struct GlyphTable {
    pub player: char,
    pub floor_tile: TileId,
    pub terrain: BiMap<char, TileId>,
    pub items: BiMap<char, TileId>,
}

impl ThemeConfig {
    /// Loads a theme from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let theme: ThemeConfig = serde_json::from_str(s)?;
        theme.glyph_table()?;
        Ok(theme)
    }

    pub fn classifier(&self) -> TileClassifier {
        TileClassifier::new(&self.categories)
    }

    /// Builds the glyph lookups, rejecting glyphs or tiles bound more than once.
    pub fn glyph_table(&self) -> Result<GlyphTable, ConfigError> {
        let terrain = bind_all(&self.glyphs.terrain, "terrain")?;
        let items = bind_all(&self.glyphs.items, "items")?;

        for glyph in terrain.left_values() {
            if items.contains_left(glyph) {
                return Err(ConfigError::Invalid(format!(
                    "glyph {:?} is bound on both terrain and items layers", glyph
                )));
            }
        }
        let player = self.glyphs.player;
        if terrain.contains_left(&player) || items.contains_left(&player) {
            return Err(ConfigError::Invalid(format!(
                "player glyph {:?} is also bound to a tile", player
            )));
        }
        if !terrain.contains_right(&self.glyphs.floor_tile) {
            return Err(ConfigError::Invalid(format!(
                "floor tile {} has no terrain glyph", self.glyphs.floor_tile
            )));
        }

        Ok(GlyphTable {
            player,
            floor_tile: self.glyphs.floor_tile.clone(),
            terrain,
            items,
        })
    }
}

fn bind_all(bindings: &[GlyphBinding], layer: &str) -> Result<BiMap<char, TileId>, ConfigError> {
    let mut map = BiMap::new();
    for binding in bindings {
        if let Err((glyph, tile)) = map.insert_no_overwrite(binding.glyph, binding.tile.clone()) {
            return Err(ConfigError::Invalid(format!(
                "{} glyph {:?} / tile {} bound more than once", layer, glyph, tile
            )));
        }
    }
    Ok(map)
}

impl Default for ThemeConfig {
    /// The classic text theme: `#` wall, space floor, `.` goal, `$` box, `D` door,
    /// `S` start location, `@` player.
    fn default() -> Self {
        let tile = |name: &str| TileId::from(name);
        let bind = |glyph: char, name: &str| GlyphBinding { glyph, tile: tile(name) };
        ThemeConfig {
            categories: CategoryTables {
                wall: vec![tile("wall")],
                floor: vec![tile("floor")],
                goal: vec![tile("goal")],
                boxes: vec![tile("box")],
                door: vec![tile("door")],
                start_location: vec![tile("start")],
            },
            glyphs: GlyphConfig {
                player: '@',
                floor_tile: tile("floor"),
                terrain: vec![bind('#', "wall"), bind(' ', "floor")],
                items: vec![
                    bind('.', "goal"),
                    bind('$', "box"),
                    bind('D', "door"),
                    bind('S', "start"),
                ],
            },
        }
    }
}
