use std::collections::HashMap;
use crate::core::bounds::{bounds_of, Bounds};
use crate::core::{GridCoord, TileId};

/// One sparse layer of tiles. Any coordinate is a valid key; cells nobody painted read as empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TileLayer {
    cells: HashMap<GridCoord, TileId>,
}

impl TileLayer {
    pub fn new() -> TileLayer {
        TileLayer::default()
    }

    pub fn get(&self, pos: &GridCoord) -> Option<&TileId> {
        self.cells.get(pos)
    }

    /// Writes `tile` at `pos`, or clears the cell when `tile` is `None`.
    pub fn set(&mut self, pos: GridCoord, tile: Option<TileId>) {
        match tile {
            Some(tile) => {
                self.cells.insert(pos, tile);
            }
            None => {
                self.cells.remove(&pos);
            }
        }
    }

    /// Removes and returns the tile at `pos`, leaving the cell empty.
    pub fn take(&mut self, pos: &GridCoord) -> Option<TileId> {
        self.cells.remove(pos)
    }

    pub fn contains(&self, pos: &GridCoord) -> bool {
        self.cells.contains_key(pos)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GridCoord, &TileId)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        bounds_of(self.cells.keys().copied())
    }
}

impl FromIterator<(GridCoord, TileId)> for TileLayer {
    fn from_iter<I: IntoIterator<Item = (GridCoord, TileId)>>(iter: I) -> Self {
        TileLayer {
            cells: iter.into_iter().collect(),
        }
    }
}
