use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg};

/// A discrete cell on the board. Text levels use `x` for the column, `y` for the row
/// (growing downward) and leave `z` at zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCoord {
    pub const ZERO: GridCoord = GridCoord { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> GridCoord {
        GridCoord { x, y, z }
    }

    pub const fn flat(x: i32, y: i32) -> GridCoord {
        GridCoord { x, y, z: 0 }
    }

    /// Floors a world-space position into the cell containing it.
    pub fn floor_from_world(x: f32, y: f32, z: f32) -> GridCoord {
        GridCoord {
            x: x.floor() as i32,
            y: y.floor() as i32,
            z: z.floor() as i32,
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == GridCoord::ZERO
    }

    /// Component-wise sum, `None` if any component leaves the `i32` range.
    pub fn checked_add(self, rhs: GridCoord) -> Option<GridCoord> {
        Some(GridCoord {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
            z: self.z.checked_add(rhs.z)?,
        })
    }
}

impl Add for GridCoord {
    type Output = GridCoord;

    fn add(self, rhs: GridCoord) -> GridCoord {
        GridCoord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Neg for GridCoord {
    type Output = GridCoord;

    fn neg(self) -> GridCoord {
        GridCoord {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Identity of a tile asset placed on a layer. Two cells hold "the same tile" when their
/// identities compare equal; what the tile looks like is somebody else's problem.
#[derive(Clone, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileId(String);

impl TileId {
    pub fn new(name: impl Into<String>) -> TileId {
        TileId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TileId {
    fn from(name: &str) -> TileId {
        TileId::new(name)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TerrainCategory {
    Wall,
    Open,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ItemCategory {
    Box,
    Door,
    StartLocation,
    Goal,
    None,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MoveMode {
    /// Apply the move: relocate boxes and fire effects.
    Commit,
    /// Shadow move. Reports the displacement a commit would realize and touches nothing.
    Probe,
}

/// What a single move attempt did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Resolution {
    pub displacement: GridCoord,
    pub boxes_moved: usize,
    /// Item category of the cell the push chain ended on; `None` when blocked.
    pub reached: Option<ItemCategory>,
}

impl Resolution {
    pub fn blocked() -> Resolution {
        Resolution {
            displacement: GridCoord::ZERO,
            boxes_moved: 0,
            reached: None,
        }
    }

    pub fn is_blocked(&self) -> bool {
        self.displacement.is_zero()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUpdate {
    Moved(GameChangeType),
    Blocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}
