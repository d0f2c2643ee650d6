use crate::core::GridCoord;

/// An inclusive bounding box over board cells
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: GridCoord,
    pub max: GridCoord,
}

impl Bounds {
    pub fn around(pos: GridCoord) -> Bounds {
        Bounds { min: pos, max: pos }
    }

    pub fn including(self, pos: GridCoord) -> Bounds {
        Bounds {
            min: GridCoord::new(self.min.x.min(pos.x), self.min.y.min(pos.y), self.min.z.min(pos.z)),
            max: GridCoord::new(self.max.x.max(pos.x), self.max.y.max(pos.y), self.max.z.max(pos.z)),
        }
    }

    pub fn contains(&self, pos: &GridCoord) -> bool {
        pos.x >= self.min.x && pos.x <= self.max.x
            && pos.y >= self.min.y && pos.y <= self.max.y
            && pos.z >= self.min.z && pos.z <= self.max.z
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }
}

/// Folds positions into the smallest bounds covering all of them, if any.
pub fn bounds_of(positions: impl IntoIterator<Item = GridCoord>) -> Option<Bounds> {
    positions.into_iter().fold(None, |acc, pos| match acc {
        None => Some(Bounds::around(pos)),
        Some(b) => Some(b.including(pos)),
    })
}
