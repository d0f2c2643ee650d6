use crate::core::{Direction, GridCoord, UserAction};

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Unit step on the board plane, with `Up` toward lower row indices.
    pub fn displacement(self) -> GridCoord {
        match self {
            Direction::Up => GridCoord::flat(0, -1),
            Direction::Down => GridCoord::flat(0, 1),
            Direction::Left => GridCoord::flat(-1, 0),
            Direction::Right => GridCoord::flat(1, 0),
        }
    }
}

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        Direction::all().into_iter().map(UserAction::Move).collect()
    }

    pub fn displacement(self) -> GridCoord {
        match self {
            UserAction::Move(d) => d.displacement(),
        }
    }
}
