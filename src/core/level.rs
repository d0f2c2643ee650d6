use crate::core::bounds::{bounds_of, Bounds};
use crate::core::{
    Board, Direction, EffectSink, GameChangeType, GameUpdate, GridCoord, MoveMode, NoEffects,
    UserAction,
};

/// A board plus the player walking on it. The player never lives in the items layer.
pub struct Level<E: EffectSink = NoEffects> {
    pub board: Board<E>,
    player: GridCoord,
}

impl<E: EffectSink> Level<E> {
    pub fn new(board: Board<E>, player: GridCoord) -> Level<E> {
        Level { board, player }
    }

    pub fn player(&self) -> GridCoord {
        self.player
    }

    pub fn with_effects<F: EffectSink>(self, effects: F) -> Level<F> {
        Level {
            board: self.board.with_effects(effects),
            player: self.player,
        }
    }

    pub fn step(&mut self, action: UserAction) -> GameUpdate {
        let resolution = self.board.resolve(self.player, action.displacement(), MoveMode::Commit);
        if resolution.is_blocked() {
            return GameUpdate::Blocked;
        }

        self.player = self.player + resolution.displacement;
        GameUpdate::Moved(if resolution.boxes_moved > 0 {
            GameChangeType::PlayerAndBoxMove
        } else {
            GameChangeType::PlayerMove
        })
    }

    pub fn preview(&self, direction: Direction) -> GridCoord {
        self.board.probe(self.player, direction.displacement())
    }

    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::all()
            .into_iter()
            .filter(|&d| !self.preview(d).is_zero())
            .collect()
    }

    /// Everything painted on either layer, plus the player.
    pub fn bounds(&self) -> Bounds {
        let painted = bounds_of(
            self.board.terrain().iter().chain(self.board.items().iter()).map(|(&pos, _)| pos),
        );
        match painted {
            Some(b) => b.including(self.player),
            None => Bounds::around(self.player),
        }
    }
}
