use crate::core::{Direction, EffectSink, GameChangeType};

pub struct GameRenderState {
    pub board_text: String,
    pub won: bool,
    pub start_visits: usize,
    pub open_directions: Vec<Direction>,
    pub last_change: Option<GameChangeType>,
}

/// Level-progression state the terminal player keeps, fed by committed moves.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub won: bool,
    pub start_visits: usize,
}

impl EffectSink for Progress {
    fn on_goal_reached(&mut self) {
        self.won = true;
    }

    fn on_start_location_reached(&mut self) {
        self.start_visits += 1;
    }
}
