pub use dissimilar::diff as __diff;
use crate::config::{GlyphTable, ThemeConfig};
use crate::console_interface::{parse_level_with_effects, render_level_to_string};
use crate::core::{Direction, EffectCounter, GameUpdate, GridCoord, Level, MoveMode, UserAction};

#[macro_export]
macro_rules! assert_eq_text {
    ($left:expr, $right:expr) => {
        assert_eq_text!($left, $right,)
    };
    ($left:expr, $right:expr, $($tt:tt)*) => {{
        let left = $left;
        let right = $right;
        if left != right {
            if left.trim() == right.trim() {
                std::eprintln!("Left:\n{:?}\n\nRight:\n{:?}\n\nWhitespace difference\n", left, right);
            } else {
                let diff = $crate::test::test_util::__diff(left, right);
                std::eprintln!("Left:\n{}\n\nRight:\n{}\n\nDiff:\n{}\n", left, right, $crate::test::test_util::format_diff(diff));
            }
            std::eprintln!($($tt)*);
            panic!("text differs");
        }
    }};
}

pub fn format_diff(chunks: Vec<dissimilar::Chunk>) -> String {
    let mut buf = String::new();
    for chunk in chunks {
        let formatted = match chunk {
            dissimilar::Chunk::Equal(text) => text.into(),
            dissimilar::Chunk::Delete(text) => format!("\x1b[41m{}\x1b[0m", text),
            dissimilar::Chunk::Insert(text) => format!("\x1b[42m{}\x1b[0m", text),
        };
        buf.push_str(&formatted);
    }
    buf
}

pub struct GameTestState {
    pub level: Level<EffectCounter>,
    pub glyphs: GlyphTable,
}

impl GameTestState {
    pub fn new(level: &str) -> Self {
        Self::with_theme(level, &ThemeConfig::default())
    }

    pub fn with_theme(level: &str, theme: &ThemeConfig) -> Self {
        let level = parse_level_with_effects(level, theme, EffectCounter::default())
            .expect("test level should parse");
        let glyphs = theme.glyph_table().expect("test theme should be valid");
        Self { level, glyphs }
    }

    pub fn game_to_string(&self) -> String {
        render_level_to_string(&self.level, &self.glyphs).trim_matches('\n').into()
    }

    pub fn effects(&self) -> EffectCounter {
        *self.level.board.effects()
    }

    pub fn assert_move(&mut self, direction: Direction) -> GameUpdate {
        let update = self.try_move(direction);
        let GameUpdate::Moved(_) = update else {
            panic!("Expected move {:?} to succeed, got {:?}, in map\n{}", direction, update, self.game_to_string());
        };
        update
    }

    pub fn assert_moves(&mut self, directions: &[Direction]) {
        for &dir in directions {
            self.assert_move(dir);
        }
    }

    pub fn assert_blocked(&mut self, direction: Direction) {
        let update = self.try_move(direction);
        assert_eq!(update, GameUpdate::Blocked, "Expected move {:?} to be blocked, in map\n{}", direction, self.game_to_string());
    }

    pub fn try_move(&mut self, direction: Direction) -> GameUpdate {
        self.level.step(UserAction::Move(direction))
    }

    /// Resolves a move for an arbitrary actor cell, bypassing the player.
    pub fn resolve_at(&mut self, actor: GridCoord, direction: Direction, mode: MoveMode) -> GridCoord {
        self.level.board.resolve_move(actor, direction.displacement(), mode)
    }

    pub fn assert_matches(&self, expected: &str) {
        let actual = self.game_to_string();
        assert_eq_text!(expected.trim_matches('\n'), actual.as_str().trim_matches('\n'));
    }
}
