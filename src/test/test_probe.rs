#[cfg(test)]
mod test {
    use Direction::*;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    fn probe_then_commit(level: &str, direction: Direction) -> (GridCoord, GridCoord) {
        let mut game = GameTestState::new(level);
        let player = game.level.player();
        let items_before = game.level.board.items().clone();

        let probed = game.resolve_at(player, direction, MoveMode::Probe);
        assert_eq!(&items_before, game.level.board.items(), "probe mutated the items layer");
        assert_eq!(game.effects(), EffectCounter::default(), "probe fired an effect");

        let committed = game.resolve_at(player, direction, MoveMode::Commit);
        (probed, committed)
    }

    #[test]
    fn probe_agrees_with_commit() {
        let cases = [
            ("#@ #", Right),
            ("#@ #", Left),
            ("#@$ #", Right),
            ("#@$#", Right),
            ("#@$$ #", Right),
            ("#@$$#", Right),
            ("#@. #", Right),
            ("#@$.#", Right),
            ("#@S#", Right),
            ("#@D#", Right),
        ];
        for (level, direction) in cases {
            let (probed, committed) = probe_then_commit(level, direction);
            assert_eq!(probed, committed, "probe and commit disagree for {:?} in {}", direction, level);
        }
    }

    #[test]
    fn probe_push_leaves_boxes_in_place() {
        let level = r#"
#@$$ #
"#;
        let mut game = GameTestState::new(level);
        let moved = game.resolve_at(game.level.player(), Right, MoveMode::Probe);

        assert_eq!(moved, Right.displacement());
        game.assert_matches(level);
    }

    #[test]
    fn probe_onto_goal_fires_nothing() {
        let mut game = GameTestState::new("#@.#");
        let moved = game.resolve_at(game.level.player(), Right, MoveMode::Probe);

        assert_eq!(moved, Right.displacement());
        assert_eq!(game.effects().goals_reached, 0);
    }

    #[test]
    fn probe_onto_start_fires_nothing() {
        let mut game = GameTestState::new("#S@#");
        game.resolve_at(game.level.player(), Left, MoveMode::Probe);

        assert_eq!(game.effects().start_locations_reached, 0);
    }

    #[test]
    fn preview_does_not_move_player() {
        let game = GameTestState::new(r#"
###
#@$
# #
"#);

        assert_eq!(game.level.preview(Up), GridCoord::ZERO);
        assert_eq!(game.level.preview(Left), GridCoord::ZERO);
        assert_eq!(game.level.preview(Right), Right.displacement());
        assert_eq!(game.level.preview(Down), Down.displacement());
        assert_eq!(game.level.open_directions(), vec![Down, Right]);
        assert_eq!(game.level.player(), GridCoord::flat(1, 1));
    }
}
