#[cfg(test)]
mod test {
    use std::cell::Cell;
    use Direction::*;
    use crate::config::ThemeConfig;
    use crate::console_interface::parse_level_with_effects;
    use crate::core::*;
    use crate::test::test_util::GameTestState;

    #[test]
    fn stepping_onto_goal_fires_once() {
        let mut game = GameTestState::new("#@.#");
        game.assert_move(Right);

        assert_eq!(game.effects(), EffectCounter { goals_reached: 1, start_locations_reached: 0 });
    }

    #[test]
    fn standing_still_on_goal_fires_again_only_when_reentered() {
        let mut game = GameTestState::new("#@. #");
        game.assert_moves(&[Right, Right, Left]);

        assert_eq!(game.effects().goals_reached, 2);
    }

    #[test]
    fn stepping_onto_start_location_fires_once() {
        let mut game = GameTestState::new("# S@#");
        game.assert_move(Left);

        assert_eq!(game.effects(), EffectCounter { goals_reached: 0, start_locations_reached: 1 });
    }

    #[test]
    fn pushing_box_onto_goal_fires_goal() {
        let mut game = GameTestState::new("#@$.#");
        game.assert_move(Right);

        game.assert_matches("# @$#");
        assert_eq!(game.effects().goals_reached, 1);
    }

    #[test]
    fn pushing_box_onto_start_location_fires_start() {
        let mut game = GameTestState::new("#@$S#");
        game.assert_move(Right);

        game.assert_matches("# @$#");
        assert_eq!(game.effects(), EffectCounter { goals_reached: 0, start_locations_reached: 1 });
    }

    #[test]
    fn shadow_push_onto_goal_fires_nothing_and_moves_nothing() {
        let mut game = GameTestState::new("#@$.#");
        let items_before = game.level.board.items().clone();

        let resolution = game.level.board.resolve(GridCoord::flat(1, 0), Right.displacement(), MoveMode::Probe);

        assert_eq!(resolution.displacement, Right.displacement());
        assert_eq!(resolution.boxes_moved, 1);
        assert_eq!(resolution.reached, Some(ItemCategory::Goal));
        assert_eq!(game.effects(), EffectCounter::default());
        assert_eq!(&items_before, game.level.board.items());
        game.assert_matches("#@$.#");
    }

    #[test]
    fn blocked_move_next_to_goal_fires_nothing() {
        let mut game = GameTestState::new("#.@$#");
        game.assert_blocked(Right);

        assert_eq!(game.effects(), EffectCounter::default());
    }

    #[test]
    fn closures_receive_events() {
        let goals = Cell::new(0);
        let starts = Cell::new(0);
        let effects = FnEffects::new(|| goals.set(goals.get() + 1), || starts.set(starts.get() + 1));
        let mut level = parse_level_with_effects("#S@.#", &ThemeConfig::default(), effects).unwrap();

        level.step(UserAction::Move(Right));
        level.step(UserAction::Move(Left));
        level.step(UserAction::Move(Left));

        assert_eq!(goals.get(), 1);
        assert_eq!(starts.get(), 1);
    }

    #[test]
    fn borrowed_sink_keeps_counting_after_level_is_dropped() {
        let mut counter = EffectCounter::default();
        {
            let mut level = parse_level_with_effects("#@..#", &ThemeConfig::default(), &mut counter).unwrap();
            level.step(UserAction::Move(Right));
            level.step(UserAction::Move(Right));
        }

        assert_eq!(counter.goals_reached, 2);
    }
}
