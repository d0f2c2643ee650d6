/// Receives the level-progression events a committed move can trigger.
pub trait EffectSink {
    fn on_goal_reached(&mut self);
    fn on_start_location_reached(&mut self);
}

/// Drops every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffects;

impl EffectSink for NoEffects {
    fn on_goal_reached(&mut self) {}
    fn on_start_location_reached(&mut self) {}
}

/// Adapts a pair of closures into an [`EffectSink`].
pub struct FnEffects<G, S> {
    on_goal: G,
    on_start: S,
}

impl<G, S> FnEffects<G, S>
where
    G: FnMut(),
    S: FnMut(),
{
    pub fn new(on_goal: G, on_start: S) -> Self {
        FnEffects { on_goal, on_start }
    }
}

impl<G, S> EffectSink for FnEffects<G, S>
where
    G: FnMut(),
    S: FnMut(),
{
    fn on_goal_reached(&mut self) {
        (self.on_goal)()
    }

    fn on_start_location_reached(&mut self) {
        (self.on_start)()
    }
}

impl<T: EffectSink + ?Sized> EffectSink for &mut T {
    fn on_goal_reached(&mut self) {
        (**self).on_goal_reached()
    }

    fn on_start_location_reached(&mut self) {
        (**self).on_start_location_reached()
    }
}

/// Counts the events it receives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectCounter {
    pub goals_reached: usize,
    pub start_locations_reached: usize,
}

impl EffectSink for EffectCounter {
    fn on_goal_reached(&mut self) {
        self.goals_reached += 1;
    }

    fn on_start_location_reached(&mut self) {
        self.start_locations_reached += 1;
    }
}
