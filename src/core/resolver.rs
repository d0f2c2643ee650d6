use tracing::{debug, trace};
use crate::core::{
    EffectSink, GridCoord, ItemCategory, MoveMode, NoEffects, Resolution, TerrainCategory,
    TileClassifier, TileLayer,
};

/// Terrain and item layers plus the rules for moving across them.
///
/// The terrain layer is only ever read. The items layer is mutated by committed pushes,
/// one box per cell. Goal and start-location events go to the injected [`EffectSink`].
pub struct Board<E: EffectSink = NoEffects> {
    classifier: TileClassifier,
    terrain: TileLayer,
    items: TileLayer,
    effects: E,
}

/// The boxes a move would shove, nearest first, and what lies past the last one.
struct PushPlan {
    chain: Vec<GridCoord>,
    end: ItemCategory,
}

impl<E: EffectSink> Board<E> {
    pub fn new(classifier: TileClassifier, terrain: TileLayer, items: TileLayer, effects: E) -> Board<E> {
        Board {
            classifier,
            terrain,
            items,
            effects,
        }
    }

    pub fn terrain(&self) -> &TileLayer {
        &self.terrain
    }

    pub fn items(&self) -> &TileLayer {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut TileLayer {
        &mut self.items
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    /// Swaps the effect sink, keeping the layers as they are.
    pub fn with_effects<F: EffectSink>(self, effects: F) -> Board<F> {
        Board {
            classifier: self.classifier,
            terrain: self.terrain,
            items: self.items,
            effects,
        }
    }

    pub fn classify_terrain(&self, pos: &GridCoord) -> TerrainCategory {
        self.classifier.terrain_category(self.terrain.get(pos))
    }

    pub fn classify_item(&self, pos: &GridCoord) -> ItemCategory {
        self.classifier.item_category(self.items.get(pos))
    }

    /// Moves whatever stands at `actor` by `displacement` and returns how far it actually went.
    ///
    /// `displacement` must be a single step along one axis. The result is either the full
    /// step or zero: a push chain advances as a whole or not at all.
    pub fn resolve_move(&mut self, actor: GridCoord, displacement: GridCoord, mode: MoveMode) -> GridCoord {
        self.resolve(actor, displacement, mode).displacement
    }

    /// Same as [`Board::resolve_move`], reporting how many boxes were (or in probe mode,
    /// would be) pushed and what the chain ended on.
    pub fn resolve(&mut self, actor: GridCoord, displacement: GridCoord, mode: MoveMode) -> Resolution {
        let Some(plan) = self.plan(actor, displacement) else {
            return Resolution::blocked();
        };

        if mode == MoveMode::Commit {
            self.trigger(plan.end);
            // far end first, so every destination is already vacated;
            // each destination was reached by the walk, so the sum is in range
            for &origin in plan.chain.iter().rev() {
                let tile = self.items.take(&origin);
                self.items.set(origin + displacement, tile);
            }
        }

        trace!(%actor, %displacement, ?mode, pushed = plan.chain.len(), end = ?plan.end, "move resolved");
        Resolution {
            displacement,
            boxes_moved: plan.chain.len(),
            reached: Some(plan.end),
        }
    }

    /// Shadow move: the displacement a commit would realize, with no mutation and no events.
    pub fn probe(&self, actor: GridCoord, displacement: GridCoord) -> GridCoord {
        match self.plan(actor, displacement) {
            Some(_) => displacement,
            None => GridCoord::ZERO,
        }
    }

    fn plan(&self, actor: GridCoord, displacement: GridCoord) -> Option<PushPlan> {
        if displacement.is_zero() {
            debug!(%actor, "zero displacement requested");
            return None;
        }

        let mut chain = Vec::new();
        let mut cursor = actor;
        loop {
            let Some(target) = cursor.checked_add(displacement) else {
                debug!(%actor, %cursor, pushed = chain.len(), "move blocked at the edge of the grid");
                return None;
            };
            if self.classify_terrain(&target) == TerrainCategory::Wall {
                debug!(%actor, %target, pushed = chain.len(), "move blocked by wall");
                return None;
            }
            match self.classify_item(&target) {
                ItemCategory::Box => {
                    chain.push(target);
                    cursor = target;
                }
                end => return Some(PushPlan { chain, end }),
            }
        }
    }

    fn trigger(&mut self, reached: ItemCategory) {
        match reached {
            ItemCategory::Goal => self.effects.on_goal_reached(),
            ItemCategory::StartLocation => self.effects.on_start_location_reached(),
            // TODO: toggle the door between open and closed tiles once themes ship a closed variant
            ItemCategory::Door => trace!("door reached, no toggle"),
            ItemCategory::Box | ItemCategory::None => {}
        }
    }
}
