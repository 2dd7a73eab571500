use crate::{path::PathUnit, world::TileRef};
use derive_more::Display;
use strum::Display as StrumDisplay;

/// Identifies a unit. Tiles only hold ids; the units themselves belong to
/// whatever game state is driving the map.
#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "unit #{}", _0)]
pub struct UnitId(pub u32);

/// Where a unit is allowed to go
#[derive(Copy, Clone, Debug, StrumDisplay, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Can only move on land
    Land,
    /// Can only move on water
    Naval,
    /// Can move anywhere, and moves faster on water
    Amphibious,
}

/// A unit, as far as path search is concerned
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Unit {
    pub id: UnitId,
    pub kind: UnitKind,
    /// Movement points per turn. Must be positive.
    pub movement: f64,
}

impl Unit {
    pub fn new(id: UnitId, kind: UnitKind, movement: f64) -> Self {
        Self { id, kind, movement }
    }

    /// Can this unit stand on a tile at all?
    fn can_enter(&self, is_water: bool) -> bool {
        match self.kind {
            UnitKind::Land => !is_water,
            UnitKind::Naval => is_water,
            UnitKind::Amphibious => true,
        }
    }

    /// Fraction of a turn it takes this unit to move onto a tile with the
    /// given entry cost. A single step never takes more than one full turn.
    fn step_turns(&self, entry_cost: f64, is_water: bool) -> f64 {
        let cost = match self.kind {
            UnitKind::Amphibious if is_water => entry_cost / 2.0,
            _ => entry_cost,
        };
        (cost / self.movement).min(1.0)
    }
}

/// Add a step to a running turn count. A step that doesn't fit in what's left
/// of the current turn has to wait for the next one.
fn add_step(cost_so_far: f64, step: f64) -> f64 {
    let turn = cost_so_far.floor();
    if cost_so_far - turn + step > 1.0 {
        turn + 1.0 + step
    } else {
        cost_so_far + step
    }
}

impl<'a> PathUnit<TileRef<'a>> for Unit {
    fn aggregate_turns_to_enter_tile(
        &self,
        _source: &TileRef<'a>,
        dest: &TileRef<'a>,
        cost_so_far: f64,
    ) -> f64 {
        let is_water = dest.relief.is_water();
        if !self.can_enter(is_water) {
            return f64::INFINITY;
        }
        add_step(cost_so_far, self.step_turns(dest.entry_cost(), is_water))
    }
}
