//! The externally visible face of a cell.

/// What neighbours may read about a cell during the proposal phase.
///
/// Rules keep their hidden fields private; the engine snapshots one
/// `CellSurface` per cell before each tick and hands proposals a view of
/// that snapshot. Fields a rule does not use stay zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellSurface {
    /// Public state, the value `view()` reports.
    pub state: u8,
    /// Harvestable resource on the cell (sugarscape).
    pub resource: f32,
    /// Home-trail pheromone (foraging).
    pub home_trail: f32,
    /// Food-trail pheromone (foraging).
    pub food_trail: f32,
}

impl CellSurface {
    /// A surface carrying only a state.
    pub const fn of(state: u8) -> Self {
        Self {
            state,
            resource: 0.0,
            home_trail: 0.0,
            food_trail: 0.0,
        }
    }
}
