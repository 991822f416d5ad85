//! Ant foraging guided by home and food pheromone trails.

use tessel_core::{ParamError, Params};

use crate::error::RuleError;
use crate::neighborhood::Neighborhood;
use crate::proposal::{Migration, Proposal};
use crate::rule::{CellRng, Rule};
use crate::surface::CellSurface;

/// Bare soil.
pub const SOIL: u8 = 0;
/// The colony's nest.
pub const NEST: u8 = 1;
/// A food source.
pub const FOOD: u8 = 2;
/// An ant looking for food.
pub const SEARCHING: u8 = 3;
/// An ant carrying food home.
pub const CARRYING: u8 = 4;

/// What lies under a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ground {
    /// Walkable soil.
    Soil,
    /// Nest marker.
    Nest,
    /// Food marker.
    Food,
}

/// A foraging ant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    /// Whether the ant is bringing food back to the nest.
    pub carrying: bool,
}

/// One cell of the foraging field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    /// Fixed terrain.
    pub ground: Ground,
    /// Pheromone laid by ants coming from the nest.
    pub home_trail: f32,
    /// Pheromone laid by ants coming from food.
    pub food_trail: f32,
    /// Ant on the tile, if any. Only soil holds ants.
    pub ant: Option<Ant>,
    /// Ticks since the nest last sent out an ant.
    pub since_spawn: u32,
}

impl Tile {
    fn bare(ground: Ground) -> Self {
        Self {
            ground,
            home_trail: 0.0,
            food_trail: 0.0,
            ant: None,
            since_spawn: 0,
        }
    }
}

/// Ants search for food and carry it home.
///
/// A searching ant lays home trail and follows food trail; a carrying
/// ant lays food trail and follows home trail. An ant picks up food when
/// it touches a food marker and drops it when it touches the nest. The
/// direction is chosen by the grid: the free soil neighbour with the
/// strongest trail of the kind the ant follows, random on ties. Trails
/// decay by `evaporation` each tick and are capped at `max_trail`. With
/// a nonzero `spawn_interval` the nest sends out a new ant at that
/// period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Foraging {
    evaporation: f32,
    deposit: f32,
    max_trail: f32,
    spawn_interval: u32,
}

impl Foraging {
    fn lay(&self, tile: &mut Tile, ant: Ant) {
        let trail = if ant.carrying {
            &mut tile.food_trail
        } else {
            &mut tile.home_trail
        };
        *trail = (*trail + self.deposit).min(self.max_trail);
    }

    fn evaporate(&self, tile: &mut Tile) {
        let keep = 1.0 - self.evaporation;
        tile.home_trail *= keep;
        tile.food_trail *= keep;
    }

    fn walk(&self, tile: Tile, ant: Ant, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Tile, Ant> {
        let touching = |marker: Ground, state: u8| tile.ground == marker || hood.any(state);
        let carrying = if ant.carrying {
            !touching(Ground::Nest, NEST)
        } else {
            touching(Ground::Food, FOOD)
        };
        let ant = Ant { carrying };
        let mut left = tile;
        self.lay(&mut left, ant);
        let stay = Tile {
            ant: Some(ant),
            ..left
        };
        let dest = hood.strongest(
            rng,
            |s| s.state == SOIL,
            |s| if carrying { s.home_trail } else { s.food_trail },
        );
        match dest {
            Some(dest) => Proposal::migrate(stay, dest, left, ant),
            None => Proposal::stay(stay),
        }
    }

    fn spawn(&self, nest: Tile, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Tile, Ant> {
        let waited = Tile {
            since_spawn: nest.since_spawn.saturating_add(1),
            ..nest
        };
        if self.spawn_interval == 0 || waited.since_spawn < self.spawn_interval {
            return Proposal::stay(waited);
        }
        match hood.pick(rng, |s| s.state == SOIL) {
            Some(dest) => Proposal::migrate(
                waited,
                dest,
                Tile {
                    since_spawn: 0,
                    ..nest
                },
                Ant { carrying: false },
            ),
            None => Proposal::stay(waited),
        }
    }
}

impl Rule for Foraging {
    type Cell = Tile;
    type Occupant = Ant;

    const NAME: &'static str = "foraging";
    const MAX_STATE: u8 = CARRYING;

    fn from_params(params: &Params) -> Result<Self, RuleError> {
        let max_trail = params.real_or(Self::NAME, "max_trail", 1000.0)?;
        if max_trail <= 0.0 {
            return Err(ParamError::Invalid {
                rule: Self::NAME,
                name: "max_trail".into(),
                value: max_trail,
                reason: "must be greater than zero",
            }
            .into());
        }
        Ok(Self {
            evaporation: params.require_probability(Self::NAME, "evaporation")? as f32,
            deposit: params.require_positive(Self::NAME, "deposit")? as f32,
            max_trail: max_trail as f32,
            spawn_interval: params.count_or(Self::NAME, "spawn_interval", 0)?,
        })
    }

    fn seed(&self, state: u8) -> Tile {
        match state {
            NEST => Tile::bare(Ground::Nest),
            FOOD => Tile::bare(Ground::Food),
            SEARCHING | CARRYING => Tile {
                ant: Some(Ant {
                    carrying: state == CARRYING,
                }),
                ..Tile::bare(Ground::Soil)
            },
            _ => Tile::bare(Ground::Soil),
        }
    }

    fn state(&self, cell: &Tile) -> u8 {
        match (cell.ant, cell.ground) {
            (Some(Ant { carrying: true }), _) => CARRYING,
            (Some(Ant { carrying: false }), _) => SEARCHING,
            (None, Ground::Nest) => NEST,
            (None, Ground::Food) => FOOD,
            (None, Ground::Soil) => SOIL,
        }
    }

    fn surface(&self, cell: &Tile) -> CellSurface {
        CellSurface {
            home_trail: cell.home_trail,
            food_trail: cell.food_trail,
            ..CellSurface::of(self.state(cell))
        }
    }

    fn propose(&self, cell: &Tile, hood: &Neighborhood<'_>, rng: &mut CellRng) -> Proposal<Tile, Ant> {
        let mut tile = Tile { ant: None, ..*cell };
        self.evaporate(&mut tile);
        match (cell.ant, cell.ground) {
            (Some(ant), _) => self.walk(tile, ant, hood, rng),
            (None, Ground::Nest) => self.spawn(tile, hood, rng),
            (None, _) => Proposal::stay(tile),
        }
    }

    fn accept_incoming(&self, dest: &Tile, _incoming: &Migration<Tile, Ant>) -> bool {
        dest.ground == Ground::Soil && dest.ant.is_none()
    }

    fn absorb(&self, dest: &mut Tile, ant: Ant) {
        self.lay(dest, ant);
        dest.ant = Some(ant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{rng, Scene};

    fn rule(spawn_interval: f64) -> Foraging {
        Foraging::from_params(
            &Params::new()
                .with("evaporation", 0.5)
                .with("deposit", 2.0)
                .with("spawn_interval", spawn_interval),
        )
        .unwrap()
    }

    fn scene(r: &Foraging, cells: &[Tile], w: usize) -> Scene {
        Scene::square(4, w, cells.len() / w).with_cells(r, cells)
    }

    #[test]
    fn searching_ant_follows_the_food_trail() {
        let r = rule(0.0);
        let mut cells = [Tile::bare(Ground::Soil); 9];
        cells[4] = r.seed(SEARCHING);
        cells[1].food_trail = 1.0;
        cells[5].food_trail = 6.0;
        cells[3].home_trail = 9.0;
        let sc = scene(&r, &cells, 3);
        let p = r.propose(&cells[4], &sc.hood(4), &mut rng(4));
        let m = p.migration.unwrap();
        assert_eq!(m.destination, 5);
        assert_eq!(m.occupant, Ant { carrying: false });
        // The tile left behind carries fresh home trail.
        assert_eq!(m.vacated.home_trail, 2.0);
        assert!(m.vacated.ant.is_none());
    }

    #[test]
    fn picks_up_food_and_drops_it_at_the_nest() {
        let r = rule(0.0);
        let mut cells = [r.seed(FOOD), r.seed(SEARCHING), r.seed(SOIL)];
        let sc = scene(&r, &cells, 3);
        let p = r.propose(&cells[1], &sc.hood(1), &mut rng(1));
        assert_eq!(p.migration.unwrap().occupant, Ant { carrying: true });
        assert_eq!(r.state(&p.next), CARRYING);

        cells[0] = r.seed(NEST);
        cells[1] = r.seed(CARRYING);
        let sc = scene(&r, &cells, 3);
        let p = r.propose(&cells[1], &sc.hood(1), &mut rng(1));
        assert_eq!(r.state(&p.next), SEARCHING);
    }

    #[test]
    fn trails_evaporate_and_cap() {
        let r = rule(0.0);
        let mut tile = Tile::bare(Ground::Soil);
        tile.food_trail = 8.0;
        let cells = [tile];
        let sc = scene(&r, &cells, 1);
        assert_eq!(r.propose(&tile, &sc.hood(0), &mut rng(0)).next.food_trail, 4.0);

        let mut dest = Tile::bare(Ground::Soil);
        dest.food_trail = 999.0;
        r.absorb(&mut dest, Ant { carrying: true });
        assert_eq!(dest.food_trail, 1000.0);
        assert_eq!(r.state(&dest), CARRYING);
    }

    #[test]
    fn nest_spawns_on_schedule() {
        let r = rule(2.0);
        let cells = [r.seed(NEST), r.seed(SOIL)];
        let sc = scene(&r, &cells, 2);
        let first = r.propose(&cells[0], &sc.hood(0), &mut rng(0));
        assert!(first.migration.is_none());
        let second = r.propose(&first.next, &sc.hood(0), &mut rng(0));
        let m = second.migration.unwrap();
        assert_eq!(m.destination, 1);
        assert_eq!(m.vacated.since_spawn, 0);
        assert_eq!(r.state(&m.vacated), NEST);
    }

    #[test]
    fn only_free_soil_accepts() {
        let r = rule(0.0);
        let m = Migration {
            destination: 0,
            vacated: Tile::bare(Ground::Soil),
            occupant: Ant { carrying: false },
        };
        assert!(r.accept_incoming(&r.seed(SOIL), &m));
        assert!(!r.accept_incoming(&r.seed(NEST), &m));
        assert!(!r.accept_incoming(&r.seed(FOOD), &m));
        assert!(!r.accept_incoming(&r.seed(CARRYING), &m));
    }
}
