//! A grid running one concrete rule.
//!
//! [`Lattice`] owns the cell arena, the cached neighbour table and the
//! snapshot of cell surfaces that proposals read. Cells are addressed
//! only by row-major index; neighbours are index lists, never references.

use std::time::Instant;

use tessel_core::TickId;
use tessel_rules::{cell_rng, seed_layout, CellSurface, Neighborhood, Proposal, Rule};
use tessel_space::{NeighborTable, Topology};
use tracing::{debug, info};

use crate::arbiter::{Claim, MigrationArbiter};
use crate::config::{ConfigError, GridConfig};
use crate::metrics::TickMetrics;

type Proposals<R> = Vec<Proposal<<R as Rule>::Cell, <R as Rule>::Occupant>>;

/// Cells of one rule type on a fixed topology.
///
/// The only mutation path is [`tick`](Self::tick), which runs the
/// propose, arbitrate and commit phases to completion.
#[derive(Debug)]
pub struct Lattice<R: Rule> {
    rule: R,
    cells: Vec<R::Cell>,
    surfaces: Vec<CellSurface>,
    table: NeighborTable,
    seed: u64,
    tick: TickId,
    arbiter: MigrationArbiter,
    last_metrics: TickMetrics,
}

impl<R: Rule> Lattice<R> {
    /// Build a lattice from an already-constructed rule.
    pub fn new(
        rule: R,
        topology: Topology,
        width: usize,
        height: usize,
        layout: &[u8],
        seed: u64,
    ) -> Result<Self, ConfigError> {
        if !rule.supports(topology) {
            return Err(ConfigError::IncompatibleTopology {
                rule: R::NAME,
                shape: topology.shape(),
                size: topology.neighborhood(),
            });
        }
        let table = NeighborTable::build(topology, width, height)?;
        if layout.len() != table.cell_count() {
            return Err(ConfigError::LayoutSize {
                width,
                height,
                expected: table.cell_count(),
                actual: layout.len(),
            });
        }
        let cells = seed_layout(&rule, layout)?;
        let surfaces = cells.iter().map(|c| rule.surface(c)).collect();
        info!(
            rule = R::NAME,
            shape = %topology.shape(),
            neighborhood = topology.neighborhood(),
            edge = %topology.edge(),
            width,
            height,
            seed,
            "grid built"
        );
        Ok(Self {
            rule,
            cells,
            surfaces,
            table,
            seed,
            tick: TickId::default(),
            arbiter: MigrationArbiter::new(),
            last_metrics: TickMetrics::default(),
        })
    }

    /// Build the rule from `config.params`, then the lattice.
    pub fn from_config(config: &GridConfig) -> Result<Self, ConfigError> {
        let rule = R::from_params(&config.params)?;
        Self::new(
            rule,
            config.topology()?,
            config.width,
            config.height,
            &config.layout,
            config.seed,
        )
    }

    /// Advance one synchronous tick.
    pub fn tick(&mut self) -> TickMetrics {
        let start = Instant::now();
        let next_tick = self.tick.next();

        // 1. Every cell proposes against the same pre-tick snapshot.
        let proposals = self.propose(next_tick);
        let propose_us = start.elapsed().as_micros() as u64;

        // 2. Award each destination to at most one claimant.
        let arbitrate_start = Instant::now();
        let claims = proposals.iter().enumerate().filter_map(|(source, p)| {
            p.destination().map(|destination| Claim {
                source,
                destination,
            })
        });
        let (rule, cells) = (&self.rule, &self.cells);
        let stats = self.arbiter.resolve(self.cells.len(), claims, |claim| {
            proposals[claim.source]
                .migration
                .as_ref()
                .is_some_and(|m| rule.accept_incoming(&cells[claim.destination], m))
        });
        let arbitrate_us = arbitrate_start.elapsed().as_micros() as u64;

        // 3. Commit.
        let commit_start = Instant::now();
        self.commit(proposals);
        self.tick = next_tick;
        let commit_us = commit_start.elapsed().as_micros() as u64;

        let metrics = TickMetrics {
            total_us: start.elapsed().as_micros() as u64,
            propose_us,
            arbitrate_us,
            commit_us,
            claims: stats.claims,
            awarded: stats.awarded,
            rejected: stats.rejected,
            withdrawn: stats.withdrawn,
        };
        debug!(
            rule = R::NAME,
            tick = %self.tick,
            claims = metrics.claims,
            awarded = metrics.awarded,
            rejected = metrics.rejected,
            withdrawn = metrics.withdrawn,
            total_us = metrics.total_us,
            "tick committed"
        );
        self.last_metrics = metrics;
        metrics
    }

    fn propose(&self, tick: TickId) -> Proposals<R> {
        let (width, height) = (self.table.width(), self.table.height());
        let edge = self.table.topology().edge();
        let propose_one = |index: usize| {
            let hood = Neighborhood::new(
                index,
                self.table.neighbors(index),
                &self.surfaces,
                width,
                height,
                edge,
                tick,
            );
            let mut rng = cell_rng(self.seed, tick, index);
            self.rule.propose(&self.cells[index], &hood, &mut rng)
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..self.cells.len()).into_par_iter().map(propose_one).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.cells.len()).map(propose_one).collect()
        }
    }

    /// Awarded sources become their vacated value; admitting destinations
    /// absorb the occupant into their own fallback; everyone else takes
    /// their fallback.
    fn commit(&mut self, proposals: Proposals<R>) {
        let mut arrivals: Vec<Option<R::Occupant>> = (0..proposals.len()).map(|_| None).collect();
        let mut next = Vec::with_capacity(proposals.len());
        for (source, proposal) in proposals.into_iter().enumerate() {
            match proposal.migration {
                Some(m) if self.arbiter.incoming(m.destination) == Some(source) => {
                    arrivals[m.destination] = Some(m.occupant);
                    next.push(m.vacated);
                }
                _ => next.push(proposal.next),
            }
        }
        for (cell, arrival) in next.iter_mut().zip(arrivals) {
            if let Some(occupant) = arrival {
                self.rule.absorb(cell, occupant);
            }
        }
        self.cells = next;
        self.surfaces.clear();
        let rule = &self.rule;
        self.surfaces.extend(self.cells.iter().map(|c| rule.surface(c)));
    }

    /// Public state of every cell, row-major.
    pub fn view(&self) -> Vec<u8> {
        self.cells.iter().map(|c| self.rule.state(c)).collect()
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.table.width(), self.table.height())
    }

    /// Number of cells in each public state, indexed by state.
    pub fn census(&self) -> Vec<usize> {
        let mut counts = vec![0; usize::from(R::MAX_STATE) + 1];
        for cell in &self.cells {
            counts[usize::from(self.rule.state(cell))] += 1;
        }
        counts
    }

    /// The rule this lattice runs.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Cells including hidden fields, row-major.
    pub fn cells(&self) -> &[R::Cell] {
        &self.cells
    }

    /// The topology neighbours were built from.
    pub fn topology(&self) -> Topology {
        self.table.topology()
    }

    /// Ticks completed so far.
    pub fn tick_id(&self) -> TickId {
        self.tick
    }

    /// Metrics of the most recent tick.
    pub fn last_metrics(&self) -> TickMetrics {
        self.last_metrics
    }
}
