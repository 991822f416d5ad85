//! Deterministic resolution of competing migrations.
//!
//! Claims are grouped by destination and offered to the destination one
//! at a time in ascending source order; the first one it admits wins and
//! every later claim on that destination loses. A destination admits at
//! most one occupant per tick.
//!
//! A cell that admits an occupant cannot also leave: its own outgoing
//! claim is withdrawn (the prey is eaten before it can swim away), and
//! resolution runs once more without the withdrawn claims so the
//! destinations they had won are re-offered to the remaining claimants.
//! Removing claims can only shrink the set of admitting cells, so after
//! that second pass no cell both admits and leaves.

use tracing::trace;

/// One migration request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Claim {
    /// Cell the occupant leaves.
    pub source: usize,
    /// Cell the occupant wants to enter.
    pub destination: usize,
}

/// Claim counters for one resolution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArbitrationStats {
    /// Claims submitted, including malformed ones.
    pub claims: u32,
    /// Claims awarded.
    pub awarded: u32,
    /// Claims refused, beaten, or malformed.
    pub rejected: u32,
    /// Claims withdrawn because their source admitted an occupant.
    pub withdrawn: u32,
}

/// Resolves claims into at most one award per destination.
///
/// Holds scratch buffers that are reused from tick to tick.
#[derive(Clone, Debug, Default)]
pub struct MigrationArbiter {
    claims: Vec<Claim>,
    incoming: Vec<Option<usize>>,
    withdrawn: Vec<bool>,
}

impl MigrationArbiter {
    /// An arbiter with empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `claims` on a grid of `cell_count` cells.
    ///
    /// `admits` is the destination's acceptance policy, evaluated against
    /// the pre-tick state. Claims that target their own source or a cell
    /// outside the grid are dropped as rejected. Results stay readable
    /// through [`incoming`](Self::incoming) and
    /// [`is_awarded`](Self::is_awarded) until the next call.
    pub fn resolve<I, F>(&mut self, cell_count: usize, claims: I, mut admits: F) -> ArbitrationStats
    where
        I: IntoIterator<Item = Claim>,
        F: FnMut(Claim) -> bool,
    {
        let mut stats = ArbitrationStats::default();
        self.claims.clear();
        self.incoming.clear();
        self.incoming.resize(cell_count, None);
        self.withdrawn.clear();
        self.withdrawn.resize(cell_count, false);

        for claim in claims {
            stats.claims += 1;
            if claim.destination == claim.source
                || claim.destination >= cell_count
                || claim.source >= cell_count
            {
                trace!(
                    source = claim.source,
                    destination = claim.destination,
                    "malformed claim dropped"
                );
                continue;
            }
            self.claims.push(claim);
        }
        self.claims
            .sort_unstable_by_key(|c| (c.destination, c.source));

        // 1. First come, first served per destination.
        Self::offer(&self.claims, &mut self.incoming, &self.withdrawn, &mut admits);

        // 2. Admitting cells forfeit their own claims; re-offer once.
        let mut any_withdrawn = false;
        for claim in &self.claims {
            if self.incoming[claim.source].is_some() {
                self.withdrawn[claim.source] = true;
                any_withdrawn = true;
                stats.withdrawn += 1;
                trace!(
                    source = claim.source,
                    destination = claim.destination,
                    "claim withdrawn: source admitted an occupant"
                );
            }
        }
        if any_withdrawn {
            self.incoming.fill(None);
            Self::offer(&self.claims, &mut self.incoming, &self.withdrawn, &mut admits);
        }

        for claim in &self.claims {
            if self.withdrawn[claim.source] {
                continue;
            }
            if self.incoming[claim.destination] == Some(claim.source) {
                stats.awarded += 1;
            } else {
                trace!(
                    source = claim.source,
                    destination = claim.destination,
                    "claim rejected"
                );
            }
        }
        stats.rejected = stats.claims - stats.awarded - stats.withdrawn;
        stats
    }

    fn offer<F>(claims: &[Claim], incoming: &mut [Option<usize>], withdrawn: &[bool], admits: &mut F)
    where
        F: FnMut(Claim) -> bool,
    {
        for &claim in claims {
            if withdrawn[claim.source] || incoming[claim.destination].is_some() {
                continue;
            }
            if admits(claim) {
                incoming[claim.destination] = Some(claim.source);
            }
        }
    }

    /// The source whose occupant `destination` admitted, if any.
    pub fn incoming(&self, destination: usize) -> Option<usize> {
        self.incoming.get(destination).copied().flatten()
    }

    /// Whether `claim` was awarded in the last resolution.
    pub fn is_awarded(&self, claim: Claim) -> bool {
        self.incoming(claim.destination) == Some(claim.source)
    }
}
