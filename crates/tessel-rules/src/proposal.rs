//! Proposal-phase output of a single cell.

/// A request to move this cell's occupant elsewhere.
///
/// `occupant` is the typed payload the destination absorbs if it accepts;
/// `vacated` is what the source cell becomes when the move is awarded.
#[derive(Clone, Debug, PartialEq)]
pub struct Migration<C, P> {
    /// Row-major index of the destination cell.
    pub destination: usize,
    /// The source cell's next value if the move goes ahead.
    pub vacated: C,
    /// What travels to the destination.
    pub occupant: P,
}

/// A cell's proposed next value, with an optional migration.
///
/// `next` is the fallback: the value the cell commits when it proposes no
/// move or its move is not awarded.
#[derive(Clone, Debug, PartialEq)]
pub struct Proposal<C, P> {
    /// Fallback next value.
    pub next: C,
    /// Requested move, if any.
    pub migration: Option<Migration<C, P>>,
}

impl<C, P> Proposal<C, P> {
    /// Stay in place and become `next`.
    pub fn stay(next: C) -> Self {
        Self {
            next,
            migration: None,
        }
    }

    /// Move `occupant` to `destination`, leaving `vacated` behind; become
    /// `next` if the move is refused.
    pub fn migrate(next: C, destination: usize, vacated: C, occupant: P) -> Self {
        Self {
            next,
            migration: Some(Migration {
                destination,
                vacated,
                occupant,
            }),
        }
    }

    /// Destination index, if this proposal moves.
    pub fn destination(&self) -> Option<usize> {
        self.migration.as_ref().map(|m| m.destination)
    }
}
