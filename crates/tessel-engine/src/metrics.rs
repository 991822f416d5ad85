//! Per-tick counters and timings.

/// Timing and arbitration counters for a single tick.
///
/// Durations are wall-clock microseconds. Claim counters partition every
/// migration proposed this tick: `claims == awarded + rejected + withdrawn`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Whole tick.
    pub total_us: u64,
    /// Proposal phase.
    pub propose_us: u64,
    /// Arbitration phase.
    pub arbitrate_us: u64,
    /// Commit phase.
    pub commit_us: u64,
    /// Migrations proposed.
    pub claims: u32,
    /// Migrations that went ahead.
    pub awarded: u32,
    /// Migrations refused or beaten to their destination.
    pub rejected: u32,
    /// Migrations cancelled because the source took in an occupant.
    pub withdrawn: u32,
}
