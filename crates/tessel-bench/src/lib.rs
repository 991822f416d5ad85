//! Benchmark profiles for the Tessel simulation framework.
//!
//! - [`reference_profile`]: 100x100 grid (10K cells) for any rule
//! - [`stress_profile`]: 316x316 grid (~100K cells)
//! - [`scatter_layout`]: deterministic layouts from a seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tessel_core::Params;
use tessel_engine::GridConfig;
use tessel_rules::RuleKind;
use tessel_space::{EdgeBehavior, Shape};

/// Parameters that keep every rule busy without collapsing quickly.
pub fn busy_params(kind: RuleKind) -> Params {
    let params = Params::new();
    match kind {
        RuleKind::Fire => params.with("prob_catch", 0.7).with("prob_grow", 0.01),
        RuleKind::Segregation => params.with("threshold", 0.5),
        RuleKind::WaTor => params
            .with("fish_breed", 3.0)
            .with("shark_breed", 8.0)
            .with("shark_energy", 4.0)
            .with("fish_energy", 3.0),
        RuleKind::Sugarscape => params
            .with("max_sugar", 4.0)
            .with("grow_rate", 1.0)
            .with("initial_sugar", 5.0)
            .with("metabolism", 1.0)
            .with("vision", 3.0),
        RuleKind::Foraging => params
            .with("evaporation", 0.05)
            .with("deposit", 1.0)
            .with("spawn_interval", 5.0),
        RuleKind::RockPaperScissors => params.with("threshold", 3.0).with("jitter", 1.0),
        RuleKind::Life | RuleKind::Percolation | RuleKind::Loops => params,
    }
}

/// Deterministic layout of `cells` states in `0..=max_state`.
///
/// Roughly half the cells take state 0; the rest are spread over the
/// other states by a multiplicative hash of the index and `seed`.
pub fn scatter_layout(cells: usize, max_state: u8, seed: u64) -> Vec<u8> {
    (0..cells as u64)
        .map(|i| {
            let h = (i ^ seed).wrapping_mul(6_364_136_223_846_793_005) >> 33;
            if max_state == 0 || h % 2 == 0 {
                0
            } else {
                1 + (h / 2 % u64::from(max_state)) as u8
            }
        })
        .collect()
}

fn profile(kind: RuleKind, side: usize, seed: u64) -> GridConfig {
    let neighborhood = if kind == RuleKind::Loops { 4 } else { 8 };
    GridConfig {
        kind,
        shape: Shape::Square,
        neighborhood,
        edge: EdgeBehavior::Wrap,
        width: side,
        height: side,
        layout: scatter_layout(side * side, kind.max_state(), seed),
        params: busy_params(kind),
        seed,
    }
}

/// A 100x100 toroidal grid running `kind`.
pub fn reference_profile(kind: RuleKind, seed: u64) -> GridConfig {
    profile(kind, 100, seed)
}

/// A 316x316 toroidal grid running `kind`.
pub fn stress_profile(kind: RuleKind, seed: u64) -> GridConfig {
    profile(kind, 316, seed)
}
