//! Run a Wa-Tor ocean without a front end and log population counts.
//!
//! ```text
//! RUST_LOG=info cargo run -p tessel-engine --example headless
//! ```

use tessel_engine::{GridConfig, SimulationGrid};
use tessel_rules::RuleKind;
use tessel_space::{EdgeBehavior, Shape};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (width, height) = (40, 24);
    let layout: Vec<u8> = (0..width * height)
        .map(|i: usize| match i.wrapping_mul(2_654_435_761) % 17 {
            0 => 2,
            1..=4 => 1,
            _ => 0,
        })
        .collect();

    let config = GridConfig::builder(RuleKind::WaTor)
        .topology(Shape::Square, 4)
        .edge(EdgeBehavior::Wrap)
        .layout(width, layout)
        .param("fish_breed", 3.0)
        .param("shark_breed", 8.0)
        .param("shark_energy", 4.0)
        .param("fish_energy", 3.0)
        .seed(2024)
        .build()?;
    let mut grid = SimulationGrid::new(&config)?;

    for _ in 0..200 {
        let metrics = grid.tick();
        if grid.tick_id().0 % 20 == 0 {
            let census = grid.census();
            info!(
                tick = %grid.tick_id(),
                fish = census[1],
                sharks = census[2],
                moves = metrics.awarded,
                "population"
            );
        }
    }
    Ok(())
}
