//! Layout parsing and preconfigured grids.

use tessel_engine::{GridConfig, GridConfigBuilder};
use tessel_rules::RuleKind;

/// Parse rows of digits into `(width, row-major layout)`.
///
/// Whitespace inside a row is ignored.
///
/// # Panics
///
/// Panics on a non-digit character or rows of unequal width.
pub fn layout_from_rows(rows: &[&str]) -> (usize, Vec<u8>) {
    let mut width = None;
    let mut layout = Vec::new();
    for row in rows {
        let digits: Vec<u8> = row
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                c.to_digit(10)
                    .unwrap_or_else(|| panic!("'{c}' in row {row:?} is not a digit")) as u8
            })
            .collect();
        match width {
            None => width = Some(digits.len()),
            Some(w) => assert_eq!(w, digits.len(), "ragged row {row:?}"),
        }
        layout.extend(digits);
    }
    (width.unwrap_or(0), layout)
}

/// Format a row-major view back into digit rows.
pub fn render_rows(view: &[u8], width: usize) -> Vec<String> {
    view.chunks(width)
        .map(|row| row.iter().map(|d| char::from(b'0' + d)).collect())
        .collect()
}

/// A builder for `kind` preloaded with `rows`.
pub fn config(kind: RuleKind, rows: &[&str]) -> GridConfigBuilder {
    let (width, layout) = layout_from_rows(rows);
    GridConfig::builder(kind).layout(width, layout)
}

/// Wa-Tor parameters that keep animals alive for a while.
pub fn wator(rows: &[&str]) -> GridConfigBuilder {
    config(RuleKind::WaTor, rows)
        .param("fish_breed", 3.0)
        .param("shark_breed", 6.0)
        .param("shark_energy", 4.0)
        .param("fish_energy", 2.0)
}

/// Sugarscape parameters with slow regrowth.
pub fn sugarscape(rows: &[&str]) -> GridConfigBuilder {
    config(RuleKind::Sugarscape, rows)
        .param("max_sugar", 4.0)
        .param("grow_rate", 1.0)
        .param("grow_interval", 2.0)
        .param("initial_sugar", 3.0)
        .param("metabolism", 1.0)
        .param("vision", 2.0)
}

/// Foraging parameters with a spawning nest.
pub fn foraging(rows: &[&str]) -> GridConfigBuilder {
    config(RuleKind::Foraging, rows)
        .param("evaporation", 0.1)
        .param("deposit", 1.0)
        .param("spawn_interval", 3.0)
}
