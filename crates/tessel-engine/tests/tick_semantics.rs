//! Whole-grid behaviour driven through `SimulationGrid`.

use tessel_engine::{ConfigError, GridConfig, SimulationGrid};
use tessel_rules::{RuleError, RuleKind};
use tessel_space::{EdgeBehavior, Shape, SpaceError};
use tessel_test_utils::fixtures;
use tessel_test_utils::{config, layout_from_rows, render_rows};

fn run(grid: &mut SimulationGrid, ticks: usize) {
    for _ in 0..ticks {
        grid.tick();
    }
}

#[test]
fn lone_live_cell_dies() {
    let cfg = config(RuleKind::Life, &["000", "010", "000"]).build().unwrap();
    let mut grid = SimulationGrid::new(&cfg).unwrap();
    grid.tick();
    assert_eq!(grid.census(), [9, 0]);
}

#[test]
fn view_round_trips_the_layout_for_every_kind() {
    let rows = ["0101", "1010", "0000", "0110"];
    let (_, layout) = layout_from_rows(&rows);
    for kind in RuleKind::ALL {
        let builder = match kind {
            RuleKind::WaTor => fixtures::wator(&rows),
            RuleKind::Sugarscape => fixtures::sugarscape(&rows),
            RuleKind::Foraging => fixtures::foraging(&rows),
            RuleKind::RockPaperScissors => config(kind, &rows).param("threshold", 2.0),
            _ => config(kind, &rows)
                .param("prob_catch", 0.5)
                .param("threshold", 0.5),
        };
        let cfg = builder.build().unwrap();
        let grid = SimulationGrid::new(&cfg).unwrap();
        assert_eq!(grid.view(), layout, "{kind}");
        assert_eq!(grid.dimensions(), (4, 4));
    }
}

#[test]
fn percolation_never_reverts() {
    let cfg = config(
        RuleKind::Percolation,
        &["21110", "01011", "11101", "00111", "11011"],
    )
    .topology(Shape::Square, 4)
    .build()
    .unwrap();
    let mut grid = SimulationGrid::new(&cfg).unwrap();
    let mut previous = grid.view();
    for _ in 0..12 {
        grid.tick();
        let now = grid.view();
        for (before, after) in previous.iter().zip(&now) {
            if *before == 2 {
                assert_eq!(*after, 2);
            }
        }
        previous = now;
    }
    assert_eq!(
        render_rows(&previous, 5),
        ["22220", "02022", "22202", "00222", "11022"]
    );
}

#[test]
fn contested_destination_goes_to_lower_source() {
    let cfg = fixtures::wator(&["101"])
        .topology(Shape::Square, 4)
        .param("fish_breed", 10.0)
        .build()
        .unwrap();
    for seed in 0..8 {
        let cfg = GridConfig { seed, ..cfg.clone() };
        let mut grid = SimulationGrid::new(&cfg).unwrap();
        let metrics = grid.tick();
        assert_eq!(grid.view(), [0, 1, 1]);
        assert_eq!((metrics.awarded, metrics.rejected), (1, 1));
    }
}

#[test]
fn same_seed_same_history() {
    let rows = ["0012000", "1000020", "0001000", "0200010", "1000000"];
    let build = |seed| {
        let cfg = fixtures::wator(&rows)
            .edge(EdgeBehavior::Wrap)
            .seed(seed)
            .build()
            .unwrap();
        SimulationGrid::new(&cfg).unwrap()
    };
    let (mut a, mut b) = (build(11), build(11));
    for _ in 0..20 {
        assert_eq!(a.tick().claims, b.tick().claims);
        assert_eq!(a.view(), b.view());
    }
    assert_eq!(a.tick_id(), b.tick_id());
}

#[test]
fn migration_conserves_population_without_births_or_deaths() {
    // Segregation only moves households around.
    let cfg = config(RuleKind::Segregation, &["12012", "21021", "00120", "12102"])
        .param("threshold", 0.7)
        .seed(5)
        .build()
        .unwrap();
    let mut grid = SimulationGrid::new(&cfg).unwrap();
    let census = grid.census();
    for _ in 0..15 {
        let m = grid.tick();
        assert_eq!(m.claims, m.awarded + m.rejected + m.withdrawn);
        assert_eq!(grid.census(), census);
    }
}

#[test]
fn loops_require_a_von_neumann_square_grid() {
    let err = SimulationGrid::new(
        &config(RuleKind::Loops, &["000", "010", "000"])
            .topology(Shape::Square, 8)
            .build()
            .unwrap(),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::IncompatibleTopology { rule: "loops", .. }));
}

#[test]
fn loop_grid_is_rotation_symmetric() {
    // A pattern and its quarter turn evolve into quarter turns of each
    // other under a rotation-invariant table.
    let rows = ["00000", "00100", "00270", "00000", "00000"];
    let turned = rotate_cw(&rows);
    let mut a = SimulationGrid::new(&config(RuleKind::Loops, &rows).build().unwrap()).unwrap();
    let turned_refs: Vec<&str> = turned.iter().map(String::as_str).collect();
    let mut b =
        SimulationGrid::new(&config(RuleKind::Loops, &turned_refs).build().unwrap()).unwrap();
    for _ in 0..6 {
        a.tick();
        b.tick();
        let a_rows = render_rows(&a.view(), 5);
        let a_refs: Vec<&str> = a_rows.iter().map(String::as_str).collect();
        assert_eq!(rotate_cw(&a_refs), render_rows(&b.view(), 5));
    }
}

fn rotate_cw(rows: &[&str]) -> Vec<String> {
    let grid: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
    let (h, w) = (grid.len(), grid[0].len());
    (0..w)
        .map(|c| (0..h).rev().map(|r| grid[r][c]).collect())
        .collect()
}

#[test]
fn configuration_errors_name_the_offence() {
    let err = SimulationGrid::new(&GridConfig {
        width: 3,
        height: 3,
        ..config(RuleKind::Life, &["01", "10"]).build().unwrap()
    })
    .unwrap_err();
    assert!(matches!(err, ConfigError::LayoutSize { expected: 9, actual: 4, .. }));

    let err = config(RuleKind::Life, &["0101", "1010"])
        .topology(Shape::Triangle, 6)
        .build()
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "triangle grids do not support a neighbourhood of 6"
    );

    let err = config(RuleKind::Segregation, &["012"]).build().map(|c| SimulationGrid::new(&c));
    assert!(matches!(
        err,
        Ok(Err(ConfigError::Rule(RuleError::Param(_))))
    ));

    let err = config(RuleKind::Life, &["0000", "0000"])
        .topology(Shape::Hexagon, 6)
        .edge(EdgeBehavior::Wrap)
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::Space(SpaceError::WrapTooSmall { .. })));
}

#[test]
fn hexagon_and_triangle_grids_tick() {
    for (shape, size) in [(Shape::Hexagon, 6), (Shape::Triangle, 3), (Shape::Triangle, 12)] {
        let cfg = config(RuleKind::Fire, &["1111", "1211", "1111", "1111"])
            .topology(shape, size)
            .param("prob_catch", 1.0)
            .build()
            .unwrap();
        let mut grid = SimulationGrid::new(&cfg).unwrap();
        run(&mut grid, 10);
        // Certain ignition burns out every connected tree.
        assert_eq!(grid.census(), [16, 0, 0], "{shape}/{size}");
    }
}
