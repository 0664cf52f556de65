//! Generates a dungeon level and prints its topology.
//!
//! Run: cargo run --bin dungeon-topology -- [ROWS COLS [SEED [ALGORITHM]]]
//!
//! Carves a maze with the chosen strategy, places the entrance and the
//! stairs at the two ends of the longest route, marks that route, drops
//! gold in the dead ends, and prints the level plus a distance heatmap.

use std::env;
use std::process;

use rand::SeedableRng;
use rand::rngs::StdRng;

use warren_core::{Coord, Grid, tiles};
use warren_gen::{BinaryTree, Carver, Sidewinder};
use warren_paths::LongestPath;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        eprintln!("Usage: dungeon-topology [ROWS COLS [SEED [binary-tree|sidewinder]]]");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().skip(1).collect();
    let rows: i32 = match args.first() {
        Some(s) => s.parse()?,
        None => 8,
    };
    let cols: i32 = match args.get(1) {
        Some(s) => s.parse()?,
        None => 12,
    };
    let seed: u64 = match args.get(2) {
        Some(s) => s.parse()?,
        None => 42,
    };
    let algorithm = args.get(3).map(String::as_str).unwrap_or("binary-tree");

    let mut grid = Grid::new(rows, cols)?;
    let mut rng = StdRng::seed_from_u64(seed);
    match algorithm {
        "binary-tree" => BinaryTree.carve(&mut grid, &mut rng),
        "sidewinder" => Sidewinder.carve(&mut grid, &mut rng),
        other => return Err(format!("unknown algorithm: {other}").into()),
    }

    let longest = LongestPath::estimate(&grid, Coord::ZERO)?;
    let route = longest.path(&grid)?;
    let dead_ends = grid.dead_ends();

    for &c in &dead_ends {
        grid.set_tile(c, tiles::GOLD);
    }
    for &c in &route {
        grid.set_tile(c, tiles::FLOOR);
    }
    grid.set_tile(longest.start(), tiles::PLAYER);
    grid.set_tile(longest.goal(), tiles::STAIRS);

    println!("{algorithm}, {rows}x{cols}, seed {seed}");
    print!("{grid}");
    println!(
        "entrance {}, stairs {}, route {} steps, {} dead ends",
        longest.start(),
        longest.goal(),
        longest.length(),
        dead_ends.len()
    );

    println!();
    println!("distance from the entrance (base 36):");
    let d = longest.distances();
    print!(
        "{}",
        grid.render_with(|cell| match d.at(cell.coord()) {
            Some(n) => char::from_digit((n % 36) as u32, 36).unwrap_or('*'),
            None => ' ',
        })
    );

    Ok(())
}
