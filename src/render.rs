//! Text rendering of a player's ocean.

use std::fmt::Write;

use crate::board::Coordinate;
use crate::config::BOARD_SIZE;
use crate::coord_set::CoordSet;
use crate::game::Turn;
use crate::ship::Fleet;

const WATER: char = '.';
const SHIP: char = '#';
const WRECK: char = 'X';
const SPLASH: char = 'o';

/// Render `fleet` with the shots it received. `incoming` may hold the whole
/// turn log; only shots aimed at the fleet's owner are drawn.
pub fn ocean(fleet: &Fleet, incoming: &[Turn]) -> String {
    let misses: CoordSet = incoming
        .iter()
        .filter(|t| t.target == fleet.owner() && !t.hit)
        .map(|t| t.coordinate)
        .collect();

    let mut grid = [[WATER; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for c in misses {
        grid[c.row() as usize - 1][c.column() as usize - 1] = SPLASH;
    }
    for component in fleet.ships().iter().flat_map(|s| s.components()) {
        let c = component.coordinate();
        grid[c.row() as usize - 1][c.column() as usize - 1] =
            if component.is_destroyed() { WRECK } else { SHIP };
    }

    let mut out = String::from("  ");
    for column in 1..=BOARD_SIZE {
        if let Ok(c) = Coordinate::new(column, 1) {
            out.push(' ');
            out.push(c.column_letter());
        }
    }
    out.push('\n');
    for (r, row) in grid.iter().enumerate() {
        let _ = write!(out, "{:2}", r + 1);
        for cell in row {
            out.push(' ');
            out.push(*cell);
        }
        out.push('\n');
    }
    out
}
