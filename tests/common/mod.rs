#![allow(dead_code)]

use battleship_sim::{Coordinate, Fleet, PlayerId, Ship, ShipId, FLEET};

pub fn at(s: &str) -> Coordinate {
    s.parse().unwrap()
}

/// Fleet laid out horizontally from column A on rows 1, 3, 5, 7 and 9.
pub fn row_fleet(owner: PlayerId) -> Fleet {
    let ships = FLEET
        .iter()
        .enumerate()
        .map(|(i, ty)| {
            let row = 2 * i as u8 + 1;
            let cells = (1..=ty.size() as u8)
                .map(|c| Coordinate::new(c, row).unwrap())
                .collect();
            Ship::new(ShipId(i as u32 + 1), owner, *ty, cells).unwrap()
        })
        .collect();
    Fleet::new(owner, ships).unwrap()
}
