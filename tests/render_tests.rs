mod common;

use battleship_sim::{render, PlayerId, Turn};
use common::{at, row_fleet};

#[test]
fn ocean_marks_ships_wrecks_and_misses() {
    let owner = PlayerId(1);
    let mut fleet = row_fleet(owner);
    fleet.receive_fire(at("A1"));
    let turns = [
        Turn {
            sequence: 1,
            shooter: PlayerId(2),
            target: owner,
            coordinate: at("A1"),
            hit: true,
        },
        Turn {
            sequence: 2,
            shooter: PlayerId(2),
            target: owner,
            coordinate: at("J10"),
            hit: false,
        },
        // a shot at the other player is not drawn here
        Turn {
            sequence: 2,
            shooter: owner,
            target: PlayerId(2),
            coordinate: at("J9"),
            hit: false,
        },
    ];

    let text = render::ocean(&fleet, &turns);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "   A B C D E F G H I J");
    assert_eq!(lines[1], " 1 X # # # # . . . . .");
    assert_eq!(lines[2], " 2 . . . . . . . . . .");
    assert_eq!(lines[9], " 9 # # . . . . . . . .");
    assert_eq!(lines[10], "10 . . . . . . . . . o");
}
