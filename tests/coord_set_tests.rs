mod common;

use battleship_sim::CoordSet;
use common::at;

#[test]
fn insert_remove_contains() {
    let mut set = CoordSet::new();
    assert!(set.is_empty());
    assert!(set.insert(at("C5")));
    assert!(!set.insert(at("C5")));
    assert!(set.contains(at("C5")));
    assert_eq!(set.len(), 1);
    assert!(set.remove(at("C5")));
    assert!(!set.remove(at("C5")));
    assert!(set.is_empty());
}

#[test]
fn iterates_in_row_major_order() {
    let set: CoordSet = [at("A2"), at("J1"), at("B1"), at("A1")].into_iter().collect();
    let order: Vec<_> = set.iter().collect();
    assert_eq!(order, vec![at("A1"), at("B1"), at("J1"), at("A2")]);
}

#[test]
fn set_algebra_stays_on_board() {
    let full = CoordSet::full();
    assert_eq!(full.len(), 100);
    assert!((!full).is_empty());
    assert_eq!(!CoordSet::new(), full);

    let some: CoordSet = [at("A1"), at("B1")].into_iter().collect();
    let other: CoordSet = [at("B1"), at("C1")].into_iter().collect();
    assert_eq!((some & other).iter().collect::<Vec<_>>(), vec![at("B1")]);
    assert_eq!((some | other).len(), 3);
    assert_eq!((some - other).iter().collect::<Vec<_>>(), vec![at("A1")]);
    assert_eq!((full - some).len(), 98);
    assert_eq!(!some, full - some);
}
