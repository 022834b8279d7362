#![allow(dead_code)]
use mesh_sfc::prelude::*;
use std::collections::HashSet;

/// Decode every id of `level` and check the bijection and parent/child inverse.
pub fn assert_bijection<E: SfcElement + std::hash::Hash>(level: u8) {
    let mut seen = HashSet::new();
    for id in 0..E::count_at_level(level) {
        let elem = E::from_linear_id(level, id);
        assert_eq!(elem.level(), level);
        assert_eq!(elem.linear_id(level), id, "{:?} level {level} id {id}", E::CLASS);
        if level > 0 {
            assert_eq!(elem.parent().child(elem.child_id()), elem);
        }
        assert!(seen.insert(elem), "{elem:?} decoded twice");
    }
}

/// Walk the whole level with `successor` and check it visits ids in order.
pub fn assert_successor_chain<E: SfcElement>(level: u8) {
    let mut elem = E::from_linear_id(level, 0);
    for id in 1..E::count_at_level(level) {
        elem = elem.successor(level);
        assert_eq!(elem.linear_id(level), id, "{:?} level {level}", E::CLASS);
        assert_eq!(elem, E::from_linear_id(level, id));
    }
}

/// Every descendant of `elem` at `level` lies between its first and last descendant.
pub fn assert_descendants_bracketed<E: SfcElement>(elem: E, level: u8) {
    let first = elem.first_descendant(level).linear_id(level);
    let last = elem.last_descendant(level).linear_id(level);
    let inside: Vec<u64> = (0..E::count_at_level(level))
        .filter(|&id| E::from_linear_id(level, id).ancestor(elem.level()) == elem)
        .collect();
    assert_eq!(inside.first(), Some(&first));
    assert_eq!(inside.last(), Some(&last));
    assert_eq!(inside.len() as u64, last - first + 1);
}
