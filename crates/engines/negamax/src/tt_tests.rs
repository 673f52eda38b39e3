use super::*;
use crate::eval::WIN_SCORE;

fn entry(depth: u8, value: i32) -> TtEntry {
    TtEntry {
        depth,
        value,
        bound: Bound::Exact,
        best: None,
    }
}

#[test]
fn deeper_entries_replace_shallower_ones() {
    let mut tt = TranspositionTable::new(4);
    tt.store(1, entry(2, 10));
    tt.store(1, entry(1, 20));
    assert_eq!(tt.probe(1).unwrap().value, 10);
    tt.store(1, entry(3, 30));
    assert_eq!(tt.probe(1).unwrap().value, 30);
}

#[test]
fn full_table_drops_new_keys() {
    let mut tt = TranspositionTable::new(2);
    tt.store(1, entry(1, 1));
    tt.store(2, entry(1, 2));
    tt.store(3, entry(1, 3));
    assert_eq!(tt.len(), 2);
    assert!(tt.probe(3).is_none());
    tt.clear();
    assert!(tt.is_empty());
}

#[test]
fn win_scores_keep_their_distance_across_plies() {
    // Win five plies from the root, stored by a node at ply 2.
    let stored = value_to_tt(WIN_SCORE - 5, 2);
    assert_eq!(stored, WIN_SCORE - 3);
    assert_eq!(value_from_tt(stored, 2), WIN_SCORE - 5);
    // Same position reached at ply 4: still three plies to the win.
    assert_eq!(value_from_tt(stored, 4), WIN_SCORE - 7);

    let lost = value_to_tt(-(WIN_SCORE - 6), 1);
    assert_eq!(lost, -(WIN_SCORE - 5));
    assert_eq!(value_from_tt(lost, 3), -(WIN_SCORE - 8));

    assert_eq!(value_to_tt(250, 7), 250);
    assert_eq!(value_from_tt(-250, 7), -250);
}
