use super::*;
use crate::resolver::resolve;

fn sq(x: u8, y: u8) -> Square {
    Square::new(x, y).unwrap()
}

fn chain_board() -> Board {
    Board::from_layout("......./......./......./......./......./...P.../...P.../.......").unwrap()
}

fn assert_valid_hops(board: &Board, selected: PieceId, destination: Square, path: &[Square]) {
    assert_eq!(path.first(), Some(&board.piece(selected).unwrap().square));
    assert_eq!(path.last(), Some(&destination));
    for pair in path.windows(2) {
        let owner = board.piece_at(pair[0]).expect("every hop starts on a piece");
        assert!(
            owner.candidates().contains(pair[1]),
            "{} does not reach {}",
            pair[0],
            pair[1]
        );
    }
    if board.is_empty(destination) {
        assert!(path.len() >= 3);
    }
}

#[test]
fn path_through_a_linked_piece() {
    let board = chain_board();
    let path = find_path(&board, PieceId(1), sq(2, 5)).unwrap();
    assert_eq!(path, vec![sq(3, 6), sq(3, 5), sq(2, 5)]);
}

#[test]
fn direct_swap_is_a_single_hop() {
    let board = chain_board();
    let path = find_path(&board, PieceId(1), sq(3, 5)).unwrap();
    assert_eq!(path, vec![sq(3, 6), sq(3, 5)]);
}

#[test]
fn empty_own_candidate_is_routed_through_the_link() {
    let board = chain_board();
    let path = find_path(&board, PieceId(1), sq(3, 4)).unwrap();
    assert_eq!(path, vec![sq(3, 6), sq(3, 5), sq(3, 4)]);
}

#[test]
fn inaccessible_destination_has_no_path() {
    let board = chain_board();
    assert_eq!(find_path(&board, PieceId(1), sq(2, 6)), None);
    assert_eq!(find_path(&board, PieceId(1), sq(3, 6)), None);
}

#[test]
fn every_resolved_square_has_a_consistent_path() {
    let board = Board::startpos();
    for piece in board.pieces() {
        let reach = resolve(&board, piece.id);
        for destination in reach.squares() {
            let path = find_path_in(&board, &reach, piece.id, destination)
                .unwrap_or_else(|| panic!("no path for {} to {destination}", piece.id));
            assert_valid_hops(&board, piece.id, destination, &path);
        }
    }
}

#[test]
fn long_chain_paths_follow_hops() {
    let board = Board::startpos();
    let pawn = board.id_at(sq(0, 6)).unwrap();
    // Only the far runner reaches g3.
    let path = find_path(&board, pawn, sq(6, 5)).unwrap();
    assert_eq!(path[path.len() - 2], sq(6, 7));
    assert_valid_hops(&board, pawn, sq(6, 5), &path);
}
