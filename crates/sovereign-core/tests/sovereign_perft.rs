//! Perft node counts for Sovereign Chess.

use sovereign_core::sovereign::{Board, STARTING_FEN, Sovereign};
use sovereign_core::{Counters, MoveError, divide, perft, perft_with_counters};

/// Starting position with a white knight on the green square h8, which hands
/// the green pieces to Player 1.
const GREEN_CONTROLLED_FEN: &str = "aqabvrvnbrbnbbbqbkbbbnbrynyrsbsq/aranvpvpbpbpbpbpbpbpbpbpypypsnsr/nbnp12opob/nqnp12opoq/crcp12rprr/cncp12rprn/gbgp12pppb/gqgp12pppq/yqyp5wn6vpvq/ybyp12vpvb/onop12npnn/orop12npnr/rqrp12cpcq/rbrp12cpcb/srsnppppwpwpwpwpwpwpwpwpgpgpanar/sqsbprpnwrwnwbwqwkwbwnwrgngrabaq";

fn board(fen: &str) -> Board {
    fen.parse().unwrap()
}

fn nodes(board: &Board, depth: usize) -> u64 {
    perft::<Sovereign>(board, depth).unwrap()
}

#[test]
fn startpos() {
    let board = Board::starting_position();
    assert_eq!(nodes(&board, 0), 1);
    assert_eq!(nodes(&board, 1), 24);
    assert_eq!(nodes(&board, 2), 576);
}

#[test]
fn startpos_depth_3() {
    assert_eq!(nodes(&board(STARTING_FEN), 3), 16_728);
}

#[test]
fn controlled_color_adds_moves() {
    let board = board(&format!("{GREEN_CONTROLLED_FEN} w"));
    assert_eq!(nodes(&board, 1), 45);
    assert_eq!(nodes(&board, 2), 1_080);
    assert_eq!(nodes(&board, 3), 51_569);
}

#[test]
fn controlled_color_second_player_to_move() {
    let board = board(&format!("{GREEN_CONTROLLED_FEN} b"));
    assert_eq!(nodes(&board, 1), 24);
    assert_eq!(nodes(&board, 2), 1_080);
    assert_eq!(nodes(&board, 3), 31_363);
}

#[test]
fn divide_startpos() {
    let results = divide::<Sovereign>(&Board::starting_position(), 2).unwrap();
    assert_eq!(results.len(), 24);
    assert!(results.iter().all(|(_, n)| *n == 24));
}

#[test]
fn counters_startpos() {
    let mut counters = Counters::new();
    let total = perft_with_counters::<Sovereign>(&Board::starting_position(), 1, &mut counters).unwrap();
    assert_eq!(total, 24);
    // Neutral pieces next to the white army are fair game: e1d1 f1d2 k1m2 l1m1.
    assert_eq!(counters.captures(), 4);
    assert_eq!(counters.quiet(), 20);
    assert_eq!(counters.promotions(), 0);
}

#[test]
fn control_cycle_aborts_perft() {
    // A green pawn on the red square e9 and a red pawn on the green square h8.
    let fen = "16/16/16/16/16/16/16/4gp11/7rp8/16/16/16/16/16/16/8wk7 w";
    assert!(matches!(
        perft::<Sovereign>(&board(fen), 1),
        Err(MoveError::Control(_))
    ));
}
