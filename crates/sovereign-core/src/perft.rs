//! Perft (performance test) for move generation correctness verification.

use crate::counters::Counters;
use crate::error::MoveError;
use crate::rules::Rules;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves (bulk-counting optimization: no recursive make_move).
pub fn perft<R: Rules>(board: &R::Board, depth: usize) -> Result<u64, MoveError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = R::legal_moves(board)?;

    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut child = board.clone();
        R::make_move(&mut child, mv)?;
        nodes += perft::<R>(&child, depth - 1)?;
    }
    Ok(nodes)
}

/// Count leaf nodes like [`perft`], recording every applied move in `counters`.
///
/// No bulk counting: every move on every ply is applied, so the counters
/// describe all `depth` plies of the tree.
pub fn perft_with_counters<R: Rules>(
    board: &R::Board,
    depth: usize,
    counters: &mut Counters,
) -> Result<u64, MoveError> {
    if depth == 0 {
        return Ok(1);
    }

    let mut nodes = 0u64;
    for mv in R::legal_moves(board)? {
        let mut child = board.clone();
        counters.record(R::make_move(&mut child, mv)?);
        nodes += perft_with_counters::<R>(&child, depth - 1, counters)?;
    }
    Ok(nodes)
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move_text, node_count)` pairs sorted alphabetically.
pub fn divide<R: Rules>(board: &R::Board, depth: usize) -> Result<Vec<(String, u64)>, MoveError> {
    let mut results = Vec::new();
    for mv in R::legal_moves(board)? {
        let mut child = board.clone();
        R::make_move(&mut child, mv)?;
        let count = if depth <= 1 {
            1
        } else {
            perft::<R>(&child, depth - 1)?
        };
        results.push((mv.to_string(), count));
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(results)
}
