use crate::oracle::RulesOracle;

/// Pure perft node count.
/// Counts all legal positions from the current one down to `depth`, walking
/// the tree through the oracle's apply/undo pair.
pub fn perft<R: RulesOracle>(oracle: &mut R, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = oracle.legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        oracle.apply(mv);
        nodes += perft(oracle, depth - 1);
        oracle.undo();
    }
    nodes
}

