//! Solution simplification: collapse adjacent same-face turns into a single
//! turn (or delete the pair entirely) by adding their `Move::value()`s mod
//! 4. This is the analogue of the teacher's own same-face/opposite-face
//! skip checks in its search loop, applied here as a standalone pass over
//! the finished phase-by-phase solution rather than as a mid-search prune.

use crate::moves::Move;

/// Repeatedly merges adjacent same-face turns until no further merge is
/// possible. A single pass can produce a new adjacency (e.g. `R R' R` loses
/// its middle pair and leaves `R` next to nothing, fine, but `R U U' R'`
/// after dropping the middle pair becomes `R R'`, which must merge too), so
/// this keeps folding left-to-right until the output stops changing.
pub fn simplify(moves: &[Move]) -> Vec<Move> {
    let mut current = moves.to_vec();
    loop {
        let folded = fold_once(&current);
        if folded == current {
            return folded;
        }
        current = folded;
    }
}

fn fold_once(moves: &[Move]) -> Vec<Move> {
    let mut out: Vec<Move> = Vec::with_capacity(moves.len());
    for &m in moves {
        match out.last().copied() {
            Some(prev) if prev.is_same_face(m) => {
                out.pop();
                if let Some(combined) = Move::from_face_value(prev.face, prev.value() + m.value()) {
                    out.push(combined);
                }
            }
            _ => out.push(m),
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::{Face, Variant};
    use crate::scramble::scramble_from_str;
    use crate::state::CubeState;

    fn apply_all(moves: &[Move]) -> CubeState {
        let mut s = CubeState::new_solved();
        s.apply_turns(moves);
        s
    }

    #[test]
    fn merges_two_quarters_into_a_half() {
        let input = scramble_from_str("R R").unwrap();
        assert_eq!(simplify(&input), vec![Move::new(Face::R, Variant::Half)]);
    }

    #[test]
    fn cancels_a_quarter_with_its_inverse() {
        let input = scramble_from_str("R R'").unwrap();
        assert!(simplify(&input).is_empty());
    }

    #[test]
    fn folds_across_a_cancelled_middle_pair() {
        let input = scramble_from_str("R U U' R'").unwrap();
        assert!(simplify(&input).is_empty());
    }

    #[test]
    fn leaves_non_adjacent_same_face_turns_alone() {
        let input = scramble_from_str("R U R").unwrap();
        assert_eq!(simplify(&input), input);
    }

    #[test]
    fn simplify_is_idempotent() {
        let input = scramble_from_str("R R U U' R' R' F F F").unwrap();
        let once = simplify(&input);
        let twice = simplify(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn simplification_preserves_resulting_state() {
        let input = scramble_from_str("R R U U' R' R' F F F L L' L' B2 B2").unwrap();
        let simplified = simplify(&input);
        assert_eq!(apply_all(&input), apply_all(&simplified));
    }
}
