use othello_core::{moves, Board, Position, Side};

use crate::evaluation::Evaluator;

/// Initial search window bounds. IEEE infinities, so the first finite
/// score always tightens the window.
pub const ALPHA_INIT: f32 = f32::NEG_INFINITY;
pub const BETA_INIT: f32 = f32::INFINITY;

/// Depth-limited minimax with alpha-beta pruning.
///
/// Scores are absolute for the whole call tree: the evaluation is always
/// taken from `max_side`'s perspective, the side whose turn parity matches
/// `turn` maximizes, the other minimizes. The cutoff test `alpha >= beta`
/// runs after every bound update, at every node; pruning only skips
/// subtrees that cannot change the returned value.
///
/// A node is terminal when the depth budget is spent or the side to move
/// has no legal move; it returns the evaluator's value for the board.
pub fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: f32,
    mut beta: f32,
    turn: u32,
    max_side: Side,
    evaluator: &dyn Evaluator,
) -> f32 {
    let side = Side::from_turn(turn);
    let candidates = moves::legal_moves(board, side);
    if depth == 0 || candidates.is_empty() {
        return evaluator.evaluate(board, max_side);
    }

    if side == max_side {
        let mut value = ALPHA_INIT;
        for mv in candidates {
            if let Ok(child) = board.apply_move(mv, side) {
                value = value.max(minimax(
                    &child,
                    depth - 1,
                    alpha,
                    beta,
                    turn + 1,
                    max_side,
                    evaluator,
                ));
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
        }
        value
    } else {
        let mut value = BETA_INIT;
        for mv in candidates {
            if let Ok(child) = board.apply_move(mv, side) {
                value = value.min(minimax(
                    &child,
                    depth - 1,
                    alpha,
                    beta,
                    turn + 1,
                    max_side,
                    evaluator,
                ));
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
        }
        value
    }
}

/// Negamax formulation of the same search.
///
/// Every return value is scored from the perspective of the side to move
/// at that node; a parent negates the child's score and searches children
/// with the negated, swapped window `(-beta, -alpha)`. Leaves pair the
/// side-relative evaluation with `None` since no move produced them.
///
/// Ties between equal-scoring moves prefer the later-enumerated one: the
/// comparison is `score >= best_score` by policy, not accident.
pub fn negamax(
    board: &Board,
    depth: u8,
    mut alpha: f32,
    beta: f32,
    turn: u32,
    evaluator: &dyn Evaluator,
) -> (f32, Option<Position>) {
    let side = Side::from_turn(turn);
    let candidates = moves::legal_moves(board, side);
    if depth == 0 || candidates.is_empty() {
        return (evaluator.evaluate(board, side), None);
    }

    let mut best_score = ALPHA_INIT;
    let mut best_move = None;

    for mv in candidates {
        if let Ok(child) = board.apply_move(mv, side) {
            let (child_score, _) = negamax(&child, depth - 1, -beta, -alpha, turn + 1, evaluator);
            let score = -child_score;

            if score >= best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
            if alpha >= beta {
                break;
            }
        }
    }

    (best_score, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{MaterialEval, PositionalEval};
    use othello_core::Cell;

    // Plain minimax with the window pinned wide open: the reference the
    // pruning search must agree with.
    fn exhaustive_minimax(
        board: &Board,
        depth: u8,
        turn: u32,
        max_side: Side,
        evaluator: &dyn Evaluator,
    ) -> f32 {
        let side = Side::from_turn(turn);
        let candidates = moves::legal_moves(board, side);
        if depth == 0 || candidates.is_empty() {
            return evaluator.evaluate(board, max_side);
        }

        let scores = candidates.into_iter().filter_map(|mv| {
            board
                .apply_move(mv, side)
                .ok()
                .map(|child| exhaustive_minimax(&child, depth - 1, turn + 1, max_side, evaluator))
        });

        if side == max_side {
            scores.fold(ALPHA_INIT, f32::max)
        } else {
            scores.fold(BETA_INIT, f32::min)
        }
    }

    #[test]
    fn depth_zero_returns_the_raw_evaluation() {
        let board = Board::opening();
        let evaluator = PositionalEval::default();
        let expected = evaluator.evaluate(&board, Side::Black);
        assert_eq!(
            minimax(&board, 0, ALPHA_INIT, BETA_INIT, 0, Side::Black, &evaluator),
            expected
        );
        assert_eq!(
            negamax(&board, 0, ALPHA_INIT, BETA_INIT, 0, &evaluator),
            (expected, None)
        );
    }

    #[test]
    fn no_legal_moves_is_terminal_at_any_depth() {
        let board = Board::new();
        let evaluator = MaterialEval;
        assert_eq!(
            minimax(&board, 5, ALPHA_INIT, BETA_INIT, 0, Side::Black, &evaluator),
            0.0
        );
        assert_eq!(
            negamax(&board, 5, ALPHA_INIT, BETA_INIT, 0, &evaluator),
            (0.0, None)
        );
    }

    #[test]
    fn pruning_preserves_the_exhaustive_score() {
        let board = Board::opening();
        let evaluator = PositionalEval::default();
        for depth in 1..=4 {
            assert_eq!(
                minimax(&board, depth, ALPHA_INIT, BETA_INIT, 0, Side::Black, &evaluator),
                exhaustive_minimax(&board, depth, 0, Side::Black, &evaluator),
                "depth {depth}"
            );
        }
    }

    #[test]
    fn pruning_preserves_the_score_off_the_opening() {
        let board = Board::opening()
            .apply_move(Position { row: 2, col: 3 }, Side::Black)
            .unwrap();
        let evaluator = PositionalEval::default();
        for depth in 1..=4 {
            assert_eq!(
                minimax(&board, depth, ALPHA_INIT, BETA_INIT, 1, Side::White, &evaluator),
                exhaustive_minimax(&board, depth, 1, Side::White, &evaluator),
                "depth {depth}"
            );
        }
    }

    #[test]
    fn negamax_agrees_with_minimax_at_the_root() {
        let board = Board::opening();
        let evaluator = PositionalEval::default();
        for depth in 1..=4 {
            let minimax_score =
                minimax(&board, depth, ALPHA_INIT, BETA_INIT, 0, Side::Black, &evaluator);
            let (negamax_score, best) = negamax(&board, depth, ALPHA_INIT, BETA_INIT, 0, &evaluator);
            assert_eq!(negamax_score, minimax_score, "depth {depth}");
            assert!(best.is_some(), "depth {depth}");
        }
    }

    #[test]
    fn negamax_root_move_is_legal() {
        let board = Board::opening();
        let (_, best) = negamax(&board, 3, ALPHA_INIT, BETA_INIT, 0, &PositionalEval::default());
        let legal = moves::legal_moves(&board, Side::Black);
        assert!(legal.contains(&best.unwrap()));
    }

    #[test]
    fn negamax_ties_prefer_the_later_move() {
        // At depth 1 with material evaluation every opening reply scores 3,
        // so the last move in generation order wins the tie.
        let board = Board::opening();
        let (score, best) = negamax(&board, 1, ALPHA_INIT, BETA_INIT, 0, &MaterialEval);
        assert_eq!(score, 3.0);
        assert_eq!(best, Some(Position { row: 5, col: 4 }));
    }

    #[test]
    fn minimax_sees_one_ply_ahead_of_the_evaluation() {
        // Black to move, single capture available: depth 1 must score the
        // successor, not the current board.
        let mut board = Board::new();
        board.set(Position { row: 0, col: 2 }, Cell::Black);
        board.set(Position { row: 0, col: 3 }, Cell::White);
        let evaluator = MaterialEval;
        // Playing (0,4) yields three black discs, no white.
        assert_eq!(
            minimax(&board, 1, ALPHA_INIT, BETA_INIT, 0, Side::Black, &evaluator),
            3.0
        );
    }
}
