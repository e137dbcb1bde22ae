use log::{debug, trace};
use othello_core::{Board, Position, Side};
use thiserror::Error;

use crate::evaluation::{Evaluator, PositionalEval};
use crate::search::{minimax, negamax, ALPHA_INIT, BETA_INIT};

const MIN_DEPTH: u8 = 1;
const MAX_DEPTH: u8 = 8; // Branching factor makes deeper fixed searches impractical
const DEFAULT_DEPTH: u8 = 4;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// The caller asked for a move with an empty legal-move set. The
    /// turn-management layer must never do this; failing fast beats
    /// returning an undefined move.
    #[error("no legal moves to choose from")]
    NoLegalMoves,
}

/// Top-level move selector: fixed search depth plus a pluggable
/// evaluation strategy.
pub struct OthelloAi {
    depth: u8,
    evaluator: Box<dyn Evaluator>,
}

impl OthelloAi {
    pub fn new(depth: u8) -> Self {
        OthelloAi {
            depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
            evaluator: Box::new(PositionalEval::default()),
        }
    }

    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Picks the best of `legal_moves` for the side whose turn it is.
    ///
    /// Each candidate is applied and the resulting position searched with
    /// the remaining depth budget; candidates are compared with strict
    /// `>`, so the first of equal-scoring moves wins. The candidate order
    /// is the generator's and must be stable for reproducible play.
    pub fn select_move(
        &self,
        board: &Board,
        legal_moves: &[Position],
        turn: u32,
    ) -> Result<Position, EngineError> {
        if legal_moves.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        let side = Side::from_turn(turn);
        let mut best_move = legal_moves[0];
        let mut best_score = ALPHA_INIT;

        for &mv in legal_moves {
            if let Ok(child) = board.apply_move(mv, side) {
                let score = minimax(
                    &child,
                    self.depth - 1,
                    ALPHA_INIT,
                    BETA_INIT,
                    turn + 1,
                    side,
                    self.evaluator.as_ref(),
                );
                trace!("candidate {mv}: {score}");
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
            }
        }

        debug!("{side} selects {best_move} (score {best_score}, depth {})", self.depth);
        Ok(best_move)
    }

    /// Convenience entry point driving the negamax root directly; the
    /// engine generates the legal moves itself. Note the tie-break
    /// differs from `select_move`: negamax prefers later candidates.
    pub fn choose_move(&self, board: &Board, turn: u32) -> Result<Position, EngineError> {
        let (score, best) = negamax(
            board,
            self.depth,
            ALPHA_INIT,
            BETA_INIT,
            turn,
            self.evaluator.as_ref(),
        );
        match best {
            Some(mv) => {
                debug!("{} chooses {mv} (score {score})", Side::from_turn(turn));
                Ok(mv)
            }
            None => Err(EngineError::NoLegalMoves),
        }
    }
}

impl Default for OthelloAi {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}
