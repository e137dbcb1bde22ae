use once_cell::sync::Lazy;
use othello_core::{Board, Position, Side, BOARD_SIZE};

// Classic positional weights for 8x8 Othello.
// Corners dominate because a corner disc can never be flipped; the cells
// touching a corner are penalized because occupying them usually hands the
// corner to the opponent. Edges are moderately valuable, the center barely.
const CLASSIC_WEIGHTS: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [20, -3, 11,  8,  8, 11, -3, 20],
    [-3, -7, -4,  1,  1, -4, -7, -3],
    [11, -4,  2,  2,  2,  2, -4, 11],
    [ 8,  1,  2, -3, -3,  2,  1,  8],
    [ 8,  1,  2, -3, -3,  2,  1,  8],
    [11, -4,  2,  2,  2,  2, -4, 11],
    [-3, -7, -4,  1,  1, -4, -7, -3],
    [20, -3, 11,  8,  8, 11, -3, 20],
];

static CLASSIC_TABLE: Lazy<WeightTable> = Lazy::new(|| WeightTable::from_grid(&CLASSIC_WEIGHTS));

/// Immutable per-cell positional values, shared read-only by every search.
/// Injected into evaluators at construction so alternative tunings can be
/// swapped in without touching the search.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    values: [[f32; BOARD_SIZE]; BOARD_SIZE],
}

impl WeightTable {
    pub fn from_grid(grid: &[[i32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        let mut values = [[0.0; BOARD_SIZE]; BOARD_SIZE];
        for (row, grid_row) in grid.iter().enumerate() {
            for (col, &weight) in grid_row.iter().enumerate() {
                values[row][col] = weight as f32;
            }
        }
        Self { values }
    }

    /// The hand-tuned corner-heavy table above.
    pub fn classic() -> Self {
        CLASSIC_TABLE.clone()
    }

    pub fn get(&self, pos: Position) -> f32 {
        self.values[pos.row as usize][pos.col as usize]
    }
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::classic()
    }
}

/// Static evaluation of a board position.
///
/// Scores are side-relative: positive favors `side`, negative favors the
/// opponent, and `evaluate(board, a) == -evaluate(board, a.opponent())`.
/// Implementations must be pure and return a finite value for every
/// reachable board.
pub trait Evaluator {
    fn evaluate(&self, board: &Board, side: Side) -> f32;
}

/// Raw disc-count difference. Baseline heuristic; blind to position.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEval;

impl Evaluator for MaterialEval {
    fn evaluate(&self, board: &Board, side: Side) -> f32 {
        board.count(side) as f32 - board.count(side.opponent()) as f32
    }
}

/// Sums each side's per-cell weights and returns the difference.
#[derive(Debug, Clone, Default)]
pub struct PositionalEval {
    weights: WeightTable,
}

impl PositionalEval {
    pub fn new(weights: WeightTable) -> Self {
        Self { weights }
    }

    fn total_for(&self, board: &Board, side: Side) -> f32 {
        board
            .discs()
            .filter(|&(_, owner)| owner == side)
            .map(|(pos, _)| self.weights.get(pos))
            .sum()
    }
}

impl Evaluator for PositionalEval {
    fn evaluate(&self, board: &Board, side: Side) -> f32 {
        self.total_for(board, side) - self.total_for(board, side.opponent())
    }
}

// Scanning these four directions from every disc visits each board line
// exactly once, so no flanked run is counted twice.
const FORWARD_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Positional evaluation plus a flanking bonus: a side that owns both ends
/// of a run of opposing discs along a row, column, or diagonal is credited
/// with each interposed disc's weight, as if the run were already captured.
#[derive(Debug, Clone, Default)]
pub struct FlankingEval {
    positional: PositionalEval,
    weights: WeightTable,
}

impl FlankingEval {
    pub fn new(weights: WeightTable) -> Self {
        Self {
            positional: PositionalEval::new(weights.clone()),
            weights,
        }
    }

    fn flank_bonus(&self, board: &Board, side: Side) -> f32 {
        let mut bonus = 0.0;
        for (pos, owner) in board.discs() {
            if owner != side {
                continue;
            }
            for &(dr, dc) in FORWARD_DIRECTIONS.iter() {
                bonus += self.run_bonus(board, pos, side, dr, dc);
            }
        }
        bonus
    }

    /// Weight of the opposing run starting after `pos`, or 0.0 when the
    /// run is unterminated or empty.
    fn run_bonus(&self, board: &Board, pos: Position, side: Side, dr: i8, dc: i8) -> f32 {
        let mut run = 0.0;
        let mut cursor = pos.offset(dr, dc);

        while let Some(next) = cursor {
            match board.get(next).owner() {
                Some(owner) if owner == side.opponent() => {
                    run += self.weights.get(next);
                    cursor = next.offset(dr, dc);
                }
                Some(_) if run != 0.0 => return run,
                _ => return 0.0,
            }
        }

        0.0
    }
}

impl Evaluator for FlankingEval {
    fn evaluate(&self, board: &Board, side: Side) -> f32 {
        self.positional.evaluate(board, side) + self.flank_bonus(board, side)
            - self.flank_bonus(board, side.opponent())
    }
}
