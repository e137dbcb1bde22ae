use log::info;
use othello_core::{legal_moves, Board, Side};
use othello_engine::{FlankingEval, OthelloAi, WeightTable};

/// Console self-play: positional evaluation as Black against the
/// flanking-bonus evaluation as White. `RUST_LOG=debug` shows the
/// engines' per-move reasoning.
fn main() {
    env_logger::init();

    let black = OthelloAi::new(4);
    let white = OthelloAi::new(4).with_evaluator(Box::new(FlankingEval::new(WeightTable::classic())));

    let mut board = Board::opening();
    let mut turn: u32 = 0;
    let mut consecutive_passes = 0;

    println!("{board}");

    while consecutive_passes < 2 && !board.is_full() {
        let side = Side::from_turn(turn);
        let moves = legal_moves(&board, side);

        if moves.is_empty() {
            info!("{side} has no legal move and passes");
            consecutive_passes += 1;
            turn += 1;
            continue;
        }
        consecutive_passes = 0;

        let ai = match side {
            Side::Black => &black,
            Side::White => &white,
        };
        let mv = ai
            .select_move(&board, &moves, turn)
            .expect("legal move set is non-empty");
        board = board
            .apply_move(mv, side)
            .expect("selected move came from the legal set");

        println!("{side} plays {mv}");
        println!("{board}");
        turn += 1;
    }

    let (black_discs, white_discs) = board.counts();
    println!("Final score - Black: {black_discs}, White: {white_discs}");
    match black_discs.cmp(&white_discs) {
        std::cmp::Ordering::Greater => println!("Black wins"),
        std::cmp::Ordering::Less => println!("White wins"),
        std::cmp::Ordering::Equal => println!("Draw"),
    }
}
