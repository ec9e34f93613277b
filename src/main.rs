use anyhow::{Context, Result};
use rand::seq::SliceRandom;

use chess_rules::board::{Board, Color, Square};
use chess_rules::movegen::{self, BoardStatus};

// Random self-play demo. Drives the engine exactly the way a front end
// would: turn tracking and the en passant marker live out here and get
// threaded through every call.
const MAX_PLIES: u32 = 200;

fn main() -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut board = Board::new();
    let mut to_move = Color::White;
    let mut en_passant: Option<Square> = None;

    for ply in 1..=MAX_PLIES {
        match movegen::board_status(&board, to_move, en_passant)? {
            BoardStatus::InPlay => {}
            status => {
                println!("{}", board);
                report(status);
                return Ok(());
            }
        }

        let moves = movegen::legal_moves(&board, to_move, en_passant)?;
        let mv = moves
            .choose(&mut rng)
            .context("an in-play position must offer a legal move")?;
        let outcome = board.apply_move(mv.from, mv.to, en_passant)?;

        match outcome.captured {
            Some(piece) => println!("{:3}. {}: {} {} takes {}", ply, to_move, mv.from, mv.to, piece.to_char()),
            None => println!("{:3}. {}: {} {}", ply, to_move, mv.from, mv.to),
        }

        board = outcome.board;
        en_passant = outcome.en_passant;
        to_move = to_move.opposite();
    }

    println!("{}", board);
    println!("no result after {} plies", MAX_PLIES);
    Ok(())
}

fn report(status: BoardStatus) {
    match status {
        BoardStatus::WhiteWins => println!("checkmate, white wins"),
        BoardStatus::BlackWins => println!("checkmate, black wins"),
        BoardStatus::Stalemate => println!("stalemate"),
        BoardStatus::InPlay => {}
    }
}
