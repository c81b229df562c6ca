//! An interactive Tic-Tac-Toe game against the exhaustive minimax engine.
//!
//! The human plays X and moves first; the engine plays O. Enter moves as
//! `row col`, both coordinates between 0 and 2.

use std::io::{self, Write};

use anyhow::{Context, Result};
use minimax_lib::board::Board;
use minimax_lib::boards::tic_tac_toe::{Mark, TicTacToeBoard};
use minimax_lib::minimax::MinimaxSearch;

fn main() -> Result<()> {
    env_logger::init();

    let mut board = TicTacToeBoard::default();
    println!("You are X, the computer is O. Enter moves as `row col` (0-2).");

    loop {
        println!("{board}");

        if board.has_won(Mark::X) {
            println!("You win!");
            break;
        }
        if board.has_won(Mark::O) {
            println!("The computer wins!");
            break;
        }
        if board.is_draw() {
            println!("It's a draw!");
            break;
        }

        let b_move = match board.to_move() {
            Mark::X => read_move(&board)?,
            Mark::O => {
                let reply = MinimaxSearch::new(board.clone())
                    .choose_move()
                    .context("searching a finished game")?;
                println!("The computer plays {} {}", reply.0, reply.1);
                reply
            }
        };
        board.perform_move(&b_move);
    }

    Ok(())
}

/// Prompts until the human enters a legal move on an empty square.
fn read_move(board: &TicTacToeBoard) -> Result<(usize, usize)> {
    loop {
        print!("Your move: ");
        io::stdout().flush().context("flushing the prompt")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .read_line(&mut line)
            .context("reading a move")?;
        if bytes == 0 {
            anyhow::bail!("input closed before the game ended");
        }

        let mut parts = line.split_whitespace().map(|part| part.parse::<usize>());
        if let (Some(Ok(row)), Some(Ok(col))) = (parts.next(), parts.next()) {
            if board.available_moves().contains(&(row, col)) {
                return Ok((row, col));
            }
        }
        println!("Enter `row col` with both coordinates in 0-2, targeting an empty square.");
    }
}
