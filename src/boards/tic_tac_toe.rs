use crate::board::{Board, GameOutcome, Player};
use std::fmt;

/// The two marks that can occupy a cell.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the opposing side.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// The eight winning lines of the 3x3 grid: three rows, three columns, two diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The grid is a 9-element array in row-major order, one cell per element.
/// A move is a `(row, col)` pair with both coordinates in `0..=2`. X always
/// moves first; which mark the engine searches for is fixed at construction.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct TicTacToeBoard {
    engine_player: Mark,
    turn: Mark,
    cells: [Option<Mark>; 9],
}

impl TicTacToeBoard {
    /// Creates an empty board on which the engine will play `engine_player`.
    pub fn new(engine_player: Mark) -> Self {
        Self {
            engine_player,
            turn: Mark::X,
            cells: [None; 9],
        }
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.turn
    }

    /// Returns the mark occupying the given cell, or `None` if it is empty.
    pub fn mark_at(&self, row: usize, col: usize) -> Option<Mark> {
        self.cells[row * 3 + col]
    }

    /// Returns true iff any of the eight lines is fully occupied by `mark`.
    pub fn has_won(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&ix| self.cells[ix] == Some(mark)))
    }

    /// Returns true iff no cell is empty.
    ///
    /// Says nothing about winners: a full board can still hold a completed
    /// line, so check [`has_won`](TicTacToeBoard::has_won) for both marks
    /// before classifying the end of a game as a draw.
    pub fn is_draw(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }
}

impl Default for TicTacToeBoard {
    /// Creates a board where the human side plays X and the engine searches
    /// for O, as in the bundled demo.
    fn default() -> Self {
        TicTacToeBoard::new(Mark::O)
    }
}

impl Board for TicTacToeBoard {
    type Move = (usize, usize);

    fn current_player(&self) -> Player {
        if self.turn == self.engine_player {
            Player::Me
        } else {
            Player::Other
        }
    }

    fn outcome(&self) -> GameOutcome {
        for mark in [Mark::X, Mark::O] {
            if self.has_won(mark) {
                return if mark == self.engine_player {
                    GameOutcome::Win
                } else {
                    GameOutcome::Lose
                };
            }
        }

        if self.is_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    fn available_moves(&self) -> Vec<Self::Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(ix, _)| (ix / 3, ix % 3))
            .collect()
    }

    fn perform_move(&mut self, &(row, col): &Self::Move) {
        if self.cells[row * 3 + col].is_some() {
            return;
        }

        self.cells[row * 3 + col] = Some(self.turn);
        self.turn = self.turn.opponent();
    }

    fn undo_move(&mut self, &(row, col): &Self::Move) {
        if self.cells[row * 3 + col].is_none() {
            return;
        }

        self.cells[row * 3 + col] = None;
        self.turn = self.turn.opponent();
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let glyph = match self.mark_at(row, col) {
                    None => ".",
                    Some(Mark::X) => "X",
                    Some(Mark::O) => "O",
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
