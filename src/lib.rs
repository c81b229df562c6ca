//! A small and simple library for exhaustive minimax game-tree search.
//!
//! This library provides a generic implementation of the minimax algorithm for
//! turn-based, two-player, zero-sum games. The search is deliberately the
//! brute-force variant: every line of play is followed to a finished game and
//! scored exactly, with no pruning and no heuristics. That keeps the engine
//! simple and provably optimal for games small enough to enumerate, such as
//! the bundled Tic-Tac-Toe.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::board::Board;
//! use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_lib::minimax::MinimaxSearch;
//!
//! // X opens in a corner; the engine searches for O.
//! let mut board = TicTacToeBoard::default();
//! board.perform_move(&(0, 0));
//!
//! // Exhaustively score every reply and take the best one.
//! let mut search = MinimaxSearch::new(board);
//! let best_move = search.choose_move();
//!
//! // The centre is the only reply that holds the draw.
//! assert_eq!(best_move, Some((1, 1)));
//! ```

/// Contains the `Board` trait and related enums that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait for common games.
pub mod boards;
/// The core module of the library, containing the `MinimaxSearch` implementation.
pub mod minimax;
/// Contains traits and implementations for random number generation.
pub mod random;
