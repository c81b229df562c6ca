use crate::board::{Board, GameOutcome, Player};

/// Exhaustive minimax search over a [`Board`].
///
/// The engine owns a working copy of the board for the duration of the search
/// and walks every reachable line of play to a finished game, with no pruning
/// and no heuristic scoring of unfinished positions. Each trial move is
/// applied in place and reverted before the next one, so the board is back in
/// its starting state whenever the engine returns.
pub struct MinimaxSearch<T: Board> {
    board: T,
    explored: u64,
}

impl<T: Board> MinimaxSearch<T> {
    /// Creates a new search over the given position.
    pub fn new(board: T) -> Self {
        Self { board, explored: 0 }
    }

    /// Returns the number of positions evaluated since the search was created.
    pub fn nodes_explored(&self) -> u64 {
        self.explored
    }

    /// Picks the best move for the side to move, or `None` if the game is
    /// already over.
    ///
    /// Every legal move is scored by [`evaluate`](MinimaxSearch::evaluate); the
    /// move with the strictly greatest score wins, so among equally good moves
    /// the first in enumeration order is kept.
    pub fn choose_move(&mut self) -> Option<T::Move> {
        if self.board.outcome() != GameOutcome::InProgress {
            return None;
        }

        let mut best_move = None;
        let mut best_score = i8::MIN;
        for b_move in self.board.available_moves() {
            self.board.perform_move(&b_move);
            let score = self.evaluate();
            self.board.undo_move(&b_move);
            if score > best_score {
                best_score = score;
                best_move = Some(b_move);
            }
        }

        if let Some(b_move) = &best_move {
            log::debug!(
                "minimax picked {:?} scoring {} after {} nodes",
                b_move,
                best_score,
                self.explored
            );
        }

        best_move
    }

    /// Scores the current position: +1 if the searching player can force a win,
    /// -1 if the opponent can, 0 for a draw under mutual best play.
    ///
    /// Terminal positions are scored directly, with wins and losses taking
    /// precedence over draws. Anywhere else the side to move tries every
    /// available move and keeps the extremum, maximizing for [`Player::Me`] and
    /// minimizing for [`Player::Other`]. Scores carry no depth preference: a
    /// win in two moves and a win in six are worth the same.
    pub fn evaluate(&mut self) -> i8 {
        self.explored += 1;
        match self.board.outcome() {
            GameOutcome::Win => return 1,
            GameOutcome::Lose => return -1,
            GameOutcome::Draw => return 0,
            GameOutcome::InProgress => {}
        }

        let maximizing = self.board.current_player() == Player::Me;
        let mut best = if maximizing { i8::MIN } else { i8::MAX };
        for b_move in self.board.available_moves() {
            self.board.perform_move(&b_move);
            let score = self.evaluate();
            self.board.undo_move(&b_move);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
