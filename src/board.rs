/// The central trait of the library, defining the interface for a game state.
///
/// To search a custom game, this trait must be implemented. It gives the engine
/// everything it needs to walk the game tree: whose turn it is, whether the game
/// is over, which moves are legal, and how to apply and revert a move.
pub trait Board: Default + Clone {
    /// The type representing a move in the game. This could be a simple index for
    /// a board position or a more complex struct for games with intricate actions.
    type Move: Copy + std::fmt::Debug;

    /// Returns the player whose turn it is to make a move.
    fn current_player(&self) -> Player;

    /// Returns the current outcome of the game.
    ///
    /// Implementations must report a win or a loss before reporting a draw: a
    /// board that is simultaneously full and won counts as won.
    fn outcome(&self) -> GameOutcome;

    /// Returns every legal move available from the current state, in a stable
    /// deterministic order. Ties between equally good moves are broken by this
    /// order, so two calls on the same state must yield the same sequence.
    fn available_moves(&self) -> Vec<Self::Move>;

    /// Applies a given move to the board, modifying its state and flipping the
    /// turn. Applying a move that is not legal in the current state is a no-op.
    fn perform_move(&mut self, b_move: &Self::Move);

    /// Reverts a move, restoring the board to the state it had before the
    /// matching [`perform_move`](Board::perform_move). Only the most recently
    /// performed move may be undone.
    fn undo_move(&mut self, b_move: &Self::Move);
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The searching player has won.
    Win,
    /// The searching player has lost.
    Lose,
    /// The game has ended in a draw.
    Draw,
}

/// Represents the players in the game from the perspective of the search.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Player {
    /// The player the engine is choosing a move for.
    Me,
    /// The opponent.
    Other,
}
