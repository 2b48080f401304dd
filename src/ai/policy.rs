use crate::error::PolicyError;
use crate::game::Board;

/// Interface for automated opponents.
///
/// Choosing a column never touches the board; the driver decides when to
/// apply the move through the session, so "what the opponent would play"
/// can be computed ahead of the response delay the driver owns.
pub trait Policy {
    /// Select a column to play on the given board.
    fn choose_column(&mut self, board: &Board) -> Result<usize, PolicyError>;

    /// Return the policy's display name.
    fn name(&self) -> &str;
}
