//! Move sources for the two sides of a game.

mod human;
mod random;

pub use human::{HumanPlayer, parse_position};
pub use random::RandomPlayer;

use crate::games::tictactoe::Board;
use anyhow::Result;

/// Something that picks the next square to play.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns the position (0-8) for the next move.
    async fn get_move(&mut self, board: &Board) -> Result<usize>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
