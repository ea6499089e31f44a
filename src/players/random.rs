//! Computer player choosing uniformly among empty squares.

use super::Player;
use crate::games::tictactoe::Board;
use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::time::Duration;
use tracing::debug;

/// Picks a random empty square, optionally after a short pause.
pub struct RandomPlayer {
    name: String,
    rng: StdRng,
    delay: Duration,
}

impl RandomPlayer {
    /// Creates a random player seeded from the OS.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::from_entropy(),
            delay: Duration::ZERO,
        }
    }

    /// Creates a reproducible random player.
    pub fn with_seed(name: impl Into<String>, seed: u64) -> Self {
        Self {
            name: name.into(),
            rng: StdRng::seed_from_u64(seed),
            delay: Duration::ZERO,
        }
    }

    /// Pause before each move, to simulate thinking.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait::async_trait]
impl Player for RandomPlayer {
    async fn get_move(&mut self, board: &Board) -> Result<usize> {
        let Some(&pos) = board.empty_positions().choose(&mut self.rng) else {
            anyhow::bail!("No valid moves available")
        };

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        debug!(player = %self.name, position = pos, "Computer chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[tokio::test]
    async fn test_only_picks_empty_squares() {
        let mut board = Board::new();
        for pos in [0, 1, 2, 3, 5, 6, 7, 8] {
            board.apply_move(pos, Mark::X).unwrap();
        }
        let mut player = RandomPlayer::with_seed("O", 7);
        for _ in 0..10 {
            assert_eq!(player.get_move(&board).await.unwrap(), 4);
        }
    }

    #[tokio::test]
    async fn test_full_board_is_error() {
        let board = Board::from_csv("x,o,x,o,x,x,o,x,o").unwrap();
        let mut player = RandomPlayer::with_seed("O", 1);
        assert!(player.get_move(&board).await.is_err());
    }
}
