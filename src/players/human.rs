//! Human player reading positions from a line-based input.

use super::Player;
use crate::error::{CoreError, CoreErrorKind};
use crate::games::tictactoe::{BOARD_SIZE, Board};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, instrument};

/// Parses one line of user input into a board position.
///
/// Accepts an integer in `0..=8` with surrounding whitespace.
#[instrument]
pub fn parse_position(input: &str) -> Result<usize, CoreError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| {
        CoreError::new(
            CoreErrorKind::InvalidInput,
            format!("'{}' is not a number from 0 to 8", trimmed),
        )
    })?;
    if !(0..BOARD_SIZE as i64).contains(&value) {
        return Err(CoreError::new(
            CoreErrorKind::InvalidInput,
            format!("{} is outside 0-8", value),
        ));
    }
    Ok(value as usize)
}

/// Human player prompting on stdout and reading from `R`.
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R: AsyncBufRead + Unpin + Send> HumanPlayer<R> {
    /// Creates a human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }

    /// Reads one raw line, failing when input is exhausted.
    pub async fn read_line(&mut self) -> Result<String> {
        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => anyhow::bail!("Input closed"),
        }
    }
}

#[async_trait::async_trait]
impl<R: AsyncBufRead + Unpin + Send> Player for HumanPlayer<R> {
    async fn get_move(&mut self, board: &Board) -> Result<usize> {
        loop {
            println!("Your turn ({}): enter a position (0-8): ", self.name);
            let line = self.read_line().await?;

            match parse_position(&line) {
                Ok(pos) if board.is_legal_move(pos) => {
                    debug!(position = pos, "Human chose position");
                    return Ok(pos);
                }
                Ok(pos) => println!("Square {} is taken. Pick an empty one.", pos),
                Err(e) => println!("Invalid input: {}", e.message),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_parse_position() {
        assert_eq!(parse_position(" 4 ").unwrap(), 4);
        assert_eq!(parse_position("0").unwrap(), 0);
        assert!(parse_position("9").is_err());
        assert!(parse_position("-1").is_err());
        assert!(parse_position("center").is_err());
        assert!(parse_position("").is_err());
    }

    #[tokio::test]
    async fn test_skips_invalid_and_taken_input() {
        let mut board = Board::new();
        board.apply_move(4, Mark::O).unwrap();
        let input: &[u8] = b"abc\n4\n12\n7\n";
        let mut player = HumanPlayer::new("X", input);
        assert_eq!(player.get_move(&board).await.unwrap(), 7);
    }

    #[tokio::test]
    async fn test_closed_input_is_error() {
        let input: &[u8] = b"";
        let mut player = HumanPlayer::new("X", input);
        assert!(player.get_move(&Board::new()).await.is_err());
    }
}
