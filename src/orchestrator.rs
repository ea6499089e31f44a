//! Game orchestration between players.

use crate::error::CoreErrorKind;
use crate::games::tictactoe::Mark;
use crate::players::Player;
use crate::render;
use crate::session::{GameSession, SessionSummary};
use anyhow::Result;
use tracing::{debug, info, warn};

/// Drives one session, asking each player for moves in turn.
///
/// Players are borrowed so the same input source can serve several games.
pub struct Orchestrator {
    session: GameSession,
    model_label: String,
    echo: bool,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(session: GameSession, model_label: impl Into<String>) -> Self {
        Self {
            session,
            model_label: model_label.into(),
            echo: true,
        }
    }

    /// Disables printing of the board and analysis.
    pub fn quiet(mut self) -> Self {
        self.echo = false;
        self
    }

    /// Returns the session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Runs the game loop until the session finishes.
    pub async fn run(
        &mut self,
        player_x: &mut dyn Player,
        player_o: &mut dyn Player,
    ) -> Result<SessionSummary> {
        info!(model = %self.session.model_id(), "Starting game orchestration");

        while !self.session.is_finished() {
            if self.echo {
                println!("{}", render::board_with_guide(self.session.board()));
            }

            let player: &mut dyn Player = match self.session.current_mark() {
                Mark::X => &mut *player_x,
                Mark::O => &mut *player_o,
            };

            debug!(player = %player.name(), "Waiting for move");
            let position = player.get_move(self.session.board()).await?;

            let report = match self.session.play_move(position).await {
                Ok(report) => report,
                Err(e) if e.kind() == CoreErrorKind::IllegalMove => {
                    warn!(error = %e, "Player proposed an illegal move, asking again");
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if self.echo {
                let summary = self.session.summary();
                println!("{}", render::analysis(&report, &self.model_label, &summary));
            }
        }

        if self.echo {
            println!("{}", render::board_with_guide(self.session.board()));
        }
        Ok(self.session.summary())
    }
}
