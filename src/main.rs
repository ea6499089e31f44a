//! Tic-tac-toe state oracle - CLI
//!
//! Plays tic-tac-toe in the terminal while a model predicts the game state.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::sync::Arc;
use std::time::Duration;
use tictactoe_oracle::{
    AppConfig, Board, GameSession, HumanPlayer, Mark, ModelCatalog, Oracle, Orchestrator,
    ProcessOracle, RULE_BASED_MODEL, RandomPlayer, build_provider, classify, render,
};
use tokio::io::{BufReader, Stdin};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    let oracle: Arc<dyn Oracle> = Arc::new(ProcessOracle::new(config.oracle().clone()));

    match cli.command {
        None => run_play(config, oracle, None).await,
        Some(Command::Play { model, delay_ms }) => {
            let config = match delay_ms {
                Some(delay_ms) => config.with_computer_delay_ms(delay_ms),
                None => config,
            };
            run_play(config, oracle, model).await
        }
        Some(Command::Models) => run_models(oracle).await,
        Some(Command::Classify { board, model }) => run_classify(oracle, &board, &model).await,
    }
}

/// Logs go to stderr so they do not interleave with the board.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the config file and applies command-line overrides.
#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&cli.config)?;

    if let Some(command) = cli.oracle_command_parts() {
        info!(?command, "Overriding oracle command");
        config = config.with_oracle_command(command);
    }

    Ok(config)
}

/// Interactive games until the player declines another.
async fn run_play(
    config: AppConfig,
    oracle: Arc<dyn Oracle>,
    model: Option<String>,
) -> Result<()> {
    let catalog = ModelCatalog::probed(oracle.as_ref()).await;

    let mut human = HumanPlayer::new("X", BufReader::new(tokio::io::stdin()));

    println!("{}", "=".repeat(60));
    println!("Tic-tac-toe with game-state prediction");
    println!("{}", "=".repeat(60));

    let (default_model, rejected) = catalog.select_or_keep(config.default_model(), RULE_BASED_MODEL);
    if let Some(e) = rejected {
        println!("Warning: {}", e.message);
    }

    let model_id = match model {
        Some(requested) => {
            let (id, rejected) = catalog.select_or_keep(&requested, &default_model);
            if let Some(e) = rejected {
                println!("Warning: {}, using {}", e.message, catalog.label_of(&id));
            }
            id
        }
        None => prompt_model(&catalog, &default_model, &mut human).await?,
    };
    let model_label = catalog.label_of(&model_id).to_string();

    let delay = Duration::from_millis(*config.computer_delay_ms());
    let mut computer = RandomPlayer::new("O").with_delay(delay);

    loop {
        println!("You are X, the computer is O. Enter a number from 0 to 8.");
        println!("Prediction model: {}", model_label);

        let session = GameSession::new(build_provider(&model_id, oracle.clone()));
        let mut orchestrator = Orchestrator::new(session, model_label.clone());
        let summary = orchestrator.run(&mut human, &mut computer).await?;
        println!("{}", render::summary(&summary, Mark::X));

        println!("Play again? (y/n): ");
        let answer = match human.read_line().await {
            Ok(line) => line.trim().to_lowercase(),
            Err(_) => break,
        };
        if answer != "y" && answer != "yes" {
            break;
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Shows the catalog and reads a choice; Enter keeps `default_model`.
async fn prompt_model(
    catalog: &ModelCatalog,
    default_model: &str,
    human: &mut HumanPlayer<BufReader<Stdin>>,
) -> Result<String> {
    println!("Prediction models:");
    print!("{}", render::catalog(catalog));
    println!("Choose a model (number) or press Enter for the default: ");

    let input = human.read_line().await?;
    let (id, rejected) = catalog.select_by_choice(&input, default_model);
    if let Some(e) = rejected {
        println!("Warning: {}, using {}", e.message, catalog.label_of(&id));
    }
    println!("Selected model: {}", catalog.label_of(&id));
    Ok(id)
}

/// Prints the catalog after probing the oracle.
async fn run_models(oracle: Arc<dyn Oracle>) -> Result<()> {
    let catalog = ModelCatalog::probed(oracle.as_ref()).await;
    print!("{}", render::catalog(&catalog));
    Ok(())
}

/// One-shot classification of a board given on the command line.
async fn run_classify(oracle: Arc<dyn Oracle>, board: &str, model: &str) -> Result<()> {
    let board = Board::from_csv(board)?;

    let catalog = ModelCatalog::probed(oracle.as_ref()).await;
    let (model_id, rejected) = catalog.select_or_keep(model, RULE_BASED_MODEL);
    if let Some(e) = rejected {
        println!("Warning: {}, using {}", e.message, catalog.label_of(&model_id));
    }

    let real = classify(&board);
    let prediction = build_provider(&model_id, oracle).predict(&board).await;

    println!("{}\n", board);
    match real.outcome {
        Some(outcome) => println!("Real state: {} ({})", real.state, outcome),
        None => println!("Real state: {}", real.state),
    }
    println!("Predicted by {}: {}", catalog.label_of(&model_id), prediction.state);
    if let Some(confidence) = prediction.confidence {
        println!("Confidence: {:.1}%", confidence * 100.0);
    }
    Ok(())
}
