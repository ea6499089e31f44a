//! Text rendering for the terminal game.

use crate::catalog::ModelCatalog;
use crate::games::tictactoe::{Board, Mark, Outcome};
use crate::session::{MoveReport, SessionSummary};

const RULE: &str = "----------------------------------------";
const BANNER: &str = "==================================================";

/// Index guide followed by the current board.
pub fn board_with_guide(board: &Board) -> String {
    format!(
        " 0 | 1 | 2\n-----------\n 3 | 4 | 5\n-----------\n 6 | 7 | 8\n\nBoard:\n{}\n",
        board
    )
}

/// Per-move analysis block.
pub fn analysis(report: &MoveReport, model_label: &str, summary: &SessionSummary) -> String {
    let confidence = report
        .prediction
        .confidence
        .map(|c| format!(" ({:.1}% confidence)", c * 100.0))
        .unwrap_or_default();
    let verdict = if report.correct { "correct" } else { "wrong" };
    format!(
        "{rule}\n{mark} played {pos}\nModel: {model_label}\nPredicted: {predicted}{confidence}\n\
         Real: {real}\nPrediction {verdict}\nCorrect: {correct} | Wrong: {wrong}\n{rule}\n",
        rule = RULE,
        mark = report.mark,
        pos = report.position,
        predicted = report.prediction.state,
        real = report.real.state,
        correct = summary.correct,
        wrong = summary.incorrect,
    )
}

/// End-of-game summary with the result from `human`'s point of view.
pub fn summary(summary: &SessionSummary, human: Mark) -> String {
    let headline = match summary.outcome {
        Some(Outcome::Draw) => "Draw!".to_string(),
        Some(Outcome::Win(mark)) if mark == human => "You win!".to_string(),
        Some(Outcome::Win(mark)) => format!("Computer ({}) wins!", mark),
        None => "Game abandoned".to_string(),
    };
    let accuracy = if summary.total > 0 {
        format!("Accuracy: {:.2}%\n", summary.accuracy)
    } else {
        String::new()
    };
    format!(
        "{BANNER}\n{headline}\n{BANNER}\nTotal predictions: {}\nCorrect: {}\nWrong: {}\n{accuracy}{BANNER}\n",
        summary.total, summary.correct, summary.incorrect,
    )
}

/// Numbered model list with availability and historical accuracy.
pub fn catalog(catalog: &ModelCatalog) -> String {
    catalog
        .models()
        .iter()
        .enumerate()
        .map(|(idx, model)| {
            let status = if *model.available() {
                "available"
            } else {
                "not available"
            };
            let accuracy = if *model.accuracy() > 0.0 {
                format!(" accuracy {:.2}%", model.accuracy())
            } else {
                String::new()
            };
            format!(
                "{}. {} [{}] ({}){}\n",
                idx + 1,
                model.label(),
                model.id(),
                status,
                accuracy
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(outcome: Option<Outcome>) -> SessionSummary {
        SessionSummary {
            model: "rule_based".to_string(),
            total: 4,
            correct: 3,
            incorrect: 1,
            accuracy: 75.0,
            outcome,
        }
    }

    #[test]
    fn test_summary_headlines() {
        assert!(summary(&finished(Some(Outcome::Win(Mark::X))), Mark::X).contains("You win!"));
        assert!(summary(&finished(Some(Outcome::Win(Mark::O))), Mark::X).contains("Computer (O) wins!"));
        assert!(summary(&finished(Some(Outcome::Draw)), Mark::X).contains("Draw!"));
        assert!(summary(&finished(None), Mark::X).contains("Accuracy: 75.00%"));
    }

    #[test]
    fn test_catalog_lists_every_model() {
        let text = catalog(&ModelCatalog::builtin());
        assert_eq!(text.lines().count(), 5);
        assert!(text.starts_with("1. Rule-based classifier [rule_based] (available)"));
        assert!(text.contains("accuracy 82.53%"));
    }

    #[test]
    fn test_analysis_block() {
        use crate::games::tictactoe::{Classification, GameState};
        use crate::prediction::PredictionResult;

        let report = MoveReport {
            position: 4,
            mark: Mark::X,
            real: Classification {
                state: GameState::Ongoing,
                outcome: None,
            },
            prediction: PredictionResult::new(GameState::Ongoing).with_confidence(Some(0.9)),
            correct: true,
        };
        let text = analysis(&report, "MLP neural network", &finished(None));
        assert!(text.contains("X played 4\n"));
        assert!(text.contains("Predicted: Ongoing (90.0% confidence)\n"));
        assert!(text.contains("Real: Ongoing\nPrediction correct\n"));
        assert!(text.contains("Correct: 3 | Wrong: 1\n"));
        assert!(text.starts_with(RULE) && text.ends_with(&format!("{}\n", RULE)));
    }
}
