//! Catalog of prediction models and their availability.

use crate::config::RULE_BASED_MODEL;
use crate::error::{CoreError, CoreErrorKind};
use crate::oracle::Oracle;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Static description of one prediction model.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, new)]
pub struct ModelDescriptor {
    /// Identifier sent to the oracle.
    id: String,
    /// Name shown to players.
    label: String,
    /// Historical accuracy in percent; 0 when unknown.
    accuracy: f64,
    /// Whether the model can be queried on this host.
    available: bool,
}

/// Known models, with availability probed once per session.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
pub struct ModelCatalog {
    models: Vec<ModelDescriptor>,
}

impl ModelCatalog {
    /// Catalog with the built-in entries. Only the rule-based model is
    /// available until [`ModelCatalog::probe`] runs.
    pub fn builtin() -> Self {
        let entry = |id: &str, label: &str, accuracy: f64| {
            ModelDescriptor::new(id.to_string(), label.to_string(), accuracy, id == RULE_BASED_MODEL)
        };
        Self {
            models: vec![
                entry(RULE_BASED_MODEL, "Rule-based classifier", 0.0),
                entry("mlp", "MLP neural network", 82.53),
                entry("random_forest", "Random forest", 75.96),
                entry("knn", "k-nearest neighbors (k=7)", 72.22),
                entry("decision_tree", "Decision tree", 66.68),
            ],
        }
    }

    /// Built-in catalog with availability already probed through `oracle`.
    pub async fn probed(oracle: &dyn Oracle) -> Self {
        let mut catalog = Self::builtin();
        catalog.probe(oracle).await;
        catalog
    }

    /// Marks entries available when `available` lists them.
    ///
    /// The rule-based model stays available regardless.
    #[instrument(skip(self))]
    pub fn mark_available(&mut self, available: &[String]) {
        for model in &mut self.models {
            model.available =
                model.id == RULE_BASED_MODEL || available.iter().any(|id| *id == model.id);
        }
    }

    /// Asks the oracle which models exist and updates availability.
    ///
    /// An unreachable oracle leaves only the rule-based model available.
    #[instrument(skip(self, oracle))]
    pub async fn probe(&mut self, oracle: &dyn Oracle) {
        match oracle.available_models().await {
            Ok(available) => {
                info!(?available, "Model availability probed");
                self.mark_available(&available);
            }
            Err(e) => {
                warn!(error = %e, "Trained models not available");
                self.mark_available(&[]);
            }
        }
    }

    /// Looks up a model by identifier.
    pub fn get(&self, id: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.id == id)
    }

    /// Models that can currently be selected.
    pub fn available(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.iter().filter(|m| m.available)
    }

    /// Validates that `id` is known and available.
    #[instrument(skip(self))]
    pub fn select(&self, id: &str) -> Result<&ModelDescriptor, CoreError> {
        let model = self.get(id).ok_or_else(|| {
            CoreError::new(
                CoreErrorKind::InvalidModelSelection,
                format!("Unknown model '{}'", id),
            )
        })?;
        if !model.available {
            return Err(CoreError::new(
                CoreErrorKind::InvalidModelSelection,
                format!("Model '{}' is not available", id),
            ));
        }
        Ok(model)
    }

    /// Selects `requested`, keeping `current` when the request is invalid.
    ///
    /// Returns the identifier in effect and the rejection, if any.
    #[instrument(skip(self))]
    pub fn select_or_keep(&self, requested: &str, current: &str) -> (String, Option<CoreError>) {
        match self.select(requested) {
            Ok(model) => (model.id.clone(), None),
            Err(e) => {
                warn!(error = %e, current, "Keeping previously selected model");
                (current.to_string(), Some(e))
            }
        }
    }

    /// Interprets a menu answer: empty keeps `current`, otherwise a
    /// 1-based index into the catalog.
    #[instrument(skip(self))]
    pub fn select_by_choice(&self, input: &str, current: &str) -> (String, Option<CoreError>) {
        let input = input.trim();
        if input.is_empty() {
            return (current.to_string(), None);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=self.models.len()).contains(&n) => {
                self.select_or_keep(&self.models[n - 1].id, current)
            }
            _ => {
                let e = CoreError::new(
                    CoreErrorKind::InvalidModelSelection,
                    format!("'{}' is not a model number", input),
                );
                warn!(error = %e, current, "Keeping previously selected model");
                (current.to_string(), Some(e))
            }
        }
    }

    /// Label for `id`, or a placeholder for unknown identifiers.
    pub fn label_of(&self, id: &str) -> &str {
        self.get(id).map(|m| m.label.as_str()).unwrap_or("Unknown model")
    }
}

impl Default for ModelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
