// Linear probabilistic classifier artifact (logistic regression).
//
// Decision values are `coef · x + intercept` per class. Multinomial models
// turn them into probabilities with a softmax; one-vs-rest models apply a
// sigmoid per class and renormalize so the row sums to 1.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{FeatureVector, ProbabilisticClassifier};

/// How per-class decision values become probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MultiClass {
    #[default]
    Multinomial,
    Ovr,
}

/// Fitted linear classifier with its class labels attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    /// Class labels, in the order of `coef` rows and `intercept`
    pub classes: Vec<String>,
    /// One weight row per class, each `n_features` long
    pub coef: Vec<Vec<f64>>,
    /// One bias per class
    pub intercept: Vec<f64>,
    #[serde(default)]
    pub multi_class: MultiClass,
}

impl LinearClassifier {
    /// Load and validate a classifier from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read classifier from {}", path.display()))?;
        let classifier: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse classifier JSON in {}", path.display()))?;
        classifier
            .validate()
            .with_context(|| format!("Invalid classifier in {}", path.display()))?;

        debug!(
            classes = classifier.classes.len(),
            features = classifier.n_features(),
            multi_class = ?classifier.multi_class,
            "Loaded classifier from {}",
            path.display()
        );
        Ok(classifier)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write classifier to {}", path.display()))?;
        Ok(())
    }

    /// Shapes must agree: one coef row and one intercept per class, every
    /// row the same width, and all weights finite.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            anyhow::bail!("Classifier has no classes");
        }
        if self.coef.len() != self.classes.len() {
            anyhow::bail!(
                "Classifier has {} classes but {} coefficient rows",
                self.classes.len(),
                self.coef.len()
            );
        }
        if self.intercept.len() != self.classes.len() {
            anyhow::bail!(
                "Classifier has {} classes but {} intercepts",
                self.classes.len(),
                self.intercept.len()
            );
        }

        let width = self.n_features();
        if let Some(row) = self.coef.iter().position(|r| r.len() != width) {
            anyhow::bail!(
                "Coefficient row {row} has {} weights, expected {width}",
                self.coef[row].len()
            );
        }

        let all_finite = self
            .coef
            .iter()
            .flatten()
            .chain(&self.intercept)
            .all(|w| w.is_finite());
        if !all_finite {
            anyhow::bail!("Classifier weights contain NaN or infinity");
        }
        Ok(())
    }

    pub fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    fn decision_values(&self, features: &[f64]) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + bias)
            .collect()
    }
}

impl ProbabilisticClassifier for LinearClassifier {
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>> {
        if features.len() != self.n_features() {
            anyhow::bail!(
                "Feature vector has {} values but the classifier expects {}",
                features.len(),
                self.n_features()
            );
        }

        let scores = self.decision_values(features);
        Ok(match self.multi_class {
            MultiClass::Multinomial => softmax(&scores),
            MultiClass::Ovr => normalized_sigmoid(&scores),
        })
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Softmax with the max subtracted first so large scores don't overflow.
fn softmax(scores: &[f64]) -> Vec<f64> {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / sum).collect()
}

/// Per-class sigmoid, then scaled to sum to 1. Falls back to uniform if
/// every sigmoid underflows to zero.
fn normalized_sigmoid(scores: &[f64]) -> Vec<f64> {
    let probs: Vec<f64> = scores.iter().map(|&s| sigmoid(s)).collect();
    let sum: f64 = probs.iter().sum();
    if sum > 0.0 {
        probs.into_iter().map(|p| p / sum).collect()
    } else {
        vec![1.0 / scores.len() as f64; scores.len()]
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}
