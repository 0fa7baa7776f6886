// Predictor: normalize, extract, infer, rank.
//
// Holds shared handles to the startup-loaded resources. Nothing here is
// mutated after construction, so a Predictor can be cloned freely and used
// from any thread.

use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rank::{rank, RankedLabel};
use crate::model::bundle::ModelBundle;
use crate::model::traits::{FeatureExtractor, LabelSet, ProbabilisticClassifier};
use crate::text::normalize::Normalizer;

#[derive(Clone)]
pub struct Predictor {
    normalizer: Arc<Normalizer>,
    extractor: Arc<dyn FeatureExtractor>,
    classifier: Arc<dyn ProbabilisticClassifier>,
    labels: Arc<dyn LabelSet>,
}

/// The outcome of one prediction: the cleaned text and every label ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub normalized: String,
    pub ranking: Vec<RankedLabel>,
}

impl Prediction {
    /// The `n` most likely labels (fewer if there aren't that many).
    pub fn top(&self, n: usize) -> &[RankedLabel] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    pub fn best(&self) -> Option<&RankedLabel> {
        self.ranking.first()
    }
}

/// Serializable record of a prediction, emitted by `predict --json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Character count of the raw input
    pub input_chars: usize,
    pub normalized: String,
    pub top: Vec<RankedLabel>,
    pub ranking: Vec<RankedLabel>,
    pub predicted_at: DateTime<Utc>,
}

impl PredictionReport {
    pub fn new(raw: &str, prediction: &Prediction, top_n: usize) -> Self {
        Self {
            input_chars: raw.chars().count(),
            normalized: prediction.normalized.clone(),
            top: prediction.top(top_n).to_vec(),
            ranking: prediction.ranking.clone(),
            predicted_at: Utc::now(),
        }
    }
}

impl Predictor {
    pub fn new(
        normalizer: Arc<Normalizer>,
        extractor: Arc<dyn FeatureExtractor>,
        classifier: Arc<dyn ProbabilisticClassifier>,
        labels: Arc<dyn LabelSet>,
    ) -> Self {
        Self {
            normalizer,
            extractor,
            classifier,
            labels,
        }
    }

    /// Wire a predictor to a loaded model bundle.
    pub fn from_bundle(normalizer: Arc<Normalizer>, bundle: &ModelBundle) -> Self {
        Self::new(
            normalizer,
            bundle.vectorizer.clone(),
            bundle.classifier.clone(),
            bundle.labels.clone(),
        )
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Predict for raw user text. Every call does a fresh extraction and
    /// inference; results are not cached.
    pub fn predict(&self, raw: &str) -> Result<Prediction> {
        let normalized = self.normalizer.normalize(raw);
        let ranking = rank(
            &normalized,
            self.extractor.as_ref(),
            self.classifier.as_ref(),
            self.labels.as_ref(),
        )?;

        if let Some(best) = ranking.first() {
            debug!(
                label = %best.label,
                probability = best.probability,
                normalized_preview = %crate::output::truncate_chars(&normalized, 50),
                "Predicted personality type"
            );
        }

        Ok(Prediction {
            normalized,
            ranking,
        })
    }
}
