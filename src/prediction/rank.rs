// Prediction ranking: one extraction, one inference, then labels ordered by
// descending probability.

use std::cmp::Ordering;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::traits::{FeatureExtractor, LabelSet, ProbabilisticClassifier};

/// A label with the probability the classifier assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedLabel {
    pub label: String,
    /// 0.0 to 1.0
    pub probability: f64,
}

/// Rank every label for a normalized text.
///
/// Runs the extractor once on a one-document batch and the classifier once
/// on the resulting vector. Empty text is not special-cased; whatever the
/// classifier says about an all-zero vector is what gets ranked.
///
/// The classifier must report its classes in the label set's order, since
/// probabilities are paired with labels by position.
pub fn rank(
    normalized: &str,
    extractor: &dyn FeatureExtractor,
    classifier: &dyn ProbabilisticClassifier,
    labels: &dyn LabelSet,
) -> Result<Vec<RankedLabel>> {
    if classifier.classes() != labels.classes() {
        anyhow::bail!(
            "Classifier classes {:?} do not match label classes {:?}",
            classifier.classes(),
            labels.classes()
        );
    }

    let mut vectors = extractor.transform(&[normalized.to_string()])?;
    if vectors.len() != 1 {
        anyhow::bail!(
            "Feature extractor returned {} vectors for a single document",
            vectors.len()
        );
    }
    let features = vectors.remove(0);

    let probabilities = classifier.predict_proba(&features)?;

    debug!(
        tokens = normalized.split_whitespace().count(),
        nonzero_features = features.iter().filter(|&&x| x != 0.0).count(),
        "Ranked prediction"
    );

    rank_probabilities(labels.classes(), &probabilities)
}

/// Pair labels with probabilities positionally and sort descending.
///
/// The sort is stable, so equal probabilities keep the label order. NaN
/// probabilities sort after every number, in label order. A
/// length mismatch means the labels and the classifier disagree about the
/// class set, and is reported instead of silently misaligning them.
pub fn rank_probabilities(labels: &[String], probabilities: &[f64]) -> Result<Vec<RankedLabel>> {
    if labels.len() != probabilities.len() {
        anyhow::bail!(
            "Classifier returned {} probabilities for {} labels",
            probabilities.len(),
            labels.len()
        );
    }

    let mut ranked: Vec<RankedLabel> = labels
        .iter()
        .zip(probabilities)
        .map(|(label, &probability)| RankedLabel {
            label: label.clone(),
            probability,
        })
        .collect();

    ranked.sort_by(|a, b| descending(a.probability, b.probability));

    Ok(ranked)
}

/// Total descending order over probabilities with NaN last.
fn descending(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
