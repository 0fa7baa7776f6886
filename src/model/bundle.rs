// Model bundle: loads the three artifacts from the model directory and
// checks they agree with each other before anything is served.
//
// Loading happens once at startup. Any missing file or inconsistency is
// fatal: there is no degraded mode that predicts with a partial model.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use super::labels::LabelEncoder;
use super::linear::LinearClassifier;
use super::tfidf::TfidfVectorizer;
use super::traits::FeatureExtractor;

pub const CLASSIFIER_FILE: &str = "personality_model.json";
pub const VECTORIZER_FILE: &str = "tfidf_vectorizer.json";
pub const LABEL_ENCODER_FILE: &str = "label_encoder.json";

/// All artifact file names, in load order.
pub const ARTIFACT_FILES: [&str; 3] = [CLASSIFIER_FILE, VECTORIZER_FILE, LABEL_ENCODER_FILE];

/// Returns the default directory for model artifacts.
/// Uses the platform data directory: ~/.local/share/mbti-predictor/models/ on Linux.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mbti-predictor")
        .join("models")
}

/// Check whether every artifact file exists in `dir`.
pub fn model_files_present(dir: &Path) -> bool {
    missing_files(dir).is_empty()
}

/// Artifact file names that don't exist in `dir`.
pub fn missing_files(dir: &Path) -> Vec<&'static str> {
    ARTIFACT_FILES
        .iter()
        .copied()
        .filter(|name| !dir.join(name).exists())
        .collect()
}

/// The loaded, cross-checked model. Every part is immutable and shared.
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub vectorizer: Arc<TfidfVectorizer>,
    pub classifier: Arc<LinearClassifier>,
    pub labels: Arc<LabelEncoder>,
}

impl ModelBundle {
    /// Load all artifacts from `dir` and validate them against each other.
    pub fn load(dir: &Path) -> Result<Self> {
        let missing = missing_files(dir);
        if !missing.is_empty() {
            anyhow::bail!(
                "Model artifacts missing from {}: {}\n\
                 Set MBTI_MODEL_DIR to the directory containing the exported model.",
                dir.display(),
                missing.join(", ")
            );
        }

        let classifier = LinearClassifier::load(&dir.join(CLASSIFIER_FILE))?;
        let vectorizer = TfidfVectorizer::load(&dir.join(VECTORIZER_FILE))?;
        let labels = LabelEncoder::load(&dir.join(LABEL_ENCODER_FILE))?;

        let bundle = Self::from_parts(vectorizer, classifier, labels)
            .with_context(|| format!("Model artifacts in {} are inconsistent", dir.display()))?;

        info!(
            classes = bundle.labels.classes.len(),
            features = bundle.vectorizer.n_features(),
            "Loaded model from {}",
            dir.display()
        );
        Ok(bundle)
    }

    /// Assemble a bundle from already-loaded parts, checking that the
    /// classifier accepts the vectorizer's output and reports classes in
    /// the encoder's order.
    pub fn from_parts(
        vectorizer: TfidfVectorizer,
        classifier: LinearClassifier,
        labels: LabelEncoder,
    ) -> Result<Self> {
        if classifier.n_features() != vectorizer.n_features() {
            anyhow::bail!(
                "Classifier expects {} features but the vectorizer produces {}",
                classifier.n_features(),
                vectorizer.n_features()
            );
        }
        if classifier.classes != labels.classes {
            anyhow::bail!(
                "Classifier classes {:?} do not match label encoder classes {:?}",
                classifier.classes,
                labels.classes
            );
        }

        Ok(Self {
            vectorizer: Arc::new(vectorizer),
            classifier: Arc::new(classifier),
            labels: Arc::new(labels),
        })
    }

    /// Write all three artifacts into `dir`, creating it if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create model directory: {}", dir.display()))?;
        self.classifier.save(&dir.join(CLASSIFIER_FILE))?;
        self.vectorizer.save(&dir.join(VECTORIZER_FILE))?;
        self.labels.save(&dir.join(LABEL_ENCODER_FILE))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::linear::MultiClass;

    fn parts() -> (TfidfVectorizer, LinearClassifier, LabelEncoder) {
        let vocabulary = [("plan".to_string(), 0), ("party".to_string(), 1)]
            .into_iter()
            .collect();
        let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0]).unwrap();
        let classifier = LinearClassifier {
            classes: vec!["INTJ".into(), "ESFP".into()],
            coef: vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
            intercept: vec![0.0, 0.0],
            multi_class: MultiClass::Multinomial,
        };
        let labels = LabelEncoder::new(vec!["INTJ".into(), "ESFP".into()]).unwrap();
        (vectorizer, classifier, labels)
    }

    #[test]
    fn test_from_parts_consistent() {
        let (v, c, l) = parts();
        assert!(ModelBundle::from_parts(v, c, l).is_ok());
    }

    #[test]
    fn test_feature_count_mismatch_rejected() {
        let (v, mut c, l) = parts();
        for row in &mut c.coef {
            row.push(0.0);
        }
        assert!(ModelBundle::from_parts(v, c, l).is_err());
    }

    #[test]
    fn test_class_order_mismatch_rejected() {
        let (v, c, _) = parts();
        let l = LabelEncoder::new(vec!["ESFP".into(), "INTJ".into()]).unwrap();
        assert!(ModelBundle::from_parts(v, c, l).is_err());
    }

    #[test]
    fn test_missing_files_reports_all() {
        let missing = missing_files(Path::new("/nonexistent/model/dir"));
        assert_eq!(missing.len(), 3);
        assert!(!model_files_present(Path::new("/nonexistent/model/dir")));
    }
}
