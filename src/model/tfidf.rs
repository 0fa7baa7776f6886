// TF-IDF vectorizer artifact.
//
// A fitted vectorizer exported to JSON: vocabulary (term -> column), one
// IDF weight per column, and the transform options it was fitted with.
// Fitting is not done here; the artifact is produced offline and only
// loaded and applied.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::{FeatureExtractor, FeatureVector};

/// Words of two or more word characters, the default scikit-learn token
/// pattern the vocabulary was built with.
static WORD_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("word token pattern is valid"));

/// Row normalization applied after IDF weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    None,
}

/// Fitted TF-IDF vectorizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Term to feature column
    pub vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column
    pub idf: Vec<f64>,
    /// Replace raw counts with 1 + ln(count)
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
    /// Lowercase documents before tokenizing
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_lowercase() -> bool {
    true
}

impl TfidfVectorizer {
    /// Build a vectorizer from a vocabulary and matching IDF weights, with
    /// default options (raw counts, L2 norm, lowercasing).
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self> {
        let vectorizer = Self {
            vocabulary,
            idf,
            sublinear_tf: false,
            norm: Norm::L2,
            lowercase: true,
        };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    /// Load and validate a vectorizer from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vectorizer from {}", path.display()))?;
        let vectorizer: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse vectorizer JSON in {}", path.display()))?;
        vectorizer
            .validate()
            .with_context(|| format!("Invalid vectorizer in {}", path.display()))?;

        debug!(
            vocabulary = vectorizer.vocabulary.len(),
            sublinear_tf = vectorizer.sublinear_tf,
            "Loaded TF-IDF vectorizer from {}",
            path.display()
        );
        Ok(vectorizer)
    }

    /// Write the vectorizer as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write vectorizer to {}", path.display()))?;
        Ok(())
    }

    /// Every column must be covered exactly once by the vocabulary and have
    /// a finite IDF weight.
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.len() != self.idf.len() {
            anyhow::bail!(
                "Vocabulary has {} terms but idf has {} weights",
                self.vocabulary.len(),
                self.idf.len()
            );
        }

        let mut seen = vec![false; self.idf.len()];
        for (term, &column) in &self.vocabulary {
            match seen.get_mut(column) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => anyhow::bail!("Column {column} is assigned to more than one term"),
                None => anyhow::bail!(
                    "Term {term:?} maps to column {column}, outside 0..{}",
                    self.idf.len()
                ),
            }
        }

        if let Some(column) = self.idf.iter().position(|w| !w.is_finite()) {
            anyhow::bail!("IDF weight for column {column} is not finite");
        }
        Ok(())
    }

    fn transform_one(&self, document: &str) -> FeatureVector {
        let mut row = vec![0.0_f64; self.idf.len()];

        let lowered;
        let text = if self.lowercase {
            lowered = document.to_lowercase();
            lowered.as_str()
        } else {
            document
        };

        for token in WORD_TOKEN.find_iter(text) {
            if let Some(&column) = self.vocabulary.get(token.as_str()) {
                row[column] += 1.0;
            }
        }

        for (value, idf) in row.iter_mut().zip(&self.idf) {
            if *value > 0.0 {
                if self.sublinear_tf {
                    *value = 1.0 + value.ln();
                }
                *value *= idf;
            }
        }

        if self.norm == Norm::L2 {
            let length = row.iter().map(|v| v * v).sum::<f64>().sqrt();
            if length > 0.0 {
                for value in &mut row {
                    *value /= length;
                }
            }
        }

        row
    }
}

impl FeatureExtractor for TfidfVectorizer {
    fn transform(&self, documents: &[String]) -> Result<Vec<FeatureVector>> {
        Ok(documents.iter().map(|d| self.transform_one(d)).collect())
    }

    fn n_features(&self) -> usize {
        self.idf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> TfidfVectorizer {
        let vocabulary = [("ideas", 0), ("people", 1), ("plan", 2)]
            .into_iter()
            .map(|(t, i)| (t.to_string(), i))
            .collect();
        TfidfVectorizer::new(vocabulary, vec![1.0, 2.0, 1.5]).unwrap()
    }

    #[test]
    fn test_transform_counts_and_normalizes() {
        let v = vectorizer();
        let rows = v.transform(&["ideas ideas people".to_string()]).unwrap();
        // raw: [2*1.0, 1*2.0, 0] = [2, 2, 0] -> L2 -> [0.7071, 0.7071, 0]
        let row = &rows[0];
        assert!((row[0] - 0.5_f64.sqrt()).abs() < 1e-10);
        assert!((row[1] - 0.5_f64.sqrt()).abs() < 1e-10);
        assert_eq!(row[2], 0.0);
    }

    #[test]
    fn test_transform_empty_document_is_zero_vector() {
        let v = vectorizer();
        let rows = v.transform(&[String::new()]).unwrap();
        assert_eq!(rows[0], vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_single_character_tokens_ignored() {
        let mut vocabulary = vectorizer().vocabulary;
        vocabulary.insert("a".to_string(), 3);
        let v = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0, 1.0, 1.0]).unwrap();
        let rows = v.transform(&["a a a".to_string()]).unwrap();
        assert!(rows[0].iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_sublinear_tf() {
        let mut v = vectorizer();
        v.sublinear_tf = true;
        v.norm = Norm::None;
        let rows = v.transform(&["plan plan plan".to_string()]).unwrap();
        let expected = (1.0 + 3.0_f64.ln()) * 1.5;
        assert!((rows[0][2] - expected).abs() < 1e-10);
    }

    #[test]
    fn test_lowercase_option() {
        let mut v = vectorizer();
        v.norm = Norm::None;
        let rows = v.transform(&["PLAN".to_string()]).unwrap();
        assert!((rows[0][2] - 1.5).abs() < 1e-10);

        v.lowercase = false;
        let rows = v.transform(&["PLAN".to_string()]).unwrap();
        assert_eq!(rows[0][2], 0.0);
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let vocabulary = [("ideas".to_string(), 0)].into_iter().collect();
        assert!(TfidfVectorizer::new(vocabulary, vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_columns() {
        let vocabulary = [("ideas".to_string(), 0), ("plan".to_string(), 0)]
            .into_iter()
            .collect();
        assert!(TfidfVectorizer::new(vocabulary, vec![1.0, 2.0]).is_err());
    }

    #[test]
    fn test_validate_rejects_out_of_range_column() {
        let vocabulary = [("ideas".to_string(), 5)].into_iter().collect();
        assert!(TfidfVectorizer::new(vocabulary, vec![1.0]).is_err());
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{"vocabulary": {"plan": 0}, "idf": [1.0]}"#;
        let v: TfidfVectorizer = serde_json::from_str(json).unwrap();
        assert!(!v.sublinear_tf);
        assert_eq!(v.norm, Norm::L2);
        assert!(v.lowercase);
    }
}
