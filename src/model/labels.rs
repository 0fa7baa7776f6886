// Label encoder artifact: the ordered list of MBTI codes the classifier
// was trained against.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::traits::LabelSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Result<Self> {
        let encoder = Self { classes };
        encoder.validate()?;
        Ok(encoder)
    }

    /// Load and validate a label encoder from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read label encoder from {}", path.display()))?;
        let encoder: Self = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse label encoder JSON in {}", path.display()))?;
        encoder
            .validate()
            .with_context(|| format!("Invalid label encoder in {}", path.display()))?;
        Ok(encoder)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write label encoder to {}", path.display()))?;
        Ok(())
    }

    /// Labels must be non-empty and unique.
    pub fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            anyhow::bail!("Label encoder has no classes");
        }
        let mut seen = HashSet::new();
        for label in &self.classes {
            if label.trim().is_empty() {
                anyhow::bail!("Label encoder contains an empty label");
            }
            if !seen.insert(label.as_str()) {
                anyhow::bail!("Label {label:?} appears more than once");
            }
        }
        Ok(())
    }
}

impl LabelSet for LabelEncoder {
    fn classes(&self) -> &[String] {
        &self.classes
    }
}
