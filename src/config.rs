use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::animation::lottie::DEFAULT_ANIMATION_URL;
use crate::model::bundle::{default_model_dir, missing_files};
use crate::text::stopwords::StopwordSource;

/// How many predictions to show when neither `--top` nor MBTI_TOP_N is set.
pub const DEFAULT_TOP_N: usize = 3;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Nothing
/// here is secret; every value has a default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory containing the exported model artifacts
    pub model_dir: PathBuf,
    /// Where the stopword list comes from
    pub stopwords: StopwordSource,
    /// Number of top predictions to display
    pub top_n: usize,
    /// Decorative Lottie animation URL
    pub animation_url: String,
    /// Fetch the animation at all (MBTI_ANIMATION=off disables it)
    pub animation_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("MBTI_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());

        let stopwords = env::var("MBTI_STOPWORDS")
            .map(|v| StopwordSource::parse(&v))
            .unwrap_or(StopwordSource::Nltk);

        let top_n = match env::var("MBTI_TOP_N") {
            Ok(value) => parse_top_n(&value).context("Invalid MBTI_TOP_N")?,
            Err(_) => DEFAULT_TOP_N,
        };

        let animation_enabled = env::var("MBTI_ANIMATION")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "off" | "0" | "false" | "no"))
            .unwrap_or(true);

        Ok(Self {
            model_dir,
            stopwords,
            top_n,
            animation_url: env::var("MBTI_ANIMATION_URL")
                .unwrap_or_else(|_| DEFAULT_ANIMATION_URL.to_string()),
            animation_enabled,
        })
    }

    /// Check that every model artifact exists.
    /// Call this before anything that loads the model.
    pub fn require_models(&self) -> Result<()> {
        let missing = missing_files(&self.model_dir);
        if !missing.is_empty() {
            anyhow::bail!(
                "Model artifacts not found in {}: {}\n\
                 Export the trained model there, or set MBTI_MODEL_DIR to where it lives.",
                self.model_dir.display(),
                missing.join(", ")
            );
        }
        Ok(())
    }
}

/// Parse a top-N count: a positive integer.
pub fn parse_top_n(value: &str) -> Result<usize> {
    let n: usize = value
        .trim()
        .parse()
        .with_context(|| format!("{value:?} is not a whole number"))?;
    if n == 0 {
        anyhow::bail!("top-N must be at least 1");
    }
    Ok(n)
}
