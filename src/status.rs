// System status display: model directory, artifact presence, stopwords.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::model::bundle::ARTIFACT_FILES;
use crate::text::stopwords::StopwordSet;

/// Display system status to the terminal.
pub fn show(config: &Config) -> Result<()> {
    println!("Model directory: {}", config.model_dir.display());

    for name in ARTIFACT_FILES {
        let path = config.model_dir.join(name);
        match std::fs::metadata(&path) {
            Ok(meta) => println!("  {} {} ({})", "ok".green(), name, format_bytes(meta.len())),
            Err(_) => println!("  {} {}", "missing".red(), name),
        }
    }

    match StopwordSet::load(&config.stopwords) {
        Ok(set) => println!("Stopwords: {} ({} words)", config.stopwords, set.len()),
        Err(e) => println!("Stopwords: {} ({})", config.stopwords, format!("{e:#}").red()),
    }

    println!("Top predictions shown: {}", config.top_n);
    if config.animation_enabled {
        println!("Animation: {}", config.animation_url);
    } else {
        println!("Animation: disabled");
    }

    if config.require_models().is_err() {
        println!(
            "\n{}",
            "Prediction is unavailable until the missing artifacts are in place.".yellow()
        );
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
