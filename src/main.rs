use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use mbti_predictor::animation::lottie::LottieSource;
use mbti_predictor::animation::traits::{AnimationSource, NoopAnimation};
use mbti_predictor::config::{self, Config};
use mbti_predictor::model::bundle::ModelBundle;
use mbti_predictor::output::terminal;
use mbti_predictor::prediction::predictor::{PredictionReport, Predictor};
use mbti_predictor::text::normalize::Normalizer;
use mbti_predictor::text::stopwords::StopwordSet;

/// MBTI Predictor: guess a Myers-Briggs personality type from free text.
///
/// Write something about yourself (your thoughts, goals, or feelings) and a
/// pretrained TF-IDF classifier ranks all 16 types by confidence.
#[derive(Parser)]
#[command(name = "mbti-predictor", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the personality type for a piece of text
    Predict {
        /// Text to analyze (reads stdin if omitted)
        text: Option<String>,

        /// Number of top predictions to show (default: MBTI_TOP_N or 3)
        #[arg(long, value_parser = parse_top)]
        top: Option<usize>,

        /// Also show every type's confidence, not just the top ones
        #[arg(long)]
        all: bool,

        /// Also show the gallery of all 16 types
        #[arg(long)]
        gallery: bool,

        /// Print a JSON report instead of the terminal display
        #[arg(long)]
        json: bool,

        /// Skip fetching the decorative banner animation
        #[arg(long)]
        no_animation: bool,
    },

    /// Predict line by line from stdin until EOF or `quit`
    Interactive {
        /// Number of top predictions to show (default: MBTI_TOP_N or 3)
        #[arg(long, value_parser = parse_top)]
        top: Option<usize>,
    },

    /// Show the gallery of all 16 personality types
    Types,

    /// Show configuration and whether the model artifacts are in place
    Status,
}

fn parse_top(value: &str) -> std::result::Result<usize, String> {
    config::parse_top_n(value).map_err(|e| format!("{e:#}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mbti_predictor=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            text,
            top,
            all,
            gallery,
            json,
            no_animation,
        } => {
            let config = Config::load()?;
            let top_n = top.unwrap_or(config.top_n);

            let raw = match text {
                Some(text) => text,
                None => std::io::read_to_string(std::io::stdin())
                    .context("Failed to read text from stdin")?,
            };

            if raw.trim().is_empty() {
                terminal::display_empty_input_warning();
                return Ok(());
            }

            let predictor = load_predictor(&config, !json)?;
            let prediction = predictor.predict(&raw)?;

            if json {
                let report = PredictionReport::new(&raw, &prediction, top_n);
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            let animation = create_animation(&config, no_animation).load().await;
            terminal::display_banner(animation.as_ref());

            if prediction.normalized.is_empty() {
                println!(
                    "{}",
                    "Note: nothing was left after cleaning the text; the ranking reflects the model's prior."
                        .dimmed()
                );
                println!();
            }

            let top = prediction.top(top_n);
            terminal::display_top_predictions(top);
            terminal::display_confidence_chart(top);

            if all {
                terminal::display_full_ranking(&prediction.ranking);
            }
            if gallery {
                terminal::display_gallery();
            }
        }

        Commands::Interactive { top } => {
            let config = Config::load()?;
            let top_n = top.unwrap_or(config.top_n);
            let predictor = load_predictor(&config, true)?;

            terminal::display_banner(None);
            println!("{}", "Type a few sentences and press Enter. `quit` to exit.".dimmed());

            let stdin = std::io::stdin();
            let mut lines = stdin.lock().lines();
            loop {
                print!("{} ", ">".bold());
                std::io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    println!();
                    break;
                };
                let line = line.context("Failed to read from stdin")?;

                match line.trim() {
                    "quit" | "exit" => break,
                    "" => {
                        terminal::display_empty_input_warning();
                        continue;
                    }
                    _ => {}
                }

                match predictor.predict(&line) {
                    Ok(prediction) => {
                        println!();
                        let top = prediction.top(top_n);
                        terminal::display_top_predictions(top);
                        terminal::display_confidence_chart(top);
                    }
                    Err(e) => {
                        warn!(error = %e, "Prediction failed");
                        println!("{} {:#}", "Error:".red(), e);
                    }
                }
            }
        }

        Commands::Types => {
            terminal::display_gallery();
        }

        Commands::Status => {
            let config = Config::load()?;
            mbti_predictor::status::show(&config)?;
        }
    }

    Ok(())
}

/// Load stopwords and model artifacts, failing loudly if either is missing.
/// Shows a spinner while loading unless `progress` is false.
fn load_predictor(config: &Config, progress: bool) -> Result<Predictor> {
    config.require_models()?;

    let spinner = if progress {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Loading model...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    } else {
        None
    };

    let loaded = (|| -> Result<Predictor> {
        let stopwords = StopwordSet::load(&config.stopwords)
            .context("Failed to load stopwords; set MBTI_STOPWORDS to a readable list")?;
        let normalizer = Arc::new(Normalizer::new(Arc::new(stopwords))?);
        let bundle = ModelBundle::load(&config.model_dir)?;
        Ok(Predictor::from_bundle(normalizer, &bundle))
    })();

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let predictor = loaded?;
    info!(
        stopwords = predictor.normalizer().stopwords().len(),
        "Predictor ready"
    );
    Ok(predictor)
}

/// Create the banner animation source based on configuration and flags.
fn create_animation(config: &Config, disabled: bool) -> Box<dyn AnimationSource> {
    if disabled || !config.animation_enabled {
        return Box::new(NoopAnimation);
    }
    match LottieSource::new(&config.animation_url) {
        Ok(source) => Box::new(source),
        Err(e) => {
            warn!(error = %e, "Animation disabled");
            Box::new(NoopAnimation)
        }
    }
}
