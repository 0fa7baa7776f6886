// Colored terminal output for predictions, the confidence chart, and the
// 16-type gallery.
//
// This module handles all terminal-specific formatting. main.rs decides
// what to show; the functions here decide how it looks.

use colored::Colorize;

use super::{format_percent, text_bar, truncate_chars};
use crate::animation::traits::AnimationInfo;
use crate::catalog::{self, TypeProfile};
use crate::prediction::rank::RankedLabel;

const CARD_BAR_WIDTH: usize = 30;
const CHART_BAR_WIDTH: usize = 40;

/// Display the title banner, with a line about the animation if one loaded.
pub fn display_banner(animation: Option<&AnimationInfo>) {
    println!("\n{}", "🧠 MBTI Personality Predictor".bold());
    println!("{}", "Discover your MBTI personality type through your words.".dimmed());

    if let Some(info) = animation {
        let name = info.name.as_deref().unwrap_or("animation");
        println!(
            "{}",
            format!(
                "  ✨ {name} ({:.0} frames, {:.1}s)",
                info.frames,
                info.duration_secs()
            )
            .dimmed()
        );
    }
    println!();
}

/// Display the top predictions as cards: type, name, description, confidence.
pub fn display_top_predictions(top: &[RankedLabel]) {
    if top.is_empty() {
        println!("No predictions to show.");
        return;
    }

    println!(
        "{}",
        format!("=== Top {} Personality Predictions ===", top.len()).bold()
    );
    println!();

    for (i, ranked) in top.iter().enumerate() {
        let profile = catalog::lookup(&ranked.label);
        let heading = match profile {
            Some(p) => format!("✨ {} — {}", ranked.label, p.name),
            None => format!("✨ {}", ranked.label),
        };

        println!("  {:>2}. {}", i + 1, heading.bold());
        if let Some(p) = profile {
            println!("      {}", p.description);
        }
        println!(
            "      Confidence: {}  {}",
            format_percent(ranked.probability).bold(),
            colorize_bar(text_bar(ranked.probability, CARD_BAR_WIDTH), i),
        );
        println!();
    }
}

/// Display a bar chart of the given predictions' confidences, scaled to 100%.
pub fn display_confidence_chart(top: &[RankedLabel]) {
    if top.is_empty() {
        return;
    }

    println!(
        "{}",
        format!("=== Confidence of Top {} Personalities ===", top.len()).bold()
    );
    println!();

    for (i, ranked) in top.iter().enumerate() {
        println!(
            "  {:<5} {} {:>7}",
            ranked.label,
            colorize_bar(text_bar(ranked.probability, CHART_BAR_WIDTH), i),
            format_percent(ranked.probability),
        );
    }
    println!("  {:<5} {}", "", "0%                 50%                100%".dimmed());
    println!();
}

/// Display the full ranking as a compact table (every label, not just the top).
pub fn display_full_ranking(ranking: &[RankedLabel]) {
    println!("{}", format!("=== All {} Types ===", ranking.len()).bold());
    for (i, ranked) in ranking.iter().enumerate() {
        println!(
            "  {:>2}. {:<5} {:>7}",
            i + 1,
            ranked.label,
            format_percent(ranked.probability)
        );
    }
    println!();
}

/// Display the reference gallery of all 16 types.
pub fn display_gallery() {
    println!(
        "{}",
        format!("=== All {} Personality Types ===", catalog::TYPES.len()).bold()
    );
    println!();

    for profile in &catalog::TYPES {
        display_profile(profile);
    }
}

fn display_profile(profile: &TypeProfile) {
    println!(
        "  {} {} — {}",
        profile.glyph,
        profile.code.bold(),
        profile.name
    );
    println!("      Logo/Icon: {} {}", profile.logo, profile.glyph);
    println!("      {}", profile.description);
    println!("      Key Traits: {}", profile.traits.join(", ").cyan());
    println!("      {}", truncate_chars(profile.image_url, 70).dimmed());
    println!();
}

/// Warning shown when the user submits empty or whitespace-only text.
pub fn display_empty_input_warning() {
    println!(
        "{} Please type something before prediction.",
        "⚠️ Warning:".yellow()
    );
}

/// Color a bar by its rank: the first three get the palette, the rest are dim.
fn colorize_bar(bar: String, rank: usize) -> colored::ColoredString {
    match rank {
        0 => bar.bright_blue(),
        1 => bar.cyan(),
        2 => bar.bright_white(),
        _ => bar.dimmed(),
    }
}
