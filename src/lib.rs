// MBTI Predictor: guess a Myers-Briggs personality type from free text.
//
// This is the library root. Text is normalized, turned into TF-IDF
// features, classified, and the per-type probabilities ranked. Each module
// corresponds to one stage or to the presentation around it.

pub mod animation;
pub mod catalog;
pub mod config;
pub mod model;
pub mod output;
pub mod prediction;
pub mod status;
pub mod text;
