// Shared fixtures: a tiny 16-class model where each type has one signature
// word, so predictions are easy to reason about.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use mbti_predictor::model::bundle::ModelBundle;
use mbti_predictor::model::labels::LabelEncoder;
use mbti_predictor::model::linear::{LinearClassifier, MultiClass};
use mbti_predictor::model::tfidf::TfidfVectorizer;
use mbti_predictor::prediction::predictor::Predictor;
use mbti_predictor::text::normalize::Normalizer;
use mbti_predictor::text::stopwords::{StopwordSet, StopwordSource};

/// Labels in label-encoder (alphabetical) order, each with its signature word.
pub const SIGNATURES: [(&str, &str); 16] = [
    ("ENFJ", "inspire"),
    ("ENFP", "adventure"),
    ("ENTJ", "command"),
    ("ENTP", "debate"),
    ("ESFJ", "host"),
    ("ESFP", "party"),
    ("ESTJ", "organize"),
    ("ESTP", "risk"),
    ("INFJ", "insight"),
    ("INFP", "poetry"),
    ("INTJ", "strategy"),
    ("INTP", "logic"),
    ("ISFJ", "protect"),
    ("ISFP", "art"),
    ("ISTJ", "schedule"),
    ("ISTP", "tools"),
];

pub fn labels() -> Vec<String> {
    SIGNATURES.iter().map(|(l, _)| l.to_string()).collect()
}

pub fn bundle() -> ModelBundle {
    let vocabulary: HashMap<String, usize> = SIGNATURES
        .iter()
        .enumerate()
        .map(|(i, (_, word))| (word.to_string(), i))
        .collect();
    let vectorizer = TfidfVectorizer::new(vocabulary, vec![1.0; 16]).unwrap();

    let coef = (0..16)
        .map(|row| (0..16).map(|col| if row == col { 4.0 } else { 0.0 }).collect())
        .collect();
    let classifier = LinearClassifier {
        classes: labels(),
        coef,
        intercept: vec![0.0; 16],
        multi_class: MultiClass::Multinomial,
    };

    let encoder = LabelEncoder::new(labels()).unwrap();
    ModelBundle::from_parts(vectorizer, classifier, encoder).unwrap()
}

pub fn normalizer() -> Arc<Normalizer> {
    let stopwords = StopwordSet::load(&StopwordSource::Nltk).unwrap();
    Arc::new(Normalizer::new(Arc::new(stopwords)).unwrap())
}

pub fn predictor() -> Predictor {
    Predictor::from_bundle(normalizer(), &bundle())
}
