// Composition tests: normalization, vectorization, classification and
// ranking chained together through the Predictor, using the fixture model.

mod common;

use std::sync::Arc;
use std::thread;

use mbti_predictor::catalog;
use mbti_predictor::output::format_percent;
use mbti_predictor::prediction::predictor::PredictionReport;

// ============================================================
// Chain: raw text -> Normalizer -> TF-IDF -> classifier -> ranking
// ============================================================

#[test]
fn signature_word_wins() {
    let predictor = common::predictor();
    let prediction = predictor
        .predict("I love every PARTY with friends!!!")
        .unwrap();

    assert_eq!(prediction.normalized, "love every party friends");
    assert_eq!(prediction.best().unwrap().label, "ESFP");
}

#[test]
fn second_signature_word_ranks_second() {
    let predictor = common::predictor();
    let prediction = predictor.predict("Strategy, strategy... and logic.").unwrap();

    let top: Vec<&str> = prediction.top(2).iter().map(|r| r.label.as_str()).collect();
    assert_eq!(top, vec!["INTJ", "INTP"]);
}

#[test]
fn signature_words_in_urls_and_mentions_do_not_count() {
    let predictor = common::predictor();
    let prediction = predictor
        .predict("@party https://party.example/party www.party.com")
        .unwrap();

    // Nothing survives cleaning, so every class ties and encoder order holds
    assert_eq!(prediction.normalized, "");
    assert_eq!(prediction.best().unwrap().label, "ENFJ");
}

#[test]
fn full_ranking_sums_to_one_and_is_sorted() {
    let predictor = common::predictor();
    let prediction = predictor
        .predict("I schedule everything and organize my tools")
        .unwrap();

    assert_eq!(prediction.ranking.len(), 16);
    let sum: f64 = prediction.ranking.iter().map(|r| r.probability).sum();
    assert!((sum - 1.0).abs() < 1e-9, "sum was {sum}");
    for pair in prediction.ranking.windows(2) {
        assert!(pair[0].probability >= pair[1].probability);
    }
    for r in &prediction.ranking {
        assert!((0.0..=1.0).contains(&r.probability));
    }
}

#[test]
fn empty_input_yields_uniform_ranking() {
    let predictor = common::predictor();
    let prediction = predictor.predict("").unwrap();

    assert_eq!(prediction.normalized, "");
    let order: Vec<String> = prediction.ranking.iter().map(|r| r.label.clone()).collect();
    assert_eq!(order, common::labels());
    for r in &prediction.ranking {
        assert!((r.probability - 1.0 / 16.0).abs() < 1e-12);
    }
}

#[test]
fn prediction_is_deterministic() {
    let predictor = common::predictor();
    let text = "Poetry and art help me find insight into people";
    let first = predictor.predict(text).unwrap();
    let second = predictor.predict(text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn shared_predictor_across_threads() {
    let predictor = Arc::new(common::predictor());
    let expected = predictor.predict("debate debate").unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let predictor = Arc::clone(&predictor);
            thread::spawn(move || predictor.predict("debate debate").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

// ============================================================
// Chain: ranking -> catalog / report
// ============================================================

#[test]
fn every_fixture_label_has_catalog_entry() {
    for label in common::labels() {
        assert!(catalog::lookup(&label).is_some(), "{label} missing from catalog");
    }
}

#[test]
fn report_serializes_top_n() {
    let predictor = common::predictor();
    let raw = "Let me host a dinner and protect my friends";
    let prediction = predictor.predict(raw).unwrap();
    let report = PredictionReport::new(raw, &prediction, 3);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["top"].as_array().unwrap().len(), 3);
    assert_eq!(json["ranking"].as_array().unwrap().len(), 16);
    assert_eq!(json["normalized"], "let host dinner protect friends");
    assert_eq!(json["input_chars"], raw.chars().count());

    let best = &report.top[0];
    assert!(best.label == "ESFJ" || best.label == "ISFJ");
    assert!(format_percent(best.probability).ends_with('%'));
}
