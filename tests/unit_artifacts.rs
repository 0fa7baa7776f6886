// Unit tests for model artifact loading.
//
// Artifacts are written to temporary directories and loaded back through
// ModelBundle::load, the same path the CLI takes at startup.

mod common;

use mbti_predictor::model::bundle::{
    model_files_present, ModelBundle, CLASSIFIER_FILE, LABEL_ENCODER_FILE, VECTORIZER_FILE,
};
use mbti_predictor::model::labels::LabelEncoder;
use mbti_predictor::model::traits::{FeatureExtractor, LabelSet};

#[test]
fn saved_bundle_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    common::bundle().save(dir.path()).unwrap();

    assert!(model_files_present(dir.path()));
    let loaded = ModelBundle::load(dir.path()).unwrap();
    assert_eq!(loaded.labels.classes(), common::labels().as_slice());
    assert_eq!(loaded.vectorizer.n_features(), 16);
}

#[test]
fn missing_artifact_is_fatal_and_named() {
    let dir = tempfile::tempdir().unwrap();
    common::bundle().save(dir.path()).unwrap();
    std::fs::remove_file(dir.path().join(VECTORIZER_FILE)).unwrap();

    assert!(!model_files_present(dir.path()));
    let err = ModelBundle::load(dir.path()).unwrap_err().to_string();
    assert!(err.contains(VECTORIZER_FILE), "error was: {err}");
}

#[test]
fn corrupt_json_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    common::bundle().save(dir.path()).unwrap();
    std::fs::write(dir.path().join(CLASSIFIER_FILE), "{not json").unwrap();

    assert!(ModelBundle::load(dir.path()).is_err());
}

#[test]
fn encoder_disagreeing_with_classifier_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    common::bundle().save(dir.path()).unwrap();

    let mut reversed = common::labels();
    reversed.reverse();
    LabelEncoder::new(reversed)
        .unwrap()
        .save(&dir.path().join(LABEL_ENCODER_FILE))
        .unwrap();

    let err = format!("{:#}", ModelBundle::load(dir.path()).unwrap_err());
    assert!(err.contains("do not match"), "error was: {err}");
}

#[test]
fn hand_written_artifacts_with_defaults_load() {
    // Minimal JSON as an export script would write it, relying on defaults
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(VECTORIZER_FILE),
        r#"{"vocabulary": {"plan": 0, "party": 1}, "idf": [1.2, 1.0]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join(CLASSIFIER_FILE),
        r#"{"classes": ["INTJ", "ESFP"], "coef": [[1.0, -1.0], [-1.0, 1.0]], "intercept": [0.0, 0.0]}"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join(LABEL_ENCODER_FILE),
        r#"{"classes": ["INTJ", "ESFP"]}"#,
    )
    .unwrap();

    let bundle = ModelBundle::load(dir.path()).unwrap();
    assert_eq!(bundle.labels.classes.len(), 2);
}
