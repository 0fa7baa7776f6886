// Collaborator traits: the seams between the prediction core and the
// trained artifacts.
//
// The ranker only ever talks to these traits. The JSON artifacts in this
// module implement them for real use; tests implement them with tiny
// fixtures so ranking can be checked without a trained model.

use anyhow::Result;

/// A dense feature vector produced by a [`FeatureExtractor`].
pub type FeatureVector = Vec<f64>;

/// Turns normalized documents into feature vectors (e.g. TF-IDF).
pub trait FeatureExtractor: Send + Sync {
    /// Transform a batch of documents, returning one vector per document in
    /// the same order.
    fn transform(&self, documents: &[String]) -> Result<Vec<FeatureVector>>;

    /// Length of every vector this extractor produces.
    fn n_features(&self) -> usize;
}

/// A classifier that can estimate one probability per known class.
pub trait ProbabilisticClassifier: Send + Sync {
    /// Probability for each class, in the order of [`classes`](Self::classes).
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>>;

    /// Class labels in the order `predict_proba` reports them.
    fn classes(&self) -> &[String];
}

/// An ordered enumeration of class labels (the label encoder).
pub trait LabelSet: Send + Sync {
    fn classes(&self) -> &[String];
}
