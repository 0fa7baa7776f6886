// Prediction: ranking of classifier probabilities and the predictor that
// composes normalization with the model.

pub mod predictor;
pub mod rank;
