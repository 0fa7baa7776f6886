// Text preparation: stopword loading and normalization of raw user text
// into the token string the vectorizer was trained on.

pub mod normalize;
pub mod stopwords;
