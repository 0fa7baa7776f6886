// Model artifacts: trait seams for the trained collaborators and the JSON
// artifacts that implement them.

pub mod bundle;
pub mod labels;
pub mod linear;
pub mod tfidf;
pub mod traits;
