// Decorative animation: optional and never on the prediction path.
//
// The banner can show a Lottie animation fetched over HTTP. If it can't be
// fetched (offline, bad URL, bad JSON) the NoopAnimation behaviour applies
// and the tool carries on without it.

pub mod lottie;
pub mod traits;
