// Animation source trait: swap-ready like the model seams, but async since
// the real source is an HTTP fetch.

use async_trait::async_trait;
use serde::Serialize;

/// Metadata about a loaded animation, enough to mention it in the banner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationInfo {
    pub name: Option<String>,
    pub frame_rate: f64,
    /// Number of frames between the in and out points
    pub frames: f64,
    pub width: u32,
    pub height: u32,
}

impl AnimationInfo {
    /// Playback length in seconds (0.0 for a zero frame rate).
    pub fn duration_secs(&self) -> f64 {
        if self.frame_rate > 0.0 {
            self.frames / self.frame_rate
        } else {
            0.0
        }
    }
}

/// Something that may provide a decorative animation.
///
/// Returns `None` on any failure; callers never need to handle errors here.
#[async_trait]
pub trait AnimationSource: Send + Sync {
    async fn load(&self) -> Option<AnimationInfo>;
}

/// Used when animations are disabled. Always returns `None`.
pub struct NoopAnimation;

#[async_trait]
impl AnimationSource for NoopAnimation {
    async fn load(&self) -> Option<AnimationInfo> {
        None
    }
}
