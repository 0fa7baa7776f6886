// Lottie animation fetched over HTTP.
//
// Only the document header is read (name, frame rate, in/out points, size).
// A terminal can't play the animation; the banner just acknowledges it.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::traits::{AnimationInfo, AnimationSource};

/// Default banner animation.
pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets10.lottiefiles.com/packages/lf20_jcikwtux.json";

/// The fields of a Lottie document we care about.
#[derive(Debug, Deserialize)]
struct LottieHeader {
    #[serde(default)]
    nm: Option<String>,
    fr: f64,
    ip: f64,
    op: f64,
    w: u32,
    h: u32,
}

pub struct LottieSource {
    client: Client,
    url: String,
}

impl LottieSource {
    pub fn new(url: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent("mbti-predictor/0.1")
            .timeout(Duration::from_secs(5))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    async fn fetch(&self) -> Result<AnimationInfo> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .context("Failed to fetch animation")?;

        if !response.status().is_success() {
            anyhow::bail!("Animation host returned {}", response.status());
        }

        let body = response
            .text()
            .await
            .context("Failed to read animation body")?;
        parse_header(&body)
    }
}

#[async_trait]
impl AnimationSource for LottieSource {
    async fn load(&self) -> Option<AnimationInfo> {
        match self.fetch().await {
            Ok(info) => Some(info),
            Err(e) => {
                debug!(error = %e, url = %self.url, "Animation unavailable, continuing without it");
                None
            }
        }
    }
}

/// Parse the header fields out of a Lottie JSON document.
fn parse_header(json: &str) -> Result<AnimationInfo> {
    let header: LottieHeader =
        serde_json::from_str(json).context("Failed to parse Lottie document")?;

    Ok(AnimationInfo {
        name: header.nm.filter(|n| !n.trim().is_empty()),
        frame_rate: header.fr,
        frames: (header.op - header.ip).max(0.0),
        width: header.w,
        height: header.h,
    })
}
