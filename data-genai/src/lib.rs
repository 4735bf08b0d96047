//! # Data GenAI
//!
//! Text, grounded search, long-form reasoning and image generation backed by
//! a hosted generative model.
//!
//! Every operation is a single stateless request. Callers decide how to
//! present failures; the gateway only reports them.

mod gemini;
pub mod prompts;
mod wire;

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose, Engine};
use data_error::Result;
use serde::{Deserialize, Serialize};

pub use gemini::{GeminiClient, GeminiConfig, GEMINI_API};

/// Web page backing a grounded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

impl Source {
    /// Title if present, otherwise the uri.
    pub fn label(&self) -> &str {
        if self.title.is_empty() {
            &self.uri
        } else {
            &self.title
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroundedAnswer {
    pub text: String,
    pub sources: Vec<Source>,
}

/// Inline image returned by the model, still base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub data: String,
}

impl GeneratedImage {
    pub fn to_data_uri(&self) -> String {
        let mime = if self.mime_type.is_empty() {
            "image/png"
        } else {
            &self.mime_type
        };
        format!("data:{};base64,{}", mime, self.data)
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        Ok(general_purpose::STANDARD.decode(&self.data)?)
    }
}

/// Requested output resolution of a generated image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    OneK,
    TwoK,
    FourK,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::OneK => "1K",
            ImageSize::TwoK => "2K",
            ImageSize::FourK => "4K",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "1K" => Ok(ImageSize::OneK),
            "2K" => Ok(ImageSize::TwoK),
            "4K" => Ok(ImageSize::FourK),
            _ => Err(format!("Invalid image size: {}", s)),
        }
    }
}

/// Hosted model operations used by the hub.
#[allow(async_fn_in_trait)]
pub trait AiGateway {
    /// Short answer to a free-form question.
    async fn ask_short(&self, query: &str) -> Result<String>;

    /// Web-grounded answer with the pages it was built from.
    async fn search_grounded(&self, query: &str) -> Result<GroundedAnswer>;

    /// Detailed unlock walkthrough for the named badge.
    async fn explain_strategy(&self, badge_name: &str) -> Result<String>;

    /// Badge artwork for `prompt`, or `None` when the model returned no
    /// image. Callers must pass [`AiGateway::ensure_capability`] first.
    async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> Result<Option<GeneratedImage>>;

    /// Free text naming the achievements visible on a user's profile.
    async fn describe_profile_achievements(
        &self,
        username: &str,
    ) -> Result<String>;

    /// Fails with `AuthorizationUnavailable` while no premium credential is
    /// installed.
    async fn ensure_capability(&self) -> Result<()>;

    fn set_premium_key(&self, key: String);
}
