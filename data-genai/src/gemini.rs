use std::sync::{PoisonError, RwLock};

use data_error::{HubError, Result};
use reqwest::header::HeaderValue;
use url::Url;

use crate::prompts::{self, DEFAULT_THINKING_BUDGET};
use crate::wire::{GenerateRequest, GenerateResponse};
use crate::{AiGateway, GeneratedImage, GroundedAnswer, ImageSize};

pub const GEMINI_API: &str = "https://generativelanguage.googleapis.com";

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub premium_api_key: Option<String>,
    pub base_url: String,
    pub thinking_budget: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            premium_api_key: None,
            base_url: GEMINI_API.to_owned(),
            thinking_budget: DEFAULT_THINKING_BUDGET,
        }
    }
}

/// [`AiGateway`] speaking the Gemini `generateContent` REST protocol.
#[derive(Debug)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<String>,
    premium_api_key: RwLock<Option<String>>,
    thinking_budget: u32,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(HubError::Config(format!(
                "{} cannot be used as an API base",
                base_url
            )));
        }
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url,
            api_key: non_blank(config.api_key),
            premium_api_key: RwLock::new(non_blank(config.premium_api_key)),
            thinking_budget: config.thinking_budget,
        })
    }

    fn model_url(&self, model: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                HubError::Config(format!(
                    "{} cannot be used as an API base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("v1beta")
            .push("models")
            .push(&format!("{}:generateContent", model));
        Ok(url)
    }

    fn key(&self) -> Result<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            HubError::Config(
                "no API key configured, set GEMINI_API_KEY".to_owned(),
            )
        })
    }

    fn premium_key(&self) -> Option<String> {
        self.premium_api_key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn generate(
        &self,
        model: &str,
        key: &str,
        request: &GenerateRequest<'_>,
    ) -> Result<GenerateResponse> {
        let url = self.model_url(model)?;
        log::debug!("genai/{}: generateContent", model);

        let key = HeaderValue::from_str(key).map_err(|_| {
            HubError::Config("API key is not a valid header value".to_owned())
        })?;
        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::warn!("genai/{}: status {}", model, status);
            return Err(HubError::Gateway {
                status: status.as_u16(),
                message: body.chars().take(200).collect(),
            });
        }

        Ok(response.json().await?)
    }

    async fn grounded(&self, prompt: &str) -> Result<GenerateResponse> {
        let request = GenerateRequest::user(prompt).with_search();
        self.generate(prompts::SEARCH_MODEL, self.key()?, &request)
            .await
    }
}

impl AiGateway for GeminiClient {
    async fn ask_short(&self, query: &str) -> Result<String> {
        let request =
            GenerateRequest::user(query).system(prompts::FAST_SYSTEM);
        let response = self
            .generate(prompts::FAST_MODEL, self.key()?, &request)
            .await?;
        Ok(or_fallback(response.text(), prompts::NO_RESPONSE))
    }

    async fn search_grounded(&self, query: &str) -> Result<GroundedAnswer> {
        let response = self.grounded(&prompts::search(query)).await?;
        Ok(GroundedAnswer {
            text: or_fallback(response.text(), prompts::NO_INFO),
            sources: response.sources(),
        })
    }

    async fn explain_strategy(&self, badge_name: &str) -> Result<String> {
        let prompt = prompts::strategy(badge_name);
        let request =
            GenerateRequest::user(&prompt).thinking(self.thinking_budget);
        let response = self
            .generate(prompts::THINKING_MODEL, self.key()?, &request)
            .await?;
        Ok(or_fallback(response.text(), prompts::NO_STRATEGY))
    }

    async fn generate_image(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> Result<Option<GeneratedImage>> {
        let key = self
            .premium_key()
            .ok_or(HubError::AuthorizationUnavailable)?;
        let prompt = prompts::badge_design(prompt);
        let request = GenerateRequest::user(&prompt).image(size.as_str());
        let response = self
            .generate(prompts::IMAGE_MODEL, &key, &request)
            .await?;

        let image = response.first_image();
        if image.is_none() {
            log::warn!(
                "genai/{}: response carried no image",
                prompts::IMAGE_MODEL
            );
        }
        Ok(image)
    }

    async fn describe_profile_achievements(
        &self,
        username: &str,
    ) -> Result<String> {
        let response = self
            .grounded(&prompts::profile_achievements(username))
            .await?;
        Ok(response.text())
    }

    async fn ensure_capability(&self) -> Result<()> {
        match self.premium_key() {
            Some(_) => Ok(()),
            None => Err(HubError::AuthorizationUnavailable),
        }
    }

    fn set_premium_key(&self, key: String) {
        let key = non_blank(Some(key));
        log::debug!("genai: premium key installed: {}", key.is_some());
        *self
            .premium_api_key
            .write()
            .unwrap_or_else(PoisonError::into_inner) = key;
    }
}

fn or_fallback(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_owned()
    } else {
        text
    }
}

fn non_blank(key: Option<String>) -> Option<String> {
    key.map(|key| key.trim().to_owned())
        .filter(|key| !key.is_empty())
}
