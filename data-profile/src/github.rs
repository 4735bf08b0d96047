use data_error::{HubError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use url::Url;

use crate::profile::{GithubUser, UserProfile};
use crate::ProfileGateway;

pub const GITHUB_API: &str = "https://api.github.com";

const DEFAULT_USER_AGENT: &str = "achievements-hub";

/// Profile gateway backed by the public GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubProfiles {
    client: reqwest::Client,
    base_url: Url,
}

impl GithubProfiles {
    pub fn new(base_url: &str, user_agent: Option<&str>) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(HubError::Config(format!(
                "{} cannot be used as an API base",
                base_url
            )));
        }

        let mut header = HeaderMap::new();
        let agent = user_agent.unwrap_or(DEFAULT_USER_AGENT);
        header.insert(
            USER_AGENT,
            HeaderValue::from_str(agent).map_err(|_| {
                HubError::Config(format!("invalid user agent {:?}", agent))
            })?,
        );
        header.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let client = reqwest::Client::builder()
            .default_headers(header)
            .build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn user_url(&self, username: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                HubError::Config(format!(
                    "{} cannot be used as an API base",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("users")
            .push(username);
        Ok(url)
    }
}

impl ProfileGateway for GithubProfiles {
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile> {
        let username = username.trim();
        if username.is_empty() {
            return Err(HubError::InvalidInput(
                "username must not be empty".to_owned(),
            ));
        }

        let url = self.user_url(username)?;
        log::debug!("profile/{}: GET {}", username, url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("profile/{}: status {}", username, status);
            return Err(status_error(status, username, &body));
        }

        let user: GithubUser = response.json().await?;
        Ok(user.into())
    }
}

fn status_error(status: StatusCode, username: &str, body: &str) -> HubError {
    match status {
        StatusCode::NOT_FOUND => HubError::NotFound(username.to_owned()),
        // GitHub reports an exhausted unauthenticated quota as 403.
        StatusCode::FORBIDDEN => HubError::RateLimited,
        _ => HubError::Gateway {
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        },
    }
}
