use data_error::HubError;
use serde::{Deserialize, Serialize};

pub const NO_BIO: &str = "No bio available.";

/// Read-only snapshot of a public profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub avatar_url: String,
    pub name: String,
    pub bio: String,
    pub public_repos: u32,
    pub followers: u32,
    pub html_url: String,
}

/// Wire shape of `GET /users/{username}`.
#[derive(Debug, Deserialize)]
pub(crate) struct GithubUser {
    pub login: String,
    pub avatar_url: String,
    pub html_url: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub followers: u32,
}

impl From<GithubUser> for UserProfile {
    fn from(user: GithubUser) -> Self {
        let name = user
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| user.login.clone());
        let bio = user
            .bio
            .filter(|bio| !bio.is_empty())
            .unwrap_or_else(|| NO_BIO.to_owned());
        Self {
            username: user.login,
            avatar_url: user.avatar_url,
            name,
            bio,
            public_repos: user.public_repos,
            followers: user.followers,
            html_url: user.html_url,
        }
    }
}

/// Message shown to the user when a profile lookup fails.
pub fn failure_message(err: &HubError) -> String {
    match err {
        HubError::NotFound(_) => "User not found".to_owned(),
        HubError::RateLimited => {
            "API Rate limit exceeded. Try again later.".to_owned()
        }
        HubError::InvalidInput(msg) => msg.clone(),
        _ => "Failed to fetch profile".to_owned(),
    }
}
