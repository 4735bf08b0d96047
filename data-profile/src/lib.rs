//! # Data Profile
//!
//! Public user metadata and the gateway that fetches it.

mod github;
mod profile;

pub use github::{GithubProfiles, GITHUB_API};
pub use profile::{failure_message, UserProfile, NO_BIO};

use data_error::Result;

/// Source of public user profiles.
#[allow(async_fn_in_trait)]
pub trait ProfileGateway {
    /// Fetch the profile of `username`.
    ///
    /// Fails with `NotFound` for a missing user, `RateLimited` when the
    /// service throttles, and a generic gateway or network error otherwise.
    async fn fetch_profile(&self, username: &str) -> Result<UserProfile>;
}
