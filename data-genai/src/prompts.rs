//! Model names, prompt templates and fallback texts.

pub const FAST_MODEL: &str = "gemini-2.5-flash-lite-latest";
pub const SEARCH_MODEL: &str = "gemini-2.5-flash-latest";
pub const THINKING_MODEL: &str = "gemini-3-pro-preview";
pub const IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

pub const DEFAULT_THINKING_BUDGET: u32 = 32768;

pub const FAST_SYSTEM: &str = "You are a helpful GitHub expert. Answer \
    briefly and concisely about GitHub achievements.";

pub const NO_RESPONSE: &str = "No response generated.";
pub const NO_INFO: &str = "No info found.";
pub const NO_STRATEGY: &str = "Could not analyze strategy.";

pub fn search(query: &str) -> String {
    format!(
        "Search for the latest GitHub profile badges and achievements \
         information: {}",
        query
    )
}

pub fn strategy(badge_name: &str) -> String {
    format!(
        "Explain in extreme detail exactly how to unlock the '{}' \
         achievement on GitHub. Include edge cases, requirements, and \
         historical context if applicable.",
        badge_name
    )
}

pub fn badge_design(prompt: &str) -> String {
    format!(
        "Design a high quality, 3D glossy style GitHub achievement badge \
         for: {}. The style should match existing GitHub badges (hexagonal \
         or circular, metallic or colorful).",
        prompt
    )
}

pub fn profile_achievements(username: &str) -> String {
    format!(
        "Search for the GitHub profile of user '{0}' (github.com/{0}). \
         Specifically look for the 'Achievements' section on their profile \
         page. List the exact names of all the achievements/badges they \
         have unlocked (e.g., Pull Shark, YOLO, Arctic Code Vault \
         Contributor, Starstruck, Public Sponsor, Mars 2020 Helicopter \
         Mission, Pair Extraordinaire, Galaxy Brain, Quickdraw). Return the \
         names in a comma-separated list. If you cannot find the profile or \
         achievements, say \"None\".",
        username
    )
}
