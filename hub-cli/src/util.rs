use std::io::{self, IsTerminal, Read};
use std::path::Path;

use data_badge::Catalog;
use data_genai::{GeminiClient, ImageSize};
use data_profile::GithubProfiles;
use hub_session::{ConceptOutcome, Hub};

use crate::{AppError, HubConfig};

pub type LiveHub = Hub<GeminiClient, GithubProfiles>;

/// Catalog from `explicit`, else from the configured path, else the seed.
pub fn provide_catalog(
    config: &HubConfig,
    explicit: Option<&Path>,
) -> Result<Catalog, AppError> {
    match explicit.or(config.catalog_path.as_deref()) {
        Some(path) => Catalog::load_json(path).map_err(|e| {
            AppError::CatalogLoadError(format!("{}: {}", path.display(), e))
        }),
        None => Ok(Catalog::seeded()),
    }
}

pub fn provide_hub(
    config: &HubConfig,
    catalog: Catalog,
) -> Result<LiveHub, AppError> {
    let ai = GeminiClient::new(config.gemini())?;
    let profiles = GithubProfiles::new(
        config.github_base_url(),
        config.user_agent.as_deref(),
    )?;
    Ok(Hub::new(ai, profiles, catalog))
}

/// Ask for the premium key without echoing it.
pub fn prompt_premium_key() -> Result<String, AppError> {
    let key = rpassword::prompt_password("Premium API key: ")?;
    let key = key.trim().to_owned();
    if key.is_empty() {
        return Err(AppError::PremiumKeyRequired);
    }
    Ok(key)
}

/// Generate a concept badge, asking once for a premium key when none is
/// installed.
pub async fn generate_with_key_prompt(
    hub: &LiveHub,
    prompt: &str,
    size: ImageSize,
) -> Result<Option<ConceptOutcome>, AppError> {
    let outcome = hub.generate_concept(prompt, size).await;
    if outcome != Some(ConceptOutcome::Unauthorized) {
        return Ok(outcome);
    }

    println!("Image generation needs a premium API key.");
    hub.authorize(prompt_premium_key()?);
    match hub.generate_concept(prompt, size).await {
        Some(ConceptOutcome::Unauthorized) => {
            Err(AppError::PremiumKeyRequired)
        }
        outcome => Ok(outcome),
    }
}

/// `text` if given, otherwise all of stdin unless it is a terminal.
pub fn text_or_stdin(text: &[String]) -> Result<String, AppError> {
    if !text.is_empty() {
        return Ok(text.join(" "));
    }
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err(AppError::EmptyInput);
    }
    let mut buffer = String::new();
    stdin.lock().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Split `a,b, c` into trimmed, non-empty ids.
pub fn parse_ids(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempdir::TempDir;

    #[rstest]
    #[case("shark,yolo", vec!["shark", "yolo"])]
    #[case(" shark , ,yolo ", vec!["shark", "yolo"])]
    #[case("", vec![])]
    fn ids_are_split(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(parse_ids(input), expected);
    }

    #[test]
    fn catalog_defaults_to_seed() {
        let catalog = provide_catalog(&HubConfig::default(), None).unwrap();
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn explicit_catalog_wins_over_config() {
        let dir = TempDir::new("hub").unwrap();
        let path = dir.path().join("badges.json");
        let mut catalog = Catalog::seeded();
        catalog.add_concept_at("data:image/png;base64,AAAA", "a rocket", 1);
        catalog.store_json(&path).unwrap();

        let config = HubConfig {
            catalog_path: Some(dir.path().join("missing.json")),
            ..HubConfig::default()
        };
        assert!(provide_catalog(&config, None).is_err());

        let loaded = provide_catalog(&config, Some(&path)).unwrap();
        assert_eq!(loaded.len(), 10);
        assert!(loaded.contains("custom-1"));
    }
}
