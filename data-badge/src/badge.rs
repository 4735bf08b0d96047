use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How hard a badge is to come by.
///
/// Values outside the known set deserialize to [`Rarity::Unknown`], which
/// sorts below everything else.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
    Event,
    #[serde(other)]
    Unknown,
}

impl Rarity {
    /// Sort priority, higher is rarer.
    pub fn priority(&self) -> u8 {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Legendary => 3,
            Rarity::Event => 4,
            Rarity::Unknown => 0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Event => "Event",
            Rarity::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "legendary" => Ok(Rarity::Legendary),
            "event" => Ok(Rarity::Event),
            _ => Err(format!("Unknown rarity: {s}")),
        }
    }
}

/// A named threshold within a badge's progression, e.g. Bronze or Gold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub name: String,
    pub requirements: String,
}

impl Tier {
    pub fn new(name: &str, requirements: &str) -> Self {
        Self {
            name: name.to_owned(),
            requirements: requirements.to_owned(),
        }
    }
}

/// One achievement in the catalog.
///
/// Field names serialize in camelCase (`unlockGuide`, `imageUrl`,
/// `isHistorical`) so catalog files keep the shape of the upstream data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub rarity: Rarity,
    pub category: String,
    pub unlock_guide: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<Tier>>,
    #[serde(default)]
    pub is_historical: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Badge {
    pub fn new(id: &str, name: &str, rarity: Rarity, category: &str) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            description: String::new(),
            rarity,
            category: category.to_owned(),
            unlock_guide: String::new(),
            tiers: None,
            is_historical: false,
            image_url: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_owned();
        self
    }

    pub fn with_unlock_guide(mut self, guide: &str) -> Self {
        self.unlock_guide = guide.to_owned();
        self
    }

    pub fn with_tiers(mut self, tiers: Vec<Tier>) -> Self {
        self.tiers = Some(tiers);
        self
    }

    pub fn with_image_url(mut self, url: &str) -> Self {
        self.image_url = Some(url.to_owned());
        self
    }

    pub fn historical(mut self) -> Self {
        self.is_historical = true;
        self
    }

    /// Whether the badge levels up through graduated thresholds.
    pub fn has_tiers(&self) -> bool {
        self.tiers
            .as_ref()
            .map(|tiers| !tiers.is_empty())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rarity::Unknown, 0)]
    #[case(Rarity::Common, 1)]
    #[case(Rarity::Rare, 2)]
    #[case(Rarity::Legendary, 3)]
    #[case(Rarity::Event, 4)]
    fn rarity_priority_table(#[case] rarity: Rarity, #[case] priority: u8) {
        assert_eq!(rarity.priority(), priority);
    }

    #[test]
    fn unknown_rarity_deserializes_to_unknown() {
        let rarity: Rarity = serde_json::from_str("\"Mythic\"").unwrap();
        assert_eq!(rarity, Rarity::Unknown);
    }

    #[test]
    fn badge_json_uses_camel_case_and_defaults() {
        let json = r#"{
            "id": "yolo",
            "name": "YOLO",
            "description": "Merged a Pull Request without code review.",
            "rarity": "Common",
            "category": "Contribution",
            "unlockGuide": "Merge your own PR."
        }"#;
        let badge: Badge = serde_json::from_str(json).unwrap();
        assert_eq!(badge.unlock_guide, "Merge your own PR.");
        assert!(!badge.is_historical);
        assert!(badge.tiers.is_none());
        assert!(!badge.has_tiers());

        let value = serde_json::to_value(&badge).unwrap();
        assert!(value.get("unlockGuide").is_some());
        assert!(value.get("imageUrl").is_none());
        assert_eq!(value["isHistorical"], false);
    }

    #[test]
    fn rarity_parses_case_insensitively() {
        assert_eq!("legendary".parse::<Rarity>(), Ok(Rarity::Legendary));
        assert_eq!("EVENT".parse::<Rarity>(), Ok(Rarity::Event));
        assert!("mythic".parse::<Rarity>().is_err());
    }
}
