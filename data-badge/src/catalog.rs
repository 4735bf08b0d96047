use std::collections::HashSet;
use std::fs;
use std::path::Path;

use data_error::{HubError, Result};

use crate::{seed, Badge, Rarity};

pub const CONCEPT_ID_PREFIX: &str = "custom-";
pub const CONCEPT_CATEGORY: &str = "Concept";
const CONCEPT_NAME: &str = "Custom Concept";
const CONCEPT_GUIDE: &str = "This is a custom generated badge concept.";

/// Ordered collection of badges with unique ids.
///
/// Existing entries are never replaced or removed. New entries only enter at
/// the head, through [`Catalog::prepend`] or [`Catalog::add_concept`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    badges: Vec<Badge>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(badges: Vec<Badge>) -> Result<Self> {
        let mut seen = HashSet::new();
        for badge in &badges {
            if !seen.insert(badge.id.as_str()) {
                return Err(HubError::DuplicateBadge(badge.id.clone()));
            }
        }
        Ok(Self { badges })
    }

    /// Catalog built from the built-in achievement list.
    pub fn seeded() -> Self {
        Self {
            badges: seed::initial_badges(),
        }
    }

    /// Load a catalog from a JSON array of badges.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let badges: Vec<Badge> = serde_json::from_str(&content)?;
        log::debug!(
            "catalog: loaded {} badges from {}",
            badges.len(),
            path.as_ref().display()
        );
        Self::new(badges)
    }

    pub fn store_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(&self.badges)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Badge> {
        self.badges.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Badge> {
        self.badges.iter().find(|badge| badge.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.badges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.badges.is_empty()
    }

    /// Insert a badge at the head of the catalog.
    pub fn prepend(&mut self, badge: Badge) -> Result<()> {
        if self.contains(&badge.id) {
            return Err(HubError::DuplicateBadge(badge.id));
        }
        log::debug!("catalog: prepending {}", badge.id);
        self.badges.insert(0, badge);
        Ok(())
    }

    /// Turn a generated image into a concept badge at the head of the
    /// catalog, stamped with the current time.
    pub fn add_concept(&mut self, image_url: &str, prompt: &str) -> &Badge {
        let millis = chrono::Utc::now().timestamp_millis();
        self.add_concept_at(image_url, prompt, millis)
    }

    /// Same as [`Catalog::add_concept`] with an explicit timestamp. The
    /// timestamp is bumped until the resulting id is free.
    pub fn add_concept_at(
        &mut self,
        image_url: &str,
        prompt: &str,
        mut millis: i64,
    ) -> &Badge {
        while self.contains(&concept_id(millis)) {
            millis += 1;
        }
        let badge = Badge::new(
            &concept_id(millis),
            CONCEPT_NAME,
            Rarity::Legendary,
            CONCEPT_CATEGORY,
        )
        .with_description(prompt)
        .with_unlock_guide(CONCEPT_GUIDE)
        .with_image_url(image_url);

        log::debug!("catalog: adding concept {}", badge.id);
        self.badges.insert(0, badge);
        &self.badges[0]
    }
}

fn concept_id(millis: i64) -> String {
    format!("{CONCEPT_ID_PREFIX}{millis}")
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Badge;
    type IntoIter = std::slice::Iter<'a, Badge>;

    fn into_iter(self) -> Self::IntoIter {
        self.badges.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn duplicate_ids_are_rejected() {
        let badges = vec![
            Badge::new("yolo", "YOLO", Rarity::Common, "Contribution"),
            Badge::new("yolo", "YOLO again", Rarity::Rare, "Contribution"),
        ];
        match Catalog::new(badges) {
            Err(HubError::DuplicateBadge(id)) => assert_eq!(id, "yolo"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn prepend_keeps_existing_entries() {
        let mut catalog = Catalog::seeded();
        let before = catalog.badges().to_vec();

        catalog
            .prepend(Badge::new("new-one", "New", Rarity::Event, "Event"))
            .unwrap();

        assert_eq!(catalog.len(), before.len() + 1);
        assert_eq!(catalog.badges()[0].id, "new-one");
        assert_eq!(&catalog.badges()[1..], before.as_slice());
    }

    #[test]
    fn prepend_refuses_existing_id() {
        let mut catalog = Catalog::seeded();
        let err = catalog
            .prepend(Badge::new("shark", "Shark", Rarity::Rare, "x"))
            .unwrap_err();
        assert!(matches!(err, HubError::DuplicateBadge(_)));
        assert_eq!(catalog.len(), 9);
    }

    #[test]
    fn concept_badge_is_prepended_with_fresh_id() {
        let mut catalog = Catalog::seeded();
        let before = catalog.badges().to_vec();

        let badge = catalog
            .add_concept_at("data:image/png;base64,AAAA", "a golden owl", 1700)
            .clone();

        assert_eq!(badge.id, "custom-1700");
        assert_eq!(badge.name, "Custom Concept");
        assert_eq!(badge.description, "a golden owl");
        assert_eq!(badge.rarity, Rarity::Legendary);
        assert_eq!(badge.category, CONCEPT_CATEGORY);
        assert_eq!(
            badge.image_url.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert!(before.iter().all(|b| b.id != badge.id));
        assert_eq!(&catalog.badges()[1..], before.as_slice());
    }

    #[test]
    fn concept_ids_never_collide() {
        let mut catalog = Catalog::seeded();
        let first = catalog.add_concept_at("data:a", "one", 42).id.clone();
        let second = catalog.add_concept_at("data:b", "two", 42).id.clone();

        assert_eq!(first, "custom-42");
        assert_eq!(second, "custom-43");
        assert_eq!(catalog.badges()[0].id, second);
        assert_eq!(catalog.badges()[1].id, first);
    }

    #[test]
    fn json_round_trip_through_file() {
        let dir = TempDir::new("catalog").expect("Failed to create temp dir");
        let path = dir.path().join("badges.json");

        let catalog = Catalog::seeded();
        catalog.store_json(&path).unwrap();
        let loaded = Catalog::load_json(&path).unwrap();

        assert_eq!(loaded, catalog);
    }

    #[test]
    fn loading_duplicate_ids_from_file_fails() {
        let dir = TempDir::new("catalog").expect("Failed to create temp dir");
        let path = dir.path().join("badges.json");
        std::fs::write(
            &path,
            r#"[
                {"id":"a","name":"A","description":"","rarity":"Rare","category":"x","unlockGuide":""},
                {"id":"a","name":"B","description":"","rarity":"Rare","category":"x","unlockGuide":""}
            ]"#,
        )
        .unwrap();

        assert!(matches!(
            Catalog::load_json(&path),
            Err(HubError::DuplicateBadge(_))
        ));
    }
}
