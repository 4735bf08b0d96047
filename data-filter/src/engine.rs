use std::collections::{BTreeSet, HashSet};

use data_badge::{Badge, Catalog};

use crate::collate::locale_cmp;
use crate::query::{CategoryFilter, GalleryQuery, Ownership, SortKey};

/// Membership lookup for unlocked badge ids.
pub trait UnlockedIds {
    fn is_unlocked(&self, id: &str) -> bool;
}

impl UnlockedIds for HashSet<String> {
    fn is_unlocked(&self, id: &str) -> bool {
        self.contains(id)
    }
}

impl UnlockedIds for BTreeSet<String> {
    fn is_unlocked(&self, id: &str) -> bool {
        self.contains(id)
    }
}

/// Filtered badges split into the two display groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gallery<'a> {
    /// Badges that can still be earned.
    pub earnable: Vec<&'a Badge>,
    /// Retired badges, shown after the earnable ones.
    pub historical: Vec<&'a Badge>,
}

impl<'a> Gallery<'a> {
    pub fn len(&self) -> usize {
        self.earnable.len() + self.historical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.earnable.is_empty() && self.historical.is_empty()
    }

    /// All badges in display order: earnable first, then historical.
    pub fn iter(&self) -> impl Iterator<Item = &'a Badge> + '_ {
        self.earnable
            .iter()
            .chain(self.historical.iter())
            .copied()
    }
}

/// Query text is a case-insensitive substring of the name, the description
/// or the unlock guide. An empty query matches every badge.
pub fn matches_text(badge: &Badge, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    let needle = text.to_lowercase();
    badge.name.to_lowercase().contains(&needle)
        || badge
            .description
            .to_lowercase()
            .contains(&needle)
        || badge
            .unlock_guide
            .to_lowercase()
            .contains(&needle)
}

pub fn matches_category(badge: &Badge, category: &CategoryFilter) -> bool {
    match category {
        CategoryFilter::All => true,
        CategoryFilter::Exact(category) => &badge.category == category,
    }
}

pub fn matches_ownership<U: UnlockedIds + ?Sized>(
    badge: &Badge,
    ownership: Ownership,
    unlocked: &U,
) -> bool {
    match ownership {
        Ownership::All => true,
        Ownership::Owned => unlocked.is_unlocked(&badge.id),
        Ownership::Unowned => !unlocked.is_unlocked(&badge.id),
    }
}

/// Badges passing every active filter, sorted by the query's key.
///
/// The sort is stable, so badges with equal keys keep their catalog order.
pub fn filter_sort<'a, U: UnlockedIds + ?Sized>(
    catalog: &'a Catalog,
    query: &GalleryQuery,
    unlocked: &U,
) -> Vec<&'a Badge> {
    let mut result: Vec<&Badge> = catalog
        .iter()
        .filter(|badge| matches_text(badge, &query.text))
        .filter(|badge| matches_category(badge, &query.category))
        .filter(|badge| matches_ownership(badge, query.ownership, unlocked))
        .collect();

    match query.sort {
        SortKey::Name => result.sort_by(|a, b| locale_cmp(&a.name, &b.name)),
        SortKey::Category => {
            result.sort_by(|a, b| locale_cmp(&a.category, &b.category))
        }
        SortKey::Rarity => result
            .sort_by(|a, b| b.rarity.priority().cmp(&a.rarity.priority())),
    }

    result
}

/// [`filter_sort`] split into earnable and historical groups, each keeping
/// the sorted order.
pub fn gallery<'a, U: UnlockedIds + ?Sized>(
    catalog: &'a Catalog,
    query: &GalleryQuery,
    unlocked: &U,
) -> Gallery<'a> {
    let (historical, earnable): (Vec<&Badge>, Vec<&Badge>) =
        filter_sort(catalog, query, unlocked)
            .into_iter()
            .partition(|badge| badge.is_historical);
    Gallery {
        earnable,
        historical,
    }
}

/// Distinct categories present in the catalog, in code point order.
pub fn categories(catalog: &Catalog) -> Vec<String> {
    catalog
        .iter()
        .map(|badge| badge.category.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
