//! # Data Filter
//!
//! Derives the visible part of a badge catalog from the current query state.
//!
//! Everything here is a pure function of its inputs: the catalog, a
//! [`GalleryQuery`] and the set of unlocked ids. Running the same inputs twice
//! always yields the same badges in the same order.

mod collate;
mod engine;
mod query;

pub use collate::locale_cmp;
pub use engine::{
    categories, filter_sort, gallery, matches_category, matches_ownership,
    matches_text, Gallery, UnlockedIds,
};
pub use query::{
    CategoryFilter, GalleryQuery, Ownership, SortKey, ALL_CATEGORIES,
};
