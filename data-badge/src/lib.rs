//! # Data Badge
//!
//! Badge records and the ordered catalog that holds them.
//!
//! A [`Catalog`] starts from the built-in seed list (see [`seed`]) or from a
//! JSON file and only ever grows at the head, when a generated concept badge
//! is added. Badge ids are unique for the whole lifetime of a catalog.

mod badge;
mod catalog;
pub mod seed;

pub use badge::{Badge, Rarity, Tier};
pub use catalog::{Catalog, CONCEPT_CATEGORY, CONCEPT_ID_PREFIX};
