//! Keyword heuristic that maps a free-text description of a profile's
//! achievements to known badge ids.
//!
//! Matching is a plain substring test on the lower-cased text, so it has no
//! notion of negation: "does NOT have the Shark badge" still yields `shark`.
//! Short keywords such as `vault` or `pair` also match unrelated words. The
//! result is a best-effort guess, never an authoritative answer.

use std::collections::BTreeSet;

/// Keyword to badge id table. Several keywords may point at the same id.
pub const KEYWORDS: &[(&str, &str)] = &[
    ("mars", "mars-2020"),
    ("helicopter", "mars-2020"),
    ("arctic", "arctic-code-vault"),
    ("vault", "arctic-code-vault"),
    ("sponsor", "public-sponsor"),
    ("starstruck", "starstruck"),
    ("shark", "shark"),
    ("yolo", "yolo"),
    ("quickdraw", "quickdraw"),
    ("pair", "pair-extraordinaire"),
    ("galaxy", "galaxy-brain"),
    ("brain", "galaxy-brain"),
];

/// Badge ids whose keywords occur in `text`, case-insensitively.
pub fn detect(text: &str) -> BTreeSet<String> {
    let lower = text.to_lowercase();
    KEYWORDS
        .iter()
        .filter(|(keyword, _)| lower.contains(keyword))
        .map(|(_, id)| id.to_string())
        .collect()
}

/// Outcome of a profile badge detection.
///
/// `Detected` with an empty set means the text source answered and nothing
/// matched. `Unavailable` means the text source itself failed, so nothing is
/// known about the profile's badges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detection {
    Detected(BTreeSet<String>),
    Unavailable(String),
}

impl Detection {
    pub fn from_text(text: &str) -> Self {
        Detection::Detected(detect(text))
    }

    /// Ids to install in the tracker. Empty when detection was unavailable.
    pub fn ids(&self) -> BTreeSet<String> {
        match self {
            Detection::Detected(ids) => ids.clone(),
            Detection::Unavailable(_) => BTreeSet::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Detection::Detected(_))
    }
}
