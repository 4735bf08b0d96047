use std::collections::BTreeSet;

use data_filter::UnlockedIds;
use serde::{Deserialize, Serialize};

/// Set of unlocked badge ids plus the "tracking" mode flag.
///
/// While active, badges that are not unlocked are shown dimmed. The flag
/// never filters anything by itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnlockTracker {
    unlocked: BTreeSet<String>,
    active: bool,
}

impl UnlockTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a single id and switch tracking on.
    pub fn toggle(&mut self, id: &str) {
        if !self.unlocked.remove(id) {
            self.unlocked.insert(id.to_owned());
        }
        if !self.active {
            log::debug!("unlock: tracking enabled by toggle of {}", id);
            self.active = true;
        }
    }

    /// Discard the current set and install `ids` instead.
    pub fn replace_all<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unlocked = ids.into_iter().map(Into::into).collect();
        self.active = true;
        log::debug!("unlock: replaced with {} ids", self.unlocked.len());
    }

    pub fn clear(&mut self) {
        self.unlocked.clear();
        self.active = false;
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn unlocked(&self) -> &BTreeSet<String> {
        &self.unlocked
    }

    pub fn len(&self) -> usize {
        self.unlocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty()
    }
}

impl UnlockedIds for UnlockTracker {
    fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.contains(id)
    }
}
