use data_badge::Catalog;
use data_filter::{categories, gallery, Gallery, GalleryQuery};
use data_genai::{GeneratedImage, GroundedAnswer, Source};
use data_profile::UserProfile;
use data_unlock::{Detection, UnlockTracker};

/// Independent kinds of in-flight request. Each slot fences its own
/// results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Ask,
    Search,
    Strategy,
    Image,
    Profile,
}

impl Slot {
    fn index(self) -> usize {
        self as usize
    }
}

/// Proof that a request was issued. Only the most recent ticket of a slot
/// may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Slot,
    seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyView {
    pub badge_id: String,
    pub badge_name: String,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Model,
}

/// One entry of the assistant transcript shared by ask, search and concept
/// generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
    pub sources: Vec<Source>,
    /// Data URI of a generated image.
    pub image: Option<String>,
}

impl ChatTurn {
    pub fn user(text: &str) -> Self {
        Self {
            role: Role::User,
            text: text.to_owned(),
            sources: Vec::new(),
            image: None,
        }
    }

    pub fn model(text: &str) -> Self {
        Self {
            role: Role::Model,
            ..Self::user(text)
        }
    }

    pub fn with_sources(mut self, sources: Vec<Source>) -> Self {
        self.sources = sources;
        self
    }

    pub fn with_image(mut self, image: String) -> Self {
        self.image = Some(image);
        self
    }
}

/// Result of a concept generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum ConceptOutcome {
    /// A new badge was prepended to the catalog.
    Added {
        badge_id: String,
        image: GeneratedImage,
    },
    /// The model answered without an image.
    NoImage,
    Failed(String),
    /// No premium credential; nothing was sent.
    Unauthorized,
}

/// Result of a profile lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found {
        profile: UserProfile,
        detection: Detection,
    },
    Failed(String),
}

/// Everything one user sees and changes during a session.
#[derive(Debug, Default)]
pub struct Session {
    pub catalog: Catalog,
    pub tracker: UnlockTracker,
    pub query: GalleryQuery,
    pub profile: Option<UserProfile>,
    pub profile_error: Option<String>,
    pub detection: Option<Detection>,
    pub answer: Option<String>,
    pub search: Option<GroundedAnswer>,
    pub strategy: Option<StrategyView>,
    pub concept: Option<ConceptOutcome>,
    /// Requests and the answers that were applied, oldest first. Superseded
    /// answers never appear.
    pub transcript: Vec<ChatTurn>,
    issued: [u64; 5],
    loading: [bool; 5],
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Badges to display for the current query and unlock state.
    pub fn visible(&self) -> Gallery<'_> {
        gallery(&self.catalog, &self.query, &self.tracker)
    }

    pub fn categories(&self) -> Vec<String> {
        categories(&self.catalog)
    }

    pub fn issue(&mut self, slot: Slot) -> Ticket {
        let i = slot.index();
        self.issued[i] += 1;
        self.loading[i] = true;
        Ticket {
            slot,
            seq: self.issued[i],
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.issued[ticket.slot.index()] == ticket.seq
    }

    /// Settle `ticket`. Returns whether its result should be applied; a
    /// stale ticket leaves the loading flag alone.
    pub fn finish(&mut self, ticket: &Ticket) -> bool {
        if !self.is_current(ticket) {
            log::debug!(
                "session/{:?}: dropping stale result #{}",
                ticket.slot,
                ticket.seq
            );
            return false;
        }
        self.loading[ticket.slot.index()] = false;
        true
    }

    /// Invalidate whatever is in flight for `slot`.
    pub fn cancel(&mut self, slot: Slot) {
        let i = slot.index();
        self.issued[i] += 1;
        self.loading[i] = false;
    }

    pub fn is_loading(&self, slot: Slot) -> bool {
        self.loading[slot.index()]
    }

    pub fn any_loading(&self) -> bool {
        self.loading.iter().any(|loading| *loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_filter::Ownership;
    use data_unlock::{detect, KEYWORDS};
    use rstest::rstest;

    #[test]
    fn later_ticket_supersedes_earlier() {
        let mut session = Session::default();
        let first = session.issue(Slot::Ask);
        let second = session.issue(Slot::Ask);

        assert!(session.is_loading(Slot::Ask));
        assert!(session.finish(&second));
        assert!(!session.is_loading(Slot::Ask));
        assert!(!session.finish(&first));
    }

    #[test]
    fn stale_ticket_keeps_loading_flag() {
        let mut session = Session::default();
        let first = session.issue(Slot::Search);
        let _second = session.issue(Slot::Search);

        assert!(!session.finish(&first));
        assert!(session.is_loading(Slot::Search));
    }

    #[test]
    fn slots_are_independent() {
        let mut session = Session::default();
        let ask = session.issue(Slot::Ask);
        let _search = session.issue(Slot::Search);

        assert!(session.is_current(&ask));
        assert!(session.finish(&ask));
        assert!(session.is_loading(Slot::Search));
        assert!(session.any_loading());
    }

    #[test]
    fn cancel_invalidates_in_flight_ticket() {
        let mut session = Session::default();
        let ticket = session.issue(Slot::Profile);
        session.cancel(Slot::Profile);

        assert!(!session.is_loading(Slot::Profile));
        assert!(!session.finish(&ticket));
    }

    #[test]
    fn visible_follows_query_and_tracker() {
        let mut session = Session::new(Catalog::seeded());
        assert_eq!(session.visible().len(), 9);
        assert_eq!(session.visible().historical.len(), 2);

        session.tracker.toggle("yolo");
        session.query.ownership = Ownership::Owned;
        let ids: Vec<_> =
            session.visible().iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["yolo"]);
    }

    #[test]
    fn categories_come_from_catalog() {
        let session = Session::new(Catalog::seeded());
        assert!(session.categories().contains(&"Community".to_owned()));
    }

    #[test]
    fn every_keyword_maps_to_a_seed_badge() {
        let catalog = Catalog::seeded();
        for (keyword, id) in KEYWORDS {
            assert!(catalog.contains(id), "{} -> {} not seeded", keyword, id);
        }
    }

    #[rstest]
    #[case("Mars 2020 Contributor", "Mars 2020 Helicopter Mission")]
    #[case("Arctic Code Vault Contributor", "Arctic Code Vault Contributor")]
    #[case("Public Sponsor", "Public Sponsor")]
    #[case("Pull Shark x2", "Shark")]
    #[case("Pair Extraordinaire", "Pair Extraordinaire")]
    #[case("Galaxy Brain", "Galaxy Brain")]
    fn achievement_names_detect_their_seed_badge(
        #[case] text: &str,
        #[case] name: &str,
    ) {
        let catalog = Catalog::seeded();
        let names: Vec<_> = detect(text)
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|badge| badge.name.as_str())
            .collect();
        assert_eq!(names, vec![name]);
    }

    #[test]
    fn turns_carry_role_and_attachments() {
        let turn = ChatTurn::model("found")
            .with_sources(vec![Source {
                uri: "https://docs.github.com".to_owned(),
                title: String::new(),
            }])
            .with_image("data:image/png;base64,AAAA".to_owned());
        assert_eq!(turn.role, Role::Model);
        assert_eq!(turn.sources.len(), 1);
        assert_eq!(ChatTurn::user("q").role, Role::User);
        assert!(ChatTurn::user("q").image.is_none());
    }
}
