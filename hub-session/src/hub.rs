use data_badge::Catalog;
use data_error::{HubError, Result};
use data_genai::{AiGateway, GroundedAnswer, ImageSize};
use data_profile::{failure_message, ProfileGateway};
use data_unlock::Detection;
use tokio::sync::{Mutex, MutexGuard};

use crate::session::{
    ChatTurn, ConceptOutcome, LookupOutcome, Session, Slot, StrategyView,
};

pub const ASK_FAILED: &str = "Error generating response.";
pub const SEARCH_FAILED: &str = "Error searching for badges.";
pub const STRATEGY_FAILED: &str = "Error during deep analysis.";
pub const CONCEPT_READY: &str = "Here is your generated badge concept:";
pub const IMAGE_EMPTY: &str = "Failed to generate image.";
pub const IMAGE_FAILED: &str =
    "Error generating image. Ensure a premium API key is configured.";

/// Drives one [`Session`] against the external gateways.
///
/// The session lock is only held to issue a ticket and to apply a result,
/// never across a gateway call, so actions started back to back overlap.
/// Every operation that returns `None` had its result superseded by a later
/// request of the same kind.
pub struct Hub<A, P> {
    ai: A,
    profiles: P,
    session: Mutex<Session>,
}

impl<A: AiGateway, P: ProfileGateway> Hub<A, P> {
    pub fn new(ai: A, profiles: P, catalog: Catalog) -> Self {
        Self {
            ai,
            profiles,
            session: Mutex::new(Session::new(catalog)),
        }
    }

    pub async fn session(&self) -> MutexGuard<'_, Session> {
        self.session.lock().await
    }

    /// Flip one badge's unlocked state. Returns the new state.
    pub async fn toggle(&self, id: &str) -> Result<bool> {
        let mut session = self.session.lock().await;
        if !session.catalog.contains(id) {
            return Err(HubError::UnknownBadge(id.to_owned()));
        }
        session.tracker.toggle(id);
        Ok(session.tracker.is_unlocked(id))
    }

    pub async fn ask(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let ticket = {
            let mut session = self.session.lock().await;
            session.transcript.push(ChatTurn::user(query));
            session.issue(Slot::Ask)
        };

        let answer = match self.ai.ask_short(query).await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("hub/ask: {}", err);
                ASK_FAILED.to_owned()
            }
        };

        let mut session = self.session.lock().await;
        if !session.finish(&ticket) {
            return None;
        }
        session.transcript.push(ChatTurn::model(&answer));
        session.answer = Some(answer.clone());
        Some(answer)
    }

    pub async fn search(&self, query: &str) -> Option<GroundedAnswer> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let ticket = {
            let mut session = self.session.lock().await;
            session.transcript.push(ChatTurn::user(query));
            session.issue(Slot::Search)
        };

        let answer = match self.ai.search_grounded(query).await {
            Ok(answer) => answer,
            Err(err) => {
                log::warn!("hub/search: {}", err);
                GroundedAnswer {
                    text: SEARCH_FAILED.to_owned(),
                    sources: Vec::new(),
                }
            }
        };

        let mut session = self.session.lock().await;
        if !session.finish(&ticket) {
            return None;
        }
        session.transcript.push(
            ChatTurn::model(&answer.text).with_sources(answer.sources.clone()),
        );
        session.search = Some(answer.clone());
        Some(answer)
    }

    /// Ask for a detailed unlock walkthrough of a catalog badge.
    pub async fn analyze_strategy(
        &self,
        badge_id: &str,
    ) -> Result<Option<StrategyView>> {
        let (ticket, badge_name) = {
            let mut session = self.session.lock().await;
            let name = session
                .catalog
                .get(badge_id)
                .map(|badge| badge.name.clone())
                .ok_or_else(|| HubError::UnknownBadge(badge_id.to_owned()))?;
            session.strategy = None;
            (session.issue(Slot::Strategy), name)
        };

        let text = match self.ai.explain_strategy(&badge_name).await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("hub/strategy: {}", err);
                STRATEGY_FAILED.to_owned()
            }
        };

        let mut session = self.session.lock().await;
        if !session.finish(&ticket) {
            return Ok(None);
        }
        let view = StrategyView {
            badge_id: badge_id.to_owned(),
            badge_name,
            text,
        };
        session.strategy = Some(view.clone());
        Ok(Some(view))
    }

    /// Install a premium credential, for a retry after
    /// [`ConceptOutcome::Unauthorized`].
    pub fn authorize(&self, key: String) {
        self.ai.set_premium_key(key);
    }

    /// Generate badge artwork and prepend it to the catalog as a concept
    /// badge.
    pub async fn generate_concept(
        &self,
        prompt: &str,
        size: ImageSize,
    ) -> Option<ConceptOutcome> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        match self.ai.ensure_capability().await {
            Ok(()) => {}
            Err(HubError::AuthorizationUnavailable) => {
                log::debug!("hub/image: no premium credential");
                return Some(ConceptOutcome::Unauthorized);
            }
            Err(err) => {
                log::warn!("hub/image: {}", err);
                return Some(ConceptOutcome::Failed(IMAGE_FAILED.to_owned()));
            }
        }

        let ticket = {
            let mut session = self.session.lock().await;
            let request = format!("Generate badge: {} ({})", prompt, size);
            session.transcript.push(ChatTurn::user(&request));
            session.issue(Slot::Image)
        };
        let generated = self.ai.generate_image(prompt, size).await;

        let mut session = self.session.lock().await;
        if !session.finish(&ticket) {
            return None;
        }
        let outcome = match generated {
            Ok(Some(image)) => {
                let badge = session
                    .catalog
                    .add_concept(&image.to_data_uri(), prompt);
                ConceptOutcome::Added {
                    badge_id: badge.id.clone(),
                    image,
                }
            }
            Ok(None) => ConceptOutcome::NoImage,
            Err(HubError::AuthorizationUnavailable) => {
                ConceptOutcome::Unauthorized
            }
            Err(err) => {
                log::warn!("hub/image: {}", err);
                ConceptOutcome::Failed(IMAGE_FAILED.to_owned())
            }
        };
        let reply = match &outcome {
            ConceptOutcome::Added { image, .. } => {
                ChatTurn::model(CONCEPT_READY).with_image(image.to_data_uri())
            }
            ConceptOutcome::NoImage => ChatTurn::model(IMAGE_EMPTY),
            ConceptOutcome::Failed(message) => ChatTurn::model(message),
            ConceptOutcome::Unauthorized => ChatTurn::model(IMAGE_FAILED),
        };
        session.transcript.push(reply);
        session.concept = Some(outcome.clone());
        Some(outcome)
    }

    /// Fetch a profile, then infer its badges and replace the unlocked set
    /// with them.
    ///
    /// The previous profile and unlock state are cleared as soon as the
    /// lookup starts. If the achievement search fails the profile is still
    /// shown, the tracker is emptied and the detection is reported as
    /// unavailable.
    pub async fn lookup_profile(
        &self,
        username: &str,
    ) -> Option<LookupOutcome> {
        let username = username.trim();
        if username.is_empty() {
            return None;
        }
        let ticket = {
            let mut session = self.session.lock().await;
            session.profile = None;
            session.profile_error = None;
            session.detection = None;
            session.tracker.clear();
            session.issue(Slot::Profile)
        };

        let profile = match self.profiles.fetch_profile(username).await {
            Ok(profile) => profile,
            Err(err) => {
                log::warn!("hub/profile/{}: {}", username, err);
                let message = failure_message(&err);
                let mut session = self.session.lock().await;
                if !session.finish(&ticket) {
                    return None;
                }
                session.profile_error = Some(message.clone());
                return Some(LookupOutcome::Failed(message));
            }
        };

        {
            let mut session = self.session.lock().await;
            if !session.is_current(&ticket) {
                return None;
            }
            session.profile = Some(profile.clone());
        }

        let detection = match self
            .ai
            .describe_profile_achievements(&profile.username)
            .await
        {
            Ok(text) => Detection::from_text(&text),
            Err(err) => {
                log::warn!(
                    "hub/profile/{}: detection failed: {}",
                    username,
                    err
                );
                Detection::Unavailable(err.to_string())
            }
        };

        let mut session = self.session.lock().await;
        if !session.finish(&ticket) {
            return None;
        }
        session.tracker.replace_all(detection.ids());
        session.detection = Some(detection.clone());
        Some(LookupOutcome::Found { profile, detection })
    }

    /// Forget the profile and all unlock state. Any lookup still in flight
    /// is discarded when it completes.
    pub async fn clear_profile(&self) {
        let mut session = self.session.lock().await;
        session.cancel(Slot::Profile);
        session.profile = None;
        session.profile_error = None;
        session.detection = None;
        session.tracker.clear();
    }
}
