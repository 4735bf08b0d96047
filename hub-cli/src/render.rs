use std::fmt::Write;

use data_badge::Badge;
use data_filter::Gallery;
use data_genai::GroundedAnswer;
use data_profile::UserProfile;
use data_unlock::{Detection, UnlockTracker};
use hub_session::{
    ChatTurn, ConceptOutcome, Role, StrategyView, CONCEPT_READY, IMAGE_EMPTY,
};
use serde::Serialize;

const NO_MATCH: &str = "No badges match the current filters.";

/// Marker column, only present while unlock tracking is on.
fn marker(badge: &Badge, tracker: &UnlockTracker) -> &'static str {
    match (tracker.is_active(), tracker.is_unlocked(&badge.id)) {
        (false, _) => "",
        (true, true) => "[x] ",
        (true, false) => "[ ] ",
    }
}

pub fn badge_line(badge: &Badge, tracker: &UnlockTracker) -> String {
    format!(
        "{}{:<22} {:<24} {:<10} {}",
        marker(badge, tracker),
        badge.id,
        badge.name,
        badge.rarity,
        badge.category
    )
}

pub fn gallery(gallery: &Gallery<'_>, tracker: &UnlockTracker) -> String {
    if gallery.is_empty() {
        return NO_MATCH.to_owned();
    }

    let mut out = String::new();
    if tracker.is_active() {
        let _ = writeln!(out, "Unlocked: {}", tracker.len());
    }
    let groups = [
        ("Earnable", &gallery.earnable),
        ("Historical", &gallery.historical),
    ];
    for (title, badges) in groups {
        if badges.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{} ({})", title, badges.len());
        for badge in badges.iter() {
            let _ = writeln!(out, "  {}", badge_line(badge, tracker));
        }
    }
    out.trim_end().to_owned()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GalleryJson<'a> {
    earnable: &'a [&'a Badge],
    historical: &'a [&'a Badge],
    #[serde(skip_serializing_if = "Option::is_none")]
    unlocked: Option<Vec<&'a str>>,
}

pub fn gallery_json(
    gallery: &Gallery<'_>,
    tracker: &UnlockTracker,
) -> serde_json::Result<String> {
    let unlocked = tracker
        .is_active()
        .then(|| tracker.unlocked().iter().map(String::as_str).collect());
    serde_json::to_string_pretty(&GalleryJson {
        earnable: &gallery.earnable,
        historical: &gallery.historical,
        unlocked,
    })
}

pub fn badge_detail(badge: &Badge, tracker: &UnlockTracker) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", badge.name, badge.id);
    let _ = writeln!(
        out,
        "Rarity: {}  Category: {}",
        badge.rarity, badge.category
    );
    if badge.is_historical {
        let _ = writeln!(out, "Historical: no longer obtainable");
    }
    if tracker.is_active() {
        let state = if tracker.is_unlocked(&badge.id) {
            "unlocked"
        } else {
            "locked"
        };
        let _ = writeln!(out, "Status: {}", state);
    }
    if !badge.description.is_empty() {
        let _ = writeln!(out, "\n{}", badge.description);
    }
    if !badge.unlock_guide.is_empty() {
        let _ = writeln!(out, "\nHow to unlock:\n  {}", badge.unlock_guide);
    }
    if let Some(tiers) = badge.tiers.as_ref().filter(|t| !t.is_empty()) {
        let _ = writeln!(out, "\nTiers:");
        for tier in tiers {
            let _ = writeln!(out, "  {:<8} {}", tier.name, tier.requirements);
        }
    }
    if let Some(url) = &badge.image_url {
        if url.starts_with("data:") {
            let _ = writeln!(out, "\nImage: inline, {} bytes", url.len());
        } else {
            let _ = writeln!(out, "\nImage: {}", url);
        }
    }
    out.trim_end().to_owned()
}

pub fn grounded(answer: &GroundedAnswer) -> String {
    let mut out = answer.text.clone();
    if !answer.sources.is_empty() {
        out.push_str("\n\nSources:");
        for source in &answer.sources {
            if source.title.is_empty() {
                let _ = write!(out, "\n  - {}", source.uri);
            } else {
                let _ =
                    write!(out, "\n  - {} <{}>", source.label(), source.uri);
            }
        }
    }
    out
}

pub fn strategy(view: &StrategyView) -> String {
    format!("Unlock strategy for {}\n\n{}", view.badge_name, view.text)
}

pub fn profile(profile: &UserProfile) -> String {
    format!(
        "{} (@{})\n{}\nRepos: {}  Followers: {}\n{}",
        profile.name,
        profile.username,
        profile.bio,
        profile.public_repos,
        profile.followers,
        profile.html_url
    )
}

/// Detected badges by display name, in catalog order.
pub fn detection<'a, I>(detection: &Detection, catalog: I) -> String
where
    I: IntoIterator<Item = &'a Badge>,
{
    match detection {
        Detection::Unavailable(reason) => {
            format!("Badge detection unavailable: {}", reason)
        }
        Detection::Detected(ids) if ids.is_empty() => {
            "No badges detected.".to_owned()
        }
        Detection::Detected(ids) => {
            let names: Vec<&str> = catalog
                .into_iter()
                .filter(|badge| ids.contains(&badge.id))
                .map(|badge| badge.name.as_str())
                .collect();
            format!("Detected badges: {}", names.join(", "))
        }
    }
}

pub fn concept(outcome: &ConceptOutcome) -> String {
    match outcome {
        ConceptOutcome::Added { badge_id, image } => format!(
            "{} {} ({}, {} base64 chars)",
            CONCEPT_READY,
            badge_id,
            image.mime_type,
            image.data.len()
        ),
        ConceptOutcome::NoImage => IMAGE_EMPTY.to_owned(),
        ConceptOutcome::Failed(message) => message.clone(),
        ConceptOutcome::Unauthorized => {
            "A premium API key is required to generate images.".to_owned()
        }
    }
}

/// Assistant transcript, one block per turn.
pub fn transcript(turns: &[ChatTurn]) -> String {
    if turns.is_empty() {
        return "No conversation yet.".to_owned();
    }
    let blocks: Vec<String> = turns
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                Role::User => "you",
                Role::Model => "hub",
            };
            let answer = GroundedAnswer {
                text: turn.text.clone(),
                sources: turn.sources.clone(),
            };
            let mut block = format!("{}> {}", speaker, grounded(&answer));
            if let Some(image) = &turn.image {
                let _ = write!(block, "\n  [image, {} bytes]", image.len());
            }
            block
        })
        .collect();
    blocks.join("\n\n")
}
