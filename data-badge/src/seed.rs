//! Built-in achievement list the catalog starts from.

use crate::{Badge, Rarity, Tier};

const ASSETS: &str =
    "https://github.githubassets.com/images/modules/profile/achievements";

fn asset(file: &str) -> String {
    format!("{ASSETS}/{file}-default.png")
}

/// The nine achievements known at startup, in display order.
pub fn initial_badges() -> Vec<Badge> {
    vec![
        Badge::new(
            "mars-2020",
            "Mars 2020 Helicopter Mission",
            Rarity::Legendary,
            "Contribution",
        )
        .with_description(
            "Contributed to repositories used in the Mars 2020 Helicopter mission.",
        )
        .with_unlock_guide(
            "Awarded to developers who contributed code to specific open-source projects used by NASA/JPL for the Mars Ingenuity Helicopter.",
        )
        .with_image_url(&asset("mars-2020-helicopter"))
        .historical(),
        Badge::new(
            "arctic-code-vault",
            "Arctic Code Vault Contributor",
            Rarity::Legendary,
            "event",
        )
        .with_description(
            "Code contributed to a repository included in the 2020 Arctic Code Vault snapshot.",
        )
        .with_unlock_guide(
            "This is a legacy achievement. You must have committed to a repository that was snapshot and stored in the Arctic World Archive in Svalbard, Norway, on 02/02/2020.",
        )
        .with_image_url(&asset("arctic-code-vault-contributor"))
        .historical(),
        Badge::new(
            "public-sponsor",
            "Public Sponsor",
            Rarity::Common,
            "Sponsorship",
        )
        .with_description("Sponsoring open source work via GitHub Sponsors.")
        .with_unlock_guide(
            "Sponsor a developer or organization through GitHub Sponsors. The badge levels up specifically based on how long/much you sponsor.",
        )
        .with_image_url(&asset("public-sponsor")),
        Badge::new("starstruck", "Starstruck", Rarity::Rare, "Community")
            .with_description("Created a repository that has many stars.")
            .with_unlock_guide(
                "Get 16 stars on a repository to unlock Bronze. Silver requires 128 stars, Gold requires 512 stars. (Thresholds may vary slightly based on GitHub updates).",
            )
            .with_tiers(vec![
                Tier::new("Bronze", "16 stars"),
                Tier::new("Silver", "128 stars"),
                Tier::new("Gold", "512 stars"),
            ])
            .with_image_url(&asset("starstruck")),
        Badge::new("shark", "Shark", Rarity::Rare, "Contribution")
            .with_description("Pull Request Shark.")
            .with_unlock_guide(
                "Submitted a Pull Request that was merged without any changes or comments required. \"Gawr Gura\" reference? Maybe. Mostly about clean code.",
            )
            .with_tiers(vec![
                Tier::new("Default", "2 merged pull requests"),
                Tier::new("Bronze", "16 merged pull requests"),
                Tier::new("Silver", "128 merged pull requests"),
                Tier::new("Gold", "1024 merged pull requests"),
            ])
            .with_image_url(&asset("pull-shark")),
        Badge::new("yolo", "YOLO", Rarity::Common, "Contribution")
            .with_description("Merged a Pull Request without code review.")
            .with_unlock_guide(
                "Merge a PR into a protected branch without a review (requires admin privileges usually) or just merge your own PR instantly on a repo.",
            )
            .with_image_url(&asset("yolo")),
        Badge::new("quickdraw", "Quickdraw", Rarity::Common, "Productivity")
            .with_description(
                "Closed an issue or PR within 5 minutes of opening.",
            )
            .with_unlock_guide(
                "Close an issue or pull request very quickly after opening it. Often happens when you solve your own problem instantly.",
            )
            .with_image_url(&asset("quickdraw")),
        Badge::new(
            "pair-extraordinaire",
            "Pair Extraordinaire",
            Rarity::Common,
            "Collaboration",
        )
        .with_description("Co-authored commits.")
        .with_unlock_guide(
            "Merge a commit that has \"Co-authored-by:\" in the footer.",
        )
        .with_tiers(vec![
            Tier::new("Default", "1 co-authored pull request"),
            Tier::new("Bronze", "10 co-authored pull requests"),
            Tier::new("Silver", "24 co-authored pull requests"),
            Tier::new("Gold", "48 co-authored pull requests"),
        ])
        .with_image_url(&asset("pair-extraordinaire")),
        Badge::new("galaxy-brain", "Galaxy Brain", Rarity::Rare, "Community")
            .with_description("Accepted answer on a Discussion.")
            .with_unlock_guide(
                "Have 2 answers marked as \"Accepted\" in GitHub Discussions.",
            )
            .with_tiers(vec![
                Tier::new("Default", "2 accepted answers"),
                Tier::new("Bronze", "8 accepted answers"),
                Tier::new("Silver", "16 accepted answers"),
                Tier::new("Gold", "32 accepted answers"),
            ])
            .with_image_url(&asset("galaxy-brain")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_are_unique() {
        let badges = initial_badges();
        let ids: HashSet<_> = badges.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), badges.len());
        assert_eq!(badges.len(), 9);
    }

    #[test]
    fn legacy_achievements_are_historical() {
        let historical: Vec<_> = initial_badges()
            .into_iter()
            .filter(|b| b.is_historical)
            .map(|b| b.id)
            .collect();
        assert_eq!(historical, vec!["mars-2020", "arctic-code-vault"]);
    }
}
