//! Bounty selection
//!
//! Decides which bounties appear in a feed: open ones, optionally restricted
//! by a tag filter, newest first, at most `MAX_FEED_ITEMS`.

use std::collections::HashSet;

use crate::domain::entities::Bounty;

/// Maximum number of entries in a rendered feed
pub const MAX_FEED_ITEMS: usize = 50;

/// Case-insensitive tag allow-list parsed from a comma-separated query value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    tokens: HashSet<String>,
}

impl TagFilter {
    /// Parse a raw `tag` query value. Absent or empty values mean "no filter".
    ///
    /// Tokens are lower-cased but not trimmed, so `coding, writing` matches
    /// `coding` and ` writing`.
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let raw = raw.filter(|r| !r.is_empty())?;
        let tokens = raw.to_lowercase().split(',').map(str::to_string).collect();
        Some(Self { tokens })
    }

    pub fn matches(&self, bounty: &Bounty) -> bool {
        bounty
            .tags
            .iter()
            .any(|tag| self.tokens.contains(&tag.to_lowercase()))
    }
}

/// Select the bounties to render, in feed order
pub fn select_open_bounties(bounties: Vec<Bounty>, filter: Option<&TagFilter>) -> Vec<Bounty> {
    let mut selected: Vec<Bounty> = bounties
        .into_iter()
        .filter(Bounty::is_open)
        .filter(|b| filter.map_or(true, |f| f.matches(b)))
        .collect();

    // Stable: equal timestamps keep upstream order
    selected.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    selected.truncate(MAX_FEED_ITEMS);

    selected
}
