//! Feed entries
//!
//! Format-independent view of one bounty as a feed item.

use chrono::{DateTime, Utc};

use super::{iso8601, FeedMetadata};
use crate::domain::entities::Bounty;

const NO_SUMMARY: &str = "No description";
const NO_DESCRIPTION: &str = "No description available.";
const NO_TAGS: &str = "None";

#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub id: String,
    pub title: String,
    pub link: String,
    pub summary: String,
    /// HTML body
    pub content: String,
    pub published: DateTime<Utc>,
    /// Bounty tags, original casing
    pub categories: Vec<String>,
}

impl FeedEntry {
    pub fn from_bounty(bounty: &Bounty, meta: &FeedMetadata) -> Self {
        let link = meta.bounty_url(&bounty.id);

        Self {
            id: format!("bounty-{}", bounty.id),
            title: format!("[{}] {}", bounty.reward_formatted, bounty.title),
            summary: bounty
                .description
                .clone()
                .unwrap_or_else(|| NO_SUMMARY.to_string()),
            content: render_content(bounty, &link),
            link,
            published: bounty.created_at,
            categories: bounty.tags.clone(),
        }
    }
}

/// Render the HTML body of an entry
fn render_content(bounty: &Bounty, link: &str) -> String {
    let mut buf = String::new();

    buf.push_str(&format!("<h2>{}</h2>", bounty.title));
    buf.push_str(&format!(
        "<p><strong>Reward:</strong> {}</p>",
        bounty.reward_formatted
    ));
    buf.push_str(&format!("<p><strong>Status:</strong> {}</p>", bounty.status));

    if let Some(deadline) = bounty.deadline {
        buf.push_str(&format!(
            "<p><strong>Deadline:</strong> {}</p>",
            iso8601(deadline)
        ));
    }

    let tags = if bounty.tags.is_empty() {
        NO_TAGS.to_string()
    } else {
        bounty.tags.join(", ")
    };
    buf.push_str(&format!("<p><strong>Tags:</strong> {}</p>", tags));

    buf.push_str("<hr>");
    buf.push_str(&format!(
        "<p>{}</p>",
        bounty.description.as_deref().unwrap_or(NO_DESCRIPTION)
    ));

    if !bounty.requirements.is_empty() {
        buf.push_str("<h3>Requirements:</h3><ul>");
        for requirement in &bounty.requirements {
            buf.push_str(&format!("<li>{}</li>", requirement));
        }
        buf.push_str("</ul>");
    }

    buf.push_str(&format!("<p><a href=\"{}\">View Bounty</a></p>", link));

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::test_utils::{test_bounty, test_bounty_with_tags};

    fn meta() -> FeedMetadata {
        FeedMetadata::from_config(&Config::default())
    }

    #[test]
    fn entry_identity_and_title() {
        let mut bounty = test_bounty("42", 1_700_000_000_000);
        bounty.title = "Fix the bug".to_string();
        bounty.reward_formatted = "50 USDC".to_string();

        let entry = FeedEntry::from_bounty(&bounty, &meta());

        assert_eq!(entry.title, "[50 USDC] Fix the bug");
        assert_eq!(entry.id, "bounty-42");
        assert_eq!(entry.link, "https://bounty.owockibot.xyz/bounty/42");
        assert_eq!(entry.published.timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn entry_summary_placeholder() {
        let entry = FeedEntry::from_bounty(&test_bounty("1", 0), &meta());

        assert_eq!(entry.summary, "No description");
        assert!(entry.content.contains("<p>No description available.</p>"));
    }

    #[test]
    fn content_sections_in_order() {
        let mut bounty = test_bounty_with_tags("9", 0, &["Coding", "rust"]);
        bounty.title = "Port the parser".to_string();
        bounty.reward_formatted = "100 USDC".to_string();
        bounty.description = Some("Rewrite it".to_string());
        bounty.deadline = DateTime::from_timestamp_millis(1_767_225_600_000);
        bounty.requirements = vec!["Tests pass".to_string(), "Docs updated".to_string()];

        let entry = FeedEntry::from_bounty(&bounty, &meta());

        assert_eq!(
            entry.content,
            "<h2>Port the parser</h2>\
             <p><strong>Reward:</strong> 100 USDC</p>\
             <p><strong>Status:</strong> open</p>\
             <p><strong>Deadline:</strong> 2026-01-01T00:00:00.000Z</p>\
             <p><strong>Tags:</strong> Coding, rust</p>\
             <hr>\
             <p>Rewrite it</p>\
             <h3>Requirements:</h3><ul><li>Tests pass</li><li>Docs updated</li></ul>\
             <p><a href=\"https://bounty.owockibot.xyz/bounty/9\">View Bounty</a></p>"
        );
    }

    #[test]
    fn content_without_deadline_or_requirements() {
        let entry = FeedEntry::from_bounty(&test_bounty("1", 0), &meta());

        assert!(!entry.content.contains("Deadline:"));
        assert!(!entry.content.contains("<ul>"));
        assert!(!entry.content.contains("Requirements:"));
        assert!(entry.content.contains("<p><strong>Tags:</strong> None</p>"));
    }

    #[test]
    fn zero_deadline_renders_no_deadline_line() {
        let record: crate::domain::entities::BountyRecord = serde_json::from_value(
            serde_json::json!({ "id": 1, "status": "open", "deadline": 0 }),
        )
        .unwrap();

        let entry = FeedEntry::from_bounty(&record.normalize(), &meta());

        assert!(!entry.content.contains("Deadline:"));
        assert!(!entry.content.contains("1970"));
    }

    #[test]
    fn requirements_count_matches() {
        let mut bounty = test_bounty("1", 0);
        bounty.requirements = vec!["a".into(), "b".into(), "c".into()];

        let entry = FeedEntry::from_bounty(&bounty, &meta());

        assert_eq!(entry.content.matches("<li>").count(), 3);
        let a = entry.content.find("<li>a</li>").unwrap();
        let c = entry.content.find("<li>c</li>").unwrap();
        assert!(a < c);
    }

    #[test]
    fn categories_keep_original_casing() {
        let bounty = test_bounty_with_tags("1", 0, &["Coding", "AI"]);

        let entry = FeedEntry::from_bounty(&bounty, &meta());

        assert_eq!(entry.categories, vec!["Coding", "AI"]);
    }
}
