//! JSON Feed (version 1) serialization

use serde::Serialize;

use super::{iso8601, FeedEntry, FeedMetadata};
use crate::error::RenderError;

const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1";

#[derive(Serialize)]
struct JsonFeed<'a> {
    version: &'static str,
    title: &'a str,
    home_page_url: &'a str,
    feed_url: &'a str,
    description: &'a str,
    icon: &'a str,
    favicon: &'a str,
    author: JsonFeedAuthor<'a>,
    items: Vec<JsonFeedItem<'a>>,
}

#[derive(Serialize)]
struct JsonFeedAuthor<'a> {
    name: &'a str,
    url: &'a str,
}

#[derive(Serialize)]
struct JsonFeedItem<'a> {
    id: &'a str,
    url: &'a str,
    title: &'a str,
    summary: &'a str,
    content_html: &'a str,
    date_published: String,
    date_modified: String,
    #[serde(skip_serializing_if = "no_tags")]
    tags: &'a [String],
}

fn no_tags(tags: &&[String]) -> bool {
    tags.is_empty()
}

pub fn write_json_feed(meta: &FeedMetadata, entries: &[FeedEntry]) -> Result<String, RenderError> {
    let feed = JsonFeed {
        version: JSON_FEED_VERSION,
        title: &meta.title,
        home_page_url: &meta.link,
        feed_url: &meta.feed_links.json,
        description: &meta.description,
        icon: &meta.image,
        favicon: &meta.favicon,
        author: JsonFeedAuthor {
            name: &meta.author.name,
            url: &meta.author.link,
        },
        items: entries
            .iter()
            .map(|entry| JsonFeedItem {
                id: &entry.id,
                url: &entry.link,
                title: &entry.title,
                summary: &entry.summary,
                content_html: &entry.content,
                date_published: iso8601(entry.published),
                date_modified: iso8601(entry.published),
                tags: &entry.categories,
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&feed)?)
}
