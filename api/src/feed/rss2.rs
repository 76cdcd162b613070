//! RSS 2.0 serialization

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rss::extension::atom::{AtomExtension, Link};
use rss::{Category, Channel, Guid, Image, Item};

use super::{FeedEntry, FeedMetadata};
use crate::error::RenderError;

const RSS_DOCS: &str = "https://validator.w3.org/feed/docs/rss2.html";
const CONTENT_NAMESPACE: &str = "http://purl.org/rss/1.0/modules/content/";

pub fn write_rss(
    meta: &FeedMetadata,
    entries: &[FeedEntry],
    updated: DateTime<Utc>,
) -> Result<String, RenderError> {
    let mut namespaces = BTreeMap::new();
    namespaces.insert("content".to_string(), CONTENT_NAMESPACE.to_string());

    let channel = Channel {
        title: meta.title.clone(),
        link: meta.link.clone(),
        description: meta.description.clone(),
        language: Some(meta.language.clone()),
        copyright: Some(meta.copyright.clone()),
        generator: Some(meta.generator.clone()),
        docs: Some(RSS_DOCS.to_string()),
        last_build_date: Some(updated.to_rfc2822()),
        image: Some(Image {
            url: meta.image.clone(),
            title: meta.title.clone(),
            link: meta.link.clone(),
            ..Default::default()
        }),
        atom_ext: Some(AtomExtension {
            links: vec![Link {
                href: meta.feed_links.rss.clone(),
                rel: "self".to_string(),
                mime_type: Some("application/rss+xml".to_string()),
                ..Default::default()
            }],
        }),
        namespaces,
        items: entries.iter().map(to_item).collect(),
        ..Default::default()
    };

    let buf = channel.write_to(Vec::new())?;
    Ok(String::from_utf8(buf)?)
}

fn to_item(entry: &FeedEntry) -> Item {
    Item {
        title: Some(entry.title.clone()),
        link: Some(entry.link.clone()),
        description: Some(entry.summary.clone()),
        content: Some(entry.content.clone()),
        guid: Some(Guid {
            value: entry.id.clone(),
            permalink: false,
        }),
        pub_date: Some(entry.published.to_rfc2822()),
        categories: entry
            .categories
            .iter()
            .map(|name| Category {
                name: name.clone(),
                domain: None,
            })
            .collect(),
        ..Default::default()
    }
}
