//! Atom 1.0 serialization

use atom_syndication::{Category, Content, Entry, Feed, Generator, Link, Person, Text};
use chrono::{DateTime, Utc};

use super::{FeedEntry, FeedMetadata};
use crate::error::RenderError;

pub fn write_atom(
    meta: &FeedMetadata,
    entries: &[FeedEntry],
    updated: DateTime<Utc>,
) -> Result<String, RenderError> {
    let feed = Feed {
        id: meta.id.clone(),
        title: Text::plain(meta.title.clone()),
        subtitle: Some(Text::plain(meta.description.clone())),
        updated: updated.fixed_offset(),
        generator: Some(Generator {
            value: meta.generator.clone(),
            ..Default::default()
        }),
        authors: vec![Person {
            name: meta.author.name.clone(),
            uri: Some(meta.author.link.clone()),
            ..Default::default()
        }],
        links: vec![
            Link {
                href: meta.link.clone(),
                rel: "alternate".to_string(),
                ..Default::default()
            },
            Link {
                href: meta.feed_links.atom.clone(),
                rel: "self".to_string(),
                mime_type: Some("application/atom+xml".to_string()),
                ..Default::default()
            },
        ],
        icon: Some(meta.favicon.clone()),
        logo: Some(meta.image.clone()),
        rights: Some(Text::plain(meta.copyright.clone())),
        lang: Some(meta.language.clone()),
        entries: entries.iter().map(to_entry).collect(),
        ..Default::default()
    };

    let buf = feed.write_to(Vec::new())?;
    Ok(String::from_utf8(buf)?)
}

fn to_entry(entry: &FeedEntry) -> Entry {
    let published = entry.published.fixed_offset();

    Entry {
        id: entry.id.clone(),
        title: Text::plain(entry.title.clone()),
        updated: published,
        published: Some(published),
        links: vec![Link {
            href: entry.link.clone(),
            rel: "alternate".to_string(),
            ..Default::default()
        }],
        summary: Some(Text::plain(entry.summary.clone())),
        content: Some(Content {
            value: Some(entry.content.clone()),
            content_type: Some("html".to_string()),
            ..Default::default()
        }),
        categories: entry
            .categories
            .iter()
            .map(|term| Category {
                term: term.clone(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}
