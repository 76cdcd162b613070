//! Bounty domain entity
//!
//! A task record with a reward, status and metadata, sourced from the
//! bounty board API. The upstream payload is loosely typed, so it is read
//! into `BountyRecord` and normalized once into `Bounty`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status value of bounties that appear in feeds
pub const OPEN_STATUS: &str = "open";

/// A bounty exactly as the upstream API returns it.
///
/// Every field is kept as raw JSON so that a wrong-typed value on one
/// record can never fail decoding of the whole list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BountyRecord {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub status: Value,
    #[serde(default)]
    pub reward_formatted: Value,
    #[serde(default)]
    pub created_at: Value,
    #[serde(default)]
    pub deadline: Value,
    #[serde(default)]
    pub tags: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default)]
    pub requirements: Value,
}

/// A bounty with every optional field resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bounty {
    pub id: String,
    pub title: String,
    pub status: String,
    pub reward_formatted: String,
    pub created_at: DateTime<Utc>,
    pub deadline: Option<DateTime<Utc>>,
    /// Original order and casing
    pub tags: Vec<String>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
}

impl Bounty {
    pub fn is_open(&self) -> bool {
        self.status == OPEN_STATUS
    }
}

impl BountyRecord {
    /// Apply defaults for every missing or malformed field
    pub fn normalize(self) -> Bounty {
        Bounty {
            id: text(&self.id).unwrap_or_default(),
            title: text(&self.title).unwrap_or_default(),
            status: text(&self.status).unwrap_or_default(),
            reward_formatted: text(&self.reward_formatted).unwrap_or_default(),
            created_at: parse_timestamp(&self.created_at).unwrap_or(DateTime::UNIX_EPOCH),
            deadline: parse_deadline(&self.deadline),
            tags: text_list(&self.tags),
            description: text(&self.description).filter(|d| !d.is_empty()),
            requirements: text_list(&self.requirements),
        }
    }
}

impl From<BountyRecord> for Bounty {
    fn from(record: BountyRecord) -> Self {
        record.normalize()
    }
}

/// Scalars become their display form; null is absent
fn text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (_, Some(u), _) => u.to_string(),
            (_, _, Some(f)) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        }),
        other => Some(other.to_string()),
    }
}

/// Anything but an array is an empty list; null elements are dropped
fn text_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(text).collect(),
        _ => Vec::new(),
    }
}

/// A zero or empty deadline means the bounty has none
fn parse_deadline(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.trim().is_empty() => None,
        other => parse_timestamp(other),
    }
}

/// Timestamps arrive as epoch milliseconds or as RFC 3339 strings
fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            DateTime::from_timestamp_millis(millis)
        }
        Value::String(s) => {
            let s = s.trim();
            DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| s.parse::<i64>().ok().and_then(DateTime::from_timestamp_millis))
        }
        _ => None,
    }
}
