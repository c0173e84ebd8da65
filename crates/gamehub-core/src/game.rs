use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a catalog entry.
///
/// Catalog files carry ids either as integers (`7`) or as strings
/// (`"vampire-3f2a1c"`). Both are canonicalized to their textual form so a
/// lookup by `"7"` finds the record declared with `id: 7`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for GameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for GameId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for GameId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(s) => Self(s),
            Repr::Signed(n) => Self(n.to_string()),
            Repr::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// A catalog entry exactly as it appears in a catalog file.
///
/// Hand-written catalogs use `image`/`url`/`category`, scraped ones use
/// `icon`/`gameUrl`/`categories`. Both shapes are accepted here and folded
/// into [`GameRecord`] right after parsing.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGameRecord {
    pub id: GameId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "icon")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(alias = "gameUrl")]
    pub url: String,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// Normalized catalog entry. Categories are always a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGameRecord")]
pub struct GameRecord {
    pub id: GameId,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub categories: Vec<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl GameRecord {
    /// First category tag, if the game has any.
    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Exact, case-sensitive tag membership.
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }
}

impl From<RawGameRecord> for GameRecord {
    fn from(raw: RawGameRecord) -> Self {
        let categories = normalize_tags(
            raw.category
                .into_iter()
                .chain(raw.categories.into_iter().flatten()),
        );
        let tags = normalize_tags(raw.tags.into_iter().flatten());
        let image = raw
            .image
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description.unwrap_or_default(),
            image,
            categories,
            url: raw.url,
            tags,
            width: raw.width,
            height: raw.height,
        }
    }
}

/// Trim, drop empties, and keep the first occurrence of each tag.
fn normalize_tags(tags: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || out.iter().any(|t| t == tag) {
            continue;
        }
        out.push(tag.to_string());
    }
    out
}
