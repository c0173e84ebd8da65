use std::collections::HashSet;

use serde::Deserialize;

use gamehub_core::{GameId, GameRecord};

/// Frame URL prefix for GameDistribution titles, followed by the md5.
pub const EMBED_BASE: &str = "https://html5.gamedistribution.com";

/// One entry in the feed. Only the fields the catalog needs.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeedItem {
    #[serde(default)]
    pub md5: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub asset: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub tag: Vec<String>,
    /// The feed sends dimensions as either strings or numbers.
    #[serde(default)]
    pub width: Option<serde_json::Value>,
    #[serde(default)]
    pub height: Option<serde_json::Value>,
}

/// Lowercase, drop everything but word characters, whitespace and `-`, then
/// turn spaces into dashes.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect::<String>()
        .trim()
        .replace(' ', "-")
}

fn dimension(value: Option<&serde_json::Value>) -> Option<u32> {
    let n: u32 = match value? {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok())?,
        serde_json::Value::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    (n > 0).then_some(n)
}

impl FeedItem {
    /// Convert to a catalog record, or `None` when the item has no md5.
    pub fn to_record(&self) -> Option<GameRecord> {
        let md5 = self.md5.as_deref().map(str::trim).filter(|m| !m.is_empty())?;

        let slug = slugify(&self.title);
        let id = if slug.is_empty() {
            md5.to_string()
        } else {
            let prefix: String = md5.chars().take(6).collect();
            format!("{slug}-{prefix}")
        };

        let image = self
            .asset
            .first()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty());

        Some(GameRecord {
            id: GameId::new(id),
            title: self.title.clone(),
            description: self.description.clone(),
            image,
            categories: self.category.clone(),
            url: format!("{EMBED_BASE}/{md5}/"),
            tags: self.tag.clone(),
            width: dimension(self.width.as_ref()),
            height: dimension(self.height.as_ref()),
        })
    }
}

/// Convert feed items, skipping ones without an md5 and dropping later
/// duplicates of an id already seen.
pub fn convert_items(items: &[FeedItem]) -> Vec<GameRecord> {
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let Some(record) = item.to_record() else {
            tracing::debug!(title = %item.title, "skipping feed item without md5");
            continue;
        };
        if !seen.insert(record.id.clone()) {
            tracing::debug!(id = %record.id, "skipping duplicate feed item");
            continue;
        }
        records.push(record);
    }
    records
}
