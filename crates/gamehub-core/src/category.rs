use serde::{Deserialize, Serialize, Serializer};

use crate::game::GameRecord;

/// Query value that selects every category.
pub const ALL: &str = "All";

/// Category selection applied by the filter engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Tag(String),
}

/// Whether a query value selects every category. Tags for which this holds
/// can never be selected, so they are kept out of the button list.
pub fn selects_all(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value == ALL || value == "all"
}

impl CategoryFilter {
    /// Parse a query-string value. Empty input, `All` and `all` select
    /// everything; anything else is an exact tag.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if selects_all(value) {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Tag(tag) => tag,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn matches(&self, game: &GameRecord) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => game.has_category(tag),
        }
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A filterable category: stable `id` plus display `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTag {
    pub id: String,
    pub name: String,
}

impl CategoryTag {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The four categories the site ships with.
pub fn default_categories() -> Vec<CategoryTag> {
    vec![
        CategoryTag::new("action", "Action Games"),
        CategoryTag::new("puzzle", "Puzzle Games"),
        CategoryTag::new("casual", "Casual Games"),
        CategoryTag::new("multiplayer", "Multiplayer Games"),
    ]
}

/// How the filter buttons are chosen when a catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryStrategy {
    /// A fixed, predeclared list.
    Static(Vec<CategoryTag>),
    /// Every distinct tag seen in the catalog, in catalog order.
    Derived,
}

impl Default for CategoryStrategy {
    fn default() -> Self {
        Self::Static(default_categories())
    }
}

impl CategoryStrategy {
    pub fn resolve(&self, games: &[GameRecord]) -> CategorySet {
        match self {
            Self::Static(tags) => CategorySet::new(tags.clone()),
            Self::Derived => CategorySet::derive(games),
        }
    }
}

/// Resolved category list for a loaded catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategorySet {
    tags: Vec<CategoryTag>,
}

impl CategorySet {
    pub fn new(tags: Vec<CategoryTag>) -> Self {
        Self { tags }
    }

    /// Flatten the category lists of `games`, keeping first occurrences.
    /// Tags spelled like the all-sentinel are skipped.
    pub fn derive(games: &[GameRecord]) -> Self {
        let mut tags: Vec<CategoryTag> = Vec::new();
        for tag in games.iter().flat_map(|g| g.categories.iter()) {
            if !selects_all(tag) && !tags.iter().any(|t| &t.id == tag) {
                tags.push(CategoryTag::new(tag.clone(), tag.clone()));
            }
        }
        Self { tags }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tags.iter().any(|t| t.id == id)
    }

    /// Display name for a tag; unknown tags display as themselves.
    pub fn display_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.tags
            .iter()
            .find(|t| t.id == id)
            .map_or(id, |t| t.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_game;

    #[test]
    fn parse_all_variants() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse("  "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("action"),
            CategoryFilter::Tag("action".to_string())
        );
        // Only the all-sentinel is case-folded.
        assert_eq!(
            CategoryFilter::parse("ALL"),
            CategoryFilter::Tag("ALL".to_string())
        );
    }

    #[test]
    fn filter_serializes_as_string() {
        let json = serde_json::to_string(&CategoryFilter::All).unwrap();
        assert_eq!(json, "\"All\"");
        let json = serde_json::to_string(&CategoryFilter::Tag("puzzle".into())).unwrap();
        assert_eq!(json, "\"puzzle\"");
    }

    #[test]
    fn static_strategy_ignores_catalog() {
        let games = vec![make_game(1, "A", &["racing"])];
        let set = CategoryStrategy::default().resolve(&games);
        assert_eq!(set.len(), 4);
        assert!(set.contains("action"));
        assert!(!set.contains("racing"));
    }

    #[test]
    fn derived_strategy_flattens_in_order() {
        let games = vec![
            make_game(1, "A", &["puzzle", "casual"]),
            make_game(2, "B", &["action"]),
            make_game(3, "C", &["casual", "racing"]),
            make_game(4, "D", &[]),
        ];
        let set = CategoryStrategy::Derived.resolve(&games);
        let ids: Vec<&str> = set.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["puzzle", "casual", "action", "racing"]);
        assert_eq!(set.display_name("racing"), "racing");
    }

    #[test]
    fn derived_strategy_skips_all_sentinel() {
        let games = vec![
            make_game(1, "A", &["all", "x"]),
            make_game(2, "B", &["All", "ALL"]),
        ];
        let set = CategoryStrategy::Derived.resolve(&games);
        let ids: Vec<&str> = set.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "ALL"]);
        // The games still match the selectable tag
        assert!(CategoryFilter::parse("x").matches(&games[0]));
    }

    #[test]
    fn display_name_falls_back_to_id() {
        let set = CategorySet::new(default_categories());
        assert_eq!(set.display_name("action"), "Action Games");
        assert_eq!(set.display_name("strategy"), "strategy");
    }
}
