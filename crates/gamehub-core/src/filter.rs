use crate::category::CategoryFilter;
use crate::game::GameRecord;

/// Games matching both the category and the search term, in catalog order.
///
/// The term is trimmed and matched case-insensitively as a substring of the
/// title or the description. An empty term matches everything.
pub fn filter_games<'a>(
    games: &'a [GameRecord],
    category: &CategoryFilter,
    term: &str,
) -> Vec<&'a GameRecord> {
    let needle = term.trim().to_lowercase();
    games
        .iter()
        .filter(|game| category.matches(game))
        .filter(|game| needle.is_empty() || matches_term(game, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_term(game: &GameRecord, needle: &str) -> bool {
    game.title.to_lowercase().contains(needle) || game.description.to_lowercase().contains(needle)
}
