use serde::Serialize;

use crate::category::CategorySet;
use crate::game::GameRecord;

/// Image shown when a game has no thumbnail or the thumbnail fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x250?text=No+Image";

/// Label for games without any category.
pub const DEFAULT_CATEGORY_LABEL: &str = "General";

/// Display-ready representation of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category_label: String,
    pub image: String,
    pub has_image: bool,
    pub play_href: String,
    pub detail_href: String,
}

pub fn render_card(game: &GameRecord, categories: &CategorySet) -> CardView {
    CardView {
        id: game.id.to_string(),
        title: game.title.clone(),
        description: game.description.clone(),
        category_label: category_label(game, categories).to_string(),
        image: game
            .image
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        has_image: game.image.is_some(),
        play_href: play_href(game.id.as_str()),
        detail_href: detail_href(game.id.as_str()),
    }
}

/// Display name of the first category, or [`DEFAULT_CATEGORY_LABEL`].
pub fn category_label<'a>(game: &'a GameRecord, categories: &'a CategorySet) -> &'a str {
    game.primary_category()
        .map_or(DEFAULT_CATEGORY_LABEL, |tag| categories.display_name(tag))
}

pub fn play_href(id: &str) -> String {
    format!("/play?id={}", encode_uri_component(id))
}

pub fn detail_href(id: &str) -> String {
    format!("/detail?id={}", encode_uri_component(id))
}

/// Percent-encode everything except the characters `encodeURIComponent`
/// leaves alone: ASCII alphanumerics and `-_.!~*'()`.
pub fn encode_uri_component(s: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(s.len());
    for &b in s.as_bytes() {
        match b {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(b as char),
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0f) as usize] as char);
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::default_categories;
    use crate::test_helpers::{make_game, with_image};

    #[test]
    fn card_uses_display_name_of_first_category() {
        let set = CategorySet::new(default_categories());
        let game = with_image(
            make_game(2, "Find the Vampire", &["action", "puzzle"]),
            "images/Find.jpg",
        );
        let card = render_card(&game, &set);
        assert_eq!(card.title, "Find the Vampire");
        assert_eq!(card.category_label, "Action Games");
        assert_eq!(card.image, "images/Find.jpg");
        assert!(card.has_image);
        assert_eq!(card.play_href, "/play?id=2");
        assert_eq!(card.detail_href, "/detail?id=2");
    }

    #[test]
    fn unknown_category_shows_raw_tag() {
        let set = CategorySet::new(default_categories());
        let game = make_game(1, "Racer", &["racing"]);
        assert_eq!(render_card(&game, &set).category_label, "racing");
    }

    #[test]
    fn uncategorized_game_is_general() {
        let set = CategorySet::new(default_categories());
        let game = make_game(1, "Mystery", &[]);
        assert_eq!(render_card(&game, &set).category_label, DEFAULT_CATEGORY_LABEL);
    }

    #[test]
    fn missing_image_uses_placeholder() {
        let set = CategorySet::default();
        let card = render_card(&make_game(1, "No Art", &[]), &set);
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert!(!card.has_image);
    }

    #[test]
    fn ids_are_escaped_in_links() {
        assert_eq!(play_href("a b&c=d"), "/play?id=a%20b%26c%3Dd");
        assert_eq!(detail_href("x/y?z"), "/detail?id=x%2Fy%3Fz");
    }

    #[test]
    fn encode_matches_encode_uri_component() {
        assert_eq!(encode_uri_component("bubble-pop_1.0"), "bubble-pop_1.0");
        assert_eq!(encode_uri_component("it's (fun)!*~"), "it's%20(fun)!*~");
        assert_eq!(encode_uri_component("#+/"), "%23%2B%2F");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
        assert_eq!(encode_uri_component(""), "");
    }
}
