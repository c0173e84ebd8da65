pub mod card;
pub mod catalog;
pub mod category;
pub mod controller;
pub mod filter;
pub mod game;
pub mod paginate;

pub use catalog::{Catalog, CatalogError};
pub use category::{CategoryFilter, CategorySet, CategoryStrategy, CategoryTag};
pub use controller::{
    ListingBody, ListingQuery, ListingView, PageController, ViewAction, ViewState,
};
pub use game::{GameId, GameRecord};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::catalog::Catalog;
    use crate::category::CategoryStrategy;
    use crate::game::{GameId, GameRecord};

    /// Categories assigned round-robin by [`make_catalog`].
    pub const ROTATION: [&str; 4] = ["action", "puzzle", "casual", "multiplayer"];

    /// A game with the given id, title and category tags.
    pub fn make_game(id: u64, title: &str, categories: &[&str]) -> GameRecord {
        GameRecord {
            id: GameId::from(id),
            title: title.to_string(),
            description: String::new(),
            image: None,
            categories: categories.iter().map(|c| c.to_string()).collect(),
            url: format!("https://games.example.com/{id}/"),
            tags: Vec::new(),
            width: None,
            height: None,
        }
    }

    pub fn with_description(mut game: GameRecord, description: &str) -> GameRecord {
        game.description = description.to_string();
        game
    }

    pub fn with_image(mut game: GameRecord, image: &str) -> GameRecord {
        game.image = Some(image.to_string());
        game
    }

    /// `n` games titled "Game 1".."Game n" with ids 1..=n, categories cycling
    /// through [`ROTATION`], using the default static category list.
    pub fn make_catalog(n: usize) -> Catalog {
        let games = (1..=n)
            .map(|i| make_game(i as u64, &format!("Game {i}"), &[ROTATION[(i - 1) % 4]]))
            .collect();
        Catalog::new(games, &CategoryStrategy::default()).expect("test catalog is valid")
    }
}
