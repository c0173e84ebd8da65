use std::collections::HashMap;

use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::category::{CategorySet, CategoryStrategy};
use crate::game::{GameId, GameRecord};

/// Catalog compiled into the binary, used when no external source is configured.
const EMBEDDED_CATALOG: &str = include_str!("../data/games.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate game id `{0}`")]
    DuplicateId(GameId),

    #[error("game `{0}` has an empty play url")]
    EmptyUrl(GameId),
}

/// In-memory game catalog with an id index and the resolved category list.
#[derive(Debug, Clone)]
pub struct Catalog {
    games: Vec<GameRecord>,
    index: HashMap<GameId, usize>,
    categories: CategorySet,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and records without a target.
    pub fn new(games: Vec<GameRecord>, strategy: &CategoryStrategy) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(games.len());
        for (pos, game) in games.iter().enumerate() {
            if game.url.trim().is_empty() {
                return Err(CatalogError::EmptyUrl(game.id.clone()));
            }
            if index.insert(game.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(game.id.clone()));
            }
        }
        let categories = strategy.resolve(&games);
        tracing::debug!(
            games = games.len(),
            categories = categories.len(),
            "catalog indexed"
        );
        Ok(Self {
            games,
            index,
            categories,
        })
    }

    /// Parse a JSON array of game records.
    pub fn from_json(json: &str, strategy: &CategoryStrategy) -> Result<Self, CatalogError> {
        let games: Vec<GameRecord> = serde_json::from_str(json)?;
        Self::new(games, strategy)
    }

    pub fn from_slice(bytes: &[u8], strategy: &CategoryStrategy) -> Result<Self, CatalogError> {
        let games: Vec<GameRecord> = serde_json::from_slice(bytes)?;
        Self::new(games, strategy)
    }

    /// The built-in catalog.
    pub fn embedded(strategy: &CategoryStrategy) -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG, strategy)
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    /// O(1) lookup by the textual id.
    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.index.get(id.trim()).map(|&pos| &self.games[pos])
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Up to `count` distinct games picked at random.
    pub fn featured<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&GameRecord> {
        self.games.choose_multiple(rng, count).collect()
    }
}
