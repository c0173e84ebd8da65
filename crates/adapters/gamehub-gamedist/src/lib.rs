//! Import GameDistribution's public catalog feed into a Game Hub catalog file.

pub mod feed;
pub mod importer;

pub use feed::{FeedItem, convert_items, slugify};
pub use importer::{ImportError, Importer, ImporterConfig};
