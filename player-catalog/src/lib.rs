mod client;
pub mod config;
mod fallback;
pub mod player;

pub use client::{NetworkError, PlayerCatalog};
pub use config::{CatalogConfig, DEFAULT_PER_PAGE};
pub use fallback::fallback_all_stars;
pub use player::{PageMeta, Player, PlayerId, PlayerPage, Team};
