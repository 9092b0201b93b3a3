pub mod board;
pub mod notify;
pub mod wallet;

pub use player_catalog;
