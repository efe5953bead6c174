//! Доменная модель: карты, колода, фишки, игроки, конфиг стола, статистика.

pub mod card;
pub mod chips;
pub mod config;
pub mod deck;
pub mod player;
pub mod stats;

// Базовые идентификаторы.
pub type PlayerId = u64;
pub type TableId = u64;
pub type HandId = u64;

/// Индекс места за столом (0..num_players-1).
pub type SeatIndex = u8;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use chips::*;
pub use config::*;
pub use deck::*;
pub use player::*;
pub use stats::*;
