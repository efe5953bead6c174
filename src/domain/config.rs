use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Стейки стола (SB/BB).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stakes {
    pub small_blind: Chips,
    pub big_blind: Chips,
}

impl Stakes {
    pub fn new(sb: Chips, bb: Chips) -> Self {
        Self {
            small_blind: sb,
            big_blind: bb,
        }
    }
}

/// Конфиг одной игры: число мест, блайнды, стартовый стек.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Количество мест за столом (2–9).
    pub num_players: u8,
    pub stakes: Stakes,
    /// Стартовый стек каждого игрока.
    pub starting_stack: Chips,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 6,
            stakes: Stakes::new(Chips::new(10), Chips::new(20)),
            starting_stack: Chips::new(1000),
        }
    }
}
