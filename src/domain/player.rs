use serde::{Deserialize, Serialize};

use crate::bot::personality::BotPersonality;
use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{PlayerId, SeatIndex};

/// Статус игрока в контексте текущей раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerStatus {
    /// Игрок активен и может делать ставки.
    Active,
    /// Игрок сфолдил и больше не участвует в банке.
    Folded,
    /// Игрок в олл-ине – ставок больше не делает, но участвует в банках
    /// до уровня своего вклада.
    AllIn,
    /// Игрок вылетел (нулевой стек по итогам раздачи).
    Busted,
}

/// Накопительная статистика игрока за сессию.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct PlayerStats {
    pub hands_played: u64,
    pub hands_won: u64,
    /// Самый крупный выигранный банк (доля игрока).
    pub biggest_pot_won: Chips,
}

/// Игрок за столом. Места плотные: индекс в `GameState::players` == seat.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub seat: SeatIndex,
    pub name: String,
    /// Текущий стек.
    pub stack: Chips,
    /// Ставка в текущем раунде (улице).
    pub current_bet: Chips,
    pub status: PlayerStatus,
    /// Карманные карты (0 или 2 для холдема).
    pub hole_cards: Vec<Card>,
    /// Человек или бот.
    pub is_human: bool,
    /// Личность бота (None для человека).
    pub personality: Option<BotPersonality>,
    pub stats: PlayerStats,
}

impl Player {
    pub fn human(id: PlayerId, seat: SeatIndex, name: String, stack: Chips) -> Self {
        Self {
            id,
            seat,
            name,
            stack,
            current_bet: Chips::ZERO,
            status: PlayerStatus::Active,
            hole_cards: Vec::new(),
            is_human: true,
            personality: None,
            stats: PlayerStats::default(),
        }
    }

    pub fn bot(
        id: PlayerId,
        seat: SeatIndex,
        name: String,
        stack: Chips,
        personality: BotPersonality,
    ) -> Self {
        Self {
            id,
            seat,
            name,
            stack,
            current_bet: Chips::ZERO,
            status: PlayerStatus::Active,
            hole_cards: Vec::new(),
            is_human: false,
            personality: Some(personality),
            stats: PlayerStats::default(),
        }
    }

    /// Участвует ли игрок в текущей раздаче (может выиграть банк).
    pub fn is_in_hand(&self) -> bool {
        matches!(self.status, PlayerStatus::Active | PlayerStatus::AllIn)
    }

    /// Может ли игрок ещё делать ставки на этой улице.
    pub fn can_act(&self) -> bool {
        matches!(self.status, PlayerStatus::Active)
    }
}
