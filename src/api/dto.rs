use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::PlayerStatus;
use crate::domain::stats::SessionStats;
use crate::domain::{PlayerId, SeatIndex};
use crate::state::{HandSummary, Phase};

/// DTO игрока за столом.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayerView {
    pub player_id: PlayerId,
    pub seat: SeatIndex,
    pub name: String,
    pub stack: Chips,
    pub current_bet: Chips,
    pub status: PlayerStatus,
    pub is_human: bool,
    /// Карманные карты: None = скрыты от запрашивающего.
    pub hole_cards: Option<Vec<Card>>,
}

/// DTO всего стола для опроса фронтом.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameView {
    pub phase: Phase,
    pub board: Vec<Card>,
    pub pot: Chips,
    pub current_bet: Chips,
    pub min_raise: Chips,
    pub dealer_button: Option<SeatIndex>,
    pub current_actor: Option<SeatIndex>,
    pub players: Vec<PlayerView>,
    pub stats: SessionStats,
    /// Итог последней завершённой раздачи.
    pub last_summary: Option<HandSummary>,
}
