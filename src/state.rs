use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::domain::deck::Deck;
use crate::domain::player::Player;
use crate::domain::stats::SessionStats;
use crate::domain::{HandId, PlayerId, SeatIndex};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::HandHistory;
use crate::engine::pot::Pot;
use crate::eval::hand_rank::HandRank;

/// Фаза игры. Явный enum вместо строкового поля:
/// компилятор следит за полнотой переходов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    /// Стол ждёт начала раздачи.
    Waiting,
    Preflop,
    Flop,
    Turn,
    River,
    /// Раздача завершена, результат в `last_summary`.
    Showdown,
}

impl Phase {
    /// Идёт ли на этой фазе торговля.
    pub fn is_betting(&self) -> bool {
        matches!(self, Phase::Preflop | Phase::Flop | Phase::Turn | Phase::River)
    }
}

/// Результат конкретного игрока в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlayerHandResult {
    pub player_id: PlayerId,
    pub seat: SeatIndex,
    /// Итоговый ранг руки (если дошёл до шоудауна и вскрылся).
    pub rank: Option<HandRank>,
    /// Сколько фишек игрок забрал из банка (0 = ничего).
    pub winnings: Chips,
    pub is_winner: bool,
}

/// Краткое описание завершённой раздачи для фронта/истории.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandSummary {
    pub hand_id: HandId,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    /// Дошла ли раздача до вскрытия карт.
    pub went_to_showdown: bool,
    pub results: Vec<PlayerHandResult>,
}

/// Полное состояние игры – единственный источник истины.
///
/// Все операции фасада (`game`) принимают `&GameState` и возвращают
/// новый экземпляр; внутри engine работает с `&mut GameState`,
/// но наружу мутация не видна.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameState {
    pub config: GameConfig,
    /// Игроки, индекс в векторе == seat.
    pub players: Vec<Player>,
    pub deck: Deck,
    /// Общие карты борда (0/3/4/5).
    pub board: Vec<Card>,
    pub phase: Phase,
    /// Кнопка дилера (None до первой раздачи).
    pub dealer_button: Option<SeatIndex>,
    /// Счётчик раздач; id текущей/последней раздачи.
    pub hand_counter: HandId,
    pub betting: BettingState,
    /// Суммарный банк текущей раздачи.
    pub pot: Pot,
    /// Сколько всего фишек внёс каждый seat за раздачу (для side pots).
    pub contributions: HashMap<SeatIndex, Chips>,
    /// Чей сейчас ход.
    pub current_actor: Option<SeatIndex>,
    /// Лог событий текущей раздачи (ограниченная длина).
    pub history: HandHistory,
    pub stats: SessionStats,
    /// Итог последней завершённой раздачи.
    pub last_summary: Option<HandSummary>,
}

impl GameState {
    pub fn new(config: GameConfig, players: Vec<Player>) -> Self {
        Self {
            config,
            players,
            deck: Deck::standard_52(),
            board: Vec::new(),
            phase: Phase::Waiting,
            dealer_button: None,
            hand_counter: 0,
            betting: BettingState::idle(),
            pot: Pot::new(),
            contributions: HashMap::new(),
            current_actor: None,
            history: HandHistory::new(),
            stats: SessionStats::default(),
            last_summary: None,
        }
    }

    pub fn hand_in_progress(&self) -> bool {
        self.phase.is_betting()
    }

    pub fn player(&self, seat: SeatIndex) -> Result<&Player, EngineError> {
        self.players
            .get(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))
    }

    pub fn player_mut(&mut self, seat: SeatIndex) -> Result<&mut Player, EngineError> {
        self.players
            .get_mut(seat as usize)
            .ok_or(EngineError::InvalidSeat(seat))
    }

    /// Сколько игроков ещё претендует на банк (Active + AllIn).
    pub fn players_in_hand(&self) -> usize {
        self.players.iter().filter(|p| p.is_in_hand()).count()
    }

    /// Сколько игроков ещё может делать ставки.
    pub fn players_who_can_act(&self) -> usize {
        self.players.iter().filter(|p| p.can_act()).count()
    }

    /// Seat игрока-человека.
    pub fn human_seat(&self) -> Option<SeatIndex> {
        self.players
            .iter()
            .position(|p| p.is_human)
            .map(|i| i as SeatIndex)
    }
}
