use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::{HandId, PlayerId, SeatIndex};
use crate::engine::actions::PlayerActionKind;
use crate::state::Phase;

/// Максимум событий в логе. При переполнении старые события
/// вытесняются: фронту нужен только хвост истории.
pub const MAX_HAND_EVENTS: usize = 256;

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { hand_id: HandId, dealer: SeatIndex },

    /// Блайнды поставлены.
    BlindsPosted {
        small_blind: Option<(SeatIndex, Chips)>,
        big_blind: Option<(SeatIndex, Chips)>,
    },

    /// Игрок получил карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Открыты общие карты на борде.
    BoardDealt { phase: Phase, cards: Vec<Card> },

    /// Действие игрока.
    PlayerActed {
        player_id: PlayerId,
        seat: SeatIndex,
        action: PlayerActionKind,
        new_stack: Chips,
        pot_after: Chips,
    },

    /// Возврат неуравненной ставки.
    BetReturned { seat: SeatIndex, amount: Chips },

    /// Шоудаун – открытие карт.
    ShowdownReveal {
        seat: SeatIndex,
        player_id: PlayerId,
        hole_cards: Vec<Card>,
        rank_value: u32,
    },

    /// Выплата банка (или его слоя).
    PotAwarded {
        seat: SeatIndex,
        player_id: PlayerId,
        amount: Chips,
    },

    /// Раздача завершена.
    HandFinished { hand_id: HandId },
}

/// Событие с монотонным порядковым номером (номера не сбрасываются
/// при вытеснении старых событий).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HandEvent {
    pub index: u64,
    pub kind: HandEventKind,
}

/// Лог событий: append-only с ограничением длины.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
    next_index: u64,
}

impl HandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: HandEventKind) {
        if self.events.len() >= MAX_HAND_EVENTS {
            self.events.remove(0);
        }
        self.events.push(HandEvent {
            index: self.next_index,
            kind,
        });
        self.next_index += 1;
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
