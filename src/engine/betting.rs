use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};
use crate::state::Phase;

/// Состояние раунда ставок на конкретной улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingState {
    /// Текущая целевая ставка, до которой должны дотянуться игроки (BB, bet, raise).
    pub current_bet: Chips,
    /// Минимальный размер повышающей части рейза.
    pub min_raise: Chips,
    /// Seat последнего агрессора (bet/raise/all-in).
    pub last_aggressor: Option<SeatIndex>,
    /// Улица, к которой относится раунд.
    pub phase: Phase,
    /// Очередь ходящих (по кругу): кто ещё должен сделать действие.
    pub to_act: Vec<SeatIndex>,
}

impl BettingState {
    pub fn new(phase: Phase, current_bet: Chips, min_raise: Chips, to_act: Vec<SeatIndex>) -> Self {
        Self {
            current_bet,
            min_raise,
            last_aggressor: None,
            phase,
            to_act,
        }
    }

    /// Пустой раунд (между раздачами).
    pub fn idle() -> Self {
        Self::new(Phase::Waiting, Chips::ZERO, Chips::ZERO, Vec::new())
    }

    /// Убрать seat из очереди, если он там есть.
    pub fn mark_acted(&mut self, seat: SeatIndex) {
        self.to_act.retain(|s| *s != seat);
    }

    /// Обновить состояние после bet/raise: новая целевая ставка,
    /// новый min_raise и перезапущенная очередь (engine её формирует).
    pub fn on_raise(
        &mut self,
        seat: SeatIndex,
        new_bet: Chips,
        raise_size: Chips,
        new_to_act: Vec<SeatIndex>,
    ) {
        self.current_bet = new_bet;
        self.min_raise = raise_size;
        self.last_aggressor = Some(seat);
        self.to_act = new_to_act;
    }

    /// Раунд ставок завершён, когда очередь пуста.
    pub fn is_round_complete(&self) -> bool {
        self.to_act.is_empty()
    }
}
