use serde::{Deserialize, Serialize};

use crate::domain::{Chips, PlayerId, SeatIndex};

/// Тип действия игрока. Суммы внутри вариантов, поэтому
/// нелегальные формы ("check на 50 фишек") непредставимы.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerActionKind {
    Fold,
    Check,
    /// Уравнять текущую ставку (недостающий стек = олл-ин колл).
    Call,
    /// Открывающий бет на улице, где ставки ещё не было.
    Bet(Chips),
    /// Рейз до указанной суммарной ставки на улице.
    Raise(Chips),
    /// Поставить весь стек. Единственный санкционированный путь
    /// к рейзу меньше минимального.
    AllIn,
}

/// Конкретное действие игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerAction {
    /// Какой игрок действует (сверяется с местом).
    pub player_id: PlayerId,
    /// Где он сидит (0..num_players-1).
    pub seat: SeatIndex,
    pub kind: PlayerActionKind,
}
