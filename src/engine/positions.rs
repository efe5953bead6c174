use crate::domain::player::PlayerStatus;
use crate::domain::SeatIndex;
use crate::state::GameState;

/// Места в порядке обхода по кругу начиная с `start` (включительно),
/// только не вылетевшие игроки.
pub fn seats_in_order_from(state: &GameState, start: SeatIndex) -> Vec<SeatIndex> {
    let n = state.players.len();
    let mut seats = Vec::with_capacity(n);
    if n == 0 {
        return seats;
    }

    let mut idx = start as usize % n;
    for _ in 0..n {
        if state.players[idx].status != PlayerStatus::Busted {
            seats.push(idx as SeatIndex);
        }
        idx = (idx + 1) % n;
    }
    seats
}

/// Следующее живое место по кругу после `start` (не включая его).
pub fn next_live_seat(state: &GameState, start: SeatIndex) -> Option<SeatIndex> {
    let n = state.players.len();
    if n == 0 {
        return None;
    }

    let mut idx = (start as usize + 1) % n;
    for _ in 0..n {
        if state.players[idx].status != PlayerStatus::Busted {
            return Some(idx as SeatIndex);
        }
        idx = (idx + 1) % n;
    }
    None
}

/// Позиция дилерской кнопки на новую раздачу:
/// следующая живая после текущей, либо первая живая вообще.
pub fn next_dealer(state: &GameState) -> Option<SeatIndex> {
    match state.dealer_button {
        Some(button) => next_live_seat(state, button),
        None => state
            .players
            .iter()
            .position(|p| p.status != PlayerStatus::Busted)
            .map(|i| i as SeatIndex),
    }
}
