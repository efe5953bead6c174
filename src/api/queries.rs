use crate::domain::SeatIndex;
use crate::state::{GameState, Phase};

use super::dto::{GameView, PlayerView};

/// Собрать представление стола для запрашивающего игрока.
///
/// `hero_seat` – чьими глазами смотрим: его карты открыты всегда.
/// Чужие карты открываются только на шоудауне и только у тех,
/// кто дошёл до вскрытия.
pub fn build_game_view(state: &GameState, hero_seat: Option<SeatIndex>) -> GameView {
    let showdown = state.phase == Phase::Showdown;

    // Вскрылись те, у кого в итогах раздачи есть ранг руки.
    let revealed_at_showdown = |seat: SeatIndex| -> bool {
        showdown
            && state
                .last_summary
                .as_ref()
                .map_or(false, |s| {
                    s.results.iter().any(|r| r.seat == seat && r.rank.is_some())
                })
    };

    let players = state
        .players
        .iter()
        .map(|p| {
            let is_hero = hero_seat == Some(p.seat);
            let revealed = revealed_at_showdown(p.seat);
            let hole_cards = if (is_hero || revealed) && !p.hole_cards.is_empty() {
                Some(p.hole_cards.clone())
            } else {
                None
            };

            PlayerView {
                player_id: p.id,
                seat: p.seat,
                name: p.name.clone(),
                stack: p.stack,
                current_bet: p.current_bet,
                status: p.status,
                is_human: p.is_human,
                hole_cards,
            }
        })
        .collect();

    GameView {
        phase: state.phase,
        board: state.board.clone(),
        pot: state.pot.total,
        current_bet: state.betting.current_bet,
        min_raise: state.betting.min_raise,
        dealer_button: state.dealer_button,
        current_actor: state.current_actor,
        players,
        stats: state.stats.clone(),
        last_summary: state.last_summary.clone(),
    }
}
