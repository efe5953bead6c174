use rand::Rng;

use crate::bot::personality::BotPersonality;
use crate::domain::card::{Card, Rank};
use crate::domain::chips::Chips;
use crate::domain::player::Player;
use crate::domain::SeatIndex;
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::BettingState;
use crate::engine::validation::chips_to_call;
use crate::eval::evaluate_best_hand;
use crate::eval::hand_rank::HandCategory;
use crate::state::GameState;

/// Базовая сила категорий для постфлоп-оценки (0..1).
const CATEGORY_STRENGTH: [f32; HandCategory::COUNT] = [
    0.10, // high card
    0.25, // one pair
    0.40, // two pair
    0.55, // three of a kind
    0.70, // straight
    0.75, // flush
    0.85, // full house
    0.95, // four of a kind
    0.99, // straight flush
    1.00, // royal flush
];

/// Решение бота с системным RNG.
pub fn decide_action(state: &GameState, seat: SeatIndex) -> PlayerAction {
    decide_action_with(state, seat, &mut rand::thread_rng())
}

/// Решение бота с внешним RNG (тесты фиксируют seed).
///
/// Входы: оценка силы руки, пот-оддсы, позиция и личность бота.
/// Выход всегда легален: см. `legal_raise` и ветку короткого стека.
pub fn decide_action_with<R: Rng>(state: &GameState, seat: SeatIndex, rng: &mut R) -> PlayerAction {
    let player = match state.players.get(seat as usize) {
        Some(p) => p,
        None => {
            return PlayerAction {
                player_id: 0,
                seat,
                kind: PlayerActionKind::Fold,
            }
        }
    };

    let kind = choose_kind(state, player, rng);
    log::debug!("bot seat {} chose {:?}", seat, kind);

    PlayerAction {
        player_id: player.id,
        seat,
        kind,
    }
}

fn choose_kind<R: Rng>(state: &GameState, player: &Player, rng: &mut R) -> PlayerActionKind {
    let betting = &state.betting;
    let to_call = chips_to_call(player, betting);
    let can_check = to_call.is_zero();

    // Пустой стек: ставить нечего, чек если можно, иначе фолд.
    // При корректной оркестровке бот с пустым стеком хода не получает.
    if player.stack.is_zero() {
        return if can_check {
            PlayerActionKind::Check
        } else {
            PlayerActionKind::Fold
        };
    }

    let personality = player.personality.unwrap_or_default();
    let pot = state.pot.total;

    let mut strength = hand_strength(&player.hole_cards, &state.board);
    strength = (strength + position_bonus(state, player.seat)).clamp(0.0, 1.0);

    let odds = pot_odds(pot, to_call);

    // Колл заберёт весь стек – это решение "играю стек или нет".
    if to_call >= player.stack {
        let commit = strength >= 0.45 || (odds > 0.65 && strength >= 0.30);
        return if commit {
            PlayerActionKind::Call
        } else {
            PlayerActionKind::Fold
        };
    }

    // Пороги от личности: тайтовый бот требует больше силы.
    let fold_threshold = 0.08 + personality.tightness * 0.30;
    let raise_threshold = 0.30 + personality.tightness * 0.25;

    if strength < fold_threshold {
        if can_check {
            return PlayerActionKind::Check;
        }
        // Изредка блефуем вместо фолда.
        if rng.gen_bool(personality.bluff_frequency as f64) {
            let desired = betting.current_bet + pot;
            return legal_raise(player, betting, desired);
        }
        return PlayerActionKind::Fold;
    }

    if strength < raise_threshold {
        if can_check {
            return PlayerActionKind::Check;
        }
        // Средняя рука: колл по агрессии и пот-оддсам.
        let odds_bonus = if odds > 0.6 { 0.25 } else { 0.0 };
        let call_probability =
            (0.35 + personality.aggression / 5.0 + odds_bonus).clamp(0.0, 1.0);
        return if rng.gen_bool(call_probability as f64) {
            PlayerActionKind::Call
        } else {
            PlayerActionKind::Fold
        };
    }

    // Сильная рука: рейз по агрессии, иногда слоуплей.
    let raise_probability = (0.40 + personality.aggression / 4.0).clamp(0.0, 1.0);
    if rng.gen_bool(raise_probability as f64) {
        let sizing = pot_fraction(personality.aggression);
        let jitter = rng.gen_range(0.8..1.2);
        let target = (pot.0 as f32 * sizing * jitter) as u64;
        let desired = betting.current_bet + Chips(target);
        return legal_raise(player, betting, desired);
    }

    if can_check {
        PlayerActionKind::Check
    } else {
        PlayerActionKind::Call
    }
}

/// Привести желаемую суммарную ставку к легальному действию.
///
/// Недорейз поднимаем до минимума; если минимум не помещается в стек –
/// идём олл-ином (единственный легальный недорейз).
fn legal_raise(player: &Player, betting: &BettingState, desired_total: Chips) -> PlayerActionKind {
    if betting.current_bet.is_zero() {
        // Открывающий бет: минимум = min_raise (BB на свежей улице).
        let amount = desired_total.max(betting.min_raise);
        if amount >= player.stack {
            PlayerActionKind::AllIn
        } else {
            PlayerActionKind::Bet(amount)
        }
    } else {
        let min_total = betting.current_bet + betting.min_raise;
        let total = desired_total.max(min_total);
        let diff = total - player.current_bet;
        if diff >= player.stack {
            PlayerActionKind::AllIn
        } else {
            PlayerActionKind::Raise(total)
        }
    }
}

/// Оценка силы руки 0..1.
///
/// Префлоп – эвристика по карману (пары/одномастность/коннекторы),
/// постфлоп – оценка через evaluator с бонусом за старший ранг.
pub fn hand_strength(hole: &[Card], board: &[Card]) -> f32 {
    if hole.len() < 2 {
        return 0.0;
    }
    if board.len() < 3 {
        return preflop_strength(hole);
    }

    let rank = evaluate_best_hand(hole, board);
    let base = CATEGORY_STRENGTH[rank.category() as usize];
    let top_rank = rank.ranks()[0] as u8;
    let kicker_bonus = (top_rank as f32 / 14.0) * 0.1;
    (base + kicker_bonus).min(1.0)
}

/// Префлоп-эвристика: шкала 0..1 поверх целочисленного скоринга
/// (пара 22=0.40 .. AA=1.00, одномастные тузы и бродвеи выше,
/// коннекторы получают надбавку за потенциал).
fn preflop_strength(hole: &[Card]) -> f32 {
    let (a, b) = (hole[0], hole[1]);
    let is_pair = a.rank == b.rank;
    let is_suited = a.suit == b.suit;
    let high = a.rank.max(b.rank);
    let low = a.rank.min(b.rank);
    let hv = high as u8 as u32;
    let lv = low as u8 as u32;
    let gap = hv - lv;

    let score: u32 = if is_pair {
        // 22 = 40, AA = 100
        40 + (hv - 2) * 60 / 12
    } else if is_suited {
        if high == Rank::Ace {
            60 + lv * 3
        } else if hv >= 10 && lv >= 10 {
            70 + (hv - 10) * 3
        } else if gap <= 1 {
            45 + hv
        } else if gap <= 2 {
            40 + hv
        } else {
            30 + hv
        }
    } else if hv >= 10 && lv >= 10 {
        50 + hv + lv / 2
    } else if high == Rank::Ace {
        30 + lv * 2
    } else if gap <= 1 && hv >= 7 {
        35 + hv
    } else {
        15 + hv + lv / 3
    };

    (score.min(100) as f32) / 100.0
}

/// Пот-оддсы: pot / (pot + call). 1.0 = бесплатно.
fn pot_odds(pot: Chips, to_call: Chips) -> f32 {
    if to_call.is_zero() {
        return 1.0;
    }
    pot.0 as f32 / (pot.0 + to_call.0) as f32
}

/// Надбавка за позицию: чем ближе к кнопке, тем шире диапазон.
fn position_bonus(state: &GameState, seat: SeatIndex) -> f32 {
    let n = state.players_in_hand();
    if n <= 2 {
        return 0.0;
    }
    let dealer = match state.dealer_button {
        Some(d) => d,
        None => return 0.0,
    };

    // Расстояние от кнопки против часовой: 0 = сама кнопка (поздняя позиция).
    let len = state.players.len() as u8;
    let dist = (seat + len - dealer) % len;
    let rel = dist as f32 / len as f32;

    if rel == 0.0 || rel > 0.75 {
        0.06
    } else if rel > 0.5 {
        0.02
    } else if rel < 0.3 {
        -0.05
    } else {
        0.0
    }
}

/// Доля пота для сайзинга рейза по агрессии.
fn pot_fraction(aggression: f32) -> f32 {
    if aggression < 0.7 {
        0.5
    } else if aggression < 1.4 {
        0.75
    } else {
        1.0
    }
}
