use std::collections::HashMap;

use crate::domain::chips::Chips;
use crate::domain::deck::Deck;
use crate::domain::player::PlayerStatus;
use crate::domain::SeatIndex;
use crate::engine::actions::{PlayerAction, PlayerActionKind};
use crate::engine::betting::BettingState;
use crate::engine::errors::EngineError;
use crate::engine::hand_history::{HandEventKind, HandHistory};
use crate::engine::positions::{next_dealer, seats_in_order_from};
use crate::engine::side_pots::build_pot_layout;
use crate::engine::validation::{chips_to_call, validate_action};
use crate::engine::RandomSource;
use crate::eval::evaluate_best_hand;
use crate::eval::hand_rank::{HandCategory, HandRank};
use crate::state::{GameState, HandSummary, Phase, PlayerHandResult};

/// Статус раздачи после применения действия.
#[derive(Clone, Debug, PartialEq)]
pub enum HandStatus {
    Ongoing,
    Finished(HandSummary),
}

/// Старт новой раздачи:
/// - пересобирает и тасует колоду;
/// - сбрасывает пер-раздачные поля игроков;
/// - двигает кнопку дилера;
/// - раздаёт по 2 карманные карты.
///
/// Блайнды ставятся отдельной операцией `post_blinds`.
pub fn start_hand<R: RandomSource>(state: &mut GameState, rng: &mut R) -> Result<(), EngineError> {
    if state.hand_in_progress() {
        return Err(EngineError::HandAlreadyInProgress);
    }

    // Фиксируем вылетевших по итогам прошлой раздачи.
    mark_busted_players(state);

    let live = state
        .players
        .iter()
        .filter(|p| p.status != PlayerStatus::Busted)
        .count();
    if live < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    state.hand_counter += 1;
    state.board.clear();
    state.pot.reset();
    state.contributions.clear();
    state.history = HandHistory::new();
    state.last_summary = None;

    for p in state.players.iter_mut() {
        // Вылетевшие остаются Busted, но карты прошлой раздачи
        // не должны пережить её итог.
        p.current_bet = Chips::ZERO;
        p.hole_cards.clear();
        if p.status != PlayerStatus::Busted {
            p.status = PlayerStatus::Active;
        }
    }

    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    state.deck = deck;

    let dealer = next_dealer(state).ok_or(EngineError::NotEnoughPlayers)?;
    state.dealer_button = Some(dealer);
    state.phase = Phase::Preflop;
    state.betting = BettingState::new(
        Phase::Preflop,
        Chips::ZERO,
        state.config.stakes.big_blind,
        Vec::new(),
    );
    state.current_actor = None;

    state.history.push(HandEventKind::HandStarted {
        hand_id: state.hand_counter,
        dealer,
    });

    deal_hole_cards(state, dealer)?;

    log::info!(
        "hand {} started: dealer seat {}, {} players",
        state.hand_counter,
        dealer,
        live
    );

    Ok(())
}

/// Раздача карманных карт: по кругу начиная слева от кнопки, два круга.
fn deal_hole_cards(state: &mut GameState, dealer: SeatIndex) -> Result<(), EngineError> {
    let mut order = seats_in_order_from(state, dealer);
    if !order.is_empty() {
        order.rotate_left(1);
    }

    for _round in 0..2 {
        for &seat in &order {
            let card = state.deck.draw_one().ok_or(EngineError::DeckExhausted)?;
            state.player_mut(seat)?.hole_cards.push(card);
        }
    }

    for &seat in &order {
        let cards = state.players[seat as usize].hole_cards.clone();
        state
            .history
            .push(HandEventKind::HoleCardsDealt { seat, cards });
    }

    Ok(())
}

/// Постановка блайндов. Отдельная операция после `start_hand`:
/// выставляет current_bet/min_raise и формирует очередь ходов префлопа.
///
/// В хэдз-апе SB ставит кнопка, первой ходит она же;
/// в остальных случаях SB/BB – два места слева от кнопки,
/// первым ходит игрок за BB.
pub fn post_blinds(state: &mut GameState, sb: Chips, bb: Chips) -> Result<(), EngineError> {
    if state.phase != Phase::Preflop {
        return Err(EngineError::NoActiveHand);
    }
    if !state.contributions.is_empty() || !state.betting.current_bet.is_zero() {
        return Err(EngineError::HandAlreadyInProgress);
    }
    if bb.is_zero() || sb > bb {
        return Err(EngineError::IllegalAction);
    }

    let dealer = state
        .dealer_button
        .ok_or(EngineError::Internal("кнопка дилера не установлена"))?;

    let order = seats_in_order_from(state, dealer);
    if order.len() < 2 {
        return Err(EngineError::NotEnoughPlayers);
    }

    let (sb_seat, bb_seat) = if order.len() == 2 {
        // heads-up: кнопка обязана быть малым блайндом
        (order[0], order[1])
    } else {
        (order[1], order[2])
    };

    let sb_paid = post_forced_bet(state, sb_seat, sb);
    let bb_paid = post_forced_bet(state, bb_seat, bb);

    state.betting.current_bet = bb;
    state.betting.min_raise = bb;
    state.betting.last_aggressor = Some(bb_seat);

    state.history.push(HandEventKind::BlindsPosted {
        small_blind: Some((sb_seat, sb_paid)),
        big_blind: Some((bb_seat, bb_paid)),
    });

    // Очередь префлопа: начиная слева от BB, сам BB замыкает круг
    // (у него остаётся опция чека).
    let mut around = seats_in_order_from(state, bb_seat);
    if !around.is_empty() {
        around.rotate_left(1);
    }
    let to_act: Vec<SeatIndex> = around
        .into_iter()
        .filter(|&s| state.players[s as usize].can_act())
        .collect();

    state.current_actor = to_act.first().copied();
    state.betting.to_act = to_act;

    // Оба блайнда ушли в олл-ин прямо с постинга: торговли не будет,
    // борд докатывается до шоудауна сразу.
    if state.betting.to_act.is_empty() {
        advance_phase(state)?;
    }

    Ok(())
}

/// Списать принудительную ставку (не больше стека). Стек в ноль = олл-ин.
fn post_forced_bet(state: &mut GameState, seat: SeatIndex, amount: Chips) -> Chips {
    let paid = {
        let p = &mut state.players[seat as usize];
        let paid = amount.min(p.stack);
        p.stack -= paid;
        p.current_bet += paid;
        if p.stack.is_zero() {
            p.status = PlayerStatus::AllIn;
        }
        paid
    };
    add_contribution(state, seat, paid);
    paid
}

/// Обновить общий банк и вклад места.
fn add_contribution(state: &mut GameState, seat: SeatIndex, amount: Chips) {
    if amount.is_zero() {
        return;
    }
    state.pot.add(amount);
    *state
        .contributions
        .entry(seat)
        .or_insert(Chips::ZERO) += amount;
}

/// Применить действие игрока. Возвращает статус раздачи (идёт / закончилась).
///
/// Любая ошибка валидации возвращается ДО мутаций, поэтому состояние
/// при отклонённом действии остаётся нетронутым.
pub fn apply_action(
    state: &mut GameState,
    action: PlayerAction,
) -> Result<HandStatus, EngineError> {
    if !state.hand_in_progress() {
        return Err(EngineError::NoActiveHand);
    }

    let seat = action.seat;
    let player_ref = state.player(seat)?;

    // Сверяем игрока с местом и очередь хода.
    if player_ref.id != action.player_id {
        return Err(EngineError::NotPlayersTurn(action.player_id));
    }
    if state.current_actor != Some(seat) {
        return Err(EngineError::NotPlayersTurn(action.player_id));
    }

    validate_action(player_ref, &action.kind, &state.betting)?;

    let to_call = chips_to_call(player_ref, &state.betting);
    let current_bet_before = state.betting.current_bet;

    match action.kind {
        PlayerActionKind::Fold => {
            state.players[seat as usize].status = PlayerStatus::Folded;
        }

        PlayerActionKind::Check => {}

        PlayerActionKind::Call => {
            let pay = {
                let p = &mut state.players[seat as usize];
                let pay = to_call.min(p.stack);
                p.stack -= pay;
                p.current_bet += pay;
                if p.stack.is_zero() {
                    // короткий колл = олл-ин
                    p.status = PlayerStatus::AllIn;
                }
                pay
            };
            add_contribution(state, seat, pay);
        }

        PlayerActionKind::Bet(amount) => {
            {
                let p = &mut state.players[seat as usize];
                p.stack -= amount;
                p.current_bet += amount;
                if p.stack.is_zero() {
                    p.status = PlayerStatus::AllIn;
                }
            }
            add_contribution(state, seat, amount);

            let queue = betting_order_after_raise(state, seat);
            state.betting.on_raise(seat, amount, amount, queue);
        }

        PlayerActionKind::Raise(total_bet) => {
            let diff = {
                let p = &mut state.players[seat as usize];
                let diff = total_bet - p.current_bet;
                p.stack -= diff;
                p.current_bet = total_bet;
                if p.stack.is_zero() {
                    p.status = PlayerStatus::AllIn;
                }
                diff
            };
            add_contribution(state, seat, diff);

            let raise_size = total_bet - current_bet_before;
            let queue = betting_order_after_raise(state, seat);
            state.betting.on_raise(seat, total_bet, raise_size, queue);
        }

        PlayerActionKind::AllIn => {
            let (paid, new_total) = {
                let p = &mut state.players[seat as usize];
                let paid = p.stack;
                p.stack = Chips::ZERO;
                p.current_bet += paid;
                p.status = PlayerStatus::AllIn;
                (paid, p.current_bet)
            };
            add_contribution(state, seat, paid);

            if new_total > current_bet_before {
                let increment = new_total - current_bet_before;
                if increment >= state.betting.min_raise {
                    // полноценный рейз – торговля переоткрывается
                    let queue = betting_order_after_raise(state, seat);
                    state.betting.on_raise(seat, new_total, increment, queue);
                } else {
                    // Короткий олл-ин: остальные обязаны доплатить до new_total,
                    // но право нового рейза не открывается и min_raise не растёт.
                    let queue = seats_owing_call(state, seat, new_total);
                    state.betting.current_bet = new_total;
                    state.betting.last_aggressor = Some(seat);
                    state.betting.to_act = queue;
                }
            }
            // Олл-ин колл/недоколл: очередь не трогаем, seat снимается ниже.
        }
    }

    let (player_id, new_stack) = {
        let p = &state.players[seat as usize];
        (p.id, p.stack)
    };
    state.history.push(HandEventKind::PlayerActed {
        player_id,
        seat,
        action: action.kind,
        new_stack,
        pot_after: state.pot.total,
    });
    log::debug!(
        "seat {} {:?}, pot {}, stack {}",
        seat,
        action.kind,
        state.pot.total,
        new_stack
    );

    state.betting.mark_acted(seat);

    // Остался один претендент на банк – раздача завершается без вскрытия.
    if state.players_in_hand() == 1 {
        let summary = finish_without_showdown(state)?;
        return Ok(HandStatus::Finished(summary));
    }

    if state.betting.is_round_complete() {
        advance_phase(state)
    } else {
        state.current_actor = state.betting.to_act.first().copied();
        Ok(HandStatus::Ongoing)
    }
}

/// Очередь после рейза: все активные по кругу, начиная слева от агрессора.
fn betting_order_after_raise(state: &GameState, raiser: SeatIndex) -> Vec<SeatIndex> {
    seats_in_order_from(state, raiser)
        .into_iter()
        .skip(1)
        .filter(|&s| state.players[s as usize].can_act())
        .collect()
}

/// Очередь после короткого олл-ина: только те, кто ещё не уравнял new_total.
fn seats_owing_call(state: &GameState, raiser: SeatIndex, target: Chips) -> Vec<SeatIndex> {
    seats_in_order_from(state, raiser)
        .into_iter()
        .skip(1)
        .filter(|&s| {
            let p = &state.players[s as usize];
            p.can_act() && p.current_bet < target
        })
        .collect()
}

/// Переход улиц / шоудаун после завершения раунда ставок.
///
/// Если торговать больше некому (все в олл-ине), борд докатывается
/// автоматически до ривера и раздача уходит на шоудаун.
pub fn advance_phase(state: &mut GameState) -> Result<HandStatus, EngineError> {
    let dealer = state
        .dealer_button
        .ok_or(EngineError::Internal("кнопка дилера не установлена"))?;

    loop {
        match state.phase {
            Phase::Preflop => deal_street(state, 3, Phase::Flop)?,
            Phase::Flop => deal_street(state, 1, Phase::Turn)?,
            Phase::Turn => deal_street(state, 1, Phase::River)?,
            Phase::River => {
                let summary = finish_with_showdown(state)?;
                return Ok(HandStatus::Finished(summary));
            }
            Phase::Waiting | Phase::Showdown => {
                return Err(EngineError::Internal("переход улицы вне раздачи"));
            }
        }

        reset_street_bets(state);

        if state.players_who_can_act() >= 2 {
            let mut around = seats_in_order_from(state, dealer);
            if !around.is_empty() {
                around.rotate_left(1);
            }
            let to_act: Vec<SeatIndex> = around
                .into_iter()
                .filter(|&s| state.players[s as usize].can_act())
                .collect();

            state.current_actor = to_act.first().copied();
            state.betting.to_act = to_act;
            return Ok(HandStatus::Ongoing);
        }

        // Торговли на этой улице не будет – едем дальше.
        state.current_actor = None;
    }
}

/// Открыть карты борда и перейти на новую улицу.
fn deal_street(state: &mut GameState, count: usize, phase: Phase) -> Result<(), EngineError> {
    let cards = state.deck.draw_n(count).ok_or(EngineError::DeckExhausted)?;
    state.board.extend(cards.iter().copied());
    state.phase = phase;
    state.history.push(HandEventKind::BoardDealt { phase, cards });
    log::debug!("{:?}: board {} cards", phase, state.board.len());
    Ok(())
}

/// Сброс улицы: обнулить текущие ставки, новый BettingState без очереди.
fn reset_street_bets(state: &mut GameState) {
    for p in state.players.iter_mut() {
        p.current_bet = Chips::ZERO;
    }
    state.betting = BettingState::new(
        state.phase,
        Chips::ZERO,
        state.config.stakes.big_blind,
        Vec::new(),
    );
}

/// Завершение раздачи без шоудауна: все сфолдили, остался один.
/// Карты не вскрываются, победитель забирает весь банк.
fn finish_without_showdown(state: &mut GameState) -> Result<HandSummary, EngineError> {
    let winner_seat = state
        .players
        .iter()
        .position(|p| p.is_in_hand())
        .map(|i| i as SeatIndex)
        .ok_or(EngineError::Internal("нет претендентов на банк"))?;

    let total_pot = state.pot.total;

    let winner_id = {
        let p = &mut state.players[winner_seat as usize];
        p.stack += total_pot;
        p.id
    };
    state.history.push(HandEventKind::PotAwarded {
        seat: winner_seat,
        player_id: winner_id,
        amount: total_pot,
    });

    let mut winnings = HashMap::new();
    winnings.insert(winner_seat, total_pot);

    Ok(finalize_hand(state, winnings, HashMap::new(), false, None))
}

/// Завершение раздачи с шоудауном: возвраты, слои банка, дележи.
fn finish_with_showdown(state: &mut GameState) -> Result<HandSummary, EngineError> {
    let dealer = state
        .dealer_button
        .ok_or(EngineError::Internal("кнопка дилера не установлена"))?;

    let layout = build_pot_layout(&state.contributions);

    // Неуравненные ставки возвращаются до розыгрыша банков.
    for &(seat, amount) in &layout.refunds {
        state.players[seat as usize].stack += amount;
        state
            .history
            .push(HandEventKind::BetReturned { seat, amount });
    }

    // Порядок выдачи нечётных фишек: по кругу слева от кнопки.
    let award_order = {
        let mut o = seats_in_order_from(state, dealer);
        if !o.is_empty() {
            o.rotate_left(1);
        }
        o
    };
    let order_pos =
        |seat: SeatIndex| award_order.iter().position(|&s| s == seat).unwrap_or(usize::MAX);

    let mut ranks: HashMap<SeatIndex, HandRank> = HashMap::new();
    let mut winnings: HashMap<SeatIndex, Chips> = HashMap::new();
    let mut main_category: Option<HandCategory> = None;

    for (layer_idx, pot_layer) in layout.pots.iter().enumerate() {
        let contenders: Vec<SeatIndex> = pot_layer
            .eligible_seats
            .iter()
            .copied()
            .filter(|&s| state.players[s as usize].is_in_hand())
            .collect();
        if contenders.is_empty() {
            continue;
        }

        // Вскрытие и оценка (каждый seat оценивается один раз).
        for &seat in &contenders {
            if ranks.contains_key(&seat) {
                continue;
            }
            let (player_id, hole_cards, rank) = {
                let p = &state.players[seat as usize];
                let rank = evaluate_best_hand(&p.hole_cards, &state.board);
                (p.id, p.hole_cards.clone(), rank)
            };
            ranks.insert(seat, rank);
            state.history.push(HandEventKind::ShowdownReveal {
                seat,
                player_id,
                hole_cards,
                rank_value: rank.0,
            });
        }

        let best = contenders
            .iter()
            .map(|s| ranks[s])
            .max()
            .expect("contenders не пуст");

        let mut winners: Vec<SeatIndex> = contenders
            .into_iter()
            .filter(|s| ranks[s] == best)
            .collect();
        winners.sort_by_key(|&s| order_pos(s));

        if layer_idx == 0 {
            main_category = Some(best.category());
        }

        // Поровну; остаток – по одной фишке в порядке слева от кнопки.
        let share = pot_layer.amount.0 / winners.len() as u64;
        let mut remainder = pot_layer.amount.0 % winners.len() as u64;

        for &seat in &winners {
            let mut prize = Chips(share);
            if remainder > 0 {
                prize.0 += 1;
                remainder -= 1;
            }
            let player_id = {
                let p = &mut state.players[seat as usize];
                p.stack += prize;
                p.id
            };
            state.history.push(HandEventKind::PotAwarded {
                seat,
                player_id,
                amount: prize,
            });
            *winnings.entry(seat).or_insert(Chips::ZERO) += prize;
        }
    }

    Ok(finalize_hand(state, winnings, ranks, true, main_category))
}

/// Общий хвост завершения раздачи: статистика, ачивки, статусы,
/// итоговый summary, перевод стола в Showdown.
fn finalize_hand(
    state: &mut GameState,
    winnings: HashMap<SeatIndex, Chips>,
    ranks: HashMap<SeatIndex, HandRank>,
    went_to_showdown: bool,
    main_category: Option<HandCategory>,
) -> HandSummary {
    let total_pot = state.pot.total;
    let hand_id = state.hand_counter;

    let mut results: Vec<PlayerHandResult> = Vec::new();
    for p in &state.players {
        // Участники раздачи – те, кому раздали карты.
        if p.hole_cards.len() == 2 {
            let won = winnings.get(&p.seat).copied().unwrap_or(Chips::ZERO);
            results.push(PlayerHandResult {
                player_id: p.id,
                seat: p.seat,
                rank: ranks.get(&p.seat).copied(),
                winnings: won,
                is_winner: !won.is_zero(),
            });
        }
    }

    state.stats.hands_played += 1;
    if went_to_showdown {
        state.stats.showdowns_reached += 1;
    }
    if let Some(cat) = main_category {
        state.stats.record_category_win(cat);
    }
    if total_pot > state.stats.biggest_pot {
        state.stats.biggest_pot = total_pot;
    }

    for p in state.players.iter_mut() {
        if p.hole_cards.len() == 2 {
            p.stats.hands_played += 1;
        }
        if let Some(won) = winnings.get(&p.seat) {
            if !won.is_zero() {
                p.stats.hands_won += 1;
                if *won > p.stats.biggest_pot_won {
                    p.stats.biggest_pot_won = *won;
                }
            }
        }
    }

    let human_seat = state.human_seat();
    let human_played = human_seat
        .map(|s| state.players[s as usize].hole_cards.len() == 2)
        .unwrap_or(false);
    let human_won = human_seat
        .and_then(|s| winnings.get(&s))
        .map_or(false, |w| !w.is_zero());
    if human_won {
        state.stats.hands_won_by_human += 1;
        state.stats.human_win_streak += 1;
    } else if human_played {
        state.stats.human_win_streak = 0;
    }

    let human_category = human_seat
        .and_then(|s| ranks.get(&s))
        .map(|r| r.category());
    let human_winnings = human_seat
        .and_then(|s| winnings.get(&s).copied())
        .unwrap_or(Chips::ZERO);
    let unlocked = state.stats.check_achievements(
        human_won,
        human_category,
        human_winnings,
        state.config.stakes.big_blind,
    );
    if !unlocked.is_empty() {
        log::info!("achievements unlocked: {unlocked:?}");
    }

    state.history.push(HandEventKind::HandFinished { hand_id });
    log::info!("hand {hand_id} finished, pot {total_pot}");

    mark_busted_players(state);

    state.phase = Phase::Showdown;
    state.current_actor = None;
    state.betting = BettingState::idle();
    state.pot.reset();

    let summary = HandSummary {
        hand_id,
        board: state.board.clone(),
        total_pot,
        went_to_showdown,
        results,
    };
    state.last_summary = Some(summary.clone());
    summary
}

/// Пометить игроков с нулевым стеком как вылетевших.
fn mark_busted_players(state: &mut GameState) {
    for p in state.players.iter_mut() {
        if p.stack.is_zero() && !matches!(p.status, PlayerStatus::Busted) {
            p.status = PlayerStatus::Busted;
        }
    }
}
