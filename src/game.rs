//! Чистый фасад движка.
//!
//! Каждая операция берёт `&GameState` и возвращает НОВЫЙ `GameState`:
//! внутри работает мутирующий engine, но клон делается до первой
//! мутации, поэтому `Err` гарантированно оставляет состояние
//! вызывающего нетронутым.

use rand::Rng;

use crate::bot::personality::BotPersonality;
use crate::domain::chips::Chips;
use crate::domain::config::GameConfig;
use crate::domain::player::Player;
use crate::engine::actions::PlayerAction;
use crate::engine::errors::EngineError;
use crate::engine::{self, RandomSource};
use crate::infra::rng::SystemRng;
use crate::state::GameState;

/// Создать игру: 1 человек (seat 0) + `num_players - 1` ботов.
/// Фаза `Waiting` – раздача ещё не началась.
pub fn new_game(num_players: u8, config: GameConfig) -> GameState {
    new_game_with(num_players, config, &mut rand::thread_rng())
}

/// То же с внешним RNG (тесты фиксируют личности ботов).
pub fn new_game_with<R: Rng>(num_players: u8, config: GameConfig, rng: &mut R) -> GameState {
    let num_players = num_players.clamp(2, 9);
    let stack = config.starting_stack;

    let mut players = Vec::with_capacity(num_players as usize);
    players.push(Player::human(1, 0, "Hero".to_string(), stack));
    for seat in 1..num_players {
        let personality = BotPersonality::random(rng);
        players.push(Player::bot(
            (seat + 1) as u64,
            seat,
            format!("Bot {seat}"),
            stack,
            personality,
        ));
    }

    let mut config = config;
    config.num_players = num_players;

    GameState::new(config, players)
}

/// Начать новую раздачу (системная тасовка).
pub fn start_new_hand(state: &GameState) -> Result<GameState, EngineError> {
    start_new_hand_with(state, &mut SystemRng)
}

/// Начать новую раздачу с заданным RNG (детерминированные тесты/реплей).
pub fn start_new_hand_with<R: RandomSource>(
    state: &GameState,
    rng: &mut R,
) -> Result<GameState, EngineError> {
    let mut next = state.clone();
    engine::start_hand(&mut next, rng)?;
    Ok(next)
}

/// Поставить блайнды и открыть префлоп-торговлю.
pub fn post_blinds(state: &GameState, sb: Chips, bb: Chips) -> Result<GameState, EngineError> {
    let mut next = state.clone();
    engine::post_blinds(&mut next, sb, bb)?;
    Ok(next)
}

/// Применить действие игрока (человека или бота).
///
/// Нелегальное действие -> `Err`, состояние вызывающего не меняется.
/// Итог раздачи читается из `GameState::last_summary` после того,
/// как фаза станет `Showdown`.
pub fn process_action(state: &GameState, action: PlayerAction) -> Result<GameState, EngineError> {
    let mut next = state.clone();
    engine::apply_action(&mut next, action)?;
    Ok(next)
}
