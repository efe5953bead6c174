//! Движок Texas Hold'em для одиночной игры против ботов.
//!
//! Ядро полностью синхронное и чистое на границе API:
//! каждая операция берёт `GameState` и возвращает новый `GameState`,
//! отклонённое действие не меняет состояние вызывающего вообще.
//!
//! Основные операции (см. `game`):
//!   - `new_game` – создать стол (1 человек + N-1 ботов)
//!   - `start_new_hand` – новая раздача (тасовка, карманные карты, кнопка)
//!   - `post_blinds` – постановка блайндов
//!   - `process_action` – применить действие игрока
//!   - `bot::decide_action` – решение бота (всегда легальное)

pub mod api;
pub mod bot;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod game;
pub mod infra;
pub mod state;

pub use engine::{EngineError, PlayerAction, PlayerActionKind};
pub use game::{new_game, post_blinds, process_action, start_new_hand};
pub use state::{GameState, Phase};
