//! Read-side API: DTO для фронта.
//!
//! Фронт опрашивает состояние стола, поэтому сервер должен отдавать
//! представление, а не сырой GameState: карманные карты видны только
//! герою (и всем не сфолдившим – на шоудауне). Колода наружу
//! не отдаётся вовсе.

pub mod dto;
pub mod queries;

pub use dto::{GameView, PlayerView};
pub use queries::build_game_view;
