//! Покерный движок: ставки, переход улиц, сайд-поты, шоудаун.
//!
//! Основные операции:
//!   - `start_hand` – запустить новую раздачу
//!   - `post_blinds` – поставить блайнды и открыть торговлю
//!   - `apply_action` – применить действие игрока
//!   - `advance_phase` – авто-переход улиц / завершение раздачи
//!
//! Все функции работают с `&mut GameState`; чистый фасад – в `crate::game`.

pub mod actions;
pub mod betting;
pub mod errors;
pub mod game_loop;
pub mod hand_history;
pub mod positions;
pub mod pot;
pub mod registry;
pub mod side_pots;
pub mod validation;

pub use actions::{PlayerAction, PlayerActionKind};
pub use errors::EngineError;
pub use game_loop::{advance_phase, apply_action, post_blinds, start_hand, HandStatus};
pub use hand_history::{HandEvent, HandEventKind, HandHistory};
pub use pot::Pot;
pub use registry::{RegistryError, TableRegistry};
pub use side_pots::{build_pot_layout, PotLayout, SidePot};

/// RNG-интерфейс движка. Реализации – в `infra::rng`
/// (системная и детерминированная для тестов/реплеев).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
