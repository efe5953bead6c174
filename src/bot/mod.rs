//! Боты-оппоненты: личности и принятие решений.
//!
//! Контракт `decide_action`: функция тотальна и НИКОГДА не возвращает
//! нелегальное действие – суммы зажимаются в стек, недорейзы
//! превращаются в колл или олл-ин, бесплатный чек не фолдится.

pub mod decision;
pub mod personality;

pub use decision::{decide_action, decide_action_with};
pub use personality::{BotArchetype, BotPersonality};
