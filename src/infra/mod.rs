//! Инфраструктура вокруг движка:
//! - RNG-реализации (системная и детерминированная);
//! - хранилище снапшотов GameState (JSON-блобы).

pub mod persistence;
pub mod rng;

pub use persistence::{InMemorySnapshotStore, SnapshotError, SnapshotStore};
pub use rng::{DeterministicRng, SystemRng};
