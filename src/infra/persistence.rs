use std::collections::HashMap;

use thiserror::Error;

use crate::domain::TableId;
use crate::state::GameState;

/// Ошибки хранилища снапшотов.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Снапшот стола не сериализуется/не читается: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Абстракция хранилища состояния столов.
///
/// Бэкенд хранит GameState как непрозрачный JSON-блоб в строке стола;
/// трейт повторяет этот контракт: внутрь блоба хранилище не заглядывает.
/// Реализация поверх реальной БД живёт на стороне сервера,
/// in-memory вариант ниже – для тестов и локального запуска.
pub trait SnapshotStore {
    /// Сохранить снапшот стола (перезаписывает предыдущий).
    fn save(&mut self, table_id: TableId, state: &GameState) -> Result<(), SnapshotError>;

    /// Загрузить снапшот стола, если он есть.
    fn load(&self, table_id: TableId) -> Result<Option<GameState>, SnapshotError>;

    /// Удалить снапшот стола.
    fn delete(&mut self, table_id: TableId);
}

/// Простое in-memory хранилище: TableId -> JSON-блоб.
///
/// Держим именно сериализованное значение, а не GameState:
/// так тесты ловят несериализуемые поля сразу же.
#[derive(Debug, Default)]
pub struct InMemorySnapshotStore {
    blobs: HashMap<TableId, serde_json::Value>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn save(&mut self, table_id: TableId, state: &GameState) -> Result<(), SnapshotError> {
        let blob = serde_json::to_value(state)?;
        self.blobs.insert(table_id, blob);
        Ok(())
    }

    fn load(&self, table_id: TableId) -> Result<Option<GameState>, SnapshotError> {
        match self.blobs.get(&table_id) {
            Some(blob) => Ok(Some(serde_json::from_value(blob.clone())?)),
            None => Ok(None),
        }
    }

    fn delete(&mut self, table_id: TableId) {
        self.blobs.remove(&table_id);
    }
}
