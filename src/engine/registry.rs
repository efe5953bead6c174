use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use crate::domain::TableId;
use crate::state::GameState;

/// Ошибки реестра столов (над движком одной игры).
#[derive(Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// Стол с таким ID не найден.
    TableNotFound(TableId),
}

/// Реестр столов с гарантией "один писатель на стол".
///
/// Авторитетный GameState каждого стола лежит под собственным мьютексом:
/// два конкурентных вызова `process_action` по одному столу
/// сериализуются и не могут разъехаться в два состояния.
/// Бэкенд, который просто перезаписывает состояние из клиента,
/// такой гарантии не даёт – поэтому она живёт здесь, в библиотеке.
pub struct TableRegistry {
    tables: RwLock<HashMap<TableId, Arc<Mutex<GameState>>>>,
}

impl TableRegistry {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Добавить стол. Существующий стол с тем же id заменяется.
    pub fn insert(&self, table_id: TableId, state: GameState) {
        let mut tables = self.tables.write().expect("poisoned registry lock");
        tables.insert(table_id, Arc::new(Mutex::new(state)));
    }

    pub fn contains(&self, table_id: TableId) -> bool {
        let tables = self.tables.read().expect("poisoned registry lock");
        tables.contains_key(&table_id)
    }

    pub fn remove(&self, table_id: TableId) -> bool {
        let mut tables = self.tables.write().expect("poisoned registry lock");
        tables.remove(&table_id).is_some()
    }

    /// Снять копию состояния стола (для чтения/сериализации).
    pub fn snapshot(&self, table_id: TableId) -> Result<GameState, RegistryError> {
        let handle = self.handle(table_id)?;
        let guard = handle.lock().expect("poisoned table lock");
        Ok(guard.clone())
    }

    /// Выполнить операцию над столом под его мьютексом.
    ///
    /// Единственный способ мутировать состояние в реестре:
    /// замыкание видит `&mut GameState`, пока держится блокировка стола.
    pub fn with_table<T>(
        &self,
        table_id: TableId,
        f: impl FnOnce(&mut GameState) -> T,
    ) -> Result<T, RegistryError> {
        let handle = self.handle(table_id)?;
        let mut guard = handle.lock().expect("poisoned table lock");
        Ok(f(&mut guard))
    }

    fn handle(&self, table_id: TableId) -> Result<Arc<Mutex<GameState>>, RegistryError> {
        let tables = self.tables.read().expect("poisoned registry lock");
        tables
            .get(&table_id)
            .cloned()
            .ok_or(RegistryError::TableNotFound(table_id))
    }
}

impl Default for TableRegistry {
    fn default() -> Self {
        Self::new()
    }
}
