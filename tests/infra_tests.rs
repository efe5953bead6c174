//! Тесты инфраструктуры: снапшоты GameState (JSON-блобы)
//! и реестр столов с сериализацией записей.

use std::sync::Arc;
use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;

use holdem_engine::domain::{Chips, GameConfig, Stakes};
use holdem_engine::engine::{PlayerAction, PlayerActionKind, RegistryError, TableRegistry};
use holdem_engine::infra::{DeterministicRng, InMemorySnapshotStore, SnapshotStore};
use holdem_engine::state::GameState;
use holdem_engine::game;

fn setup_hand(seed: u64) -> GameState {
    let config = GameConfig {
        num_players: 3,
        stakes: Stakes::new(Chips::new(50), Chips::new(100)),
        starting_stack: Chips::new(10_000),
    };
    let mut bot_rng = StdRng::seed_from_u64(seed);
    let state = game::new_game_with(3, config, &mut bot_rng);
    let mut rng = DeterministicRng::from_u64(seed);
    let state = game::start_new_hand_with(&state, &mut rng).unwrap();
    game::post_blinds(&state, Chips::new(50), Chips::new(100)).unwrap()
}

//
// ====================== СНАПШОТЫ ======================
//

/// GameState переживает сериализацию в JSON-блоб и обратно
/// в середине раздачи (колода, очередь ходов, история – всё).
#[test]
fn snapshot_roundtrip_preserves_mid_hand_state() {
    let mut state = setup_hand(31);

    // Пара действий, чтобы состояние было "живым".
    let seat = state.current_actor.unwrap();
    state = game::process_action(
        &state,
        PlayerAction {
            player_id: state.players[seat as usize].id,
            seat,
            kind: PlayerActionKind::Call,
        },
    )
    .unwrap();

    let mut store = InMemorySnapshotStore::new();
    store.save(7, &state).expect("снапшот должен сохраниться");

    let restored = store
        .load(7)
        .expect("снапшот должен читаться")
        .expect("снапшот должен существовать");

    assert_eq!(
        restored, state,
        "Восстановленное состояние обязано совпадать с исходным"
    );

    // Восстановленное состояние играбельно.
    let next_seat = restored.current_actor.unwrap();
    game::process_action(
        &restored,
        PlayerAction {
            player_id: restored.players[next_seat as usize].id,
            seat: next_seat,
            kind: PlayerActionKind::Call,
        },
    )
    .expect("после восстановления раздача продолжается");
}

/// Отсутствующий стол – None; удаление очищает блоб.
#[test]
fn snapshot_store_load_and_delete() {
    let mut store = InMemorySnapshotStore::new();
    assert!(store.load(1).unwrap().is_none());

    let state = setup_hand(32);
    store.save(1, &state).unwrap();
    assert!(store.load(1).unwrap().is_some());

    store.delete(1);
    assert!(store.load(1).unwrap().is_none());
}

//
// ====================== РЕЕСТР СТОЛОВ ======================
//

/// Мутации через with_table видны в snapshot, чужой id – ошибка.
#[test]
fn registry_basic_operations() {
    let registry = TableRegistry::new();
    assert!(!registry.contains(5));
    assert_eq!(
        registry.snapshot(5).unwrap_err(),
        RegistryError::TableNotFound(5)
    );

    registry.insert(5, setup_hand(33));
    assert!(registry.contains(5));

    let seat = registry.snapshot(5).unwrap().current_actor.unwrap();
    registry
        .with_table(5, |state| {
            let action = PlayerAction {
                player_id: state.players[seat as usize].id,
                seat,
                kind: PlayerActionKind::Call,
            };
            *state = game::process_action(state, action).expect("валидный колл");
        })
        .unwrap();

    let after = registry.snapshot(5).unwrap();
    assert_ne!(
        after.current_actor,
        Some(seat),
        "Ход должен был перейти дальше"
    );

    assert!(registry.remove(5));
    assert!(!registry.contains(5));
}

/// Один писатель на стол: конкурентные инкременты под with_table
/// не теряются (мьютекс стола сериализует записи).
#[test]
fn registry_serializes_concurrent_writers() {
    let registry = Arc::new(TableRegistry::new());
    registry.insert(1, setup_hand(34));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let registry = Arc::clone(&registry);
        handles.push(thread::spawn(move || {
            for _ in 0..250 {
                registry
                    .with_table(1, |state| {
                        state.stats.hands_played += 1;
                    })
                    .unwrap();
            }
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    let state = registry.snapshot(1).unwrap();
    assert_eq!(
        state.stats.hands_played, 1_000,
        "Все 4 x 250 инкрементов должны сериализоваться без потерь"
    );
}

/// Конкурентные process_action по одному столу: проходит ровно один,
/// второй отклоняется как "не ваш ход", состояние не расходится.
#[test]
fn registry_rejects_stale_concurrent_action() {
    let registry = Arc::new(TableRegistry::new());
    registry.insert(2, setup_hand(35));

    let before = registry.snapshot(2).unwrap();
    let seat = before.current_actor.unwrap();
    let action = PlayerAction {
        player_id: before.players[seat as usize].id,
        seat,
        kind: PlayerActionKind::Call,
    };

    let mut oks = 0;
    let mut errs = 0;
    for _ in 0..2 {
        let result = registry
            .with_table(2, |state| match game::process_action(state, action) {
                Ok(next) => {
                    *state = next;
                    true
                }
                Err(_) => false,
            })
            .unwrap();
        if result {
            oks += 1;
        } else {
            errs += 1;
        }
    }

    assert_eq!(oks, 1, "Одно и то же действие не может примениться дважды");
    assert_eq!(errs, 1);
}
