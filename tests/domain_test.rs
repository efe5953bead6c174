//! Тесты доменной модели: колода, карты, фишки.

use std::collections::HashSet;
use std::str::FromStr;

use holdem_engine::domain::{Card, Chips, Deck, Rank, Suit};
use holdem_engine::engine::RandomSource;
use holdem_engine::infra::DeterministicRng;

//
// ====================== DECK ======================
//

/// Стандартная колода: ровно 52 карты, все уникальные.
#[test]
fn standard_deck_has_52_unique_cards() {
    let deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);

    let unique: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52, "Все карты в колоде должны быть уникальными");
}

/// Перемешивание – перестановка: тот же мультисет карт.
#[test]
fn shuffle_is_a_permutation() {
    let reference = Deck::standard_52();

    let mut deck = Deck::standard_52();
    let mut rng = DeterministicRng::from_u64(42);
    rng.shuffle(&mut deck.cards);

    assert_eq!(deck.len(), 52);

    let before: HashSet<Card> = reference.cards.iter().copied().collect();
    let after: HashSet<Card> = deck.cards.iter().copied().collect();
    assert_eq!(
        before, after,
        "После тасовки состав колоды должен быть тем же"
    );
}

/// Одинаковый seed – одинаковый порядок карт (реплей).
#[test]
fn deterministic_rng_reproduces_shuffle() {
    let mut a = Deck::standard_52();
    let mut b = Deck::standard_52();

    DeterministicRng::from_u64(777).shuffle(&mut a.cards);
    DeterministicRng::from_u64(777).shuffle(&mut b.cards);

    assert_eq!(a, b, "Одинаковый seed должен давать одинаковую колоду");
}

/// draw_n не делает частичной раздачи.
#[test]
fn draw_n_is_all_or_nothing() {
    let mut deck = Deck::standard_52();

    let taken = deck.draw_n(5).expect("в полной колоде 5 карт есть");
    assert_eq!(taken.len(), 5);
    assert_eq!(deck.len(), 47);

    assert!(deck.draw_n(48).is_none(), "48 карт из 47 взять нельзя");
    assert_eq!(deck.len(), 47, "Неудачный draw_n не должен трогать колоду");
}

//
// ====================== CARDS ======================
//

/// Display/FromStr обратны друг другу.
#[test]
fn card_display_and_parse_roundtrip() {
    for s in ["Ah", "Td", "7c", "2s", "Qh"] {
        let card = Card::from_str(s).expect("строка карты должна парситься");
        assert_eq!(card.to_string(), s);
    }

    assert_eq!(
        Card::from_str("Kd").unwrap(),
        Card::new(Rank::King, Suit::Diamonds)
    );

    assert!(Card::from_str("").is_err());
    assert!(Card::from_str("Axh").is_err());
    assert!(Card::from_str("1h").is_err());
    assert!(Card::from_str("Tx").is_err());
}

//
// ====================== CHIPS ======================
//

/// Фишки не уходят в минус.
#[test]
fn chips_arithmetic_saturates() {
    let a = Chips::new(100);
    let b = Chips::new(250);

    assert_eq!(a - b, Chips::ZERO, "Вычитание не должно уходить в минус");
    assert_eq!(b - a, Chips::new(150));

    let mut c = Chips::new(10);
    c -= Chips::new(50);
    assert_eq!(c, Chips::ZERO);

    assert!(Chips::ZERO.is_zero());
    assert_eq!(Chips::new(7).min(Chips::new(3)), Chips::new(3));
}
