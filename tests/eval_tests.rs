//! Тесты оценщика рук: категории, кикеры, стриты (включая колесо),
//! транзитивность сравнения.

use std::str::FromStr;

use holdem_engine::domain::Card;
use holdem_engine::eval::{evaluate_best_hand, HandCategory, HandRank};

/// Утилита: распарсить "As Kh ..." в вектор карт.
fn cards(s: &str) -> Vec<Card> {
    s.split_whitespace()
        .map(|c| Card::from_str(c).expect("карта в фикстуре должна парситься"))
        .collect()
}

/// Утилита: оценить 2 карманные + борд.
fn eval(hole: &str, board: &str) -> HandRank {
    evaluate_best_hand(&cards(hole), &cards(board))
}

//
// ====================== КАТЕГОРИИ ======================
//

#[test]
fn royal_flush_is_top_category() {
    let rank = eval("As Ks", "Qs Js Ts 2h 3d");
    assert_eq!(rank.category(), HandCategory::RoyalFlush);

    let quads = eval("Ah Ad", "As Ac Kd 2h 3c");
    assert_eq!(quads.category(), HandCategory::FourOfAKind);

    assert!(
        rank > quads,
        "Роял-флаш обязан быть сильнее каре: {:?} vs {:?}",
        rank.category(),
        quads.category()
    );
}

#[test]
fn straight_flush_below_royal() {
    let sf = eval("9s 8s", "7s 6s 5s Ah Kd");
    assert_eq!(sf.category(), HandCategory::StraightFlush);

    let royal = eval("As Ks", "Qs Js Ts 2h 3d");
    assert!(royal > sf);
}

#[test]
fn category_ladder_is_ordered() {
    // Снизу вверх: каждая следующая рука сильнее предыдущей.
    let ladder = [
        eval("2c 5d", "9h Jc Ks 7d 3s"), // high card
        eval("2c 2d", "9h Jc Ks 7d 3s"), // pair
        eval("2c 2d", "9h 9c Ks 7d 3s"), // two pair
        eval("2c 2d", "2h Jc Ks 7d 3s"), // trips
        eval("4c 5d", "6h 7c 8s Kd 2s"), // straight
        eval("2h 5h", "9h Jh Kh 7d 3s"), // flush
        eval("2c 2d", "2h Jc Js 7d 3s"), // full house
        eval("2c 2d", "2h 2s Ks 7d 3s"), // quads
        eval("4h 5h", "6h 7h 8h Kd 2s"), // straight flush
        eval("Ah Kh", "Qh Jh Th 2c 3d"), // royal flush
    ];

    let expected = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    for (rank, want) in ladder.iter().zip(expected) {
        assert_eq!(rank.category(), want);
    }

    for pair in ladder.windows(2) {
        assert!(
            pair[1] > pair[0],
            "Лестница категорий должна строго возрастать: {:?} vs {:?}",
            pair[0].category(),
            pair[1].category()
        );
    }
}

//
// ====================== СТРИТЫ ======================
//

/// Колесо (A2345) – валидный стрит, туз считается младшим.
#[test]
fn wheel_is_a_straight() {
    let wheel = eval("As 2h", "3d 4c 5s Kh 9d");
    assert_eq!(
        wheel.category(),
        HandCategory::Straight,
        "A-2-3-4-5 должен распознаваться как стрит, а не high card"
    );

    // Колесо – самый младший стрит.
    let six_high = eval("2s 3h", "4d 5c 6s Kh 9d");
    assert!(six_high > wheel, "Стрит до шестёрки сильнее колеса");

    // Туз в колесе не делает стрит "до туза".
    let broadway = eval("As Kh", "Qd Jc Ts 2h 3d");
    assert!(broadway > six_high);
}

/// На 7 картах выбирается лучший из возможных стритов.
#[test]
fn best_straight_among_seven_cards() {
    // 5 6 7 8 9 T: лучший стрит – до десятки.
    let rank = eval("5c 6d", "7h 8s 9c Td 2h");
    assert_eq!(rank.category(), HandCategory::Straight);

    let nine_high = eval("5c 6d", "7h 8s 9c Kd 2h");
    assert!(rank > nine_high);
}

//
// ====================== КИКЕРЫ И НИЧЬИ ======================
//

#[test]
fn kickers_break_ties_within_category() {
    // Одинаковая пара тузов, кикер K против Q.
    let ak = eval("Ah Kd", "As 9c 7h 4d 2s");
    let aq = eval("Ac Qd", "As 9c 7h 4d 2s");
    assert_eq!(ak.category(), HandCategory::OnePair);
    assert!(ak > aq, "Кикер K должен бить кикер Q при равной паре");

    // Старшее каре бьёт младшее.
    let quad_9 = eval("9c 9d", "9h 9s Ks 7d 3s");
    let quad_7 = eval("7c 7h", "9h 9s Ks 7d 7s");
    assert!(quad_9 > quad_7);

    // Фулл-хаус: сначала тройка, потом пара.
    let nines_full = eval("9c 9d", "9h Ks Kd 2c 3d");
    let kings_full = eval("Kc Kh", "9h Ks 9d 2c 3d");
    assert!(kings_full > nines_full);
}

/// Две руки, играющие один и тот же борд, равны (честный сплит).
#[test]
fn identical_hands_are_equal() {
    let board = "Ah Kh Qh Jh 9h";
    let a = eval("2c 3d", board);
    let b = eval("2d 3c", board);
    assert_eq!(a, b, "Игроки, играющие борд, должны делить банк");
    assert_eq!(a.category(), HandCategory::Flush);
}

/// Сравнение транзитивно и тотально на наборе фикстур.
#[test]
fn comparison_is_transitive_on_fixture_set() {
    let fixtures = [
        eval("As Ks", "Qs Js Ts 2h 3d"),
        eval("9s 8s", "7s 6s 5s Ah Kd"),
        eval("Ah Ad", "As Ac Kd 2h 3c"),
        eval("Kc Kh", "9h Ks 9d 2c 3d"),
        eval("2h 5h", "9h Jh Kh 7d 3s"),
        eval("4c 5d", "6h 7c 8s Kd 2s"),
        eval("As 2h", "3d 4c 5s Kh 9d"),
        eval("2c 2d", "2h Jc Ks 7d 3s"),
        eval("2c 2d", "9h 9c Ks 7d 3s"),
        eval("Ah Kd", "As 9c 7h 4d 2s"),
        eval("2c 5d", "9h Jc Ks 7d 3s"),
    ];

    for a in &fixtures {
        for b in &fixtures {
            // Тотальность: ровно одно из <, ==, >.
            let ordering = a.cmp(b);
            assert_eq!(ordering, b.cmp(a).reverse());

            for c in &fixtures {
                if a <= b && b <= c {
                    assert!(
                        a <= c,
                        "Нарушена транзитивность: {:?} {:?} {:?}",
                        a,
                        b,
                        c
                    );
                }
            }
        }
    }
}

/// Упаковка/распаковка HandRank сохраняет категорию и ранги.
#[test]
fn hand_rank_roundtrips_category_and_ranks() {
    let rank = eval("Ah Kd", "As 9c 7h 4d 2s");
    assert_eq!(rank.category(), HandCategory::OnePair);

    let ranks = rank.ranks();
    assert_eq!(ranks[0], holdem_engine::domain::Rank::Ace, "Пара тузов");
    assert_eq!(ranks[1], holdem_engine::domain::Rank::King, "Старший кикер");

    assert_eq!(rank.describe(), "One pair");
}
