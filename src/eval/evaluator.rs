use crate::domain::card::{Card, Rank, Suit};

use super::hand_rank::{HandCategory, HandRank};
use super::masks::{rank_bit, straight_high, straight_ranks, RankMask};

/// Вычислить лучшую 5-карточную руку из hole + board.
///
/// Ожидается 5–7 карт суммарно (2 карманные + 3..5 борда);
/// перебираем все C(n,5) комбинаций и берём максимум.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandRank {
    let mut cards = Vec::with_capacity(hole.len() + board.len());
    cards.extend_from_slice(hole);
    cards.extend_from_slice(board);

    assert!(
        (5..=7).contains(&cards.len()),
        "evaluate_best_hand ожидает от 5 до 7 карт"
    );

    best_five(&cards)
}

/// Максимум по всем 5-карточным комбинациям.
fn best_five(cards: &[Card]) -> HandRank {
    let n = cards.len();
    let mut best: Option<HandRank> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let r = score_five(&five);
                        if best.map_or(true, |cur| r > cur) {
                            best = Some(r);
                        }
                    }
                }
            }
        }
    }

    best.expect("минимум одна 5-карточная комбинация")
}

/// Группа одинаковых рангов в пятёрке: (сколько карт, какой ранг).
#[derive(Clone, Copy)]
struct RankGroup {
    count: u8,
    rank: Rank,
}

/// Оценка строго 5-карточной комбинации.
fn score_five(cards: &[Card; 5]) -> HandRank {
    let mut suit_counts = [0u8; 4];
    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut mask: RankMask = 0;

    for card in cards {
        let suit_idx = match card.suit {
            Suit::Clubs => 0,
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
        };
        suit_counts[suit_idx] += 1;
        rank_counts[card.rank as usize] += 1;
        mask |= rank_bit(card.rank);
    }

    let is_flush = suit_counts.iter().any(|&c| c == 5);
    let straight = straight_high(mask);

    // Группы рангов: сначала по количеству (desc), потом по рангу (desc).
    // Один проход используется всеми ветками ниже.
    let mut groups: Vec<RankGroup> = Vec::with_capacity(5);
    for v in (2usize..=14).rev() {
        if rank_counts[v] > 0 {
            groups.push(RankGroup {
                count: rank_counts[v],
                rank: Rank::from_value(v as u8).unwrap(),
            });
        }
    }
    groups.sort_by(|a, b| b.count.cmp(&a.count).then(b.rank.cmp(&a.rank)));

    if is_flush {
        if let Some(high) = straight {
            let category = if high == Rank::Ace {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            };
            return HandRank::from_parts(category, straight_ranks(high));
        }
    }

    match (groups[0].count, groups.get(1).map(|g| g.count)) {
        (4, _) => {
            return HandRank::from_parts(
                HandCategory::FourOfAKind,
                padded(&[groups[0].rank, groups[1].rank]),
            );
        }
        (3, Some(2)) => {
            return HandRank::from_parts(
                HandCategory::FullHouse,
                padded(&[groups[0].rank, groups[1].rank]),
            );
        }
        _ => {}
    }

    if is_flush {
        // Все пять карт одной масти: ранги по убыванию и есть кикеры.
        let ranks: Vec<Rank> = groups.iter().map(|g| g.rank).collect();
        return HandRank::from_parts(HandCategory::Flush, padded(&ranks));
    }

    if let Some(high) = straight {
        return HandRank::from_parts(HandCategory::Straight, straight_ranks(high));
    }

    let ranks: Vec<Rank> = groups.iter().map(|g| g.rank).collect();
    let category = match (groups[0].count, groups.get(1).map(|g| g.count)) {
        (3, _) => HandCategory::ThreeOfAKind,
        (2, Some(2)) => HandCategory::TwoPair,
        (2, _) => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };

    HandRank::from_parts(category, padded(&ranks))
}

/// Дополнить значимые ранги до пяти "мусорными" двойками.
/// Хвостовые позиции у рук одной категории всегда совпадают,
/// на сравнение они не влияют.
fn padded(significant: &[Rank]) -> [Rank; 5] {
    let mut out = [Rank::Two; 5];
    for (i, r) in significant.iter().take(5).enumerate() {
        out[i] = *r;
    }
    out
}
