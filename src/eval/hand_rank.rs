use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе.
///
/// Роял-флаш выделен в отдельную верхнюю категорию
/// (фронту нужен отдельный тип для анимации и ачивок).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const COUNT: usize = 10;

    /// Человеческое описание категории (для фронта/истории).
    pub fn describe(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        }
    }
}

/// Сила руки, упакованная в u32 так, что сравнение чисел
/// эквивалентно сравнению рук (тотальный транзитивный порядок,
/// равенство = честный сплит банка).
///
/// Схема кодирования:
///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
/// где r0..r4 – ранги в порядке значимости (группы старше кикеров).
/// Rank 2..14 влазит в 4 бита.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

impl HandRank {
    pub fn from_parts(category: HandCategory, ranks: [Rank; 5]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, r) in ranks.iter().enumerate() {
            value |= (*r as u32) << (16 - 4 * i);
        }
        HandRank(value)
    }

    pub fn category(&self) -> HandCategory {
        match (self.0 >> 20) & 0x0F {
            0 => HandCategory::HighCard,
            1 => HandCategory::OnePair,
            2 => HandCategory::TwoPair,
            3 => HandCategory::ThreeOfAKind,
            4 => HandCategory::Straight,
            5 => HandCategory::Flush,
            6 => HandCategory::FullHouse,
            7 => HandCategory::FourOfAKind,
            8 => HandCategory::StraightFlush,
            _ => HandCategory::RoyalFlush,
        }
    }

    /// Пять рангов в порядке значимости.
    pub fn ranks(&self) -> [Rank; 5] {
        let nib = |shift: u32| {
            let v = ((self.0 >> shift) & 0x0F) as u8;
            // При корректной упаковке v всегда 2..14.
            Rank::from_value(v).unwrap_or(Rank::Two)
        };
        [nib(16), nib(12), nib(8), nib(4), nib(0)]
    }

    pub fn describe(&self) -> &'static str {
        self.category().describe()
    }
}
