use crate::domain::card::Rank;

/// Битовая маска рангов: 13 бит, бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

/// Маска колеса (A-2-3-4-5): туз (бит 12) плюс ранги 2..5 (биты 0..3).
pub const WHEEL_MASK: RankMask = (1 << 12) | 0b1111;

/// Бит одного ранга.
pub fn rank_bit(rank: Rank) -> RankMask {
    1u16 << ((rank as u8) - 2)
}

/// Найти стрит в маске рангов, вернуть старшую карту лучшего стрита.
///
/// Обычные стриты ищем свёрткой сдвигов: бит i в `run` выставлен,
/// когда заняты пять подряд идущих рангов начиная с i.
/// Колесо (A2345) проверяется отдельно и считается самым младшим
/// стритом со старшей картой Five.
pub fn straight_high(mask: RankMask) -> Option<Rank> {
    let run = mask & (mask >> 1) & (mask >> 2) & (mask >> 3) & (mask >> 4);
    if run != 0 {
        let low_idx = 15 - run.leading_zeros() as u8;
        return Rank::from_value(low_idx + 2 + 4);
    }
    if mask & WHEEL_MASK == WHEEL_MASK {
        return Some(Rank::Five);
    }
    None
}

/// Ранги стрита [старший..младший] для заданной старшей карты.
pub fn straight_ranks(high: Rank) -> [Rank; 5] {
    if high == Rank::Five {
        // wheel: туз внизу
        return [Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace];
    }
    let hv = high as u8;
    [
        high,
        Rank::from_value(hv - 1).unwrap(),
        Rank::from_value(hv - 2).unwrap(),
        Rank::from_value(hv - 3).unwrap(),
        Rank::from_value(hv - 4).unwrap(),
    ]
}
