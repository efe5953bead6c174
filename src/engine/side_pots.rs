use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Слой банка: часть фишек, на которую претендуют только некоторые игроки.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    pub eligible_seats: Vec<SeatIndex>,
}

/// Разбивка банка на разыгрываемые слои и возвраты.
///
/// Инвариант: сумма всех pots + сумма refunds == сумма contributions.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PotLayout {
    /// Слои от основного ("младшего") к старшим сайд-потам.
    pub pots: Vec<SidePot>,
    /// Неуравненные ставки: возвращаются владельцу до шоудауна.
    pub refunds: Vec<(SeatIndex, Chips)>,
}

/// Посчитать слои банка из суммарных вкладов игроков за раздачу.
///
/// Вход: contributions[seat] = сколько всего фишек внёс игрок на всех улицах.
/// Каждый различный уровень вклада даёт слой размером
/// `diff * количество игроков с вкладом >= уровня`; претенденты слоя –
/// именно эти игроки. Верхний слой с единственным претендентом – это
/// неуравненная часть ставки, она не разыгрывается, а возвращается.
pub fn build_pot_layout(contributions: &HashMap<SeatIndex, Chips>) -> PotLayout {
    let mut entries: Vec<(SeatIndex, Chips)> = contributions
        .iter()
        .filter(|(_, chips)| !chips.is_zero())
        .map(|(seat, chips)| (*seat, *chips))
        .collect();

    if entries.is_empty() {
        return PotLayout::default();
    }

    // Сортируем по размеру вклада (возрастание), при равенстве – по seat,
    // чтобы результат был детерминированным.
    entries.sort_by_key(|(seat, c)| (c.0, *seat));

    let mut layout = PotLayout::default();
    let mut prev_level = Chips::ZERO;

    for &(_, level) in entries.iter() {
        if level == prev_level {
            continue;
        }
        let diff = level - prev_level;

        let mut eligible: Vec<SeatIndex> = entries
            .iter()
            .filter(|(_, contrib)| *contrib >= level)
            .map(|(seat, _)| *seat)
            .collect();
        eligible.sort_unstable();

        if eligible.len() == 1 {
            // Неуравненная ставка – вернуть владельцу.
            layout.refunds.push((eligible[0], diff));
        } else {
            layout.pots.push(SidePot {
                amount: Chips(diff.0 * eligible.len() as u64),
                eligible_seats: eligible,
            });
        }

        prev_level = level;
    }

    layout
}
