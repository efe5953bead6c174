use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;

/// Суммарный банк раздачи. Разбивка по слоям (side pots)
/// считается из contributions на шоудауне, см. `side_pots`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, amount: Chips) {
        self.total += amount;
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
    }
}
