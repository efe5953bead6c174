use serde::{Deserialize, Serialize};

use crate::domain::chips::Chips;
use crate::eval::hand_rank::HandCategory;

/// Достижения игрока-человека за сессию.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Achievement {
    /// Первая выигранная раздача.
    FirstWin,
    /// Выигран банк >= 50 больших блайндов.
    BigPot,
    /// Победа с фулл-хаусом или сильнее.
    Monster,
    /// Три выигранные раздачи подряд.
    HotStreak,
    /// Сыграно 50 раздач за сессию.
    Marathon,
}

/// Статистика сессии (одного стола).
///
/// `category_wins` – гистограмма категорий выигрышных рук на шоудаунах,
/// индекс = `HandCategory as usize`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionStats {
    pub hands_played: u64,
    pub hands_won_by_human: u64,
    pub showdowns_reached: u64,
    pub category_wins: [u64; HandCategory::COUNT],
    /// Самый крупный разыгранный банк за сессию.
    pub biggest_pot: Chips,
    /// Текущая серия побед человека (для HotStreak).
    pub human_win_streak: u32,
    pub achievements: Vec<Achievement>,
}

impl SessionStats {
    pub fn record_category_win(&mut self, category: HandCategory) {
        self.category_wins[category as usize] += 1;
    }

    pub fn has_achievement(&self, a: Achievement) -> bool {
        self.achievements.contains(&a)
    }

    fn unlock(&mut self, a: Achievement) -> bool {
        if self.has_achievement(a) {
            return false;
        }
        self.achievements.push(a);
        true
    }

    /// Проверка достижений по итогам раздачи.
    ///
    /// `human_won` – выиграл ли человек хотя бы один банк;
    /// `best_category` – категория его выигрышной руки (если был шоудаун);
    /// `pot_won` – сумма, которую человек забрал;
    /// `big_blind` – текущий BB для порога BigPot.
    pub fn check_achievements(
        &mut self,
        human_won: bool,
        best_category: Option<HandCategory>,
        pot_won: Chips,
        big_blind: Chips,
    ) -> Vec<Achievement> {
        let mut unlocked = Vec::new();

        if human_won && self.unlock(Achievement::FirstWin) {
            unlocked.push(Achievement::FirstWin);
        }
        if human_won
            && pot_won.0 >= big_blind.0.saturating_mul(50)
            && self.unlock(Achievement::BigPot)
        {
            unlocked.push(Achievement::BigPot);
        }
        if human_won {
            if let Some(cat) = best_category {
                if cat >= HandCategory::FullHouse && self.unlock(Achievement::Monster) {
                    unlocked.push(Achievement::Monster);
                }
            }
        }
        if self.human_win_streak >= 3 && self.unlock(Achievement::HotStreak) {
            unlocked.push(Achievement::HotStreak);
        }
        if self.hands_played >= 50 && self.unlock(Achievement::Marathon) {
            unlocked.push(Achievement::Marathon);
        }

        unlocked
    }
}
