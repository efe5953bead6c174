use rand::Rng;
use serde::{Deserialize, Serialize};

/// Архетип личности бота: две оси (tight/loose, passive/aggressive).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum BotArchetype {
    TightPassive,
    TightAggressive,
    LoosePassive,
    LooseAggressive,
}

impl BotArchetype {
    pub const ALL: [BotArchetype; 4] = [
        BotArchetype::TightPassive,
        BotArchetype::TightAggressive,
        BotArchetype::LoosePassive,
        BotArchetype::LooseAggressive,
    ];
}

/// Личность бота. Сэмплируется один раз при создании стола,
/// дальше влияет на пороги решений: tightness двигает требования
/// к силе руки, aggression – частоту и размер рейзов.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct BotPersonality {
    pub archetype: BotArchetype,
    /// 0.0..1.0 – требовательность к силе руки.
    pub tightness: f32,
    /// 0.0..2.0 – склонность рейзить вместо колла.
    pub aggression: f32,
    /// 0.0..0.25 – частота блефа со слабой рукой.
    pub bluff_frequency: f32,
}

impl BotPersonality {
    /// Сэмпл внутри диапазонов архетипа (каждый бот чуть разный).
    pub fn from_archetype<R: Rng>(archetype: BotArchetype, rng: &mut R) -> Self {
        let (tight_lo, tight_hi, aggr_lo, aggr_hi) = match archetype {
            BotArchetype::TightPassive => (0.6, 0.9, 0.2, 0.7),
            BotArchetype::TightAggressive => (0.6, 0.9, 1.2, 2.0),
            BotArchetype::LoosePassive => (0.1, 0.4, 0.2, 0.7),
            BotArchetype::LooseAggressive => (0.1, 0.4, 1.2, 2.0),
        };

        Self {
            archetype,
            tightness: rng.gen_range(tight_lo..tight_hi),
            aggression: rng.gen_range(aggr_lo..aggr_hi),
            bluff_frequency: rng.gen_range(0.02..0.20),
        }
    }

    /// Случайный архетип + случайные параметры внутри него.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let archetype = BotArchetype::ALL[rng.gen_range(0..BotArchetype::ALL.len())];
        Self::from_archetype(archetype, rng)
    }
}

impl Default for BotPersonality {
    /// Сбалансированная личность (для тестов и на случай, если
    /// у игрока почему-то нет персоналии).
    fn default() -> Self {
        Self {
            archetype: BotArchetype::TightAggressive,
            tightness: 0.5,
            aggression: 1.0,
            bluff_frequency: 0.08,
        }
    }
}
