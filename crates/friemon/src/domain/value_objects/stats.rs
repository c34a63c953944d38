//! Stats - Base stat blocks and personality multipliers

use serde::{Deserialize, Serialize};

/// The six stats every character carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Short key used in tables and embeds
    pub fn key(self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "atk",
            Stat::Defense => "def",
            Stat::SpecialAttack => "satk",
            Stat::SpecialDefense => "sdef",
            Stat::Speed => "spd",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A block of stat values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub satk: u32,
    pub sdef: u32,
    pub spd: u32,
}

impl Stats {
    pub const fn new(hp: u32, atk: u32, def: u32, satk: u32, sdef: u32, spd: u32) -> Self {
        Self {
            hp,
            atk,
            def,
            satk,
            sdef,
            spd,
        }
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.atk,
            Stat::Defense => self.def,
            Stat::SpecialAttack => self.satk,
            Stat::SpecialDefense => self.sdef,
            Stat::Speed => self.spd,
        }
    }

    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|s| self.get(*s)).sum()
    }

    /// Scale each stat by its multiplier, rounding to the nearest integer
    pub fn scaled(&self, multipliers: &StatMultipliers) -> Stats {
        let scale = |stat: Stat| (self.get(stat) as f64 * multipliers.get(stat)).round() as u32;

        Stats {
            hp: scale(Stat::Hp),
            atk: scale(Stat::Attack),
            def: scale(Stat::Defense),
            satk: scale(Stat::SpecialAttack),
            sdef: scale(Stat::SpecialDefense),
            spd: scale(Stat::Speed),
        }
    }
}

/// Per-stat multipliers, centered at 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatMultipliers {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    pub satk: f64,
    pub sdef: f64,
    pub spd: f64,
}

impl StatMultipliers {
    pub const NEUTRAL: StatMultipliers = StatMultipliers {
        hp: 1.0,
        atk: 1.0,
        def: 1.0,
        satk: 1.0,
        sdef: 1.0,
        spd: 1.0,
    };

    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.atk,
            Stat::Defense => self.def,
            Stat::SpecialAttack => self.satk,
            Stat::SpecialDefense => self.sdef,
            Stat::Speed => self.spd,
        }
    }

    /// All six `(stat, multiplier)` pairs
    pub fn entries(&self) -> [(Stat, f64); 6] {
        Stat::ALL.map(|stat| (stat, self.get(stat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_rounds_to_nearest() {
        let base = Stats::new(85, 50, 70, 120, 95, 80);
        let multipliers = StatMultipliers {
            satk: 1.1,
            spd: 1.1,
            ..StatMultipliers::NEUTRAL
        };

        let scaled = base.scaled(&multipliers);
        assert_eq!(scaled, Stats::new(85, 50, 70, 132, 95, 88));
    }

    #[test]
    fn test_neutral_scaling_is_identity() {
        let base = Stats::new(45, 35, 30, 40, 35, 150);
        assert_eq!(base.scaled(&StatMultipliers::NEUTRAL), base);
    }

    #[test]
    fn test_total() {
        assert_eq!(Stats::new(70, 50, 55, 90, 70, 80).total(), 415);
    }
}
