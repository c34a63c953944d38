//! Personality - Behavioral archetype scaling a character's stats

use serde::{Deserialize, Serialize};

use super::stats::{Stat, StatMultipliers};

/// Personality archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Personality {
    /// Frieren
    Aloof,
    /// Himmel
    Stoic,
    /// Heiter
    Merry,
    Resolute,
    Skeptical,
    Brooding,
    Brave,
    Insightful,
    Playful,
    /// Stark
    Rash,
}

impl Personality {
    /// Every personality, in declaration order
    pub const ALL: [Personality; 10] = [
        Personality::Aloof,
        Personality::Stoic,
        Personality::Merry,
        Personality::Resolute,
        Personality::Skeptical,
        Personality::Brooding,
        Personality::Brave,
        Personality::Insightful,
        Personality::Playful,
        Personality::Rash,
    ];

    /// Stat multipliers applied to a character with this personality
    pub const fn multipliers(self) -> StatMultipliers {
        const NEUTRAL: StatMultipliers = StatMultipliers::NEUTRAL;

        match self {
            Personality::Aloof | Personality::Stoic => NEUTRAL,
            Personality::Merry => StatMultipliers {
                satk: 1.1,
                spd: 1.1,
                ..NEUTRAL
            },
            Personality::Resolute | Personality::Insightful => StatMultipliers {
                satk: 1.1,
                ..NEUTRAL
            },
            Personality::Skeptical => StatMultipliers { atk: 0.9, ..NEUTRAL },
            Personality::Brooding => StatMultipliers { hp: 1.05, ..NEUTRAL },
            Personality::Brave => StatMultipliers {
                atk: 1.1,
                spd: 0.9,
                ..NEUTRAL
            },
            Personality::Playful => StatMultipliers { spd: 1.1, ..NEUTRAL },
            Personality::Rash => StatMultipliers {
                atk: 1.1,
                sdef: 0.9,
                ..NEUTRAL
            },
        }
    }

    /// Multiplier for a single stat
    pub fn multiplier(self, stat: Stat) -> f64 {
        self.multipliers().get(stat)
    }

    pub fn name(self) -> &'static str {
        match self {
            Personality::Aloof => "Aloof",
            Personality::Stoic => "Stoic",
            Personality::Merry => "Merry",
            Personality::Resolute => "Resolute",
            Personality::Skeptical => "Skeptical",
            Personality::Brooding => "Brooding",
            Personality::Brave => "Brave",
            Personality::Insightful => "Insightful",
            Personality::Playful => "Playful",
            Personality::Rash => "Rash",
        }
    }
}

impl std::fmt::Display for Personality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Personality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Personality::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown personality: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_personality_has_six_positive_multipliers() {
        for personality in Personality::ALL {
            let entries = personality.multipliers().entries();
            assert_eq!(entries.len(), 6);
            for (stat, value) in entries {
                assert!(value > 0.0, "{personality} {stat} should be positive");
                assert!((0.9..=1.1).contains(&value));
            }
        }
    }

    #[test]
    fn test_merry_boosts_special_attack_and_speed() {
        let m = Personality::Merry.multipliers();
        assert_eq!(m.satk, 1.1);
        assert_eq!(m.spd, 1.1);
        assert_eq!(m.hp, 1.0);
        assert_eq!(m.atk, 1.0);
        assert_eq!(m.def, 1.0);
        assert_eq!(m.sdef, 1.0);
    }

    #[test]
    fn test_trade_off_personalities() {
        assert_eq!(Personality::Brave.multiplier(Stat::Attack), 1.1);
        assert_eq!(Personality::Brave.multiplier(Stat::Speed), 0.9);
        assert_eq!(Personality::Rash.multiplier(Stat::SpecialDefense), 0.9);
        assert_eq!(Personality::Skeptical.multiplier(Stat::Attack), 0.9);
        assert_eq!(Personality::Brooding.multiplier(Stat::Hp), 1.05);
    }

    #[test]
    fn test_neutral_personalities() {
        assert_eq!(Personality::Aloof.multipliers(), StatMultipliers::NEUTRAL);
        assert_eq!(Personality::Stoic.multipliers(), StatMultipliers::NEUTRAL);
    }

    #[test]
    fn test_parse_round_trips_display() {
        for personality in Personality::ALL {
            let parsed: Personality = personality.to_string().parse().unwrap();
            assert_eq!(parsed, personality);
        }
        assert!("grumpy".parse::<Personality>().is_err());
    }
}
