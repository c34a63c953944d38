//! Roster - The pool of spawnable characters
//!
//! Characters are drawn uniformly; each spawn rolls a fresh personality and a
//! level around the early-game range.

use async_trait::async_trait;
use rand::Rng;

use crate::domain::entities::{Character, CharacterImage};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Personality, Stats};
use crate::ports::CharacterSource;
use crate::services::images::ImageLibrary;

/// Level distribution for freshly spawned characters
pub const SPAWN_LEVEL_MEAN: f64 = 10.0;
pub const SPAWN_LEVEL_STD_DEV: f64 = 6.0;
pub const MIN_SPAWN_LEVEL: u32 = 1;
pub const MAX_SPAWN_LEVEL: u32 = 30;

/// Static description of a roster character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: &'static str,
    pub base_stats: Stats,
}

const fn entry(name: &'static str, base_stats: Stats) -> RosterEntry {
    RosterEntry { name, base_stats }
}

/// Every spawnable character; ids are 1-based positions in this list
pub const ROSTER: [RosterEntry; 16] = [
    entry("Aura", Stats::new(75, 60, 70, 130, 90, 85)),
    entry("Denken", Stats::new(110, 70, 85, 115, 95, 65)),
    entry("Edel", Stats::new(75, 60, 70, 95, 85, 80)),
    entry("Fern", Stats::new(70, 50, 55, 90, 70, 80)),
    entry("Flamme", Stats::new(90, 55, 75, 140, 100, 70)),
    entry("Frieren", Stats::new(85, 50, 70, 120, 95, 80)),
    entry("Himmel", Stats::new(100, 110, 90, 70, 80, 85)),
    entry("Laufen", Stats::new(70, 65, 60, 85, 70, 120)),
    entry("Linie", Stats::new(90, 75, 70, 105, 80, 85)),
    entry("Sein", Stats::new(90, 75, 80, 95, 100, 70)),
    entry("Sense", Stats::new(85, 65, 90, 100, 95, 70)),
    entry("Serie", Stats::new(95, 60, 80, 150, 110, 75)),
    entry("Stark", Stats::new(125, 115, 85, 45, 60, 75)),
    entry("Stille", Stats::new(45, 35, 30, 40, 35, 150)),
    entry("Übel", Stats::new(80, 70, 65, 110, 75, 95)),
    entry("Wirbel", Stats::new(95, 80, 75, 105, 85, 80)),
];

/// Draw a spawn level from a clamped normal distribution (Box-Muller)
pub fn roll_spawn_level<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    // gen::<f64>() is in [0, 1); flip to (0, 1] so ln() stays finite
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    let z0 = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();

    let level = (z0 * SPAWN_LEVEL_STD_DEV + SPAWN_LEVEL_MEAN).round();
    level.clamp(MIN_SPAWN_LEVEL as f64, MAX_SPAWN_LEVEL as f64) as u32
}

/// `CharacterSource` backed by the static roster and an image library
#[derive(Debug, Clone)]
pub struct Roster {
    entries: &'static [RosterEntry],
    images: ImageLibrary,
}

impl Roster {
    pub fn new(images: ImageLibrary) -> Self {
        Self {
            entries: &ROSTER,
            images,
        }
    }

    pub fn entries(&self) -> &'static [RosterEntry] {
        self.entries
    }

    /// Build a character from the entry at `index` with a rolled personality and level
    pub fn instantiate<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Option<Character> {
        let entry = self.entries.get(index)?;
        Some(Self::roll(index, entry, rng))
    }

    fn roll<R: Rng + ?Sized>(index: usize, entry: &RosterEntry, rng: &mut R) -> Character {
        let personality = Personality::ALL[rng.gen_range(0..Personality::ALL.len())];

        Character::new(
            index as u32 + 1,
            entry.name,
            personality,
            roll_spawn_level(rng),
            entry.base_stats,
        )
    }
}

#[async_trait]
impl CharacterSource for Roster {
    fn random_character(&self) -> Character {
        let mut rng = rand::thread_rng();
        let index = rng.gen_range(0..self.entries.len());
        Self::roll(index, &self.entries[index], &mut rng)
    }

    async fn render(&self, character: &Character) -> Result<CharacterImage, DomainError> {
        self.images.load(character).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Stat;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_roster_names_are_unique() {
        let names: HashSet<_> = ROSTER.iter().map(|e| e.name).collect();
        assert_eq!(names.len(), ROSTER.len());
    }

    #[test]
    fn test_roster_stats_are_positive() {
        for entry in ROSTER {
            for stat in Stat::ALL {
                assert!(entry.base_stats.get(stat) > 0, "{} has zero {}", entry.name, stat);
            }
        }
    }

    #[test]
    fn test_spawn_levels_are_clamped() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let level = roll_spawn_level(&mut rng);
            assert!((MIN_SPAWN_LEVEL..=MAX_SPAWN_LEVEL).contains(&level));
        }
    }

    #[test]
    fn test_instantiate_uses_one_based_ids() {
        let roster = Roster::new(ImageLibrary::new("unused"));
        let mut rng = StdRng::seed_from_u64(1);

        let first = roster.instantiate(0, &mut rng).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.name, "Aura");

        let last = roster.instantiate(ROSTER.len() - 1, &mut rng).unwrap();
        assert_eq!(last.id, ROSTER.len() as u32);
        assert!(roster.instantiate(ROSTER.len(), &mut rng).is_none());
    }

    #[test]
    fn test_random_character_comes_from_roster() {
        let roster = Roster::new(ImageLibrary::new("unused"));
        for _ in 0..100 {
            let character = roster.random_character();
            let entry = &roster.entries()[character.id as usize - 1];
            assert_eq!(character.name, entry.name);
            assert_eq!(character.base_stats, entry.base_stats);
        }
    }
}
