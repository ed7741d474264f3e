use std::cell::RefCell;

use bevy_prng::WyRand;

use crate::mechanics::stoch;

/// What an idle monkey drifts into when nothing is assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mood {
    Stay,
    Wander,
    Chat,
    Dance,
}

/// Weighted table rolled once per idle update. Weights are relative; an
/// all-zero table always yields [`Mood::Stay`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoodTable {
    pub entries: [(u32, Mood); 4],
}

impl Default for MoodTable {
    /// One-in-five each for wander/chat/dance, two-in-five to stay put.
    fn default() -> Self {
        Self {
            entries: [(2, Mood::Stay), (1, Mood::Wander), (1, Mood::Chat), (1, Mood::Dance)],
        }
    }
}

impl MoodTable {
    /// Table that always yields `mood`.
    pub fn only(mood: Mood) -> Self {
        Self { entries: [(1, mood), (0, Mood::Stay), (0, Mood::Stay), (0, Mood::Stay)] }
    }

    pub fn total_weight(&self) -> u32 {
        self.entries.iter().map(|(w, _)| *w).sum()
    }

    pub fn roll(&self, rng: &RefCell<WyRand>) -> Mood {
        let total = self.total_weight();
        if total == 0 {
            return Mood::Stay;
        }
        let mut pick = stoch::index(rng, total as usize) as u32;
        for (weight, mood) in self.entries {
            if pick < weight {
                return mood;
            }
            pick -= weight;
        }
        Mood::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_entry_table_is_deterministic() {
        let rng = stoch::seeded(11);
        let table = MoodTable::only(Mood::Dance);
        assert!((0..200).all(|_| table.roll(&rng) == Mood::Dance));
    }

    #[test]
    fn zero_weights_stay() {
        let rng = stoch::seeded(11);
        let table = MoodTable { entries: [(0, Mood::Chat); 4] };
        assert_eq!(table.roll(&rng), Mood::Stay);
    }

    #[test]
    fn default_table_hits_every_mood() {
        let rng = stoch::seeded(5);
        let table = MoodTable::default();
        let rolls: Vec<Mood> = (0..2_000).map(|_| table.roll(&rng)).collect();
        for mood in [Mood::Stay, Mood::Wander, Mood::Chat, Mood::Dance] {
            assert!(rolls.contains(&mood), "{mood:?} never rolled");
        }
    }
}
