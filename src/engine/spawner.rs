use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use super::round::{Card, Idx, Round};

const NEW_CARD_CHOICES: [Card; 2] = [2, 4];
const NEW_CARD_WEIGHTS: [u8; 2] = [9, 1];

/// Spawner places new cards on empty slots after a committed move.
#[derive(Clone, Debug)]
pub(crate) struct Spawner {
    new_card_weighted_index: WeightedIndex<u8>,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            new_card_weighted_index: WeightedIndex::new(NEW_CARD_WEIGHTS)
                .expect("NEW_CARD_WEIGHTS should never be empty"),
        }
    }
}

impl Spawner {
    /// Pick an empty slot uniformly at random and put a 2 (90%) or a 4 (10%) there. Returns the
    /// slot and card placed, or `None` if the round is full.
    pub(crate) fn spawn<R: Rng + ?Sized>(
        &self,
        round: &mut Round,
        rng: &mut R,
    ) -> Option<(Idx, Card)> {
        let idx = *round.empty_slots().choose(rng)?;
        let card = NEW_CARD_CHOICES[self.new_card_weighted_index.sample(rng)];
        round.set(&idx, card);
        log::trace!("spawned {} at {}", card, idx);
        Some((idx, card))
    }
}

#[cfg(test)]
mod test {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn spawn_on_full_round_is_noop() {
        let full = Round::from([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut round = full;
        assert_eq!(Spawner::default().spawn(&mut round, &mut rng()), None);
        assert_eq!(round, full);
    }

    #[test]
    fn spawn_fills_the_only_empty_slot() {
        let mut round = Round::from([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        let (idx, card) = Spawner::default()
            .spawn(&mut round, &mut rng())
            .expect("one slot is empty");
        assert_eq!(idx, Idx(2, 2));
        assert!(card == 2 || card == 4);
        assert_eq!(round.get(&idx), card);
        assert!(round.empty_slots().is_empty());
    }

    #[test]
    fn spawn_adds_exactly_one_card() {
        let spawner = Spawner::default();
        let mut rng = rng();
        let mut round = Round::default();
        for expected in 1..=16 {
            let (idx, _) = spawner.spawn(&mut round, &mut rng).expect("room left");
            assert_ne!(round.get(&idx), 0);
            assert_eq!(round.occupied(), expected);
        }
        assert_eq!(spawner.spawn(&mut round, &mut rng), None);
    }

    #[test]
    fn spawn_distribution() {
        let spawner = Spawner::default();
        let mut rng = rng();
        let mut twos = 0usize;
        let mut per_slot = [[0usize; 4]; 4];
        let trials = 16_000;
        for _ in 0..trials {
            let mut round = Round::default();
            let (idx, card) = spawner.spawn(&mut round, &mut rng).expect("round is empty");
            per_slot[idx.y()][idx.x()] += 1;
            if card == 2 {
                twos += 1;
            } else {
                assert_eq!(card, 4);
            }
        }
        let ratio = twos as f64 / trials as f64;
        assert!((0.87..0.93).contains(&ratio), "ratio of 2s was {}", ratio);
        for count in per_slot.iter().flatten() {
            // expected 1000 per slot
            assert!((800..1200).contains(count), "slot count was {}", count);
        }
    }
}
