use super::line;
use super::orientation::{self, Direction};

/// Width and height of the board.
pub(crate) const SIZE: usize = 4;

pub(crate) type Card = u32;

pub(crate) type Slots = [[Card; SIZE]; SIZE];

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Idx(pub(crate) usize, pub(crate) usize);

impl std::fmt::Display for Idx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ridx({0},{1})", self.0, self.1)
    }
}

impl Idx {
    pub(crate) fn x(&self) -> usize {
        self.0
    }

    pub(crate) fn y(&self) -> usize {
        self.1
    }
}

/// Round is one state of the board: a 4x4 grid of cards where 0 marks an empty slot.
///
/// Rounds are plain values; a committed move replaces the current round wholesale, which keeps
/// snapshots a simple copy.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub(crate) struct Round {
    slots: Slots,
}

impl From<Slots> for Round {
    fn from(slots: Slots) -> Self {
        Self { slots }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.slots {
            for card in row {
                write!(f, "{:>5}", card)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// public methods
impl Round {
    #[cfg(test)]
    pub(crate) fn slots(&self) -> &Slots {
        &self.slots
    }

    pub(crate) fn get(&self, idx: &Idx) -> Card {
        self.slots[idx.y()][idx.x()]
    }

    /// Indices of all empty slots in row-major order.
    pub(crate) fn empty_slots(&self) -> Vec<Idx> {
        self.indices().filter(|idx| self.get(idx) == 0).collect()
    }

    #[cfg(test)]
    pub(crate) fn occupied(&self) -> usize {
        self.slots.iter().flatten().filter(|card| **card != 0).count()
    }

    pub(crate) fn contains(&self, card: Card) -> bool {
        self.slots.iter().flatten().any(|c| *c == card)
    }

    pub(crate) fn highest(&self) -> Card {
        self.slots.iter().flatten().copied().max().unwrap_or(0)
    }

    /// Whether any card has an equal right or bottom neighbour.
    pub(crate) fn has_adjacent_pair(&self) -> bool {
        self.indices().any(|idx| {
            let card = self.get(&idx);
            let right = idx.x() + 1 < SIZE && self.slots[idx.y()][idx.x() + 1] == card;
            let below = idx.y() + 1 < SIZE && self.slots[idx.y() + 1][idx.x()] == card;
            card != 0 && (right || below)
        })
    }

    /// Compute the round that results from moving every card in `direction`, along with the
    /// number of merges. The receiver is left untouched; callers compare the result with `self`
    /// to learn whether the move did anything.
    pub(crate) fn shifted(&self, direction: &Direction) -> (Round, usize) {
        let mut mapped = orientation::map(direction, &self.slots);
        let mut merges = 0usize;
        for row in mapped.iter_mut() {
            let (reduced, row_merges) = line::reduce(row);
            *row = reduced;
            merges += row_merges;
        }
        let slots = orientation::unmap(direction, &mapped);
        (Round { slots }, merges)
    }
}

// crate-private methods
impl Round {
    pub(crate) fn set(&mut self, idx: &Idx, card: Card) {
        self.slots[idx.y()][idx.x()] = card;
    }

    fn indices(&self) -> impl Iterator<Item = Idx> {
        (0..SIZE).flat_map(|y| (0..SIZE).map(move |x| Idx(x, y)))
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    fn round(slots: Slots) -> Round {
        Round::from(slots)
    }

    #[test]
    fn clone() {
        let initial = round([[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]]);
        let copied = initial;
        assert_eq!(initial, copied);
    }

    #[test]
    fn shift_empty() {
        let initial = Round::default();
        for direction in Direction::ALL {
            let (shifted, merges) = initial.shifted(&direction);
            assert_eq!(initial, shifted, "shifting {:?}", direction);
            assert_eq!(merges, 0);
        }
    }

    #[rstest]
    #[case::identity_left(Direction::Left,
           [[2, 0, 0, 0], [0, 2, 0, 0], [0, 0, 2, 0], [0, 0, 0, 2]],
           [[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0]],
    )]
    #[case::identity_right(Direction::Right,
           [[2, 0, 0, 0], [0, 2, 0, 0], [0, 0, 2, 0], [0, 0, 0, 2]],
           [[0, 0, 0, 2], [0, 0, 0, 2], [0, 0, 0, 2], [0, 0, 0, 2]],
    )]
    #[case::identity_up(Direction::Up,
           [[2, 0, 0, 0], [0, 2, 0, 0], [0, 0, 2, 0], [0, 0, 0, 2]],
           [[2, 2, 2, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    )]
    #[case::identity_down(Direction::Down,
           [[2, 0, 0, 0], [0, 2, 0, 0], [0, 0, 2, 0], [0, 0, 0, 2]],
           [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [2, 2, 2, 2]],
    )]
    #[case::combine2s_shift_remaining_left(Direction::Left,
           [[2, 2, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
           [[4, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    )]
    #[case::combine2s_shift_remaining_right(Direction::Right,
           [[2, 2, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
           [[0, 0, 2, 4], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    )]
    #[case::three_in_column_up(Direction::Up,
           [[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]],
           [[4, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    )]
    #[case::three_in_column_down(Direction::Down,
           [[2, 0, 0, 0], [2, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 0]],
           [[0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [4, 0, 0, 0]],
    )]
    #[case::noop_no_compatible_combinations(Direction::Left,
           [[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
           [[2, 4, 8, 16], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    )]
    #[case::columns_independent_up(Direction::Up,
           [[0, 4, 0, 8], [2, 4, 0, 8], [2, 0, 0, 8], [4, 4, 16, 8]],
           [[4, 8, 16, 16], [4, 4, 0, 16], [0, 0, 0, 0], [0, 0, 0, 0]],
    )]
    fn shift(#[case] direction: Direction, #[case] initial: Slots, #[case] expected: Slots) {
        let (shifted, _) = round(initial).shifted(&direction);
        assert_eq!(shifted, round(expected), "shifting {:?}", direction);
    }

    #[test]
    fn shift_counts_merges() {
        let initial = round([[2, 2, 2, 2], [4, 4, 0, 0], [0, 0, 0, 0], [8, 0, 8, 0]]);
        let (shifted, merges) = initial.shifted(&Direction::Right);
        assert_eq!(
            shifted,
            round([[0, 0, 4, 4], [0, 0, 0, 8], [0, 0, 0, 0], [0, 0, 0, 16]])
        );
        assert_eq!(merges, 4);
        assert_eq!(shifted.occupied(), initial.occupied() - merges);
    }

    #[test]
    fn empty_slots_row_major() {
        let r = round([[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]);
        assert_eq!(r.empty_slots(), vec![Idx(1, 0), Idx(3, 3)]);
        assert_eq!(r.occupied(), 14);
    }

    #[rstest]
    #[case::empty(Round::default(), false)]
    #[case::horizontal(round([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]), true)]
    #[case::vertical(round([[0, 0, 0, 8], [0, 0, 0, 8], [0; 4], [0; 4]]), true)]
    #[case::gap_is_not_adjacent(round([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]]), false)]
    #[case::checkerboard(
        round([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]),
        false
    )]
    fn adjacent_pairs(#[case] r: Round, #[case] expected: bool) {
        assert_eq!(r.has_adjacent_pair(), expected);
    }

    #[test]
    fn contains_and_highest() {
        let r = round([[2, 0, 0, 0], [0, 2048, 0, 0], [0, 0, 0, 0], [0, 0, 0, 4]]);
        assert!(r.contains(2048));
        assert!(!r.contains(1024));
        assert_eq!(r.highest(), 2048);
        assert_eq!(Round::default().highest(), 0);
    }
}
