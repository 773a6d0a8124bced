use super::round::{Slots, SIZE};

/// Direction represents the direction indicated by the player.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    #[cfg(test)]
    pub(crate) const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The transform that turns a move in this direction into a leftward move.
    pub(crate) fn transform(&self) -> Transform {
        match self {
            Self::Left => Transform::Identity,
            Self::Right => Transform::Rotate180,
            Self::Up => Transform::RotateCcw,
            Self::Down => Transform::RotateCw,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        write!(f, "{}", s)
    }
}

/// An exact, shape-preserving rearrangement of a round's slots.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Transform {
    Identity,
    Rotate180,
    RotateCcw,
    RotateCw,
}

impl Transform {
    pub(crate) fn inverse(&self) -> Transform {
        match self {
            Self::Identity => Self::Identity,
            Self::Rotate180 => Self::Rotate180,
            Self::RotateCcw => Self::RotateCw,
            Self::RotateCw => Self::RotateCcw,
        }
    }

    pub(crate) fn apply(&self, slots: &Slots) -> Slots {
        let mut out: Slots = [[0; SIZE]; SIZE];
        for (y, row) in out.iter_mut().enumerate() {
            for (x, card) in row.iter_mut().enumerate() {
                *card = match self {
                    Self::Identity => slots[y][x],
                    Self::Rotate180 => slots[SIZE - 1 - y][SIZE - 1 - x],
                    // row y becomes column SIZE-1-y read top to bottom
                    Self::RotateCcw => slots[x][SIZE - 1 - y],
                    // row y becomes column y read bottom to top
                    Self::RotateCw => slots[SIZE - 1 - x][y],
                };
            }
        }
        out
    }
}

/// Rearrange `slots` so that a move in `direction` becomes a leftward move on every row.
pub(crate) fn map(direction: &Direction, slots: &Slots) -> Slots {
    direction.transform().apply(slots)
}

/// Undo [`map`] for the same `direction`.
pub(crate) fn unmap(direction: &Direction, slots: &Slots) -> Slots {
    direction.transform().inverse().apply(slots)
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    const SAMPLE: Slots = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]];

    #[rstest]
    #[case::left(Direction::Left, SAMPLE)]
    #[case::right(
        Direction::Right,
        [[16, 15, 14, 13], [12, 11, 10, 9], [8, 7, 6, 5], [4, 3, 2, 1]],
    )]
    #[case::up(
        Direction::Up,
        [[4, 8, 12, 16], [3, 7, 11, 15], [2, 6, 10, 14], [1, 5, 9, 13]],
    )]
    #[case::down(
        Direction::Down,
        [[13, 9, 5, 1], [14, 10, 6, 2], [15, 11, 7, 3], [16, 12, 8, 4]],
    )]
    fn map_sample(#[case] direction: Direction, #[case] expected: Slots) {
        assert_eq!(map(&direction, &SAMPLE), expected, "mapping {}", direction);
    }

    #[rstest]
    fn unmap_inverts_map(
        #[values(Direction::Left, Direction::Right, Direction::Up, Direction::Down)]
        direction: Direction,
        #[values(
            SAMPLE,
            [[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
            [[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 8, 0], [0, 0, 0, 2048]],
        )]
        slots: Slots,
    ) {
        assert_eq!(unmap(&direction, &map(&direction, &slots)), slots);
        assert_eq!(map(&direction, &unmap(&direction, &slots)), slots);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let mut slots = SAMPLE;
        for _ in 0..4 {
            slots = Transform::RotateCw.apply(&slots);
        }
        assert_eq!(slots, SAMPLE);
    }

    #[test]
    fn inverse_is_involution() {
        for direction in Direction::ALL {
            let t = direction.transform();
            assert_eq!(t.inverse().inverse(), t);
        }
    }
}
