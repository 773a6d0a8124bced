use super::round::{Card, SIZE};

/// A single row of a round as seen after orientation mapping, read left to right.
pub(crate) type Line = [Card; SIZE];

/// Slide every non-empty card of the line towards index 0 and merge equal neighbours.
///
/// Each card takes part in at most one merge, and pairs are matched from the left, so
/// `[2, 2, 2, 0]` becomes `[4, 2, 0, 0]`. Returns the reduced line together with the number of
/// merges performed.
pub(crate) fn reduce(line: &Line) -> (Line, usize) {
    let mut compacted = line.iter().copied().filter(|card| *card != 0).peekable();
    let mut reduced: Line = [0; SIZE];
    let mut merges = 0usize;
    let mut slot = 0usize;
    while let Some(card) = compacted.next() {
        // a merged card is consumed here so it can never pair with its right neighbour
        if compacted.next_if_eq(&card).is_some() {
            reduced[slot] = card * 2;
            merges += 1;
        } else {
            reduced[slot] = card;
        }
        slot += 1;
    }
    (reduced, merges)
}
