use super::round::{Card, Round};

/// Reaching this card wins the game.
pub(crate) const WINNING_CARD: Card = 2048;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Status {
    #[default]
    Active,
    GameOver,
}

/// Flags tracks whether a game has been won or lost.
///
/// Both flags are sticky: `check` only ever sets them. Clearing is left to the owning board on
/// undo or restart.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Flags {
    pub(crate) won: bool,
    pub(crate) lost: bool,
}

impl Flags {
    pub(crate) fn status(&self) -> Status {
        if self.lost {
            Status::GameOver
        } else {
            Status::Active
        }
    }

    /// Update the flags for a freshly committed round. Win and loss are evaluated independently,
    /// so both may end up set.
    pub(crate) fn check(&mut self, round: &Round) {
        if !self.won && is_won(round) {
            log::info!("{} reached", WINNING_CARD);
            self.won = true;
        }
        if !self.lost && is_lost(round) {
            log::info!("no moves left, game over");
            self.lost = true;
        }
    }
}

pub(crate) fn is_won(round: &Round) -> bool {
    round.contains(WINNING_CARD)
}

/// A round is lost when it is full and no two neighbouring cards are equal in either axis.
pub(crate) fn is_lost(round: &Round) -> bool {
    round.empty_slots().is_empty() && !round.has_adjacent_pair()
}
