use rand::RngCore;

use super::orientation::Direction;
use super::round::{Card, Idx, Round, SIZE};
use super::spawner::Spawner;
use super::terminal::{Flags, Status};

/// Shift describes a committed move.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Shift {
    pub(crate) direction: Direction,
    pub(crate) merges: usize,
    pub(crate) spawned: Option<(Idx, Card)>,
}

/// Board represents a 2048 game: the current round, a single undo snapshot, the move counter and
/// the win/loss flags.
pub(crate) struct Board {
    rng: Box<dyn RngCore>,
    spawner: Spawner,
    round: Round,
    previous: Option<Round>,
    moves: u32,
    flags: Flags,
}

impl Board {
    /// Initialize new board using the given random number generator.
    pub(crate) fn new(rng: impl RngCore + 'static) -> Self {
        let mut board = Self {
            rng: Box::new(rng),
            spawner: Spawner::default(),
            round: Round::default(),
            previous: None,
            moves: 0,
            flags: Flags::default(),
        };
        board.restart();
        board
    }

    /// shift attempts to move every card in the given direction. Returns `None` without touching
    /// any state if the game is over or nothing would move.
    pub(crate) fn shift(&mut self, direction: Direction) -> Option<Shift> {
        if self.flags.status() == Status::GameOver {
            log::debug!("ignoring {} move, game is over", direction);
            return None;
        }

        let (candidate, merges) = self.round.shifted(&direction);
        if candidate == self.round {
            log::trace!("{} move changes nothing", direction);
            return None;
        }

        self.previous = Some(self.round);
        self.round = candidate;
        self.moves += 1;
        let spawned = self.spawner.spawn(&mut self.round, self.rng.as_mut());
        self.flags.check(&self.round);
        log::debug!(
            "move {} ({}), {} merges\n{}",
            self.moves,
            direction,
            merges,
            self.round
        );

        Some(Shift {
            direction,
            merges,
            spawned,
        })
    }

    /// Restore the round from before the last committed move. Only one step is remembered; returns
    /// whether anything was undone.
    pub(crate) fn undo(&mut self) -> bool {
        let previous = match self.previous.take() {
            Some(round) => round,
            None => return false,
        };
        self.round = previous;
        self.moves = self.moves.saturating_sub(1);
        self.flags.lost = false;
        log::info!("undo, back to move {}", self.moves);
        true
    }

    /// Start over with an empty board holding two new cards.
    pub(crate) fn restart(&mut self) {
        self.round = Round::default();
        self.previous = None;
        self.moves = 0;
        self.flags = Flags::default();
        for _ in 0..2 {
            let _ = self.spawner.spawn(&mut self.round, self.rng.as_mut());
        }
        log::info!("new game\n{}", self.round);
    }

    pub(crate) fn current(&self) -> &Round {
        &self.round
    }

    pub(crate) fn moves(&self) -> u32 {
        self.moves
    }

    pub(crate) fn dimensions(&self) -> (usize, usize) {
        (SIZE, SIZE)
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    pub(crate) fn is_won(&self) -> bool {
        self.flags.won
    }

    pub(crate) fn is_lost(&self) -> bool {
        self.flags.lost
    }

    pub(crate) fn status(&self) -> Status {
        self.flags.status()
    }

    #[cfg(test)]
    pub(crate) fn set_initial_round(&mut self, round: Round) {
        self.round = round;
        self.previous = None;
        self.moves = 0;
        self.flags = Flags::default();
    }
}
