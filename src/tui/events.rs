use super::error::Result;
use crate::engine::orientation::Direction;

pub(crate) trait EventSource {
    /// Block until the next event relevant to the game.
    fn next_event(&mut self) -> Result<Event>;
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    UserInput(UserInput),
    Resize,
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum UserInput {
    Direction(Direction),
    Undo,
    Restart,
    Quit,
}
