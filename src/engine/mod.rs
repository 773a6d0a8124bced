pub(crate) mod board;
pub(crate) mod line;
pub(crate) mod orientation;
pub(crate) mod round;
pub(crate) mod spawner;
pub(crate) mod terminal;
