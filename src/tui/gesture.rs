use crate::engine::orientation::Direction;

/// Minimum horizontal drag, in columns, that counts as a swipe.
pub(crate) const MIN_SWIPE_COLUMNS: i32 = 2;
/// Minimum vertical drag, in rows, that counts as a swipe.
pub(crate) const MIN_SWIPE_ROWS: i32 = 1;

/// Swipe turns a press/release pair of mouse positions into a direction.
#[derive(Debug, Default)]
pub(crate) struct Swipe {
    start: Option<(u16, u16)>,
}

impl Swipe {
    pub(crate) fn press(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    pub(crate) fn release(&mut self, column: u16, row: u16) -> Option<Direction> {
        let (start_column, start_row) = self.start.take()?;
        classify(
            column as i32 - start_column as i32,
            row as i32 - start_row as i32,
        )
    }
}

/// Classify a drag by its dominant axis. Terminal cells are roughly twice as tall as they are
/// wide, so rows weigh double when comparing the axes.
pub(crate) fn classify(dx: i32, dy: i32) -> Option<Direction> {
    if dx.abs() > 2 * dy.abs() {
        match dx {
            dx if dx >= MIN_SWIPE_COLUMNS => Some(Direction::Right),
            dx if dx <= -MIN_SWIPE_COLUMNS => Some(Direction::Left),
            _ => None,
        }
    } else {
        match dy {
            dy if dy >= MIN_SWIPE_ROWS => Some(Direction::Down),
            dy if dy <= -MIN_SWIPE_ROWS => Some(Direction::Up),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;

    #[rstest]
    #[case::right(5, 0, Some(Direction::Right))]
    #[case::left(-5, 1, Some(Direction::Left))]
    #[case::down(1, 3, Some(Direction::Down))]
    #[case::up(0, -1, Some(Direction::Up))]
    #[case::rows_weigh_double(3, 2, Some(Direction::Down))]
    #[case::too_short_horizontal(1, 0, None)]
    #[case::click(0, 0, None)]
    fn classify_drag(#[case] dx: i32, #[case] dy: i32, #[case] expected: Option<Direction>) {
        assert_eq!(classify(dx, dy), expected);
    }

    #[test]
    fn release_without_press() {
        let mut swipe = Swipe::default();
        assert_eq!(swipe.release(10, 10), None);
        swipe.press(10, 10);
        assert_eq!(swipe.release(2, 10), Some(Direction::Left));
        assert_eq!(swipe.release(2, 10), None, "a release consumes the press");
    }
}
