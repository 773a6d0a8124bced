use super::error::{Result, TuiError};

/// Idx encapsulates the x and y coordinates of a tuxel on the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Idx(pub usize, pub usize);

impl Idx {
    #[inline(always)]
    pub(crate) fn x(&self) -> usize {
        self.0
    }

    #[inline(always)]
    pub(crate) fn y(&self) -> usize {
        self.1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Bounds2D(pub usize, pub usize);

impl Bounds2D {
    #[inline(always)]
    pub(crate) fn width(&self) -> usize {
        self.0
    }

    #[inline(always)]
    pub(crate) fn height(&self) -> usize {
        self.1
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Rectangle(pub Idx, pub Bounds2D);

impl Rectangle {
    #[inline(always)]
    pub(crate) fn width(&self) -> usize {
        self.1 .0
    }

    #[inline(always)]
    pub(crate) fn height(&self) -> usize {
        self.1 .1
    }

    #[inline(always)]
    pub(crate) fn x(&self) -> usize {
        self.0 .0
    }

    #[inline(always)]
    pub(crate) fn y(&self) -> usize {
        self.0 .1
    }

    /// Coordinates of `pos` relative to the top left corner of the rectangle.
    #[inline(always)]
    pub(crate) fn relative_idx(&self, pos: &Position) -> (usize, usize) {
        match pos {
            Position::TopLeft => (0, 0),
            Position::TopRight => (self.width() - 1, 0),
            Position::BottomLeft => (0, self.height() - 1),
            Position::BottomRight => (self.width() - 1, self.height() - 1),
            Position::Coordinates(x, y) => (*x, *y),
        }
    }

    /// The first column and row past the rectangle.
    #[inline(always)]
    pub(crate) fn extents(&self) -> (usize, usize) {
        (self.0 .0 + self.1 .0, self.0 .1 + self.1 .1)
    }

    /// Shrink the rectangle by `dx` columns and `dy` rows on every side.
    pub(crate) fn shrink_by(&self, dx: usize, dy: usize) -> Rectangle {
        Rectangle(
            Idx(self.x() + dx, self.y() + dy),
            Bounds2D(
                self.width().saturating_sub(2 * dx),
                self.height().saturating_sub(2 * dy),
            ),
        )
    }

    /// A rectangle of the given bounds centered within this one. Bounds larger than the rectangle
    /// are clamped to it.
    pub(crate) fn centered(&self, bounds: Bounds2D) -> Rectangle {
        let width = bounds.width().min(self.width());
        let height = bounds.height().min(self.height());
        Rectangle(
            Idx(
                self.x() + (self.width() - width) / 2,
                self.y() + (self.height() - height) / 2,
            ),
            Bounds2D(width, height),
        )
    }

    #[inline(always)]
    pub(crate) fn contains_or_err(&self, idx: &Idx) -> Result<()> {
        if idx.x() < self.x() || idx.x() >= self.x() + self.width() {
            return Err(TuiError::OutOfBoundsX(idx.x()));
        }
        if idx.y() < self.y() || idx.y() >= self.y() + self.height() {
            return Err(TuiError::OutOfBoundsY(idx.y()));
        }
        Ok(())
    }
}

pub(crate) enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Coordinates(usize, usize),
}
