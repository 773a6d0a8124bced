use super::colors::Rgb;
use super::drawbuffer::DrawBuffer;
use super::error::{Result, TuiError};
use super::geometry::{Bounds2D, Idx, Rectangle};
use super::tuxel::Tuxel;

/// A 2d grid of `Tuxel`s that is drawn off-screen and handed to a `Renderer` as a whole.
pub(crate) struct Canvas {
    grid: Vec<Vec<Tuxel>>,
    rectangle: Rectangle,
}

impl Canvas {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let rectangle = Rectangle(Idx(0, 0), Bounds2D(width, height));
        let grid = (0..height)
            .map(|_| (0..width).map(|_| Tuxel::new()).collect())
            .collect();
        Self { grid, rectangle }
    }

    /// Borrow the tuxels within `r` for drawing.
    pub(crate) fn get_draw_buffer(&mut self, r: Rectangle) -> Result<DrawBuffer<'_>> {
        let (x_extent, y_extent) = r.extents();
        let (width, height) = self.dimensions();
        if x_extent > width || y_extent > height {
            return Err(TuiError::RectangleOutOfBounds {
                rect: r,
                width,
                height,
            });
        }
        Ok(DrawBuffer::new(self, r))
    }

    /// Borrow the entire canvas for drawing.
    pub(crate) fn get_layer(&mut self) -> DrawBuffer<'_> {
        let r = self.rectangle;
        DrawBuffer::new(self, r)
    }

    pub(crate) fn dimensions(&self) -> (usize, usize) {
        (self.rectangle.width(), self.rectangle.height())
    }

    pub(crate) fn clear(&mut self) {
        for tuxel in self.grid.iter_mut().flatten() {
            tuxel.clear();
        }
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &[Tuxel]> {
        self.grid.iter().map(|row| row.as_slice())
    }

    #[cfg(test)]
    pub(crate) fn tuxel(&self, idx: &Idx) -> Result<&Tuxel> {
        self.rectangle.contains_or_err(idx)?;
        Ok(&self.grid[idx.y()][idx.x()])
    }

    pub(crate) fn tuxel_mut(&mut self, idx: &Idx) -> Result<&mut Tuxel> {
        self.rectangle.contains_or_err(idx)?;
        Ok(&mut self.grid[idx.y()][idx.x()])
    }

    /// The characters of row `y` as a string.
    #[cfg(test)]
    pub(crate) fn row_text(&self, y: usize) -> String {
        self.grid
            .get(y)
            .map(|row| row.iter().map(|t| t.content()).collect())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Modifier {
    SetForegroundColor(Rgb),
    SetBackgroundColor(Rgb),
    Bold,
}
