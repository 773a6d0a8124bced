use super::canvas::{Canvas, Modifier};
use super::error::Result;
use super::geometry::{Idx, Position, Rectangle};
use super::tuxel::Tuxel;

/// DrawBuffer is a rectangular window onto a `Canvas`. All writes are clipped to the rectangle,
/// and to its inside once a border has been drawn.
pub(crate) struct DrawBuffer<'a> {
    canvas: &'a mut Canvas,
    rectangle: Rectangle,
    border: bool,
}

impl<'a> DrawBuffer<'a> {
    pub(crate) fn new(canvas: &'a mut Canvas, rectangle: Rectangle) -> Self {
        Self {
            canvas,
            rectangle,
            border: false,
        }
    }

    /// The part of the rectangle that is left for content.
    pub(crate) fn inner(&self) -> Rectangle {
        if self.border {
            self.rectangle.shrink_by(1, 1)
        } else {
            self.rectangle
        }
    }

    /// Apply `modifier` to every tuxel of the buffer, border included.
    pub(crate) fn modify(&mut self, modifier: Modifier) -> Result<()> {
        let r = self.rectangle;
        for y in r.y()..r.y() + r.height() {
            for x in r.x()..r.x() + r.width() {
                let tuxel = self.canvas.tuxel_mut(&Idx(x, y))?;
                match &modifier {
                    Modifier::SetForegroundColor(c) => tuxel.set_fgcolor(*c),
                    Modifier::SetBackgroundColor(c) => tuxel.set_bgcolor(*c),
                    Modifier::Bold => tuxel.set_bold(true),
                }
            }
        }
        Ok(())
    }

    pub(crate) fn fill(&mut self, c: char) -> Result<()> {
        let r = self.inner();
        for y in r.y()..r.y() + r.height() {
            for x in r.x()..r.x() + r.width() {
                self.canvas.tuxel_mut(&Idx(x, y))?.set_content(c);
            }
        }
        Ok(())
    }

    pub(crate) fn draw_border(&mut self) -> Result<()> {
        let box_corner = boxy::Char::upper_left(boxy::Weight::Doubled);
        let box_horizontal = boxy::Char::horizontal(boxy::Weight::Doubled);
        let box_vertical = boxy::Char::vertical(boxy::Weight::Doubled);
        let (width, height) = (self.rectangle.width(), self.rectangle.height());
        if width < 2 || height < 2 {
            // can only draw a border around at least two rows and columns
            return Ok(());
        }

        // draw corners
        self.get_tuxel(Position::TopLeft)?
            .set_content(box_corner.clone().into());
        self.get_tuxel(Position::TopRight)?
            .set_content(box_corner.clone().rotate_cw(1).into());
        self.get_tuxel(Position::BottomRight)?
            .set_content(box_corner.clone().rotate_cw(2).into());
        self.get_tuxel(Position::BottomLeft)?
            .set_content(box_corner.clone().rotate_ccw(1).into());

        // draw non-corner top and bottom
        for x in 1..width - 1 {
            self.get_tuxel(Position::Coordinates(x, 0))?
                .set_content(box_horizontal.clone().into());
            self.get_tuxel(Position::Coordinates(x, height - 1))?
                .set_content(box_horizontal.clone().into());
        }

        // draw non-corner sides
        for y in 1..height - 1 {
            self.get_tuxel(Position::Coordinates(0, y))?
                .set_content(box_vertical.clone().into());
            self.get_tuxel(Position::Coordinates(width - 1, y))?
                .set_content(box_vertical.clone().into());
        }

        self.border = true;

        Ok(())
    }

    /// Write `s` on the middle row starting at the left edge.
    pub(crate) fn write_left(&mut self, s: &str) -> Result<()> {
        let r = self.inner();
        self.write_at(r, 0, r.height() / 2, s)
    }

    /// Write `s` on the middle row so that it ends at the right edge.
    pub(crate) fn write_right(&mut self, s: &str) -> Result<()> {
        let r = self.inner();
        let len = s.chars().count();
        self.write_at(r, r.width().saturating_sub(len), r.height() / 2, s)
    }

    /// Write `s` centered on the middle row; odd leftover space goes to the left.
    pub(crate) fn write_center(&mut self, s: &str) -> Result<()> {
        let r = self.inner();
        let len = s.chars().count();
        let x_offset = ((r.width().saturating_sub(len)) as f32 / 2.0).ceil() as usize;
        self.write_at(r, x_offset, r.height() / 2, s)
    }

    fn write_at(&mut self, r: Rectangle, x: usize, y: usize, s: &str) -> Result<()> {
        if y >= r.height() {
            return Ok(());
        }
        for (offset, c) in s.chars().enumerate() {
            if x + offset >= r.width() {
                // can't write more than width of buffer
                break;
            }
            self.canvas
                .tuxel_mut(&Idx(r.x() + x + offset, r.y() + y))?
                .set_content(c);
        }
        Ok(())
    }

    fn get_tuxel(&mut self, pos: Position) -> Result<&mut Tuxel> {
        let (x, y) = self.rectangle.relative_idx(&pos);
        self.canvas
            .tuxel_mut(&Idx(self.rectangle.x() + x, self.rectangle.y() + y))
    }

    pub(crate) fn tuxel_mut(&mut self, x: usize, y: usize) -> Result<&mut Tuxel> {
        let r = self.inner();
        self.canvas.tuxel_mut(&Idx(r.x() + x, r.y() + y))
    }
}
