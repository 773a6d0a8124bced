use std::cmp::Ordering;

use textwrap::wrap;

use super::colors::Rgb;
use super::drawbuffer::DrawBuffer;
use super::error::{Result, TuiError};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum HAlignment {
    Left,
    #[default]
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) enum VAlignment {
    Top,
    #[default]
    Middle,
    Bottom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FormatOptions {
    pub(crate) halign: HAlignment,
    pub(crate) valign: VAlignment,
}

struct CharBuf {
    text: String,
    fgcolor: Option<Rgb>,
    bgcolor: Option<Rgb>,
}

impl CharBuf {
    fn wrap(&self, width: usize) -> Vec<CharBuf> {
        wrap(&self.text, width)
            .into_iter()
            .map(|s| CharBuf {
                text: s.to_string(),
                fgcolor: self.fgcolor,
                bgcolor: self.bgcolor,
            })
            .collect()
    }

    #[inline]
    fn len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A line-oriented buffer that makes writing structured/formatted text to DrawBuffers somewhat
/// easier. Each `write` starts a new paragraph which is wrapped to the buffer width on `flush`.
#[derive(Default)]
pub(crate) struct TextBuffer {
    bufs: Vec<CharBuf>,
    format: FormatOptions,
}

impl TextBuffer {
    pub(crate) fn new(format: FormatOptions) -> Self {
        Self {
            bufs: Vec::new(),
            format,
        }
    }

    pub(crate) fn write(&mut self, s: &str, fgcolor: Option<Rgb>, bgcolor: Option<Rgb>) {
        self.bufs.push(CharBuf {
            text: s.to_string(),
            fgcolor,
            bgcolor,
        })
    }

    /// Draw the buffered text into `dbuf`. Lines that do not fit vertically are dropped according
    /// to the vertical alignment.
    pub(crate) fn flush(&self, dbuf: &mut DrawBuffer) -> Result<()> {
        let rect = dbuf.inner();
        if rect.width() == 0 || rect.height() == 0 {
            return Ok(());
        }

        let bufs = self
            .bufs
            .iter()
            .flat_map(|cb| cb.wrap(rect.width()))
            .collect::<Vec<CharBuf>>();

        let (mut y_index, buf_skip) = match (&self.format.valign, bufs.len().cmp(&rect.height())) {
            (VAlignment::Top, _) => (0usize, 0usize),
            (_, Ordering::Equal) => (0usize, 0usize),
            (VAlignment::Middle, Ordering::Less) => ((rect.height() - bufs.len()) / 2, 0),
            (VAlignment::Middle, Ordering::Greater) => (0, (bufs.len() - rect.height()) / 2),
            (VAlignment::Bottom, Ordering::Less) => (rect.height() - bufs.len(), 0),
            (VAlignment::Bottom, Ordering::Greater) => (0, bufs.len() - rect.height()),
        };

        for charbuf in bufs.iter().skip(buf_skip) {
            if y_index >= rect.height() {
                // can't write beyond the bottom of the rectangle
                break;
            }

            let buflen = charbuf.len();
            let width_diff = if buflen > rect.width() {
                // textwrap only exceeds the width for words it cannot break
                return Err(TuiError::OutOfBoundsX(buflen));
            } else {
                rect.width() - buflen
            };

            let x_index = match &self.format.halign {
                HAlignment::Left => 0,
                HAlignment::Center => width_diff / 2,
                HAlignment::Right => width_diff,
            };

            for (offset, c) in charbuf.text.chars().enumerate() {
                let tuxel = dbuf.tuxel_mut(x_index + offset, y_index)?;
                tuxel.set_content(c);
                if let Some(c) = &charbuf.bgcolor {
                    tuxel.set_bgcolor(*c);
                }
                if let Some(c) = &charbuf.fgcolor {
                    tuxel.set_fgcolor(*c);
                }
            }

            y_index += 1;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use rstest::*;

    use super::*;
    use crate::tui::canvas::Canvas;
    use crate::tui::geometry::{Bounds2D, Idx, Rectangle};

    fn render(format: FormatOptions, text: &[&str], width: usize, height: usize) -> Vec<String> {
        let mut canvas = Canvas::new(width, height);
        let mut tbuf = TextBuffer::new(format);
        for t in text {
            tbuf.write(t, None, None);
        }
        {
            let mut dbuf = canvas
                .get_draw_buffer(Rectangle(Idx(0, 0), Bounds2D(width, height)))
                .expect("rectangle matches canvas");
            tbuf.flush(&mut dbuf).expect("text fits");
        }
        (0..height).map(|y| canvas.row_text(y)).collect()
    }

    fn format(halign: HAlignment, valign: VAlignment) -> FormatOptions {
        FormatOptions { halign, valign }
    }

    #[rstest]
    #[case::top_left(
        format(HAlignment::Left, VAlignment::Top),
        &["game over"],
        vec!["game over ", "          ", "          "],
    )]
    #[case::middle_center(
        format(HAlignment::Center, VAlignment::Middle),
        &["undo"],
        vec!["          ", "   undo   ", "          "],
    )]
    #[case::bottom_right(
        format(HAlignment::Right, VAlignment::Bottom),
        &["q quit"],
        vec!["          ", "          ", "    q quit"],
    )]
    #[case::wraps_words(
        format(HAlignment::Left, VAlignment::Top),
        &["press r to restart"],
        vec!["press r to", "restart   ", "          "],
    )]
    #[case::paragraphs(
        format(HAlignment::Center, VAlignment::Top),
        &["you win", "keep going"],
        vec![" you win  ", "keep going", "          "],
    )]
    #[case::overflow_keeps_last_lines(
        format(HAlignment::Left, VAlignment::Bottom),
        &["a", "b", "c", "d"],
        vec!["b         ", "c         ", "d         "],
    )]
    fn flush(
        #[case] format: FormatOptions,
        #[case] text: &[&str],
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(render(format, text, 10, 3), expected);
    }

    #[test]
    fn flush_inside_border() -> Result<()> {
        let mut canvas = Canvas::new(8, 3);
        {
            let mut dbuf = canvas.get_layer();
            dbuf.draw_border()?;
            let mut tbuf = TextBuffer::default();
            tbuf.write("hi", None, Some(Rgb::new(1, 2, 3)));
            tbuf.flush(&mut dbuf)?;
        }
        assert_eq!(canvas.row_text(1), "║  hi  ║");
        assert_eq!(canvas.tuxel(&Idx(3, 1))?.colors(), (None, Some(Rgb::new(1, 2, 3))));
        Ok(())
    }
}
