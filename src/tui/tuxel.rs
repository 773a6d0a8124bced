use super::colors::Rgb;

/// A single character cell of the canvas along with its styling.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Tuxel {
    content: char,
    fgcolor: Option<Rgb>,
    bgcolor: Option<Rgb>,
    bold: bool,
}

impl Tuxel {
    pub(crate) fn new() -> Self {
        Tuxel {
            content: ' ',
            fgcolor: None,
            bgcolor: None,
            bold: false,
        }
    }

    pub(crate) fn set_content(&mut self, c: char) {
        self.content = c;
    }

    pub(crate) fn set_fgcolor(&mut self, color: Rgb) {
        self.fgcolor = Some(color);
    }

    pub(crate) fn set_bgcolor(&mut self, color: Rgb) {
        self.bgcolor = Some(color);
    }

    pub(crate) fn set_bold(&mut self, bold: bool) {
        self.bold = bold;
    }

    pub(crate) fn clear(&mut self) {
        self.content = ' ';
        self.fgcolor = None;
        self.bgcolor = None;
        self.bold = false;
    }

    pub(crate) fn content(&self) -> char {
        self.content
    }

    pub(crate) fn colors(&self) -> (Option<Rgb>, Option<Rgb>) {
        (self.fgcolor, self.bgcolor)
    }

    pub(crate) fn bold(&self) -> bool {
        self.bold
    }
}

impl std::fmt::Display for Tuxel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content())
    }
}
