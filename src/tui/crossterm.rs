use std::io::Write;

use ::crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as CrossTermEvent, KeyCode,
        KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    style::{self, Attribute, Color},
    terminal, ExecutableCommand, QueueableCommand,
};

use super::canvas::Canvas;
use super::colors::Rgb;
use super::error::Result;
use super::events::{Event, EventSource, UserInput};
use super::gesture::Swipe;
use super::renderer::Renderer;
use crate::engine::orientation::Direction;

/// Renderer that takes over the terminal: raw mode, alternate screen, hidden cursor and mouse
/// capture. Everything is restored when it is dropped.
pub(crate) struct Crossterm<W: Write> {
    w: W,
}

impl<W: Write> Crossterm<W> {
    pub(crate) fn new(mut w: W) -> Result<Self> {
        terminal::enable_raw_mode()?;
        w.execute(terminal::EnterAlternateScreen)?;
        w.execute(cursor::Hide)?;
        w.execute(EnableMouseCapture)?;
        Ok(Self { w })
    }
}

impl<W: Write> Drop for Crossterm<W> {
    fn drop(&mut self) {
        // nothing sensible to do with errors while tearing down
        let _ = self.w.execute(DisableMouseCapture);
        let _ = self.w.execute(cursor::Show);
        let _ = self.w.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

type Style = (Option<Rgb>, Option<Rgb>, bool);

impl<W: Write> Renderer for Crossterm<W> {
    fn size_hint(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    fn render(&mut self, c: &Canvas) -> Result<()> {
        self.w.queue(terminal::BeginSynchronizedUpdate)?;
        self.w.queue(style::ResetColor)?;
        let mut last: Option<Style> = None;
        for (y, row) in c.rows().enumerate() {
            self.w.queue(cursor::MoveTo(0, y as u16))?;
            for tuxel in row {
                let (fg, bg) = tuxel.colors();
                let current = (fg, bg, tuxel.bold());
                if last != Some(current) {
                    self.queue_style(&current)?;
                    last = Some(current);
                }
                self.w.queue(style::Print(tuxel.content()))?;
            }
        }
        self.w.queue(style::ResetColor)?;
        self.w.queue(terminal::EndSynchronizedUpdate)?;
        self.w.flush()?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.w.queue(style::ResetColor)?;
        self.w.queue(terminal::Clear(terminal::ClearType::All))?;
        self.w.flush()?;
        Ok(())
    }
}

impl<W: Write> Crossterm<W> {
    fn queue_style(&mut self, (fg, bg, bold): &Style) -> Result<()> {
        self.w.queue(style::SetForegroundColor(
            fg.map(Color::from).unwrap_or(Color::Reset),
        ))?;
        self.w.queue(style::SetBackgroundColor(
            bg.map(Color::from).unwrap_or(Color::Reset),
        ))?;
        let attribute = if *bold {
            Attribute::Bold
        } else {
            Attribute::NormalIntensity
        };
        self.w.queue(style::SetAttribute(attribute))?;
        Ok(())
    }
}

/// Event source reading keyboard, mouse and resize events from the terminal.
#[derive(Default)]
pub(crate) struct CrosstermEvents {
    swipe: Swipe,
}

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> Result<Event> {
        loop {
            match event::read()? {
                CrossTermEvent::Key(ke) => match handle_key_event(ke) {
                    Some(input) => return Ok(Event::UserInput(input)),
                    None => continue,
                },
                CrossTermEvent::Mouse(me) => match self.handle_mouse_event(me) {
                    Some(d) => return Ok(Event::UserInput(UserInput::Direction(d))),
                    None => continue,
                },
                CrossTermEvent::Resize(_, _) => return Ok(Event::Resize),
                _ => continue,
            };
        }
    }
}

impl CrosstermEvents {
    fn handle_mouse_event(&mut self, me: MouseEvent) -> Option<Direction> {
        match me.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.press(me.column, me.row);
                None
            }
            MouseEventKind::Up(MouseButton::Left) => self.swipe.release(me.column, me.row),
            _ => None,
        }
    }
}

fn handle_key_event(ke: KeyEvent) -> Option<UserInput> {
    if ke.kind == KeyEventKind::Release {
        return None;
    }
    match ke.code {
        KeyCode::Char('c') if ke.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(UserInput::Quit)
        }
        KeyCode::Left | KeyCode::Char('h') => Some(UserInput::Direction(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(UserInput::Direction(Direction::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(UserInput::Direction(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(UserInput::Direction(Direction::Down)),
        KeyCode::Char('u') => Some(UserInput::Undo),
        KeyCode::Char('r') => Some(UserInput::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(UserInput::Quit),
        _ => None,
    }
}
