use crate::engine::board::{Board, Shift};
use crate::engine::round::{Card, Idx as BoardIdx, SIZE};
use crate::engine::terminal::{Status, WINNING_CARD};

use super::error::Result;
use crate::tui::canvas::{Canvas, Modifier};
use crate::tui::colors::{board_colors, card_colors, slot_colors, Rgb};
use crate::tui::error::{Result as TuiResult, TuiError};
use crate::tui::events::{Event, EventSource, UserInput};
use crate::tui::geometry::{Bounds2D, Idx, Rectangle};
use crate::tui::renderer::Renderer;
use crate::tui::textbuffer::{FormatOptions, HAlignment, TextBuffer, VAlignment};

/// Generates a 2048 TUI layout with legible numbers.
///
///  ╔══════════════════════════════════════╗
///  ║ moves: 12                 u to undo  ║
///  ╚══════════════════════════════════════╝
///            2048! keep going
///  ╔══════════════════════════════════════╗
///  ║                                      ║
///  ║  xxxxxxx  xxxxxxx  xxxxxxx  xxxxxxx  ║
///  ║  xxxxxxx  xxxxxxx  xxxxxxx  xxxxxxx  ║
///  ║  xxxxxxx  xxxxxxx  xxxxxxx  xxxxxxx  ║
///  ║                                      ║
///  ║  ...                                 ║
///  ╚══════════════════════════════════════╝
///   arrows/hjkl/drag move  u undo  r restart
///                                     q quit
const BOARD_FIXED_X_OFFSET: usize = 1;
const BOARD_FIXED_Y_OFFSET: usize = 4;
const BOARD_BORDER_WIDTH: usize = 1;
const BOARD_X_PADDING: usize = 2;
const BOARD_Y_PADDING: usize = 1;
const TILE_HEIGHT: usize = 3;
const TILE_WIDTH: usize = 7;

const BOARD_WIDTH: usize =
    2 * BOARD_BORDER_WIDTH + BOARD_X_PADDING + SIZE * (TILE_WIDTH + BOARD_X_PADDING);
const BOARD_HEIGHT: usize =
    2 * BOARD_BORDER_WIDTH + BOARD_Y_PADDING + SIZE * (TILE_HEIGHT + BOARD_Y_PADDING);
const HEADER_HEIGHT: usize = 3;
const FOOTER_HEIGHT: usize = 2;

const MIN_WIDTH: usize = BOARD_FIXED_X_OFFSET + BOARD_WIDTH;
const MIN_HEIGHT: usize = BOARD_FIXED_Y_OFFSET + BOARD_HEIGHT + FOOTER_HEIGHT;

const GAME_OVER_LIGHTNESS: f32 = 0.35;

fn board_rectangle() -> Rectangle {
    Rectangle(
        Idx(BOARD_FIXED_X_OFFSET, BOARD_FIXED_Y_OFFSET),
        Bounds2D(BOARD_WIDTH, BOARD_HEIGHT),
    )
}

fn tile_rectangle(x: usize, y: usize) -> Rectangle {
    let x_offset = BOARD_FIXED_X_OFFSET + BOARD_BORDER_WIDTH + BOARD_X_PADDING;
    let y_offset = BOARD_FIXED_Y_OFFSET + BOARD_BORDER_WIDTH + BOARD_Y_PADDING;
    Rectangle(
        Idx(
            x_offset + (BOARD_X_PADDING + TILE_WIDTH) * x,
            y_offset + (BOARD_Y_PADDING + TILE_HEIGHT) * y,
        ),
        Bounds2D(TILE_WIDTH, TILE_HEIGHT),
    )
}

/// Draw the whole game onto `canvas`. Fails with `TerminalTooSmall` if the layout does not fit.
fn draw_game(board: &Board, last_shift: Option<&Shift>, canvas: &mut Canvas) -> TuiResult<()> {
    let (width, height) = canvas.dimensions();
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(TuiError::TerminalTooSmall(MIN_WIDTH, MIN_HEIGHT));
    }
    canvas.clear();
    draw_header(board, canvas)?;
    draw_board(board, last_shift, canvas)?;
    draw_footer(canvas)?;
    if board.status() == Status::GameOver {
        draw_game_over(canvas)?;
    }
    Ok(())
}

fn draw_header(board: &Board, canvas: &mut Canvas) -> TuiResult<()> {
    let (bg, fg) = board_colors();
    {
        let mut header = canvas.get_draw_buffer(Rectangle(
            Idx(BOARD_FIXED_X_OFFSET, 0),
            Bounds2D(BOARD_WIDTH, HEADER_HEIGHT),
        ))?;
        header.modify(Modifier::SetBackgroundColor(bg))?;
        header.modify(Modifier::SetForegroundColor(fg))?;
        header.draw_border()?;
        header.fill(' ')?;
        header.write_left(&format!(" moves: {}", board.moves()))?;
        if board.can_undo() {
            header.write_right("u to undo ")?;
        }
    }

    if board.is_won() {
        let (card_bg, _) = card_colors(WINNING_CARD);
        let mut banner = canvas.get_draw_buffer(Rectangle(
            Idx(BOARD_FIXED_X_OFFSET, HEADER_HEIGHT),
            Bounds2D(BOARD_WIDTH, 1),
        ))?;
        let mut text = TextBuffer::new(FormatOptions::default());
        text.write(&format!("{}! keep going", WINNING_CARD), Some(card_bg), None);
        text.flush(&mut banner)?;
        banner.modify(Modifier::Bold)?;
    }
    Ok(())
}

fn draw_board(board: &Board, last_shift: Option<&Shift>, canvas: &mut Canvas) -> TuiResult<()> {
    let dim = |c: Rgb| {
        if board.is_lost() {
            c.with_lightness(GAME_OVER_LIGHTNESS)
        } else {
            c
        }
    };

    {
        let (bg, fg) = board_colors();
        let mut frame = canvas.get_draw_buffer(board_rectangle())?;
        frame.modify(Modifier::SetBackgroundColor(dim(bg)))?;
        frame.modify(Modifier::SetForegroundColor(dim(fg)))?;
        frame.draw_border()?;
        frame.fill(' ')?;
    }

    let spawned = last_shift.and_then(|s| s.spawned.map(|(idx, _)| idx));
    let (width, height) = board.dimensions();
    let round = board.current();
    for y in 0..height {
        for x in 0..width {
            let idx = BoardIdx(x, y);
            let card: Card = round.get(&idx);
            let mut tile = canvas.get_draw_buffer(tile_rectangle(x, y))?;
            let (bg, fg) = if card == 0 {
                slot_colors()
            } else {
                card_colors(card)
            };
            tile.modify(Modifier::SetBackgroundColor(dim(bg)))?;
            tile.modify(Modifier::SetForegroundColor(dim(fg)))?;
            tile.fill(' ')?;
            if card != 0 {
                tile.write_center(&format!("{}", card))?;
            }
            if spawned == Some(idx) {
                tile.modify(Modifier::Bold)?;
            }
        }
    }
    Ok(())
}

fn draw_footer(canvas: &mut Canvas) -> TuiResult<()> {
    let mut footer = canvas.get_draw_buffer(Rectangle(
        Idx(BOARD_FIXED_X_OFFSET, BOARD_FIXED_Y_OFFSET + BOARD_HEIGHT),
        Bounds2D(BOARD_WIDTH, FOOTER_HEIGHT),
    ))?;
    let mut keys = TextBuffer::new(FormatOptions {
        halign: HAlignment::Left,
        valign: VAlignment::Top,
    });
    keys.write("arrows/hjkl/drag move  u undo  r restart", None, None);
    keys.flush(&mut footer)?;

    let mut quit = TextBuffer::new(FormatOptions {
        halign: HAlignment::Right,
        valign: VAlignment::Bottom,
    });
    quit.write("q quit", None, None);
    quit.flush(&mut footer)
}

fn draw_game_over(canvas: &mut Canvas) -> TuiResult<()> {
    let (bg, fg) = board_colors();
    let mut overlay = canvas.get_draw_buffer(board_rectangle().centered(Bounds2D(28, 6)))?;
    overlay.modify(Modifier::SetBackgroundColor(fg))?;
    overlay.modify(Modifier::SetForegroundColor(bg))?;
    overlay.draw_border()?;
    overlay.fill(' ')?;
    let mut text = TextBuffer::new(FormatOptions::default());
    text.write("game over", None, None);
    text.write("u to undo, r to restart", None, None);
    text.flush(&mut overlay)?;
    overlay.modify(Modifier::Bold)
}

fn draw_too_small(canvas: &mut Canvas) -> TuiResult<()> {
    canvas.clear();
    let mut layer = canvas.get_layer();
    let mut text = TextBuffer::new(FormatOptions::default());
    text.write(
        &format!(
            "terminal too small, resize to at least {} x {} or press q to quit",
            MIN_WIDTH, MIN_HEIGHT
        ),
        None,
        None,
    );
    text.flush(&mut layer)
}

pub(crate) struct Tui48<R: Renderer, E: EventSource> {
    renderer: R,
    event_source: E,
    canvas: Canvas,
    board: Board,
    last_shift: Option<Shift>,
}

impl<R: Renderer, E: EventSource> Tui48<R, E> {
    pub(crate) fn new(board: Board, renderer: R, event_source: E) -> Result<Self> {
        let (width, height) = renderer.size_hint()?;
        Ok(Self {
            board,
            renderer,
            event_source,
            canvas: Canvas::new(width as usize, height as usize),
            last_shift: None,
        })
    }

    /// Run consumes the Tui48 instance and takes control of the terminal to begin gameplay.
    pub(crate) fn run(mut self) -> Result<()> {
        self.renderer.clear()?;
        loop {
            self.draw()?;
            self.renderer.render(&self.canvas)?;

            match self.event_source.next_event()? {
                Event::UserInput(UserInput::Quit) => break,
                Event::UserInput(input) => self.handle(input),
                Event::Resize => self.resize()?,
            }
        }
        log::info!(
            "quitting after {} moves, highest card {}",
            self.board.moves(),
            self.board.current().highest()
        );
        Ok(())
    }
}

impl<R: Renderer, E: EventSource> Tui48<R, E> {
    fn draw(&mut self) -> Result<()> {
        match draw_game(&self.board, self.last_shift.as_ref(), &mut self.canvas) {
            Err(TuiError::TerminalTooSmall(w, h)) => {
                log::warn!(
                    "canvas {:?} smaller than {} x {}",
                    self.canvas.dimensions(),
                    w,
                    h
                );
                draw_too_small(&mut self.canvas)?;
                Ok(())
            }
            result => Ok(result?),
        }
    }

    fn resize(&mut self) -> Result<()> {
        let (width, height) = self.renderer.size_hint()?;
        log::debug!("resized to {} x {}", width, height);
        self.canvas = Canvas::new(width as usize, height as usize);
        self.renderer.clear()?;
        Ok(())
    }

    fn handle(&mut self, input: UserInput) {
        match input {
            UserInput::Direction(d) => {
                if let Some(shift) = self.board.shift(d) {
                    log::trace!("{} merged {} pairs", shift.direction, shift.merges);
                    self.last_shift = Some(shift);
                }
            }
            UserInput::Undo => {
                if self.board.undo() {
                    self.last_shift = None;
                }
            }
            UserInput::Restart => {
                self.board.restart();
                self.last_shift = None;
            }
            UserInput::Quit => (),
        }
    }
}
