use std::collections::HashMap;
use std::sync::OnceLock;

use palette::rgb::Rgb as PaletteRgb;
use palette::stimulus::FromStimulus;
use palette::{FromColor, Lch, Srgb};

use crate::engine::round::Card;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Rgb {
    color: PaletteRgb,
}

impl Rgb {
    pub(crate) fn new(r: u8, g: u8, b: u8) -> Self {
        Self {
            color: PaletteRgb::new(
                f32::from_stimulus(r),
                f32::from_stimulus(g),
                f32::from_stimulus(b),
            ),
        }
    }

    #[inline(always)]
    pub(crate) fn r(&self) -> u8 {
        u8::from_stimulus(self.color.red)
    }

    #[inline(always)]
    pub(crate) fn g(&self) -> u8 {
        u8::from_stimulus(self.color.green)
    }

    #[inline(always)]
    pub(crate) fn b(&self) -> u8 {
        u8::from_stimulus(self.color.blue)
    }

    /// The same hue and chroma at the given perceptual lightness, 0.0 being black and 1.0 white.
    pub(crate) fn with_lightness(&self, lightness: f32) -> Rgb {
        let lightness = lightness.clamp(0.0, 1.0);
        let mut lch: Lch = Lch::from_color(self.color);
        lch.l = lightness * 100.0;
        Rgb {
            color: Srgb::from_color(lch),
        }
    }

    fn from_lch(lch: Lch) -> Self {
        let srgb: Srgb = Srgb::from_color(lch);
        let srgb = srgb.into_format::<u8>();
        Rgb::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl From<Rgb> for crossterm::style::Color {
    fn from(f: Rgb) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: f.r(),
            g: f.g(),
            b: f.b(),
        }
    }
}

/// Background and foreground colors of the board frame.
pub(crate) fn board_colors() -> (Rgb, Rgb) {
    (Rgb::new(60, 50, 45), Rgb::new(190, 175, 160))
}

/// Colors of empty slots.
pub(crate) fn slot_colors() -> (Rgb, Rgb) {
    (Rgb::new(90, 80, 72), Rgb::new(90, 80, 72))
}

struct Colors {
    card_colors: HashMap<Card, (Rgb, Rgb)>,
}

static DEFAULT_COLORS: OnceLock<Colors> = OnceLock::new();

fn default_colors() -> &'static Colors {
    DEFAULT_COLORS.get_or_init(|| {
        let fg_hue = 28.0 + 180.0;
        Colors {
            card_colors: HashMap::from_iter((1..12).map(|i| {
                (
                    2u32.pow(i),
                    (
                        Rgb::from_lch(Lch::new(80.0, 90.0, i as f32 * 360.0 / 11.0)),
                        Rgb::from_lch(Lch::new(20.0, 50.0, fg_hue)),
                    ),
                )
            })),
        }
    })
}

/// Background and foreground colors of a card. Cards past 2048 share one color pair.
#[inline(always)]
pub(crate) fn card_colors(card: Card) -> (Rgb, Rgb) {
    default_colors()
        .card_colors
        .get(&card)
        .copied()
        .unwrap_or((Rgb::new(30, 30, 30), Rgb::new(255, 255, 255)))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rgb_roundtrips_channels() {
        let c = Rgb::new(12, 200, 255);
        assert_eq!((c.r(), c.g(), c.b()), (12, 200, 255));
    }

    #[test]
    fn lightness_extremes() {
        let gray = Rgb::new(128, 128, 128);
        let black = gray.with_lightness(0.0);
        assert!(black.r() < 5 && black.g() < 5 && black.b() < 5);

        let sum = |c: Rgb| c.r() as u32 + c.g() as u32 + c.b() as u32;
        let red = Rgb::new(200, 40, 40);
        assert!(sum(red.with_lightness(0.2)) < sum(red.with_lightness(0.8)));
    }

    #[test]
    fn every_card_up_to_2048_has_distinct_background() {
        let backgrounds: Vec<_> = (1..12)
            .map(|i| card_colors(2u32.pow(i)).0)
            .map(|c| (c.r(), c.g(), c.b()))
            .collect();
        for (i, a) in backgrounds.iter().enumerate() {
            for b in backgrounds.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(card_colors(4096), card_colors(8192));
    }
}
