//! Marquee text rendering with [embedded-graphics] mono fonts
//!
//! [embedded-graphics]: https://docs.rs/embedded-graphics

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_5X8, FONT_8X13},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::{
    bitmap::{MonoBitmap, Tile},
    marquee::{FontSize, TextRenderer},
};

/// Renders marquee lines with one mono font per [`FontSize`]
///
/// `W` is the panel width. Fonts taller than the line height are cut off at the bottom.
pub struct MonoTextRenderer<'a, const W: usize> {
    small: &'a MonoFont<'a>,
    large: &'a MonoFont<'a>,
}

impl<const W: usize> Default for MonoTextRenderer<'static, W> {
    fn default() -> Self {
        Self::new(&FONT_5X8, &FONT_8X13)
    }
}

impl<'a, const W: usize> MonoTextRenderer<'a, W> {
    /// Use `small` for 8 pixel lines and `large` for 16 pixel lines
    pub fn new(small: &'a MonoFont<'a>, large: &'a MonoFont<'a>) -> Self {
        Self { small, large }
    }
}

impl<const W: usize> TextRenderer for MonoTextRenderer<'_, W> {
    type Line = TextLine<W>;

    fn render_line(&mut self, text: &str, font: FontSize) -> TextLine<W> {
        let mono = match font {
            FontSize::Small => self.small,
            FontSize::Large => self.large,
        };
        let mut tile = Tile::new(0, 0);
        let style = MonoTextStyle::new(mono, BinaryColor::On);
        Text::with_baseline(text, Point::zero(), style, Baseline::Top)
            .draw(&mut tile)
            .unwrap_or_else(|e| match e {});

        TextLine {
            tile,
            height: font.height() as u32,
        }
    }
}

/// One rendered line, `W` pixels wide and one or two pages tall
#[derive(Debug, Clone)]
pub struct TextLine<const W: usize> {
    tile: Tile<W, 2>,
    height: u32,
}

impl<const W: usize> MonoBitmap for TextLine<W> {
    fn size(&self) -> (u32, u32) {
        (W as u32, self.height)
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        y < self.height && self.tile.pixel(x, y)
    }
}
