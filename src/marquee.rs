//! Scrolling text ticker
//!
//! Text is cut into fixed size chunks, each chunk is rendered into a one page strip
//! (two for the large font) below the previous one, and once the panel is full the
//! vertical offset is advanced row by row so the new line slides into view. Chunks that
//! continue on the next line end in a two-dot marker, chunks that continue the previous
//! line start with one.

use display_interface::WriteOnlyDataCommand;
use embedded_hal::delay::DelayNs;

use crate::{
    bitmap::MonoBitmap,
    command::RAM_PAGES,
    display::DisplayVariant,
    error::{Error, Param, Result},
    properties::DisplayProperties,
    scroll::Scroller,
};

/// Columns the text moves right to make room for the leading marker
const MARKER_INDENT: u32 = 4;
/// Row of the continuation markers within the first strip
const MARKER_ROW: u32 = 6;

/// Glyph height used by the marquee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontSize {
    /// 8 pixel tall font, one page per line
    Small,
    /// 16 pixel tall font, two pages per line
    Large,
}

impl FontSize {
    /// Line height in pixels
    pub const fn height(self) -> u8 {
        match self {
            FontSize::Small => 8,
            FontSize::Large => 16,
        }
    }

    /// Line height in pages
    pub const fn pages(self) -> u8 {
        self.height() / 8
    }
}

impl TryFrom<u8> for FontSize {
    type Error = Error;

    fn try_from(height: u8) -> Result<Self> {
        match height {
            8 => Ok(FontSize::Small),
            16 => Ok(FontSize::Large),
            _ => Err(Error::RangeViolation(Param::FontHeight)),
        }
    }
}

/// Renders one line of text into a bitmap
pub trait TextRenderer {
    /// Rendered line
    type Line: MonoBitmap;

    /// Render `text` left aligned into a bitmap as wide as the panel and exactly
    /// `font.height()` pixels tall
    fn render_line(&mut self, text: &str, font: FontSize) -> Self::Line;
}

/// Decides whether a running marquee should stop before its next chunk
pub trait MarqueeControl {
    /// Polled before each chunk is written
    fn should_stop(&mut self) -> bool;
}

impl<F: FnMut() -> bool> MarqueeControl for F {
    fn should_stop(&mut self) -> bool {
        self()
    }
}

/// Lets the marquee run to the end
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverStop;

impl MarqueeControl for NeverStop {
    fn should_stop(&mut self) -> bool {
        false
    }
}

/// Marquee configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MarqueeConfig {
    /// Characters per chunk. Zero is treated as one.
    pub chunk_chars: usize,
    /// Lines written before the marquee starts scrolling
    pub scroll_after_lines: u32,
    /// Wait after every one row scroll step
    pub step_delay_ms: u32,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            chunk_chars: 15,
            scroll_after_lines: 4,
            step_delay_ms: 50,
        }
    }
}

/// How a marquee run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MarqueeOutcome {
    /// All chunks were written and scrolled
    Completed {
        /// Number of chunks
        chunks: usize,
    },
    /// The control asked to stop
    Stopped {
        /// Chunks fully written and scrolled before stopping
        chunks_written: usize,
    },
}

/// Text marquee state
///
/// `text_line` counts the pages written so far. It keeps growing across calls so
/// consecutive texts continue below each other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Marquee {
    config: MarqueeConfig,
    text_line: u32,
}

impl Default for Marquee {
    fn default() -> Self {
        Self::new(MarqueeConfig::default())
    }
}

impl Marquee {
    /// Create a marquee starting on page 0
    pub const fn new(config: MarqueeConfig) -> Self {
        Self {
            config,
            text_line: 0,
        }
    }

    /// Marquee configuration
    pub fn config(&self) -> &MarqueeConfig {
        &self.config
    }

    /// Replace the configuration, keeping the current line
    pub fn set_config(&mut self, config: MarqueeConfig) {
        self.config = config;
    }

    /// Pages written so far
    pub fn text_line(&self) -> u32 {
        self.text_line
    }

    /// Start again on page 0, without talking to the display
    pub fn reset(&mut self) {
        self.text_line = 0;
    }

    /// Write `text` as a scrolling ticker
    ///
    /// Blocks until every chunk is written and scrolled into view, or until `control`
    /// asks to stop. `control` is only polled between chunks.
    #[allow(clippy::too_many_arguments)]
    pub fn scroll_text<DV, DI, R, D, C>(
        &mut self,
        props: &mut DisplayProperties<DV, DI>,
        scroller: &mut Scroller,
        renderer: &mut R,
        delay: &mut D,
        control: &mut C,
        text: &str,
        font: FontSize,
    ) -> Result<MarqueeOutcome>
    where
        DV: DisplayVariant,
        DI: WriteOnlyDataCommand,
        R: TextRenderer,
        D: DelayNs,
        C: MarqueeControl,
    {
        let chunk_chars = self.config.chunk_chars.max(1);
        let chunks = text.chars().count().div_ceil(chunk_chars);
        let expected = (DV::WIDTH as u32, font.height() as u32);

        for (index, chunk) in Chunks::new(text, chunk_chars).enumerate() {
            if control.should_stop() {
                #[cfg(feature = "defmt")]
                defmt::info!("marquee stopped after {} of {} chunks", index, chunks);
                return Ok(MarqueeOutcome::Stopped {
                    chunks_written: index,
                });
            }
            #[cfg(feature = "defmt")]
            defmt::debug!("marquee chunk {} on line {}", index, self.text_line);

            let line = renderer.render_line(chunk, font);
            let actual = line.size();
            if actual != expected {
                return Err(Error::DimensionMismatch { expected, actual });
            }

            let leading = index > 0;
            let strip = Strip {
                line: &line,
                width: expected.0,
                row: 0,
                indent: if leading { MARKER_INDENT } else { 0 },
                leading,
                trailing: index + 1 < chunks,
            };
            for row in 0..font.pages() {
                let page = (self.text_line.wrapping_add(row as u32) % RAM_PAGES as u32) as u8;
                props.write_page(
                    Strip {
                        row: row as u32,
                        ..strip
                    },
                    page,
                )?;
            }
            self.text_line = self.text_line.saturating_add(font.pages() as u32);

            if self.text_line > self.config.scroll_after_lines {
                for _ in 0..font.height() {
                    scroller.advance(props, 1)?;
                    delay.delay_ms(self.config.step_delay_ms);
                }
            }
        }

        Ok(MarqueeOutcome::Completed { chunks })
    }
}

/// Splits text into pieces of at most `size` characters
struct Chunks<'a> {
    rest: &'a str,
    size: usize,
}

impl<'a> Chunks<'a> {
    fn new(text: &'a str, size: usize) -> Self {
        Self { rest: text, size }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        let split = self
            .rest
            .char_indices()
            .nth(self.size)
            .map_or(self.rest.len(), |(i, _)| i);
        let (chunk, rest) = self.rest.split_at(split);
        self.rest = rest;
        Some(chunk)
    }
}

/// One page tall view of a rendered line, shifted by `indent` and decorated with
/// the continuation markers
struct Strip<'a, L> {
    line: &'a L,
    width: u32,
    row: u32,
    indent: u32,
    leading: bool,
    trailing: bool,
}

impl<L> Clone for Strip<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for Strip<'_, L> {}

impl<L: MonoBitmap> MonoBitmap for Strip<'_, L> {
    fn size(&self) -> (u32, u32) {
        (self.width, 8)
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= 8 {
            return false;
        }
        if self.row == 0 && y == MARKER_ROW {
            if self.leading && (x == 0 || x == 2) {
                return true;
            }
            if self.trailing && (x + 1 == self.width || x + 3 == self.width) {
                return true;
            }
        }
        x >= self.indent && self.line.pixel(x - self.indent, self.row * 8 + y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        displays::ssd1305::Ssd1305_128_32,
        mock::{MockDelay, MockInterface, Transfer},
        Orientation,
    };
    use std::{string::String, vec::Vec};

    /// Blank line with the top-left pixel of every character cell lit
    struct CellRenderer {
        width: u32,
        rendered: Vec<String>,
    }

    struct CellLine {
        width: u32,
        height: u32,
        chars: u32,
    }

    impl MonoBitmap for CellLine {
        fn size(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn pixel(&self, x: u32, y: u32) -> bool {
            (y == 0 || y == 8) && x % 8 == 0 && x / 8 < self.chars
        }
    }

    impl TextRenderer for CellRenderer {
        type Line = CellLine;

        fn render_line(&mut self, text: &str, font: FontSize) -> CellLine {
            self.rendered.push(text.into());
            CellLine {
                width: self.width,
                height: font.height() as u32,
                chars: text.chars().count() as u32,
            }
        }
    }

    fn renderer() -> CellRenderer {
        CellRenderer {
            width: 128,
            rendered: Vec::new(),
        }
    }

    fn props() -> DisplayProperties<Ssd1305_128_32, MockInterface> {
        DisplayProperties::new(Ssd1305_128_32 {}, MockInterface::new(), Orientation::Normal)
    }

    /// Undo the right-to-left column order of a transfer
    fn lit(page: &[u8], x: usize, y: u8) -> bool {
        page[page.len() - 1 - x] & (1 << y) != 0
    }

    #[test]
    fn chunks_split_on_characters() {
        let chunks: Vec<&str> = Chunks::new("äöüabc", 4).collect();
        assert_eq!(chunks, ["äöüa", "bc"]);
        assert_eq!(Chunks::new("", 4).count(), 0);
        assert_eq!(Chunks::new("abcd", 4).count(), 1);
    }

    #[test]
    fn font_size_from_height() {
        assert_eq!(FontSize::try_from(8), Ok(FontSize::Small));
        assert_eq!(FontSize::try_from(16), Ok(FontSize::Large));
        assert_eq!(
            FontSize::try_from(12),
            Err(Error::RangeViolation(Param::FontHeight))
        );
    }

    #[test]
    fn thirty_characters_make_two_marked_chunks() {
        let mut props = props();
        let mut scroller = Scroller::new();
        let mut marquee = Marquee::default();
        let mut renderer = renderer();
        let text: String = core::iter::repeat('A').take(30).collect();

        let outcome = marquee
            .scroll_text(
                &mut props,
                &mut scroller,
                &mut renderer,
                &mut MockDelay::default(),
                &mut NeverStop,
                &text,
                FontSize::Small,
            )
            .unwrap();
        assert_eq!(outcome, MarqueeOutcome::Completed { chunks: 2 });
        assert_eq!(renderer.rendered.len(), 2);
        assert!(renderer.rendered.iter().all(|c| c.chars().count() == 15));

        let data = props.release().data();
        assert_eq!(data.len(), 2);
        let (first, second) = (&data[0], &data[1]);

        // first chunk: trailing marker only, text not indented
        assert!(lit(first, 127, 6) && lit(first, 125, 6));
        assert!(!lit(first, 0, 6) && !lit(first, 2, 6));
        assert!(lit(first, 0, 0) && lit(first, 112, 0) && !lit(first, 120, 0));

        // second chunk: leading marker only, text indented by 4
        assert!(lit(second, 0, 6) && lit(second, 2, 6));
        assert!(!lit(second, 127, 6) && !lit(second, 125, 6));
        assert!(lit(second, 4, 0) && !lit(second, 0, 0));
    }

    #[test]
    fn small_font_fills_pages_then_scrolls() {
        let mut props = props();
        let mut scroller = Scroller::new();
        let mut marquee = Marquee::default();
        let mut delay = MockDelay::default();
        let text: String = core::iter::repeat('x').take(15 * 6).collect();

        marquee
            .scroll_text(
                &mut props,
                &mut scroller,
                &mut renderer(),
                &mut delay,
                &mut NeverStop,
                &text,
                FontSize::Small,
            )
            .unwrap();

        assert_eq!(marquee.text_line(), 6);
        // lines 5 and 6 each scroll one page, one row at a time
        assert_eq!(scroller.offset(), 16);
        assert_eq!(delay.waits_ms, [50; 16]);

        let iface = props.release();
        let pages: Vec<u8> = iface
            .commands()
            .windows(3)
            .filter(|w| w[0] == 0x22)
            .map(|w| w[1])
            .collect();
        assert_eq!(pages, [0, 1, 2, 3, 4, 5]);
        let offsets: Vec<u8> = iface
            .transfers
            .iter()
            .filter_map(|t| match t {
                Transfer::Commands(bytes) if bytes.len() == 1 && bytes[0] & 0xC0 == 0x40 => {
                    Some(bytes[0] - 0x40)
                }
                _ => None,
            })
            .collect();
        assert_eq!(offsets, (1..=16).collect::<Vec<u8>>());
    }

    #[test]
    fn large_font_uses_two_pages_per_line() {
        let mut props = props();
        let mut scroller = Scroller::new();
        let mut marquee = Marquee::new(MarqueeConfig {
            chunk_chars: 15,
            scroll_after_lines: 4,
            step_delay_ms: 10,
        });
        let mut delay = MockDelay::default();
        let text: String = core::iter::repeat('x').take(45).collect();

        let outcome = marquee
            .scroll_text(
                &mut props,
                &mut scroller,
                &mut renderer(),
                &mut delay,
                &mut NeverStop,
                &text,
                FontSize::Large,
            )
            .unwrap();

        assert_eq!(outcome, MarqueeOutcome::Completed { chunks: 3 });
        assert_eq!(marquee.text_line(), 6);
        assert_eq!(scroller.offset(), 16);
        assert_eq!(delay.waits_ms, [10; 16]);

        let iface = props.release();
        let data = iface.data();
        assert_eq!(data.len(), 6);
        // the lower half carries the second glyph row but no markers
        assert!(lit(&data[1], 0, 0));
        assert!(!lit(&data[1], 127, 6));
        assert!(lit(&data[0], 127, 6));
    }

    #[test]
    fn pages_wrap_around_ram() {
        let mut props = props();
        let mut scroller = Scroller::new();
        let mut marquee = Marquee::default();
        let text: String = core::iter::repeat('x').take(15 * 10).collect();

        marquee
            .scroll_text(
                &mut props,
                &mut scroller,
                &mut renderer(),
                &mut MockDelay::default(),
                &mut NeverStop,
                &text,
                FontSize::Small,
            )
            .unwrap();

        let cmds = props.release().commands();
        let pages: Vec<u8> = cmds
            .windows(3)
            .filter(|w| w[0] == 0x22)
            .map(|w| w[1])
            .collect();
        assert_eq!(pages, [0, 1, 2, 3, 4, 5, 6, 7, 0, 1]);
        assert_eq!(scroller.offset(), (6 * 8) % 64);
    }

    #[test]
    fn state_carries_over_between_calls() {
        let mut props = props();
        let mut scroller = Scroller::new();
        let mut marquee = Marquee::default();
        for _ in 0..2 {
            marquee
                .scroll_text(
                    &mut props,
                    &mut scroller,
                    &mut renderer(),
                    &mut MockDelay::default(),
                    &mut NeverStop,
                    "short",
                    FontSize::Small,
                )
                .unwrap();
        }

        assert_eq!(marquee.text_line(), 2);
        let data = props.release().data();
        // single chunk texts have no markers at all
        assert!(data.iter().all(|page| !lit(page, 0, 6) && !lit(page, 127, 6)));
    }

    #[test]
    fn control_stops_between_chunks() {
        let mut props = props();
        let mut scroller = Scroller::new();
        let mut marquee = Marquee::default();
        let mut polls = 0;
        let mut stop_after_two = || {
            polls += 1;
            polls > 2
        };
        let text: String = core::iter::repeat('x').take(15 * 5).collect();

        let outcome = marquee
            .scroll_text(
                &mut props,
                &mut scroller,
                &mut renderer(),
                &mut MockDelay::default(),
                &mut stop_after_two,
                &text,
                FontSize::Small,
            )
            .unwrap();

        assert_eq!(outcome, MarqueeOutcome::Stopped { chunks_written: 2 });
        assert_eq!(marquee.text_line(), 2);
        assert_eq!(props.release().data_transfers(), [128, 128]);
    }

    #[test]
    fn line_counter_saturates() {
        let mut props = props();
        let mut scroller = Scroller::new();
        let mut marquee = Marquee::default();
        marquee.text_line = u32::MAX - 1;

        marquee
            .scroll_text(
                &mut props,
                &mut scroller,
                &mut renderer(),
                &mut MockDelay::default(),
                &mut NeverStop,
                "tick",
                FontSize::Large,
            )
            .unwrap();

        assert_eq!(marquee.text_line(), u32::MAX);
        assert_eq!(scroller.offset(), 16);
        let pages: Vec<u8> = props
            .release()
            .commands()
            .windows(3)
            .filter(|w| w[0] == 0x22)
            .map(|w| w[1])
            .collect();
        assert_eq!(pages, [6, 7]);
    }

    #[test]
    fn wrong_line_height_is_rejected() {
        struct Tall;
        impl TextRenderer for Tall {
            type Line = CellLine;
            fn render_line(&mut self, _: &str, _: FontSize) -> CellLine {
                CellLine {
                    width: 128,
                    height: 16,
                    chars: 0,
                }
            }
        }

        let mut props = props();
        let result = Marquee::default().scroll_text(
            &mut props,
            &mut Scroller::new(),
            &mut Tall,
            &mut MockDelay::default(),
            &mut NeverStop,
            "abc",
            FontSize::Small,
        );

        assert_eq!(
            result,
            Err(Error::DimensionMismatch {
                expected: (128, 8),
                actual: (128, 16)
            })
        );
        assert!(props.release().transfers.is_empty());
    }
}
