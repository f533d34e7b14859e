//! Unbuffered display mode writing straight to the controller's pages
//!
//! Every write goes out immediately through a vertical addressing transfer, so no frame
//! buffer is kept on the host. The mode also owns the scroll and marquee state of the
//! display.
//!
//! ```rust,ignore
//! use ssd1305::{displays::ssd1305::Ssd1305_128_32, prelude::*, Builder};
//!
//! let mut disp: PagedMode<_, _> = Builder::new(Ssd1305_128_32 {}).connect(interface).into();
//! disp.reset(&mut rst, &mut delay).unwrap();
//! disp.init().unwrap();
//! disp.clear().unwrap();
//!
//! let mut renderer = MonoTextRenderer::<128>::default();
//! disp.scroll_text(&mut renderer, &mut delay, "Hello from the marquee!", FontSize::Small)
//!     .unwrap();
//! ```

use display_interface::WriteOnlyDataCommand;
use embedded_hal::{delay::DelayNs, digital::OutputPin};

use crate::{
    bitmap::{MonoBitmap, Page, Tile},
    display::DisplayVariant,
    error::{Error, Param, Result},
    marquee::{
        FontSize, Marquee, MarqueeConfig, MarqueeControl, MarqueeOutcome, NeverStop, TextRenderer,
    },
    mode::displaymode::DisplayModeTrait,
    orientation::Orientation,
    properties::DisplayProperties,
    scroll::{HwScroll, Scroller},
};

/// Paged mode handler
pub struct PagedMode<DV, DI> {
    properties: DisplayProperties<DV, DI>,
    scroller: Scroller,
    marquee: Marquee,
}

impl<DV, DI> DisplayModeTrait<DV, DI> for PagedMode<DV, DI>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    /// Create new PagedMode instance
    fn new(properties: DisplayProperties<DV, DI>) -> Self {
        PagedMode {
            properties,
            scroller: Scroller::new(),
            marquee: Marquee::default(),
        }
    }

    /// Release all resources used by PagedMode
    fn release(self) -> DisplayProperties<DV, DI> {
        self.properties
    }
}

impl<DV, DI> PagedMode<DV, DI>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    /// Replace the marquee configuration. Keeps the marquee's current line.
    pub fn with_marquee_config(mut self, config: MarqueeConfig) -> Self {
        self.marquee.set_config(config);
        self
    }

    /// Reset display
    pub fn reset<RST, DELAY, PinE>(
        &mut self,
        rst: &mut RST,
        delay: &mut DELAY,
    ) -> core::result::Result<(), PinE>
    where
        RST: OutputPin<Error = PinE>,
        DELAY: DelayNs,
    {
        rst.set_high()?;
        delay.delay_ms(1);
        rst.set_low()?;
        delay.delay_ms(10);
        rst.set_high()
    }

    /// Send the power-on command list and start scrolling and the marquee over from the
    /// top. RAM content is left as it is, see [`PagedMode::clear`].
    pub fn init(&mut self) -> Result<()> {
        self.reset_scroll_state();
        self.properties.init()
    }

    /// Forget the vertical offset and marquee line without talking to the display
    pub fn reset_scroll_state(&mut self) {
        self.scroller.reset();
        self.marquee.reset();
    }

    /// Zero the whole display RAM
    pub fn clear(&mut self) -> Result<()> {
        self.properties.clear()
    }

    /// Write a bitmap covering the whole panel
    pub fn write_frame<B: MonoBitmap>(&mut self, bitmap: B) -> Result<()> {
        self.properties.write_frame(bitmap)
    }

    /// Write a full width, 8 pixel tall bitmap to RAM page `page`
    pub fn write_page<B: MonoBitmap>(&mut self, bitmap: B, page: u8) -> Result<()> {
        self.properties.write_page(bitmap, page)
    }

    /// Write an 8 pixel tall bitmap to columns `start_col..=end_col` of RAM page `page`
    pub fn write_window<B: MonoBitmap>(
        &mut self,
        bitmap: B,
        page: u8,
        start_col: u8,
        end_col: u8,
    ) -> Result<()> {
        self.properties.write_window(bitmap, page, start_col, end_col)
    }

    /// Draws a page to the screen, at the provided address and column offset
    pub fn draw_page<const W: usize>(&mut self, addr: u8, col: u8, page: &Page<W>) -> Result<()> {
        if W == 0 || col as usize + W > DV::WIDTH as usize {
            return Err(Error::RangeViolation(Param::Column));
        }
        let end_col = col + (W - 1) as u8;
        self.properties.write_window(page, addr, col, end_col)
    }

    /// Draws a tile to screen
    pub fn draw_tile<const W: usize, const P: usize>(&mut self, tile: &Tile<W, P>) -> Result<()> {
        for (addr, page) in tile.pages.iter().enumerate() {
            let addr = u8::try_from(addr)
                .ok()
                .and_then(|addr| addr.checked_add(tile.page_offset))
                .ok_or(Error::RangeViolation(Param::Page))?;
            self.draw_page(addr, tile.col_offset, page)?;
        }
        Ok(())
    }

    /// Show RAM row `offset` (`0..=63`) at the top of the panel
    pub fn set_vertical_offset(&mut self, offset: u8) -> Result<()> {
        self.scroller.set_absolute(&mut self.properties, offset)
    }

    /// Move the content up by `step` rows, wrapping around the 64 RAM rows
    pub fn scroll_down(&mut self, step: u8) -> Result<()> {
        self.scroller.advance(&mut self.properties, step)
    }

    /// RAM row currently shown at the top of the panel
    pub fn vertical_offset(&self) -> u8 {
        self.scroller.offset()
    }

    /// Configure and start a continuous hardware scroll
    pub fn enable_hw_scroll(&mut self, scroll: &HwScroll) -> Result<()> {
        self.scroller.enable_hw_scroll(&mut self.properties, scroll)
    }

    /// Stop the hardware scroll
    pub fn disable_hw_scroll(&mut self) -> Result<()> {
        self.scroller.disable_hw_scroll(&mut self.properties)
    }

    /// Set the fixed and scrolling rows used by vertical hardware scrolls
    pub fn set_vertical_scroll_area(&mut self, fixed_rows: u8, scroll_rows: u8) -> Result<()> {
        self.scroller
            .set_vertical_scroll_area(&mut self.properties, fixed_rows, scroll_rows)
    }

    /// Write `text` as a scrolling ticker, blocking until it has been scrolled into view
    pub fn scroll_text<R, D>(
        &mut self,
        renderer: &mut R,
        delay: &mut D,
        text: &str,
        font: FontSize,
    ) -> Result<MarqueeOutcome>
    where
        R: TextRenderer,
        D: DelayNs,
    {
        self.scroll_text_with(renderer, delay, &mut NeverStop, text, font)
    }

    /// Like [`PagedMode::scroll_text`], polling `control` before every chunk
    pub fn scroll_text_with<R, D, C>(
        &mut self,
        renderer: &mut R,
        delay: &mut D,
        control: &mut C,
        text: &str,
        font: FontSize,
    ) -> Result<MarqueeOutcome>
    where
        R: TextRenderer,
        D: DelayNs,
        C: MarqueeControl,
    {
        self.marquee.scroll_text(
            &mut self.properties,
            &mut self.scroller,
            renderer,
            delay,
            control,
            text,
            font,
        )
    }

    /// Scroll state
    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    /// Marquee state
    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }

    /// Get display dimensions
    pub fn get_dimensions(&self) -> (u8, u8) {
        self.properties.get_dimensions()
    }

    /// Get the panel orientation
    pub fn get_orientation(&self) -> Orientation {
        self.properties.get_orientation()
    }

    /// Set the panel orientation used by subsequent writes
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.properties.set_orientation(orientation)
    }

    /// Turn the display on or off. The display can be drawn to and retains all
    /// of its memory even while off.
    pub fn display_on(&mut self, on: bool) -> Result<()> {
        self.properties.display_on(on)
    }

    /// Set the display contrast
    pub fn set_contrast(&mut self, contrast: u8) -> Result<()> {
        self.properties.set_contrast(contrast)
    }

    /// Invert the display
    pub fn invert(&mut self, invert: bool) -> Result<()> {
        self.properties.invert(invert)
    }

    /// Light every pixel regardless of RAM content, or return to showing RAM
    pub fn all_on(&mut self, on: bool) -> Result<()> {
        self.properties.all_on(on)
    }
}
