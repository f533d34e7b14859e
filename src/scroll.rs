//! Vertical offset and hardware scrolling
//!
//! Two independent ways of moving content are supported. Manual scrolling changes the
//! RAM row shown at the top of the panel (the display start line), which wraps around
//! the controller's 64 RAM rows. Hardware scrolling hands a continuous horizontal, or
//! diagonal, scroll to the controller's own timer. Don't mix the two without disabling
//! the hardware scroll first.

use display_interface::WriteOnlyDataCommand;

use crate::{
    command::{Command, HScrollDir, RAM_PAGES, RAM_ROWS},
    display::DisplayVariant,
    error::{Error, Param, Result},
    properties::DisplayProperties,
};

/// Largest hardware scroll interval code
pub const MAX_SCROLL_SPEED: u8 = 6;
/// Largest horizontal step of a vertical and horizontal hardware scroll
pub const MAX_DIAGONAL_STEP: u8 = 4;
/// Largest vertical step of a vertical and horizontal hardware scroll
pub const MAX_VERTICAL_STEP: u8 = RAM_ROWS - 1;

/// Direction of a hardware scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// Horizontal, to the left
    Left,
    /// Horizontal, to the right
    Right,
    /// Vertical by `vertical` rows per step, and to the left
    VerticalLeft {
        /// Rows per step
        vertical: u8,
    },
    /// Vertical by `vertical` rows per step, and to the right
    VerticalRight {
        /// Rows per step
        vertical: u8,
    },
}

/// Continuous hardware scroll setup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HwScroll {
    /// Scroll direction
    pub direction: ScrollDirection,
    /// Horizontal columns per step
    pub amount: u8,
    /// Interval code between steps, `0..=6`
    pub speed: u8,
    /// First scrolled RAM page
    pub start_page: u8,
    /// Last scrolled RAM page
    pub end_page: u8,
}

impl HwScroll {
    const fn new(direction: ScrollDirection, amount: u8, speed: u8) -> Self {
        Self {
            direction,
            amount,
            speed,
            start_page: 0,
            end_page: RAM_PAGES - 1,
        }
    }

    /// Scroll all pages to the left by `amount` columns per step
    pub const fn left(amount: u8, speed: u8) -> Self {
        Self::new(ScrollDirection::Left, amount, speed)
    }

    /// Scroll all pages to the right by `amount` columns per step
    pub const fn right(amount: u8, speed: u8) -> Self {
        Self::new(ScrollDirection::Right, amount, speed)
    }

    /// Scroll up by `vertical` rows and left by `horizontal` columns per step
    pub const fn vertical_left(horizontal: u8, vertical: u8, speed: u8) -> Self {
        Self::new(ScrollDirection::VerticalLeft { vertical }, horizontal, speed)
    }

    /// Scroll up by `vertical` rows and right by `horizontal` columns per step
    pub const fn vertical_right(horizontal: u8, vertical: u8, speed: u8) -> Self {
        Self::new(ScrollDirection::VerticalRight { vertical }, horizontal, speed)
    }

    /// Restrict the horizontal movement to RAM pages `start..=end`
    ///
    /// Legacy firmware scrolled pages `0..=3` to the left and `1..=7` diagonally, use
    /// `with_pages(0, 3)` or `with_pages(1, 7)` to get the same picture.
    pub const fn with_pages(self, start: u8, end: u8) -> Self {
        Self {
            start_page: start,
            end_page: end,
            ..self
        }
    }

    /// Check the parameters and build the setup command
    pub fn command(&self) -> Result<Command> {
        if self.speed > MAX_SCROLL_SPEED {
            return Err(Error::RangeViolation(Param::ScrollSpeed));
        }
        if self.start_page > self.end_page || self.end_page >= RAM_PAGES {
            return Err(Error::RangeViolation(Param::ScrollPages));
        }

        let (dir, vertical) = match self.direction {
            ScrollDirection::Left => {
                return Ok(Command::HScrollSetup(
                    HScrollDir::Left,
                    self.amount,
                    self.start_page,
                    self.speed,
                    self.end_page,
                ))
            }
            ScrollDirection::Right => {
                return Ok(Command::HScrollSetup(
                    HScrollDir::Right,
                    self.amount,
                    self.start_page,
                    self.speed,
                    self.end_page,
                ))
            }
            ScrollDirection::VerticalLeft { vertical } => (HScrollDir::Left, vertical),
            ScrollDirection::VerticalRight { vertical } => (HScrollDir::Right, vertical),
        };

        if self.amount > MAX_DIAGONAL_STEP {
            return Err(Error::RangeViolation(Param::ScrollStep));
        }
        if vertical > MAX_VERTICAL_STEP {
            return Err(Error::RangeViolation(Param::VerticalStep));
        }

        Ok(Command::VhScrollSetup(
            dir,
            self.amount,
            self.start_page,
            self.speed,
            self.end_page,
            vertical,
        ))
    }
}

/// Scroll state of one display
///
/// Holds the cumulative vertical offset, which lives as long as the driver and is
/// only reset by re-initialising the display or calling [`Scroller::reset`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scroller {
    vert_offset: u8,
    hw_active: bool,
}

impl Scroller {
    /// Start at offset 0 with hardware scrolling inactive
    pub const fn new() -> Self {
        Self {
            vert_offset: 0,
            hw_active: false,
        }
    }

    /// RAM row currently shown at the top of the panel
    pub fn offset(&self) -> u8 {
        self.vert_offset
    }

    /// Whether a hardware scroll was activated and not disabled since
    pub fn hw_scroll_active(&self) -> bool {
        self.hw_active
    }

    /// Forget the offset and hardware scroll state, without talking to the display
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Show RAM row `offset` (`0..=63`) at the top of the panel
    pub fn set_absolute<DV, DI>(
        &mut self,
        props: &mut DisplayProperties<DV, DI>,
        offset: u8,
    ) -> Result<()>
    where
        DV: DisplayVariant,
        DI: WriteOnlyDataCommand,
    {
        if offset >= RAM_ROWS {
            return Err(Error::RangeViolation(Param::Offset));
        }
        self.vert_offset = offset;
        self.emit_offset(props)
    }

    /// Move the content up by `step` rows, wrapping around the 64 RAM rows
    pub fn advance<DV, DI>(&mut self, props: &mut DisplayProperties<DV, DI>, step: u8) -> Result<()>
    where
        DV: DisplayVariant,
        DI: WriteOnlyDataCommand,
    {
        self.vert_offset = ((self.vert_offset as u16 + step as u16) % RAM_ROWS as u16) as u8;
        self.emit_offset(props)
    }

    fn emit_offset<DV, DI>(&mut self, props: &mut DisplayProperties<DV, DI>) -> Result<()>
    where
        DV: DisplayVariant,
        DI: WriteOnlyDataCommand,
    {
        #[cfg(feature = "defmt")]
        defmt::debug!("vertical offset {}", self.vert_offset);
        props.send(Command::StartLine(self.vert_offset))?;
        Ok(())
    }

    /// Configure and start a continuous hardware scroll
    pub fn enable_hw_scroll<DV, DI>(
        &mut self,
        props: &mut DisplayProperties<DV, DI>,
        scroll: &HwScroll,
    ) -> Result<()>
    where
        DV: DisplayVariant,
        DI: WriteOnlyDataCommand,
    {
        let setup = scroll.command()?;
        #[cfg(feature = "defmt")]
        defmt::debug!("hardware scroll {}", scroll);
        props.send(setup)?;
        props.send(Command::Scroll(true))?;
        self.hw_active = true;
        Ok(())
    }

    /// Stop the hardware scroll
    pub fn disable_hw_scroll<DV, DI>(&mut self, props: &mut DisplayProperties<DV, DI>) -> Result<()>
    where
        DV: DisplayVariant,
        DI: WriteOnlyDataCommand,
    {
        props.send(Command::Scroll(false))?;
        self.hw_active = false;
        Ok(())
    }

    /// Keep the top `fixed_rows` (`0..=63`) in place and scroll the next `scroll_rows`
    /// (`0..=127`) rows during a vertical hardware scroll
    pub fn set_vertical_scroll_area<DV, DI>(
        &mut self,
        props: &mut DisplayProperties<DV, DI>,
        fixed_rows: u8,
        scroll_rows: u8,
    ) -> Result<()>
    where
        DV: DisplayVariant,
        DI: WriteOnlyDataCommand,
    {
        if fixed_rows >= RAM_ROWS || scroll_rows > 127 {
            return Err(Error::RangeViolation(Param::ScrollArea));
        }
        props.send(Command::VerticalScrollArea(fixed_rows, scroll_rows))?;
        Ok(())
    }
}
