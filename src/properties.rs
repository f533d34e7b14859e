//! Container to store and set display properties, and write bitmaps to the display

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};

use crate::{
    addressing::AddressWindow,
    bitmap::MonoBitmap,
    command::{Command, RAM_PAGES},
    display::{DisplayVariant, Geometry},
    error::{Error, Result},
    orientation::Orientation,
    transcode::PageBytes,
};

/// Display properties struct
///
/// Owns the interface and writes bitmaps through vertical addressing transfers. Every
/// write sends the complete addressing setup before its data, so a write that failed
/// half way leaves nothing behind that the next write depends on.
pub struct DisplayProperties<DV, DI> {
    _variant: DV,
    iface: DI,
    orientation: Orientation,
}

impl<DV, DI> DisplayProperties<DV, DI>
where
    DI: WriteOnlyDataCommand,
    DV: DisplayVariant,
{
    /// Create new DisplayProperties instance
    pub fn new(variant: DV, iface: DI, orientation: Orientation) -> DisplayProperties<DV, DI> {
        #[allow(clippy::let_unit_value)]
        let () = Geometry::<DV>::VALID;

        DisplayProperties {
            _variant: variant,
            iface,
            orientation,
        }
    }

    /// Release the display interface
    pub fn release(self) -> DI {
        self.iface
    }

    /// Send the module's power-on command list and release the entire-display-on override
    pub fn init(&mut self) -> Result<()> {
        DV::init_sequence(&mut self.iface)?;
        Command::AllOn(false).send(&mut self.iface)?;

        Ok(())
    }

    /// Send a single command
    pub fn send(&mut self, cmd: Command) -> core::result::Result<(), DisplayError> {
        cmd.send(&mut self.iface)
    }

    /// Write a bitmap covering the whole panel
    ///
    /// The bitmap must be exactly `WIDTH` x `HEIGHT` pixels.
    pub fn write_frame<B: MonoBitmap>(&mut self, bitmap: B) -> Result<()> {
        let window = AddressWindow::frame::<DV>(self.orientation);
        #[cfg(feature = "defmt")]
        defmt::trace!("write frame");
        self.write_bitmap(window, bitmap, (DV::WIDTH as u32, DV::HEIGHT as u32))
    }

    /// Write a bitmap to one RAM page
    ///
    /// The bitmap must be exactly `WIDTH` x 8 pixels and `page` must be below 8.
    pub fn write_page<B: MonoBitmap>(&mut self, bitmap: B, page: u8) -> Result<()> {
        let window = AddressWindow::page::<DV>(page, self.orientation)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("write page {}", page);
        self.write_bitmap(window, bitmap, (DV::WIDTH as u32, 8))
    }

    /// Write a bitmap to columns `start_col..=end_col` of one RAM page
    ///
    /// The bitmap must be exactly `end_col - start_col + 1` x 8 pixels.
    pub fn write_window<B: MonoBitmap>(
        &mut self,
        bitmap: B,
        page: u8,
        start_col: u8,
        end_col: u8,
    ) -> Result<()> {
        let window = AddressWindow::window::<DV>(page, start_col, end_col, self.orientation)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("write page {} columns {}..={}", page, start_col, end_col);
        let width = (end_col - start_col) as u32 + 1;
        self.write_bitmap(window, bitmap, (width, 8))
    }

    /// Zero all RAM pages, including the ones outside of the visible area
    pub fn clear(&mut self) -> Result<()> {
        let frame = AddressWindow::frame::<DV>(self.orientation);
        let window = AddressWindow {
            pages: (0, RAM_PAGES - 1),
            ..frame
        };
        self.set_window(&window)?;

        let mut zeros = core::iter::repeat(0u8).take(DV::WIDTH as usize * RAM_PAGES as usize);
        self.iface.send_data(DataFormat::U8Iter(&mut zeros))?;

        Ok(())
    }

    fn write_bitmap<B: MonoBitmap>(
        &mut self,
        window: AddressWindow,
        bitmap: B,
        expected: (u32, u32),
    ) -> Result<()> {
        let actual = bitmap.size();
        if actual != expected {
            return Err(Error::DimensionMismatch { expected, actual });
        }
        let mut bytes = PageBytes::new(bitmap, expected.0)?;

        self.set_window(&window)?;
        self.iface.send_data(DataFormat::U8Iter(&mut bytes))?;

        Ok(())
    }

    fn set_window(&mut self, window: &AddressWindow) -> Result<()> {
        for cmd in window.commands() {
            cmd.send(&mut self.iface)?;
        }

        Ok(())
    }

    /// Get display dimensions
    pub fn get_dimensions(&self) -> (u8, u8) {
        DV::dimensions()
    }

    /// Get the panel orientation
    pub fn get_orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the panel orientation used by subsequent writes. Content already in RAM is
    /// mirrored on the next write, which re-sends the segment mapping.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Turn the display on or off. The display can be drawn to and retains all
    /// of its memory even while off.
    pub fn display_on(&mut self, on: bool) -> Result<()> {
        Ok(Command::DisplayOn(on).send(&mut self.iface)?)
    }

    /// Set the display contrast
    pub fn set_contrast(&mut self, contrast: u8) -> Result<()> {
        Ok(Command::Contrast(contrast).send(&mut self.iface)?)
    }

    /// Invert the display, lit pixels become dark and the other way around
    pub fn invert(&mut self, invert: bool) -> Result<()> {
        Ok(Command::Invert(invert).send(&mut self.iface)?)
    }

    /// Light every pixel regardless of RAM content, or return to showing RAM
    pub fn all_on(&mut self, on: bool) -> Result<()> {
        Ok(Command::AllOn(on).send(&mut self.iface)?)
    }
}
