//! Addressing window setup for vertical addressing transfers

use crate::{
    command::{AddrMode, Command, RAM_PAGES},
    display::DisplayVariant,
    error::{Error, Param, Result},
    orientation::Orientation,
};

/// RAM rectangle a transfer lands in, as sent to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    /// First and last RAM column
    pub columns: (u8, u8),
    /// First and last RAM page
    pub pages: (u8, u8),
    /// Segment mapping sent with the window
    pub orientation: Orientation,
}

impl AddressWindow {
    /// The whole visible panel
    pub fn frame<DV: DisplayVariant>(orientation: Orientation) -> Self {
        Self {
            columns: (ram_column::<DV>(DV::WIDTH - 1), ram_column::<DV>(0)),
            pages: (0, DV::page_count() - 1),
            orientation,
        }
    }

    /// One page, all visible columns
    pub fn page<DV: DisplayVariant>(page: u8, orientation: Orientation) -> Result<Self> {
        Self::window::<DV>(page, 0, DV::WIDTH - 1, orientation)
    }

    /// Columns `start_col..=end_col` of one page
    ///
    /// `page` may be any of the controller's 8 RAM pages, including ones outside the
    /// visible area.
    pub fn window<DV: DisplayVariant>(
        page: u8,
        start_col: u8,
        end_col: u8,
        orientation: Orientation,
    ) -> Result<Self> {
        if page >= RAM_PAGES {
            return Err(Error::RangeViolation(Param::Page));
        }
        if start_col >= DV::WIDTH || end_col >= DV::WIDTH {
            return Err(Error::RangeViolation(Param::Column));
        }
        if start_col > end_col {
            return Err(Error::RangeViolation(Param::Window));
        }

        Ok(Self {
            columns: (ram_column::<DV>(end_col), ram_column::<DV>(start_col)),
            pages: (page, page),
            orientation,
        })
    }

    /// Commands selecting vertical addressing mode and this window
    pub fn commands(&self) -> [Command; 4] {
        [
            Command::AddressMode(AddrMode::Vertical),
            Command::ColumnAddress(self.columns.0, self.columns.1),
            Command::PageAddress(self.pages.0, self.pages.1),
            Command::SegmentRemap(self.orientation.segment_remap()),
        ]
    }
}

/// Transfers walk logical columns right to left, so logical column `col` lands in RAM
/// column `WIDTH - 1 - col`. Results past 255 wrap around.
fn ram_column<DV: DisplayVariant>(col: u8) -> u8 {
    (DV::WIDTH - 1 - col).wrapping_add(DV::COLUMN_OFFSET)
}
