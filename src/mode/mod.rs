//! Operating modes

pub mod displaymode;
pub mod paged;

pub use self::paged::PagedMode;

use display_interface::WriteOnlyDataCommand;

use crate::{display::DisplayVariant, properties::DisplayProperties};

use self::displaymode::DisplayModeTrait;

impl<DV, DI> From<DisplayProperties<DV, DI>> for PagedMode<DV, DI>
where
    DV: DisplayVariant,
    DI: WriteOnlyDataCommand,
{
    fn from(properties: DisplayProperties<DV, DI>) -> Self {
        PagedMode::new(properties)
    }
}
