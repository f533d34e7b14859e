//! Display variant

use display_interface::{DisplayError, WriteOnlyDataCommand};

/// Panel geometry and power-on sequence of a specific module
///
/// `HEIGHT` must be a positive multiple of 8 no larger than the controller's 64 RAM rows
/// and `WIDTH` must be positive. Both are checked at compile time when the variant is used.
pub trait DisplayVariant {
    /// Visible width in pixels
    const WIDTH: u8;
    /// Visible height in pixels
    const HEIGHT: u8;
    /// RAM column shown in the leftmost visible segment
    const COLUMN_OFFSET: u8 = 0;

    /// Send the one-time, module specific power-on command list
    fn init_sequence<DI>(iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: WriteOnlyDataCommand;

    /// Get the panel's `(width, height)`
    fn dimensions() -> (u8, u8) {
        (Self::WIDTH, Self::HEIGHT)
    }

    /// Number of visible 8 pixel tall pages
    fn page_count() -> u8 {
        Self::HEIGHT / 8
    }
}

pub(crate) struct Geometry<DV>(core::marker::PhantomData<DV>);

impl<DV: DisplayVariant> Geometry<DV> {
    pub(crate) const VALID: () = assert!(
        DV::WIDTH > 0 && DV::HEIGHT > 0 && DV::HEIGHT % 8 == 0 && DV::HEIGHT <= 64,
        "panel height must be a positive multiple of 8, at most 64"
    );
}
