//! Interface factory
//!
//! This is the easiest way to create a driver instance. You can set the panel
//! orientation before connecting the display interface.
//!
//! ```rust,ignore
//! use ssd1305::{displays::ssd1305::Ssd1305_128_32, prelude::*, Builder};
//!
//! let mut disp: PagedMode<_, _> = Builder::new(Ssd1305_128_32 {})
//!     .with_orientation(Orientation::Mirrored)
//!     .connect(interface)
//!     .into();
//!
//! disp.reset(&mut rst, &mut delay).unwrap();
//! disp.init().unwrap();
//! disp.clear().unwrap();
//! ```

use display_interface::WriteOnlyDataCommand;

use crate::{display::DisplayVariant, orientation::Orientation, properties::DisplayProperties};

/// Builder struct. Driver options and interface are set using its methods.
#[derive(Clone, Copy)]
pub struct Builder<DV> {
    variant: DV,
    orientation: Orientation,
}

impl<DV: DisplayVariant> Builder<DV> {
    /// Create new builder with the default orientation
    pub fn new(variant: DV) -> Self {
        Self {
            variant,
            orientation: Orientation::default(),
        }
    }

    /// Set the panel orientation
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Finish the builder and use the given interface to communicate with the display
    pub fn connect<DI>(self, interface: DI) -> DisplayProperties<DV, DI>
    where
        DI: WriteOnlyDataCommand,
    {
        DisplayProperties::new(self.variant, interface, self.orientation)
    }
}
