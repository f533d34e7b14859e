//! Abstraction of different operating modes

use crate::properties::DisplayProperties;

/// Trait with core functionality for display mode switching
pub trait DisplayModeTrait<DV, DI> {
    /// Allocate all required data and initialise display for mode
    fn new(properties: DisplayProperties<DV, DI>) -> Self;

    /// Release resources for reuse with different mode
    fn release(self) -> DisplayProperties<DV, DI>;
}
