//! Panel orientation

/// Horizontal mapping between logical columns and the panel's segments
///
/// Transfers always walk logical columns from right to left, so `Normal` keeps the
/// controller's segment order and `Mirrored` flips the picture left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// RAM column 0 drives segment 0
    #[default]
    Normal,
    /// RAM column 0 drives the last segment
    Mirrored,
}

impl Orientation {
    pub(crate) fn segment_remap(self) -> bool {
        matches!(self, Orientation::Mirrored)
    }
}
