//! Driver error type

use core::fmt;

use display_interface::DisplayError;

/// Parameter that was outside of its accepted range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Param {
    /// RAM page address, `0..8`
    Page,
    /// Column address, `0..WIDTH`
    Column,
    /// Window bounds, `start_col <= end_col`
    Window,
    /// Vertical display offset, `0..=63`
    Offset,
    /// Hardware scroll interval code, `0..=6`
    ScrollSpeed,
    /// Horizontal step of a vertical+horizontal hardware scroll, `0..=4`
    ScrollStep,
    /// Vertical step of a vertical+horizontal hardware scroll, `0..=63`
    VerticalStep,
    /// Hardware scroll page range
    ScrollPages,
    /// Vertical scroll area rows
    ScrollArea,
    /// Glyph height, 8 or 16
    FontHeight,
}

/// Errors returned by the driver
///
/// Validation errors are raised before any byte reaches the interface. A
/// `TransportFailure` can happen in the middle of a command and data sequence, in
/// which case the controller's addressing state is undefined until the next
/// write, which always re-sends the full addressing setup.
#[derive(Debug, Clone)]
pub enum Error {
    /// Bitmap shape does not exactly match the target rectangle, `(width, height)`
    DimensionMismatch {
        /// Size the target expects
        expected: (u32, u32),
        /// Size of the bitmap that was passed
        actual: (u32, u32),
    },
    /// A numeric parameter is outside of its documented range
    RangeViolation(Param),
    /// The display interface failed to send a command or data
    TransportFailure(DisplayError),
}

/// Driver result
pub type Result<T> = core::result::Result<T, Error>;

/// Interface errors compare equal when they are the same kind of failure
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Error::DimensionMismatch { expected, actual },
                Error::DimensionMismatch {
                    expected: other_expected,
                    actual: other_actual,
                },
            ) => expected == other_expected && actual == other_actual,
            (Error::RangeViolation(a), Error::RangeViolation(b)) => a == b,
            (Error::TransportFailure(a), Error::TransportFailure(b)) => {
                core::mem::discriminant(a) == core::mem::discriminant(b)
            }
            _ => false,
        }
    }
}

impl Eq for Error {}

impl From<DisplayError> for Error {
    fn from(value: DisplayError) -> Self {
        Error::TransportFailure(value)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionMismatch { expected, actual } => write!(
                f,
                "bitmap is {}x{}, target is {}x{}",
                actual.0, actual.1, expected.0, expected.1
            ),
            Error::RangeViolation(param) => write!(f, "{:?} out of range", param),
            Error::TransportFailure(e) => write!(f, "display interface error: {:?}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::DimensionMismatch { expected, actual } => defmt::write!(
                f,
                "DimensionMismatch({}x{} != {}x{})",
                actual.0,
                actual.1,
                expected.0,
                expected.1
            ),
            Error::RangeViolation(param) => defmt::write!(f, "RangeViolation({})", param),
            Error::TransportFailure(e) => {
                defmt::write!(f, "TransportFailure({})", defmt::Debug2Format(e))
            }
        }
    }
}
