//! Display commands

use display_interface::{DataFormat, DisplayError, WriteOnlyDataCommand};

/// Number of 8 pixel tall pages in the controller's display RAM
pub const RAM_PAGES: u8 = 8;
/// Number of rows in the controller's display RAM
pub const RAM_ROWS: u8 = RAM_PAGES * 8;

/// Memory addressing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddrMode {
    /// Column pointer advances first, then the page
    Horizontal = 0b00,
    /// Page pointer advances first, then the column
    Vertical = 0b01,
    /// Column pointer wraps within the current page
    Page = 0b10,
}

/// Direction of a continuous hardware scroll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HScrollDir {
    /// Content moves left
    Left,
    /// Content moves right
    Right,
}

/// Commands understood by the SSD1305 family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Set contrast of bank 0. Higher number is higher contrast.
    Contrast(u8),
    /// Light every pixel regardless of RAM content
    AllOn(bool),
    /// Invert the on/off meaning of RAM bits
    Invert(bool),
    /// Turn display on or off
    DisplayOn(bool),
    /// Lower nibble of the page-mode column start address
    ColumnAddressLow(u8),
    /// Upper nibble of the page-mode column start address
    ColumnAddressHigh(u8),
    /// Memory addressing mode
    AddressMode(AddrMode),
    /// Column start and end address for horizontal and vertical addressing
    ColumnAddress(u8, u8),
    /// Page start and end address for horizontal and vertical addressing
    PageAddress(u8, u8),
    /// RAM row shown on the top line of the panel. Used for vertical offset scrolling.
    StartLine(u8),
    /// Reverse the column (segment) mapping
    SegmentRemap(bool),
    /// Multiplex ratio, number of driven rows minus one
    Multiplex(u8),
    /// Scan COM lines from the highest to the lowest
    ReverseComDir(bool),
    /// Vertical shift of the COM lines
    DisplayOffset(u8),
    /// Oscillator frequency (upper nibble) and clock divide ratio (lower nibble)
    DisplayClockDiv(u8),
    /// Area colour and low power mode bits
    AreaColorLowPower(u8),
    /// Pre-charge (upper nibble) and discharge (lower nibble) periods
    PreChargePeriod(u8),
    /// COM pins hardware configuration
    ComPinConfig(u8),
    /// VCOMH deselect level
    VcomhDeselect(u8),
    /// Continuous horizontal scroll: direction, step, start page, interval, end page
    HScrollSetup(HScrollDir, u8, u8, u8, u8),
    /// Continuous vertical and horizontal scroll: direction, horizontal step, start page,
    /// interval, end page, vertical step
    VhScrollSetup(HScrollDir, u8, u8, u8, u8, u8),
    /// Start or stop the configured hardware scroll
    Scroll(bool),
    /// Vertical scroll area: fixed top rows, scrolled rows
    VerticalScrollArea(u8, u8),
}

impl Command {
    /// Encode the command into its opcode and parameter bytes
    pub fn encode(self) -> ([u8; 7], usize) {
        match self {
            Command::Contrast(val) => ([0x81, val, 0, 0, 0, 0, 0], 2),
            Command::AllOn(on) => ([0xA4 | (on as u8), 0, 0, 0, 0, 0, 0], 1),
            Command::Invert(inv) => ([0xA6 | (inv as u8), 0, 0, 0, 0, 0, 0], 1),
            Command::DisplayOn(on) => ([0xAE | (on as u8), 0, 0, 0, 0, 0, 0], 1),
            Command::ColumnAddressLow(addr) => ([0xF & addr, 0, 0, 0, 0, 0, 0], 1),
            Command::ColumnAddressHigh(addr) => ([0x10 | (0xF & addr), 0, 0, 0, 0, 0, 0], 1),
            Command::AddressMode(mode) => ([0x20, mode as u8, 0, 0, 0, 0, 0], 2),
            Command::ColumnAddress(start, end) => ([0x21, start, end, 0, 0, 0, 0], 3),
            Command::PageAddress(start, end) => ([0x22, start, end, 0, 0, 0, 0], 3),
            Command::StartLine(line) => ([0x40 | (0x3F & line), 0, 0, 0, 0, 0, 0], 1),
            Command::SegmentRemap(remap) => ([0xA0 | (remap as u8), 0, 0, 0, 0, 0, 0], 1),
            Command::Multiplex(ratio) => ([0xA8, ratio, 0, 0, 0, 0, 0], 2),
            Command::ReverseComDir(rev) => ([0xC0 | ((rev as u8) << 3), 0, 0, 0, 0, 0, 0], 1),
            Command::DisplayOffset(offset) => ([0xD3, offset, 0, 0, 0, 0, 0], 2),
            Command::DisplayClockDiv(val) => ([0xD5, val, 0, 0, 0, 0, 0], 2),
            Command::AreaColorLowPower(val) => ([0xD8, val, 0, 0, 0, 0, 0], 2),
            Command::PreChargePeriod(val) => ([0xD9, val, 0, 0, 0, 0, 0], 2),
            Command::ComPinConfig(val) => ([0xDA, val, 0, 0, 0, 0, 0], 2),
            Command::VcomhDeselect(val) => ([0xDB, val, 0, 0, 0, 0, 0], 2),
            Command::HScrollSetup(dir, step, start, interval, end) => {
                let op = match dir {
                    HScrollDir::Right => 0x26,
                    HScrollDir::Left => 0x27,
                };
                ([op, step, start, interval, end, 0, 0], 5)
            }
            Command::VhScrollSetup(dir, step, start, interval, end, vertical) => {
                let op = match dir {
                    HScrollDir::Right => 0x29,
                    HScrollDir::Left => 0x2A,
                };
                ([op, step, start, interval, end, vertical, 0], 6)
            }
            Command::Scroll(on) => ([0x2E | (on as u8), 0, 0, 0, 0, 0, 0], 1),
            Command::VerticalScrollArea(fixed, rows) => ([0xA3, fixed, rows, 0, 0, 0, 0], 3),
        }
    }

    /// Send command to the display
    pub fn send<DI>(self, iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: WriteOnlyDataCommand,
    {
        let (data, len) = self.encode();
        iface.send_commands(DataFormat::U8(&data[0..len]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes(cmd: Command) -> std::vec::Vec<u8> {
        let (data, len) = cmd.encode();
        data[..len].to_vec()
    }

    #[test]
    fn addressing_opcodes() {
        assert_eq!(bytes(Command::AddressMode(AddrMode::Vertical)), [0x20, 0x01]);
        assert_eq!(bytes(Command::ColumnAddress(0, 127)), [0x21, 0x00, 0x7F]);
        assert_eq!(bytes(Command::PageAddress(3, 3)), [0x22, 0x03, 0x03]);
        assert_eq!(bytes(Command::SegmentRemap(false)), [0xA0]);
        assert_eq!(bytes(Command::SegmentRemap(true)), [0xA1]);
    }

    #[test]
    fn start_line_masks_to_six_bits() {
        assert_eq!(bytes(Command::StartLine(0)), [0x40]);
        assert_eq!(bytes(Command::StartLine(63)), [0x7F]);
        assert_eq!(bytes(Command::StartLine(64)), [0x40]);
    }

    #[test]
    fn scroll_opcodes() {
        assert_eq!(
            bytes(Command::HScrollSetup(HScrollDir::Right, 1, 0, 6, 7)),
            [0x26, 1, 0, 6, 7]
        );
        assert_eq!(
            bytes(Command::HScrollSetup(HScrollDir::Left, 1, 0, 6, 7)),
            [0x27, 1, 0, 6, 7]
        );
        assert_eq!(
            bytes(Command::VhScrollSetup(HScrollDir::Right, 4, 0, 0, 7, 63)),
            [0x29, 4, 0, 0, 7, 63]
        );
        assert_eq!(
            bytes(Command::VhScrollSetup(HScrollDir::Left, 0, 0, 0, 7, 1)),
            [0x2A, 0, 0, 0, 7, 1]
        );
        assert_eq!(bytes(Command::Scroll(true)), [0x2F]);
        assert_eq!(bytes(Command::Scroll(false)), [0x2E]);
        assert_eq!(bytes(Command::VerticalScrollArea(0, 64)), [0xA3, 0, 64]);
    }

    #[test]
    fn display_control_opcodes() {
        assert_eq!(bytes(Command::DisplayOn(true)), [0xAF]);
        assert_eq!(bytes(Command::DisplayOn(false)), [0xAE]);
        assert_eq!(bytes(Command::Invert(true)), [0xA7]);
        assert_eq!(bytes(Command::AllOn(false)), [0xA4]);
        assert_eq!(bytes(Command::Contrast(0x80)), [0x81, 0x80]);
        assert_eq!(bytes(Command::ReverseComDir(true)), [0xC8]);
        assert_eq!(bytes(Command::ColumnAddressLow(4)), [0x04]);
        assert_eq!(bytes(Command::ColumnAddressHigh(0)), [0x10]);
    }
}
