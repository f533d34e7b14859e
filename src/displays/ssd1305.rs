//! SSD1305 display variants

use crate::{command::Command, display::DisplayVariant};
use display_interface::{DisplayError, WriteOnlyDataCommand};

/// 128x32 module, e.g. the Waveshare 2.23" OLED
#[derive(Debug, Clone, Copy)]
pub struct Ssd1305_128_32 {}

impl DisplayVariant for Ssd1305_128_32 {
    const WIDTH: u8 = 128;
    const HEIGHT: u8 = 32;

    fn init_sequence<DI>(iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: WriteOnlyDataCommand,
    {
        init_common(iface, Self::HEIGHT)?;
        // monochrome, low power
        Command::AreaColorLowPower(0x05).send(iface)?;
        Command::PreChargePeriod(0xC2).send(iface)?;
        Command::ComPinConfig(0x12).send(iface)?;
        Command::VcomhDeselect(0x08).send(iface)?;
        Command::DisplayOn(true).send(iface)
    }
}

/// Generic 128x64 module
#[derive(Debug, Clone, Copy)]
pub struct Ssd1305_128_64 {}

impl DisplayVariant for Ssd1305_128_64 {
    const WIDTH: u8 = 128;
    const HEIGHT: u8 = 64;

    fn init_sequence<DI>(iface: &mut DI) -> Result<(), DisplayError>
    where
        DI: WriteOnlyDataCommand,
    {
        init_common(iface, Self::HEIGHT)?;
        Command::AreaColorLowPower(0x05).send(iface)?;
        Command::PreChargePeriod(0xF1).send(iface)?;
        Command::ComPinConfig(0x12).send(iface)?;
        Command::VcomhDeselect(0x3C).send(iface)?;
        Command::DisplayOn(true).send(iface)
    }
}

/// Display off, page-mode column start 4, start line 0, mid contrast, reversed segments
/// and COM scan, multiplex for `height` rows, no offset, 100 frames per second
fn init_common<DI>(iface: &mut DI, height: u8) -> Result<(), DisplayError>
where
    DI: WriteOnlyDataCommand,
{
    for cmd in [
        Command::DisplayOn(false),
        Command::ColumnAddressLow(4),
        Command::ColumnAddressHigh(0),
        Command::StartLine(0),
        Command::Contrast(0x80),
        Command::SegmentRemap(true),
        Command::Invert(false),
        Command::Multiplex(height - 1),
        Command::ReverseComDir(true),
        Command::DisplayOffset(0),
        Command::DisplayClockDiv(0xF0),
    ] {
        cmd.send(iface)?;
    }

    Ok(())
}
