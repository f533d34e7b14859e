//! SSD1305 OLED display driver
//!
//! The driver talks to the controller through any [`display_interface`] implementation
//! (I2C or 4-wire SPI) and never keeps a frame buffer: bitmaps are packed into the
//! controller's page format on the fly and streamed with vertical addressing transfers.
//! On top of that it keeps track of the vertical scroll offset, drives the controller's
//! hardware scrolling and provides a text marquee that writes and scrolls lines of text.
//!
//! ```rust,ignore
//! use ssd1305::{displays::ssd1305::Ssd1305_128_32, prelude::*, Builder};
//!
//! let mut disp: PagedMode<_, _> = Builder::new(Ssd1305_128_32 {})
//!     .connect(interface)
//!     .into();
//!
//! disp.reset(&mut rst, &mut delay).unwrap();
//! disp.init().unwrap();
//! disp.clear().unwrap();
//!
//! // 16 bytes per row, 32 rows
//! disp.write_frame(ImageBits::new(&LOGO, 128)).unwrap();
//! ```
//!
//! # Features
//!
//! - `graphics` (default): [embedded-graphics] `DrawTarget` for [`Page`](bitmap::Page)
//!   and [`Tile`](bitmap::Tile)
//! - `text`: marquee rendering with embedded-graphics mono fonts
//! - `defmt`: `defmt::Format` for public types, plus trace and debug logging
//!
//! [embedded-graphics]: https://docs.rs/embedded-graphics

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

pub mod addressing;
pub mod bitmap;
pub mod builder;
pub mod command;
pub mod display;
pub mod displays;
pub mod error;
pub mod marquee;
#[cfg(test)]
mod mock;
pub mod mode;
pub mod orientation;
pub mod properties;
pub mod scroll;
#[cfg(feature = "text")]
pub mod text;
pub mod transcode;

pub use crate::{
    builder::Builder,
    error::{Error, Param, Result},
    orientation::Orientation,
};

/// Common types and traits
pub mod prelude {
    pub use crate::{
        bitmap::{ImageBits, MonoBitmap, Page, PixelOperation, Tile},
        marquee::{FontSize, MarqueeConfig, MarqueeControl, MarqueeOutcome, TextRenderer},
        mode::{displaymode::DisplayModeTrait, PagedMode},
        orientation::Orientation,
        scroll::HwScroll,
    };

    #[cfg(feature = "text")]
    pub use crate::text::MonoTextRenderer;
}
