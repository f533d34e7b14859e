//! Monochrome bitmaps accepted by the transcoder
//!
//! Anything implementing [`MonoBitmap`] can be written to the display. Two storage
//! formats are provided: [`ImageBits`] borrows row-major packed rows (the layout of
//! `ImageRaw<BinaryColor>` in embedded-graphics), while [`Page`] and [`Tile`] own
//! page-organized columns, where every byte is an aligned vertical group of 8 pixels.

#[cfg(feature = "graphics")]
use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*, primitives::Rectangle};

/// A rectangular grid of on/off pixels
pub trait MonoBitmap {
    /// `(width, height)` in pixels
    fn size(&self) -> (u32, u32);

    /// Whether the pixel at `(x, y)` is on. Out of bounds pixels are off.
    fn pixel(&self, x: u32, y: u32) -> bool;
}

impl<B: MonoBitmap + ?Sized> MonoBitmap for &B {
    fn size(&self) -> (u32, u32) {
        (**self).size()
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        (**self).pixel(x, y)
    }
}

/// Borrowed bitmap with rows packed MSB first, each row padded to a whole byte
#[derive(Debug, Clone, Copy)]
pub struct ImageBits<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> ImageBits<'a> {
    /// Wrap `data` as a `width` pixel wide bitmap. The height is derived from the data
    /// length; trailing bytes that don't fill a whole row are ignored.
    pub fn new(data: &'a [u8], width: u32) -> Self {
        let stride = width.div_ceil(8) as usize;
        let height = if stride == 0 { 0 } else { data.len() / stride };
        Self {
            data,
            width,
            height: height as u32,
        }
    }

    fn stride(&self) -> usize {
        self.width.div_ceil(8) as usize
    }
}

impl MonoBitmap for ImageBits<'_> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y as usize * self.stride() + x as usize / 8];
        byte & (0x80u8 >> (x % 8)) != 0
    }
}

/// An arbitrary number of aligned 8 pixel tall columns, each represented by a byte
///
/// LSB is at the top of the column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<const W: usize>(pub [u8; W]);

/// Operations to perform on a buffered pixel
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelOperation {
    /// Set the pixel to 1
    Set,
    /// Set the pixel to 0
    Clear,
    /// Toggle the pixel
    Toggle,
}

impl PixelOperation {
    fn apply(self, cell: &mut u8, mask: u8) {
        match self {
            PixelOperation::Set => *cell |= mask,
            PixelOperation::Clear => *cell &= !mask,
            PixelOperation::Toggle => *cell ^= mask,
        }
    }
}

impl From<bool> for PixelOperation {
    fn from(on: bool) -> Self {
        if on {
            Self::Set
        } else {
            Self::Clear
        }
    }
}

#[cfg(feature = "graphics")]
impl From<BinaryColor> for PixelOperation {
    fn from(value: BinaryColor) -> Self {
        value.is_on().into()
    }
}

impl<const W: usize> Default for Page<W> {
    fn default() -> Self {
        Self::new(0)
    }
}

impl<const W: usize> Page<W> {
    /// Creates a new page with the provided pixel pattern
    pub fn new(pattern: u8) -> Self {
        Self([pattern; W])
    }

    /// Applies the provided operation to a single pixel. Pixels outside the page are ignored.
    pub fn modify_pixel(&mut self, x: usize, y: u8, op: PixelOperation) {
        if let Some(cell) = self.0.get_mut(x) {
            if y < 8 {
                op.apply(cell, 1u8 << y);
            }
        }
    }

    /// Applies a mask with a user-defined operation to the columns `start..end`
    pub fn apply_mask(&mut self, mask: u8, start: usize, end: usize, op: PixelOperation) {
        let end = end.min(W);
        if end <= start {
            return;
        }
        for cell in self.0[start..end].iter_mut() {
            op.apply(cell, mask);
        }
    }
}

impl<const W: usize> MonoBitmap for Page<W> {
    fn size(&self) -> (u32, u32) {
        (W as u32, 8)
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        y < 8 && self.0.get(x as usize).is_some_and(|col| *col & (1u8 << y) != 0)
    }
}

/// A collection of pages with an offset from the origin
#[derive(Debug, Clone)]
pub struct Tile<const W: usize, const P: usize> {
    /// Pages backing the tile
    pub pages: [Page<W>; P],
    /// Tile's initial column
    pub col_offset: u8,
    /// Tile's initial page's address
    pub page_offset: u8,
}

impl<const W: usize, const P: usize> Default for Tile<W, P> {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl<const W: usize, const P: usize> Tile<W, P> {
    /// Creates a blank tile placed at `col_offset`, `page_offset`
    pub fn new(col_offset: u8, page_offset: u8) -> Self {
        Self {
            pages: core::array::from_fn(|_| Page::new(0)),
            col_offset,
            page_offset,
        }
    }

    /// Sets pixel relative to this tile's base position
    pub fn modify_pixel(&mut self, x: usize, y: usize, op: PixelOperation) {
        if let Some(page) = self.pages.get_mut(y / 8) {
            page.modify_pixel(x, (y % 8) as u8, op);
        }
    }
}

/// Pixels are addressed relative to the tile, the offsets only matter when drawing it
impl<const W: usize, const P: usize> MonoBitmap for Tile<W, P> {
    fn size(&self) -> (u32, u32) {
        (W as u32, P as u32 * 8)
    }

    fn pixel(&self, x: u32, y: u32) -> bool {
        self.pages
            .get(y as usize / 8)
            .is_some_and(|page| page.pixel(x, y % 8))
    }
}

#[cfg(feature = "graphics")]
impl<const W: usize> Dimensions for Page<W> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle {
            top_left: Point::new(0, 0),
            size: Size::new(W as u32, 8),
        }
    }
}

#[cfg(feature = "graphics")]
impl<const W: usize> DrawTarget for Page<W> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.0.fill(if color.is_on() { 0xff } else { 0 });
        Ok(())
    }

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bb = self.bounding_box();
        pixels
            .into_iter()
            .filter(|Pixel(pos, _)| bb.contains(*pos))
            .for_each(|Pixel(pos, color)| {
                self.modify_pixel(pos.x as usize, pos.y as u8, color.into())
            });
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let Rectangle {
            top_left: Point { x, y },
            size: Size { width, height },
        } = area.intersection(&self.bounding_box());
        if width == 0 || height == 0 {
            return Ok(());
        }
        // height bits set to 1, then shifted down to the first row
        let mask = ((1u16 << height) - 1) as u8;
        self.apply_mask(
            mask << y,
            x as usize,
            x as usize + width as usize,
            color.into(),
        );

        Ok(())
    }
}

#[cfg(feature = "graphics")]
impl<const W: usize, const P: usize> Dimensions for Tile<W, P> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle {
            top_left: Point::new(self.col_offset as i32, self.page_offset as i32 * 8),
            size: Size::new(W as u32, P as u32 * 8),
        }
    }
}

#[cfg(feature = "graphics")]
impl<const W: usize, const P: usize> DrawTarget for Tile<W, P> {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xff } else { 0 };
        for page in self.pages.iter_mut() {
            page.0.fill(fill);
        }
        Ok(())
    }

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bb = self.bounding_box();
        let origin = bb.top_left;
        pixels
            .into_iter()
            .filter(|Pixel(pos, _)| bb.contains(*pos))
            .for_each(|Pixel(pos, color)| {
                let local = pos - origin;
                self.modify_pixel(local.x as usize, local.y as usize, color.into())
            });
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        let Size { width, height } = area.size;
        if width == 0 || height == 0 {
            return Ok(());
        }
        let local = area.top_left - self.bounding_box().top_left;
        let (x, mut y, mut height) = (local.x as usize, local.y as u32, height);
        let end = x + width as usize;
        let op = color.into();

        // unaligned top
        if y % 8 != 0 {
            let mask_height = core::cmp::min(height, 8 - y % 8);
            let mask = (((1u16 << mask_height) - 1) as u8) << (y % 8);
            self.pages[y as usize / 8].apply_mask(mask, x, end, op);

            height -= mask_height;
            y += mask_height;
        }

        // aligned center rows
        for page in &mut self.pages[(y as usize / 8)..][..(height as usize / 8)] {
            page.apply_mask(0xff, x, end, op);
        }

        // bottom unaligned rows
        if height % 8 != 0 {
            let mask = ((1u16 << (height % 8)) - 1) as u8;
            let page = (y + height) as usize / 8;
            self.pages[page].apply_mask(mask, x, end, op);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_bits_are_msb_first() {
        let data = [0b1000_0001, 0b1000_0000, 0x00, 0x01];
        let img = ImageBits::new(&data, 16);

        assert_eq!(img.size(), (16, 2));
        assert!(img.pixel(0, 0));
        assert!(img.pixel(7, 0));
        assert!(img.pixel(8, 0));
        assert!(!img.pixel(9, 0));
        assert!(img.pixel(15, 1));
        assert!(!img.pixel(16, 1));
        assert!(!img.pixel(0, 2));
    }

    #[test]
    fn image_bits_rows_are_byte_padded() {
        // 3 pixels wide, one byte per row
        let data = [0b0010_0000, 0b1100_0000];
        let img = ImageBits::new(&data, 3);

        assert_eq!(img.size(), (3, 2));
        assert!(img.pixel(2, 0));
        assert!(img.pixel(0, 1) && img.pixel(1, 1) && !img.pixel(2, 1));
    }

    #[test]
    fn page_pixels_are_lsb_at_top() {
        let mut page = Page::<4>::new(0);
        page.modify_pixel(1, 0, PixelOperation::Set);
        page.modify_pixel(1, 7, PixelOperation::Set);
        page.modify_pixel(4, 0, PixelOperation::Set);
        page.modify_pixel(2, 3, PixelOperation::Toggle);

        assert_eq!(page.0, [0x00, 0x81, 0x08, 0x00]);
        assert!(page.pixel(1, 7));
        assert!(!page.pixel(1, 8));
    }

    #[test]
    fn tile_addresses_rows_across_pages() {
        let mut tile = Tile::<3, 2>::new(0, 0);
        tile.modify_pixel(2, 15, PixelOperation::Set);
        tile.modify_pixel(0, 16, PixelOperation::Set);

        assert_eq!(tile.size(), (3, 16));
        assert_eq!(tile.pages[1].0, [0x00, 0x00, 0x80]);
        assert!(tile.pixel(2, 15));
        assert!(!tile.pixel(0, 16));
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn tile_fill_solid_spans_pages() {
        use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Rectangle};

        let mut tile = Tile::<4, 3>::new(0, 0);
        Rectangle::new(Point::new(1, 6), Size::new(2, 12))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut tile)
            .unwrap();

        assert_eq!(tile.pages[0].0, [0x00, 0xC0, 0xC0, 0x00]);
        assert_eq!(tile.pages[1].0, [0x00, 0xFF, 0xFF, 0x00]);
        assert_eq!(tile.pages[2].0, [0x00, 0x03, 0x03, 0x00]);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn offset_tile_draws_in_screen_space() {
        let mut tile = Tile::<4, 1>::new(10, 2);
        Pixel(Point::new(11, 17), BinaryColor::On)
            .draw(&mut tile)
            .unwrap();
        // outside the tile
        Pixel(Point::new(0, 0), BinaryColor::On)
            .draw(&mut tile)
            .unwrap();

        assert_eq!(tile.pages[0].0, [0x00, 0x02, 0x00, 0x00]);
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn page_fill_solid_masks_rows() {
        let mut page = Page::<3>::new(0);
        page.fill_solid(
            &Rectangle::new(Point::new(0, 2), Size::new(2, 3)),
            BinaryColor::On,
        )
        .unwrap();

        assert_eq!(page.0, [0x1C, 0x1C, 0x00]);
    }
}
