use rgb::RGB8;

/// Read access to the pixels of an image
///
/// Implementors only need to answer for coordinates inside
/// `width() x height()`; block extraction clamps everything else.
pub trait PixelSource {
    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Y, Cb and Cr of the pixel at `(x, y)`
    fn ycbcr(&self, x: u16, y: u16) -> [u8; 3];

    /// Luma of the pixel at `(x, y)`
    fn luma(&self, x: u16, y: u16) -> u8 {
        self.ycbcr(x, y)[0]
    }
}

#[inline]
fn index(x: u16, y: u16, width: u16) -> usize {
    usize::from(y) * usize::from(width) + usize::from(x)
}

/// Converts an RGB pixel to full range YCbCr as defined by JFIF
///
/// Uses 16 fractional bits and rounds to nearest.
#[inline]
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> [u8; 3] {
    let r = i32::from(r);
    let g = i32::from(g);
    let b = i32::from(b);

    let y = 19595 * r + 38470 * g + 7471 * b;
    let cb = -11059 * r - 21709 * g + 32768 * b + (128 << 16);
    let cr = 32768 * r - 27439 * g - 5329 * b + (128 << 16);

    [descale(y), descale(cb), descale(cr)]
}

#[inline(always)]
fn descale(value: i32) -> u8 {
    ((value + 0x7FFF) >> 16).clamp(0, 255) as u8
}

/// 8-bit gray samples in row-major order with the given width and height
///
/// # Panics
///
/// When the slice holds fewer than `width * height` samples.
pub struct GrayImage<'a>(pub &'a [u8], pub u16, pub u16);

impl<'a> PixelSource for GrayImage<'a> {
    fn width(&self) -> u16 {
        self.1
    }

    fn height(&self) -> u16 {
        self.2
    }

    fn ycbcr(&self, x: u16, y: u16) -> [u8; 3] {
        [self.luma(x, y), 128, 128]
    }

    #[inline]
    fn luma(&self, x: u16, y: u16) -> u8 {
        self.0[index(x, y, self.1)]
    }
}

/// Interleaved Y, Cb, Cr samples in row-major order
///
/// # Panics
///
/// When the slice holds fewer than `width * height * 3` samples.
pub struct YCbCrImage<'a>(pub &'a [u8], pub u16, pub u16);

impl<'a> PixelSource for YCbCrImage<'a> {
    fn width(&self) -> u16 {
        self.1
    }

    fn height(&self) -> u16 {
        self.2
    }

    fn ycbcr(&self, x: u16, y: u16) -> [u8; 3] {
        let offset = index(x, y, self.1) * 3;
        [self.0[offset], self.0[offset + 1], self.0[offset + 2]]
    }
}

/// RGB pixels in row-major order, converted to YCbCr on read
///
/// # Panics
///
/// When the slice holds fewer than `width * height` pixels.
pub struct RgbImage<'a>(pub &'a [RGB8], pub u16, pub u16);

impl<'a> PixelSource for RgbImage<'a> {
    fn width(&self) -> u16 {
        self.1
    }

    fn height(&self) -> u16 {
        self.2
    }

    fn ycbcr(&self, x: u16, y: u16) -> [u8; 3] {
        let pixel = self.0[index(x, y, self.1)];
        rgb_to_ycbcr(pixel.r, pixel.g, pixel.b)
    }
}
