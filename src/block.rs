//! Fixed size sample and coefficient containers.
//!
//! All blocks are plain arrays in raster (row-major) order and are never heap
//! backed, so they can be kept on the stack or embedded in other structs.

use arrayref::{array_mut_ref, array_ref};

use crate::fdct::{forward_transform, inverse_transform};
use crate::image_buffer::PixelSource;
use crate::resample::{downsample, upsample};

/// Index of the luma (or gray) component in a pixel source
pub const COMPONENT_Y: usize = 0;
/// Index of the blue difference component in a pixel source
pub const COMPONENT_CB: usize = 1;
/// Index of the red difference component in a pixel source
pub const COMPONENT_CR: usize = 2;

/// 8x8 unsigned 8-bit samples
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SampleBlock8(pub [u8; 64]);

/// 8x8 signed 16-bit DCT coefficients; entry 0 is the DC term
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CoefficientBlock8(pub [i16; 64]);

/// 16x16 unsigned 8-bit samples made of four 8x8 quadrants
///
/// Quadrants are numbered in row-major block order: 0 top left, 1 top right,
/// 2 bottom left, 3 bottom right.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SuperBlock16(pub [u8; 256]);

impl Default for SampleBlock8 {
    fn default() -> Self {
        SampleBlock8([0; 64])
    }
}

impl Default for CoefficientBlock8 {
    fn default() -> Self {
        CoefficientBlock8([0; 64])
    }
}

impl Default for SuperBlock16 {
    fn default() -> Self {
        SuperBlock16([0; 256])
    }
}

impl SampleBlock8 {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.0[y * 8 + x]
    }

    /// Forward DCT of this block, see [forward_transform]
    pub fn forward_dct(&self) -> CoefficientBlock8 {
        forward_transform(self)
    }

    /// Expands this block to 16x16, see [upsample]
    pub fn upsample(&self) -> SuperBlock16 {
        upsample(self)
    }

    /// Reads one component of the 8x8 pixels whose top left corner is `(x, y)`
    ///
    /// Coordinates past the right or bottom edge are clamped to the last
    /// column or row so partial blocks are padded by replication.
    pub fn extract_from<S: PixelSource + ?Sized>(
        &mut self,
        src: &S,
        x: usize,
        y: usize,
        component: usize,
    ) {
        let (max_x, max_y) = max_coordinates(src);

        for dy in 0..8 {
            let py = (y + dy).min(max_y);
            for dx in 0..8 {
                let px = (x + dx).min(max_x);
                self.0[dy * 8 + dx] = src.ycbcr(px as u16, py as u16)[component];
            }
        }
    }
}

impl CoefficientBlock8 {
    #[inline]
    pub fn dc(&self) -> i16 {
        self.0[0]
    }

    /// Inverse DCT of this block, see [inverse_transform]
    pub fn inverse_dct(&self) -> SampleBlock8 {
        inverse_transform(self)
    }
}

impl SuperBlock16 {
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.0[y * 16 + x]
    }

    /// Copies out one of the four 8x8 quadrants
    ///
    /// # Panics
    ///
    /// If `index` is not in `0..4`.
    pub fn quadrant(&self, index: usize) -> SampleBlock8 {
        assert!(index < 4, "Bad quadrant: {}", index);

        let offset = (index / 2) * 8 * 16 + (index % 2) * 8;

        let mut block = SampleBlock8::default();
        for row in 0..8 {
            let src = array_ref![self.0, offset + row * 16, 8];
            let dst = array_mut_ref![block.0, row * 8, 8];
            *dst = *src;
        }
        block
    }

    /// Assembles a super block from four quadrants in row-major block order
    pub fn from_quadrants(quadrants: &[SampleBlock8; 4]) -> SuperBlock16 {
        let mut result = SuperBlock16::default();

        for (index, quadrant) in quadrants.iter().enumerate() {
            let offset = (index / 2) * 8 * 16 + (index % 2) * 8;
            for row in 0..8 {
                let src = array_ref![quadrant.0, row * 8, 8];
                let dst = array_mut_ref![result.0, offset + row * 16, 8];
                *dst = *src;
            }
        }

        result
    }

    /// Reduces this block to 8x8, see [downsample]
    pub fn downsample(&self) -> SampleBlock8 {
        downsample(self)
    }

    /// Reads one component of the 16x16 pixels whose top left corner is
    /// `(x, y)`, clamping to the image bounds like [SampleBlock8::extract_from]
    pub fn extract_from<S: PixelSource + ?Sized>(
        &mut self,
        src: &S,
        x: usize,
        y: usize,
        component: usize,
    ) {
        let (max_x, max_y) = max_coordinates(src);

        for dy in 0..16 {
            let py = (y + dy).min(max_y);
            for dx in 0..16 {
                let px = (x + dx).min(max_x);
                self.0[dy * 16 + dx] = src.ycbcr(px as u16, py as u16)[component];
            }
        }
    }
}

/// Reads one component of the 8x8 block at `(x, y)`
pub fn extract_block<S: PixelSource + ?Sized>(
    src: &S,
    x: usize,
    y: usize,
    component: usize,
) -> SampleBlock8 {
    let mut block = SampleBlock8::default();
    block.extract_from(src, x, y, component);
    block
}

/// Reads the three co-located Y, Cb and Cr blocks at `(x, y)`
pub fn extract_blocks<S: PixelSource + ?Sized>(src: &S, x: usize, y: usize) -> [SampleBlock8; 3] {
    let (max_x, max_y) = max_coordinates(src);

    let mut blocks = [SampleBlock8::default(); 3];

    for dy in 0..8 {
        let py = (y + dy).min(max_y);
        for dx in 0..8 {
            let px = (x + dx).min(max_x);
            let pixel = src.ycbcr(px as u16, py as u16);
            for (block, value) in blocks.iter_mut().zip(pixel) {
                block.0[dy * 8 + dx] = value;
            }
        }
    }

    blocks
}

/// Reads one component of the 16x16 region at `(x, y)`
pub fn extract_super_block<S: PixelSource + ?Sized>(
    src: &S,
    x: usize,
    y: usize,
    component: usize,
) -> SuperBlock16 {
    let mut block = SuperBlock16::default();
    block.extract_from(src, x, y, component);
    block
}

fn max_coordinates<S: PixelSource + ?Sized>(src: &S) -> (usize, usize) {
    (
        usize::from(src.width()).saturating_sub(1),
        usize::from(src.height()).saturating_sub(1),
    )
}
