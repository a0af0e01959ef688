//! # Block level JPEG encoder
//!
//! A baseline sequential JPEG encoder that works on one 8x8 block at a time
//! and never allocates while encoding.
//!
//! The crate is split into small building blocks that can be used on their
//! own:
//!
//! - [SampleBlock8], [CoefficientBlock8] and [SuperBlock16] hold samples and
//!   coefficients and extract them from a [PixelSource].
//! - [forward_transform] and [inverse_transform] convert between the two.
//! - [QuantizationTable] builds tables from a base table and a quality.
//! - [downsample] and [upsample] convert between 16x16 and 8x8 chroma.
//! - [Encoder] turns coefficient blocks into a JFIF stream.
//!
//! ## Example
//!
//! ```no_run
//! use jpeg_block_encoder::{Encoder, ColorType, SampleBlock8};
//!
//! # fn main() -> Result<(), jpeg_block_encoder::EncodingError> {
//! let mut out = Vec::new();
//! let mut encoder = Encoder::new();
//!
//! encoder.reset(&mut out, ColorType::Gray, 8, 8, None)?;
//!
//! let block = SampleBlock8([128; 64]);
//! encoder.add_block1(&mut out, &block.forward_dct())?;
//!
//! encoder.finish(&mut out)?;
//! # Ok(())
//! # }
//! ```
//!
//! Whole images can be encoded with [encode_image].

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod block;
mod encoder;
mod error;
mod fdct;
mod huffman;
mod image_buffer;
mod marker;
mod quantization;
mod resample;
mod writer;

#[cfg(test)]
mod tests;

pub use block::{
    extract_block, extract_blocks, extract_super_block, CoefficientBlock8, SampleBlock8,
    SuperBlock16, COMPONENT_CB, COMPONENT_CR, COMPONENT_Y,
};
pub use encoder::{encode_image, ColorType, Encoder, EncoderOptions};
pub use error::{EncoderResult, EncodingError, ErrorKind};
pub use fdct::{forward_transform, inverse_transform};
pub use huffman::{CodingClass, HuffmanTable};
pub use image_buffer::{rgb_to_ycbcr, GrayImage, PixelSource, RgbImage, YCbCrImage};
pub use marker::Marker;
pub use quantization::{
    QuantizationTable, QuantizationTablePair, QuantizationTableType, TableClass, DEFAULT_QUALITY,
    MAXIMUM_QUALITY,
};
pub use resample::{downsample, upsample};
pub use writer::JfifWrite;

/// # Pixel density of the JFIF header
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Density {
    /// No pixel density is set, which implies a 1:1 aspect ratio
    None,

    /// Horizontal and vertical dots per inch (dpi)
    Inch { x: u16, y: u16 },

    /// Horizontal and vertical dots per centimeters
    Centimeter { x: u16, y: u16 },
}

impl Default for Density {
    fn default() -> Self {
        Density::None
    }
}
