use byteorder::{BigEndian, ByteOrder};

use crate::encoder::Component;
use crate::error::EncoderResult;
use crate::huffman::{CodingClass, HuffmanTable};
use crate::marker::Marker;
use crate::quantization::QuantizationTable;
use crate::Density;

/// Zig-zag sequence of coefficients: entry `i` is the natural (row-major)
/// position of the `i`-th coefficient in frequency order.
pub(crate) static ZIGZAG: [u8; 64] = [
    0, 1, 8, 16, 9, 2, 3, 10, 17, 24, 32, 25, 18, 11, 4, 5, 12, 19, 26, 33, 40, 48, 41, 34, 27,
    20, 13, 6, 7, 14, 21, 28, 35, 42, 49, 56, 57, 50, 43, 36, 29, 22, 15, 23, 30, 37, 44, 51, 58,
    59, 52, 45, 38, 31, 39, 46, 53, 60, 61, 54, 47, 55, 62, 63,
];

/// A byte sink the encoder writes to
///
/// With the `std` feature this is implemented for every [std::io::Write].
pub trait JfifWrite {
    fn write_all(&mut self, buf: &[u8]) -> EncoderResult<()>;
}

#[cfg(not(feature = "std"))]
impl<W: JfifWrite + ?Sized> JfifWrite for &mut W {
    fn write_all(&mut self, buf: &[u8]) -> EncoderResult<()> {
        (**self).write_all(buf)
    }
}

#[cfg(not(feature = "std"))]
impl JfifWrite for alloc::vec::Vec<u8> {
    fn write_all(&mut self, buf: &[u8]) -> EncoderResult<()> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write + ?Sized> JfifWrite for W {
    #[inline(always)]
    fn write_all(&mut self, buf: &[u8]) -> EncoderResult<()> {
        std::io::Write::write_all(self, buf)?;
        Ok(())
    }
}

/// Pending entropy coded bits that don't fill a complete byte yet
///
/// Holds at most 7 bits between calls. Lives in the encoder session so bit
/// packing continues seamlessly across block submissions.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct BitBuffer {
    value: u32,
    count: u8,
}

impl BitBuffer {
    #[cfg(test)]
    pub fn pending_bits(&self) -> u8 {
        self.count
    }
}

pub(crate) struct JfifWriter<'a, W: JfifWrite + ?Sized> {
    w: &'a mut W,
    bits: &'a mut BitBuffer,
}

impl<'a, W: JfifWrite + ?Sized> JfifWriter<'a, W> {
    pub fn new(w: &'a mut W, bits: &'a mut BitBuffer) -> Self {
        JfifWriter { w, bits }
    }

    #[inline(always)]
    pub fn write(&mut self, buf: &[u8]) -> EncoderResult<()> {
        self.w.write_all(buf)
    }

    #[inline(always)]
    pub fn write_u8(&mut self, value: u8) -> EncoderResult<()> {
        self.w.write_all(&[value])
    }

    #[inline(always)]
    pub fn write_u16(&mut self, value: u16) -> EncoderResult<()> {
        let mut buf = [0u8; 2];
        BigEndian::write_u16(&mut buf, value);
        self.w.write_all(&buf)
    }

    /// Appends `size` bits (at most 16) of `value`, emitting every completed
    /// byte followed by a stuffed zero byte if it is 0xFF.
    #[inline]
    pub fn write_bits(&mut self, value: u32, size: u8) -> EncoderResult<()> {
        debug_assert!(size <= 16);

        if size == 0 {
            return Ok(());
        }

        let value = value & ((1 << size) - 1);

        self.bits.value = (self.bits.value << size) | value;
        self.bits.count += size;

        // 7 pending + 16 new bits complete at most two bytes
        let mut out = [0u8; 4];
        let mut len = 0;

        while self.bits.count >= 8 {
            self.bits.count -= 8;

            let byte = (self.bits.value >> self.bits.count) as u8;
            out[len] = byte;
            len += 1;

            if byte == 0xFF {
                out[len] = 0x00;
                len += 1;
            }
        }

        self.bits.value &= (1 << self.bits.count) - 1;

        if len > 0 {
            self.write(&out[..len])?;
        }

        Ok(())
    }

    /// Pads the pending bits with one-bits up to the next byte boundary
    pub fn finalize_bit_buffer(&mut self) -> EncoderResult<()> {
        let pending = self.bits.count;
        if pending > 0 {
            let padding = 8 - pending;
            self.write_bits((1 << padding) - 1, padding)?;
        }

        *self.bits = BitBuffer::default();

        Ok(())
    }

    #[inline]
    pub fn huffman_encode(&mut self, symbol: u8, table: &HuffmanTable) -> EncoderResult<()> {
        let &(size, code) = table.get_for_value(symbol);
        self.write_bits(code as u32, size)
    }

    #[inline]
    pub fn huffman_encode_value(
        &mut self,
        size: u8,
        symbol: u8,
        value: u16,
        table: &HuffmanTable,
    ) -> EncoderResult<()> {
        self.huffman_encode(symbol, table)?;
        self.write_bits(value as u32, size)
    }

    /// Entropy codes a quantized block given in zig-zag order
    pub fn write_block(
        &mut self,
        block: &[i16; 64],
        prev_dc: i16,
        dc_table: &HuffmanTable,
        ac_table: &HuffmanTable,
    ) -> EncoderResult<()> {
        self.write_dc(block[0], prev_dc, dc_table)?;
        self.write_ac_block(block, 1, 64, ac_table)
    }

    pub fn write_dc(
        &mut self,
        value: i16,
        prev_dc: i16,
        dc_table: &HuffmanTable,
    ) -> EncoderResult<()> {
        let diff = value - prev_dc;
        let (size, value) = get_code(diff);

        self.huffman_encode_value(size, size, value, dc_table)
    }

    pub fn write_ac_block(
        &mut self,
        block: &[i16; 64],
        start: usize,
        end: usize,
        ac_table: &HuffmanTable,
    ) -> EncoderResult<()> {
        let mut zero_run = 0;

        for &value in &block[start..end] {
            if value == 0 {
                zero_run += 1;
            } else {
                while zero_run > 15 {
                    self.huffman_encode(0xF0, ac_table)?;
                    zero_run -= 16;
                }

                let (size, value) = get_code(value);
                let symbol = (zero_run << 4) | size;

                self.huffman_encode_value(size, symbol, value, ac_table)?;

                zero_run = 0;
            }
        }

        if zero_run > 0 {
            self.huffman_encode(0x00, ac_table)?;
        }

        Ok(())
    }

    pub fn write_marker(&mut self, marker: Marker) -> EncoderResult<()> {
        self.write(&[0xFF, marker.into()])
    }

    pub fn write_header(&mut self, density: &Density) -> EncoderResult<()> {
        self.write_marker(Marker::APP(0))?;
        self.write_u16(16)?;

        self.write(b"JFIF\0")?;
        self.write(&[0x01, 0x01])?;

        match *density {
            Density::None => {
                self.write_u8(0x00)?;
                self.write_u16(1)?;
                self.write_u16(1)?;
            }
            Density::Inch { x, y } => {
                self.write_u8(0x01)?;
                self.write_u16(x)?;
                self.write_u16(y)?;
            }
            Density::Centimeter { x, y } => {
                self.write_u8(0x02)?;
                self.write_u16(x)?;
                self.write_u16(y)?;
            }
        }

        // No thumbnail
        self.write(&[0x00, 0x00])
    }

    /// Append huffman table segment
    ///
    /// - `class`: 0 for DC or 1 for AC
    /// - `dest`: 0 for luma or 1 for chroma tables
    pub fn write_huffman_segment(
        &mut self,
        class: CodingClass,
        destination: u8,
        table: &HuffmanTable,
    ) -> EncoderResult<()> {
        assert!(destination < 4, "Bad destination: {}", destination);

        self.write_marker(Marker::DHT)?;
        self.write_u16(2 + 1 + 16 + table.values().len() as u16)?;

        self.write_u8(((class as u8) << 4) | destination)?;
        self.write(table.lengths())?;
        self.write(table.values())
    }

    /// Append a quantization table
    ///
    /// - `precision`: always 0 (8 bit) for baseline
    /// - `dest`: 0 for luma or 1 for chroma tables
    pub fn write_quantization_segment(
        &mut self,
        destination: u8,
        table: &QuantizationTable,
    ) -> EncoderResult<()> {
        assert!(destination < 4, "Bad destination: {}", destination);

        self.write_marker(Marker::DQT)?;
        self.write_u16(2 + 1 + 64)?;

        self.write_u8(destination)?;

        let mut zigzagged = [0u8; 64];
        for (value, &index) in zigzagged.iter_mut().zip(ZIGZAG.iter()) {
            *value = table.get(index as usize);
        }

        self.write(&zigzagged)
    }

    pub fn write_frame_header(
        &mut self,
        width: u16,
        height: u16,
        components: &[Component],
    ) -> EncoderResult<()> {
        self.write_marker(Marker::SOF0)?;
        self.write_u16(2 + 1 + 2 + 2 + 1 + (components.len() as u16) * 3)?;

        // Precision
        self.write_u8(8)?;

        self.write_u16(height)?;
        self.write_u16(width)?;

        self.write_u8(components.len() as u8)?;

        for component in components.iter() {
            self.write_u8(component.id)?;
            self.write_u8(
                (component.horizontal_sampling_factor << 4) | component.vertical_sampling_factor,
            )?;
            self.write_u8(component.quantization_table)?;
        }

        Ok(())
    }

    pub fn write_scan_header(&mut self, components: &[Component]) -> EncoderResult<()> {
        self.write_marker(Marker::SOS)?;
        self.write_u16(2 + 1 + (components.len() as u16) * 2 + 3)?;

        self.write_u8(components.len() as u8)?;

        for component in components.iter() {
            self.write_u8(component.id)?;
            self.write_u8((component.dc_huffman_table << 4) | component.ac_huffman_table)?;
        }

        // Spectral selection start and end, successive approximation
        self.write(&[0, 63, 0])
    }
}

/// Returns the magnitude category of `value` and its additional bits
///
/// Negative values are coded as the one's complement of their magnitude.
pub(crate) fn get_code(value: i16) -> (u8, u16) {
    let temp = value - (value.is_negative() as i16);
    let temp2 = value.abs();

    let num_bits = 15 - (temp2 << 1 | 1).leading_zeros() as u16;
    let coefficient = temp & ((1 << num_bits as usize) - 1);

    (num_bits as u8, coefficient as u16)
}
