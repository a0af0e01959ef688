use log::{debug, warn};

use crate::block::{
    extract_block, extract_blocks, extract_super_block, CoefficientBlock8, SuperBlock16,
    COMPONENT_CB, COMPONENT_CR, COMPONENT_Y,
};
use crate::error::{EncoderResult, EncodingError};
use crate::huffman::{CodingClass, HuffmanTable};
use crate::image_buffer::PixelSource;
use crate::marker::Marker;
use crate::quantization::{
    QuantizationTable, QuantizationTablePair, QuantizationTableType, TableClass, DEFAULT_QUALITY,
    MAXIMUM_QUALITY,
};
use crate::writer::{BitBuffer, JfifWrite, JfifWriter, ZIGZAG};
use crate::Density;

/// # Color types of an encoded image
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ColorType {
    /// One gray component
    Gray,

    /// Y, Cb and Cr at full resolution
    Ycbcr444,
}

impl ColorType {
    /// Number of blocks every block submission carries
    pub fn num_components(self) -> usize {
        match self {
            ColorType::Gray => 1,
            ColorType::Ycbcr444 => 3,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub(crate) struct Component {
    pub id: u8,
    pub quantization_table: u8,
    pub dc_huffman_table: u8,
    pub ac_huffman_table: u8,
    pub horizontal_sampling_factor: u8,
    pub vertical_sampling_factor: u8,
}

impl Component {
    const fn new(id: u8, table: u8) -> Component {
        Component {
            id,
            quantization_table: table,
            dc_huffman_table: table,
            ac_huffman_table: table,
            horizontal_sampling_factor: 1,
            vertical_sampling_factor: 1,
        }
    }
}

// Y uses the luma tables, Cb and Cr share the chroma tables
static COMPONENTS: [Component; 3] = [
    Component::new(1, 0),
    Component::new(2, 1),
    Component::new(3, 1),
];

fn table_class(component: usize) -> TableClass {
    if component == COMPONENT_Y {
        TableClass::Luma
    } else {
        TableClass::Chroma
    }
}

fn huffman_tables(component: usize) -> (&'static HuffmanTable, &'static HuffmanTable) {
    match table_class(component) {
        TableClass::Luma => (
            HuffmanTable::default_luma(CodingClass::Dc),
            HuffmanTable::default_luma(CodingClass::Ac),
        ),
        TableClass::Chroma => (
            HuffmanTable::default_chroma(CodingClass::Dc),
            HuffmanTable::default_chroma(CodingClass::Ac),
        ),
    }
}

/// Session options accepted by [Encoder::reset] and [encode_image]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EncoderOptions {
    /// Explicit tables; when set `quality` and `table_type` are ignored
    pub quantization_tables: Option<QuantizationTablePair>,

    /// Quality between 1 and 100 where 100 is the highest image quality
    pub quality: u8,

    /// Base tables scaled by `quality`
    pub table_type: QuantizationTableType,

    /// Pixel density written to the JFIF header
    pub density: Density,

    /// Run chroma through [downsample](crate::resample::downsample) and
    /// [upsample](crate::resample::upsample) before the transform.
    ///
    /// Only used by [encode_image]. The stream stays 4:4:4 but the chroma
    /// detail is that of a 4:2:0 area filter.
    pub smooth_chroma: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            quantization_tables: None,
            quality: DEFAULT_QUALITY,
            table_type: QuantizationTableType::Default,
            density: Density::None,
            smooth_chroma: false,
        }
    }
}

impl EncoderOptions {
    fn tables(&self) -> EncoderResult<QuantizationTablePair> {
        if let Some(tables) = self.quantization_tables {
            return Ok(tables);
        }

        if self.quality == 0 || self.quality > MAXIMUM_QUALITY {
            return Err(EncodingError::InvalidQuality(self.quality));
        }

        Ok(QuantizationTablePair::with_type(self.table_type, self.quality))
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum State {
    Uninitialized,
    Ready,
    Closed,
}

/// # Streaming baseline encoder
///
/// One session writes one image. [reset](Encoder::reset) writes the headers,
/// every [add_block1](Encoder::add_block1) or [add_block3](Encoder::add_block3)
/// call appends the entropy coded data of one block position (raster order) and
/// [finish](Encoder::finish) terminates the stream.
///
/// The sink is passed to every call and never stored. After `reset` no call
/// allocates: all state lives in fixed size fields of the session.
///
/// A failed call closes the session. Only `reset` makes it usable again.
/// Dropping a session before `finish` leaves a truncated stream in the sink.
#[derive(Clone, Debug)]
pub struct Encoder {
    state: State,
    color_type: ColorType,
    width: u16,
    height: u16,
    tables: QuantizationTablePair,

    prev_dc: [i16; 3],
    bits: BitBuffer,

    blocks_written: usize,
    expected_blocks: usize,

    // Quantized blocks in zig-zag order
    scratch: [[i16; 64]; 3],
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    /// Creates an uninitialized session
    pub fn new() -> Encoder {
        Encoder {
            state: State::Uninitialized,
            color_type: ColorType::Gray,
            width: 0,
            height: 0,
            tables: QuantizationTablePair::default(),
            prev_dc: [0; 3],
            bits: BitBuffer::default(),
            blocks_written: 0,
            expected_blocks: 0,
            scratch: [[0; 64]; 3],
        }
    }

    /// Starts a new image and writes its headers to `sink`
    ///
    /// With `options` set to `None` the default options are used: Annex K
    /// tables at quality [DEFAULT_QUALITY] and no density.
    pub fn reset<W: JfifWrite + ?Sized>(
        &mut self,
        sink: &mut W,
        color_type: ColorType,
        width: u16,
        height: u16,
        options: Option<&EncoderOptions>,
    ) -> EncoderResult<()> {
        self.state = State::Closed;

        if width == 0 || height == 0 {
            return Err(EncodingError::ZeroImageDimensions { width, height });
        }

        let defaults = EncoderOptions::default();
        let options = options.unwrap_or(&defaults);

        self.tables = options.tables()?;
        self.color_type = color_type;
        self.width = width;
        self.height = height;
        self.prev_dc = [0; 3];
        self.bits = BitBuffer::default();
        self.blocks_written = 0;
        self.expected_blocks = ceil_div(usize::from(width), 8) * ceil_div(usize::from(height), 8);

        let num_components = color_type.num_components();
        let components = &COMPONENTS[..num_components];

        let mut writer = JfifWriter::new(sink, &mut self.bits);

        writer.write_marker(Marker::SOI)?;
        writer.write_header(&options.density)?;

        writer.write_quantization_segment(0, &self.tables.luma)?;
        if num_components > 1 {
            writer.write_quantization_segment(1, &self.tables.chroma)?;
        }

        writer.write_frame_header(width, height, components)?;

        writer.write_huffman_segment(
            CodingClass::Dc,
            0,
            HuffmanTable::default_luma(CodingClass::Dc),
        )?;
        writer.write_huffman_segment(
            CodingClass::Ac,
            0,
            HuffmanTable::default_luma(CodingClass::Ac),
        )?;
        if num_components > 1 {
            writer.write_huffman_segment(
                CodingClass::Dc,
                1,
                HuffmanTable::default_chroma(CodingClass::Dc),
            )?;
            writer.write_huffman_segment(
                CodingClass::Ac,
                1,
                HuffmanTable::default_chroma(CodingClass::Ac),
            )?;
        }

        writer.write_scan_header(components)?;

        debug!(
            "Started {:?} image {}x{} with {} blocks",
            color_type, width, height, self.expected_blocks
        );

        self.state = State::Ready;

        Ok(())
    }

    /// Appends the block of a [ColorType::Gray] image
    pub fn add_block1<W: JfifWrite + ?Sized>(
        &mut self,
        sink: &mut W,
        block: &CoefficientBlock8,
    ) -> EncoderResult<()> {
        self.add_blocks(sink, core::slice::from_ref(block))
    }

    /// Appends the co-located Y, Cb and Cr blocks of a [ColorType::Ycbcr444] image
    pub fn add_block3<W: JfifWrite + ?Sized>(
        &mut self,
        sink: &mut W,
        blocks: &[CoefficientBlock8; 3],
    ) -> EncoderResult<()> {
        self.add_blocks(sink, blocks)
    }

    /// Pads the last byte, writes the end of image marker and closes the session
    ///
    /// The session is closed even if this fails.
    pub fn finish<W: JfifWrite + ?Sized>(&mut self, sink: &mut W) -> EncoderResult<()> {
        let result = self.write_trailer(sink);
        self.state = State::Closed;
        result
    }

    pub fn color_type(&self) -> ColorType {
        self.color_type
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of block positions submitted since the last reset
    pub fn blocks_written(&self) -> usize {
        self.blocks_written
    }

    /// Number of block positions the current frame holds
    pub fn expected_blocks(&self) -> usize {
        self.expected_blocks
    }

    /// Tables of the current session
    pub fn quantization_tables(&self) -> &QuantizationTablePair {
        &self.tables
    }

    /// Returns true if the session accepts blocks
    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    fn check_ready(&self) -> EncoderResult<()> {
        match self.state {
            State::Ready => Ok(()),
            State::Uninitialized => Err(EncodingError::NotInitialized),
            State::Closed => Err(EncodingError::Finished),
        }
    }

    fn add_blocks<W: JfifWrite + ?Sized>(
        &mut self,
        sink: &mut W,
        blocks: &[CoefficientBlock8],
    ) -> EncoderResult<()> {
        let result = self.encode_blocks(sink, blocks);
        if result.is_err() {
            self.state = State::Closed;
        }
        result
    }

    fn encode_blocks<W: JfifWrite + ?Sized>(
        &mut self,
        sink: &mut W,
        blocks: &[CoefficientBlock8],
    ) -> EncoderResult<()> {
        self.check_ready()?;

        let expected = self.color_type.num_components();
        if blocks.len() != expected {
            return Err(EncodingError::ComponentCountMismatch {
                color_type: self.color_type,
                expected,
                actual: blocks.len(),
            });
        }

        if self.blocks_written >= self.expected_blocks {
            return Err(EncodingError::TooManyBlocks {
                expected: self.expected_blocks,
            });
        }

        // Nothing is written unless every block of the call is representable
        for (component, block) in blocks.iter().enumerate() {
            quantize_block(
                self.tables.get(table_class(component)),
                component,
                block,
                &mut self.scratch[component],
            )?;
        }

        let mut writer = JfifWriter::new(sink, &mut self.bits);

        for (component, block) in self.scratch[..expected].iter().enumerate() {
            let (dc_table, ac_table) = huffman_tables(component);

            writer.write_block(block, self.prev_dc[component], dc_table, ac_table)?;
            self.prev_dc[component] = block[0];
        }

        self.blocks_written += 1;

        Ok(())
    }

    fn write_trailer<W: JfifWrite + ?Sized>(&mut self, sink: &mut W) -> EncoderResult<()> {
        self.check_ready()?;

        if self.blocks_written < self.expected_blocks {
            warn!(
                "Finishing image after {} of {} blocks",
                self.blocks_written, self.expected_blocks
            );
        }

        let mut writer = JfifWriter::new(sink, &mut self.bits);
        writer.finalize_bit_buffer()?;
        writer.write_marker(Marker::EOI)?;

        debug!("Finished image after {} blocks", self.blocks_written);

        Ok(())
    }
}

/// Quantizes `block` into zig-zag order, rejecting values a baseline stream
/// can't code
fn quantize_block(
    table: &QuantizationTable,
    component: usize,
    block: &CoefficientBlock8,
    out: &mut [i16; 64],
) -> EncoderResult<()> {
    for (i, (dst, &index)) in out.iter_mut().zip(ZIGZAG.iter()).enumerate() {
        let index = usize::from(index);
        let value = table.quantize(index, block.0[index]);

        // DC differences must fit 11 bits, AC magnitudes 10 bits
        let min = if i == 0 { -1024 } else { -1023 };
        if value < min || value > 1023 {
            return Err(EncodingError::CoefficientOutOfRange {
                component,
                index,
                value,
            });
        }

        *dst = value as i16;
    }

    Ok(())
}

fn ceil_div(value: usize, div: usize) -> usize {
    value / div + usize::from(value % div != 0)
}

/// Encodes a whole image read from `src`
///
/// Blocks are extracted in raster order, transformed and fed to a fresh
/// [Encoder]. Partial blocks at the right and bottom edges repeat the last
/// column and row.
pub fn encode_image<W: JfifWrite + ?Sized, S: PixelSource + ?Sized>(
    sink: &mut W,
    src: &S,
    color_type: ColorType,
    options: &EncoderOptions,
) -> EncoderResult<()> {
    let mut encoder = Encoder::new();
    encoder.reset(sink, color_type, src.width(), src.height(), Some(options))?;

    let width = usize::from(src.width());
    let height = usize::from(src.height());

    // Smoothed Cb and Cr of the 16x16 region the current block lies in
    let mut smoothed: Option<((usize, usize), [SuperBlock16; 2])> = None;

    for y in (0..height).step_by(8) {
        for x in (0..width).step_by(8) {
            match color_type {
                ColorType::Gray => {
                    let block = extract_block(src, x, y, COMPONENT_Y);
                    encoder.add_block1(sink, &block.forward_dct())?;
                }
                ColorType::Ycbcr444 => {
                    let mut blocks = extract_blocks(src, x, y);

                    if options.smooth_chroma {
                        let origin = (x & !15, y & !15);

                        let regions = match smoothed {
                            Some((cached, regions)) if cached == origin => regions,
                            _ => {
                                let regions = [COMPONENT_CB, COMPONENT_CR].map(|component| {
                                    extract_super_block(src, origin.0, origin.1, component)
                                        .downsample()
                                        .upsample()
                                });
                                smoothed = Some((origin, regions));
                                regions
                            }
                        };

                        let quadrant = ((y / 8) % 2) * 2 + (x / 8) % 2;
                        blocks[COMPONENT_CB] = regions[0].quadrant(quadrant);
                        blocks[COMPONENT_CR] = regions[1].quadrant(quadrant);
                    }

                    let coefficients = blocks.map(|block| block.forward_dct());
                    encoder.add_block3(sink, &coefficients)?;
                }
            }
        }
    }

    encoder.finish(sink)
}
