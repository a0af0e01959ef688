use core::num::NonZeroU8;

use crate::error::{EncoderResult, EncodingError};

/// Quality used when neither a quality nor explicit tables are given
pub const DEFAULT_QUALITY: u8 = 75;

/// Highest quality; every table entry becomes 1
pub const MAXIMUM_QUALITY: u8 = 100;

const ONE: NonZeroU8 = match NonZeroU8::new(1) {
    Some(v) => v,
    None => unreachable!(),
};

/// # Base tables scaled by the quality setting
///
/// Tables are based on tables from mozjpeg
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum QuantizationTableType {
    /// Sample quantization tables given in Annex K (Clause K.1) of Recommendation ITU-T T.81 (1992) | ISO/IEC 10918-1:1994.
    Default,

    /// Flat
    Flat,

    /// Custom, tuned for MS-SSIM
    CustomMsSsim,

    /// Custom, tuned for PSNR-HVS
    CustomPsnrHvs,

    /// ImageMagick table by N. Robidoux
    ///
    /// From <http://www.imagemagick.org/discourse-server/viewtopic.php?f=22&t=20333&p=98008#p98008>
    ImageMagick,

    /// Relevance of human vision to JPEG-DCT compression (1992) Klein, Silverstein and Carney.
    KleinSilversteinCarney,

    /// DCTune perceptual optimization of compressed dental X-Rays (1997) Watson, Taylor, Borthwick
    DentalXRays,

    /// A visual detection model for DCT coefficient quantization (12/9/93) Ahumada, Watson, Peterson
    VisualDetectionModel,

    /// An improved detection model for DCT coefficient quantization (1993) Peterson, Ahumada and Watson
    ImprovedDetectionModel,
}

impl Default for QuantizationTableType {
    fn default() -> Self {
        QuantizationTableType::Default
    }
}

impl QuantizationTableType {
    fn index(self) -> usize {
        use QuantizationTableType::*;

        match self {
            Default => 0,
            Flat => 1,
            CustomMsSsim => 2,
            CustomPsnrHvs => 3,
            ImageMagick => 4,
            KleinSilversteinCarney => 5,
            DentalXRays => 6,
            VisualDetectionModel => 7,
            ImprovedDetectionModel => 8,
        }
    }

    /// Unscaled base table for the given component class
    pub fn base_table(self, class: TableClass) -> &'static [u16; 64] {
        match class {
            TableClass::Luma => &LUMA_BASE_TABLES[self.index()],
            TableClass::Chroma => &CHROMA_BASE_TABLES[self.index()],
        }
    }
}

/// Component class a table applies to
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TableClass {
    Luma = 0,
    Chroma = 1,
}

// Tables are based on mozjpeg jcparam.c
#[rustfmt::skip]
static LUMA_BASE_TABLES: [[u16; 64]; 9] = [
    // Annex K
    [
         16,  11,  10,  16,  24,  40,  51,  61,
         12,  12,  14,  19,  26,  58,  60,  55,
         14,  13,  16,  24,  40,  57,  69,  56,
         14,  17,  22,  29,  51,  87,  80,  62,
         18,  22,  37,  56,  68, 109, 103,  77,
         24,  35,  55,  64,  81, 104, 113,  92,
         49,  64,  78,  87, 103, 121, 120, 101,
         72,  92,  95,  98, 112, 100, 103,  99,
    ],
    // Flat
    [
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
    ],
    // MS-SSIM
    [
         12,  17,  20,  21,  30,  34,  56,  63,
         18,  20,  20,  26,  28,  51,  61,  55,
         19,  20,  21,  26,  33,  58,  69,  55,
         26,  26,  26,  30,  46,  87,  86,  66,
         31,  33,  36,  40,  46,  96, 100,  73,
         40,  35,  46,  62,  81, 100, 111,  91,
         46,  66,  76,  86, 102, 121, 120, 101,
         68,  90,  90,  96, 113, 102, 105, 103,
    ],
    // PSNR-HVS
    [
          9,  10,  12,  14,  27,  32,  51,  62,
         11,  12,  14,  19,  27,  44,  59,  73,
         12,  14,  18,  25,  42,  59,  79,  78,
         17,  18,  25,  42,  61,  92,  87,  92,
         23,  28,  42,  75,  79, 112, 112,  99,
         40,  42,  59,  84,  88, 124, 132, 111,
         42,  64,  78,  95, 105, 126, 125,  99,
         70,  75, 100, 102, 116, 100, 107,  98,
    ],
    // ImageMagick
    [
         16,  16,  16,  18,  25,  37,  56,  85,
         16,  17,  20,  27,  34,  40,  53,  75,
         16,  20,  24,  31,  43,  62,  91, 135,
         18,  27,  31,  40,  53,  74, 106, 156,
         25,  34,  43,  53,  69,  94, 131, 189,
         37,  40,  62,  74,  94, 124, 169, 238,
         56,  53,  91, 106, 131, 169, 226, 311,
         85,  75, 135, 156, 189, 238, 311, 418,
    ],
    // Klein, Silverstein and Carney
    [
         10,  12,  14,  19,  26,  38,  57,  86,
         12,  18,  21,  28,  35,  41,  54,  76,
         14,  21,  25,  32,  44,  63,  92, 136,
         19,  28,  32,  41,  54,  75, 107, 157,
         26,  35,  44,  54,  70,  95, 132, 190,
         38,  41,  63,  75,  95, 125, 170, 239,
         57,  54,  92, 107, 132, 170, 227, 312,
         86,  76, 136, 157, 190, 239, 312, 419,
    ],
    // Watson, Taylor and Borthwick
    [
          7,   8,  10,  14,  23,  44,  95, 241,
          8,   8,  11,  15,  25,  47, 102, 255,
         10,  11,  13,  19,  31,  58, 127, 255,
         14,  15,  19,  27,  44,  83, 181, 255,
         23,  25,  31,  44,  72, 136, 255, 255,
         44,  47,  58,  83, 136, 255, 255, 255,
         95, 102, 127, 181, 255, 255, 255, 255,
        241, 255, 255, 255, 255, 255, 255, 255,
    ],
    // Ahumada, Watson and Peterson
    [
         15,  11,  11,  12,  15,  19,  25,  32,
         11,  13,  10,  10,  12,  15,  19,  24,
         11,  10,  14,  14,  16,  18,  22,  27,
         12,  10,  14,  18,  21,  24,  28,  33,
         15,  12,  16,  21,  26,  31,  36,  42,
         19,  15,  18,  24,  31,  38,  45,  53,
         25,  19,  22,  28,  36,  45,  55,  65,
         32,  24,  27,  33,  42,  53,  65,  77,
    ],
    // Peterson, Ahumada and Watson
    [
         14,  10,  11,  14,  19,  25,  34,  45,
         10,  11,  11,  12,  15,  20,  26,  33,
         11,  11,  15,  18,  21,  25,  31,  38,
         14,  12,  18,  24,  28,  33,  39,  47,
         19,  15,  21,  28,  36,  43,  51,  59,
         25,  20,  25,  33,  43,  54,  64,  74,
         34,  26,  31,  39,  51,  64,  77,  91,
         45,  33,  38,  47,  59,  74,  91, 108,
    ],
];

#[rustfmt::skip]
static CHROMA_BASE_TABLES: [[u16; 64]; 9] = [
    // Annex K
    [
         17,  18,  24,  47,  99,  99,  99,  99,
         18,  21,  26,  66,  99,  99,  99,  99,
         24,  26,  56,  99,  99,  99,  99,  99,
         47,  66,  99,  99,  99,  99,  99,  99,
         99,  99,  99,  99,  99,  99,  99,  99,
         99,  99,  99,  99,  99,  99,  99,  99,
         99,  99,  99,  99,  99,  99,  99,  99,
         99,  99,  99,  99,  99,  99,  99,  99,
    ],
    // Flat
    [
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
         16,  16,  16,  16,  16,  16,  16,  16,
    ],
    // MS-SSIM
    [
          8,  12,  15,  15,  86,  96,  96,  98,
         13,  13,  15,  26,  90,  96,  99,  98,
         12,  15,  18,  96,  99,  99,  99,  99,
         17,  16,  90,  96,  99,  99,  99,  99,
         96,  96,  99,  99,  99,  99,  99,  99,
         99,  99,  99,  99,  99,  99,  99,  99,
         99,  99,  99,  99,  99,  99,  99,  99,
         99,  99,  99,  99,  99,  99,  99,  99,
    ],
    // PSNR-HVS
    [
          9,  10,  17,  19,  62,  89,  91,  97,
         12,  13,  18,  29,  84,  91,  88,  98,
         14,  19,  29,  93,  95,  95,  98,  97,
         20,  26,  84,  88,  95,  95,  98,  94,
         26,  86,  91,  93,  97,  99,  98,  99,
         99, 100,  98,  99,  99,  99,  99,  99,
         99,  99,  99,  99,  99,  99,  99,  99,
         97,  97,  99,  99,  99,  99,  97,  99,
    ],
    // ImageMagick
    [
         16,  16,  16,  18,  25,  37,  56,  85,
         16,  17,  20,  27,  34,  40,  53,  75,
         16,  20,  24,  31,  43,  62,  91, 135,
         18,  27,  31,  40,  53,  74, 106, 156,
         25,  34,  43,  53,  69,  94, 131, 189,
         37,  40,  62,  74,  94, 124, 169, 238,
         56,  53,  91, 106, 131, 169, 226, 311,
         85,  75, 135, 156, 189, 238, 311, 418,
    ],
    // Klein, Silverstein and Carney
    [
         10,  12,  14,  19,  26,  38,  57,  86,
         12,  18,  21,  28,  35,  41,  54,  76,
         14,  21,  25,  32,  44,  63,  92, 136,
         19,  28,  32,  41,  54,  75, 107, 157,
         26,  35,  44,  54,  70,  95, 132, 190,
         38,  41,  63,  75,  95, 125, 170, 239,
         57,  54,  92, 107, 132, 170, 227, 312,
         86,  76, 136, 157, 190, 239, 312, 419,
    ],
    // Watson, Taylor and Borthwick
    [
          7,   8,  10,  14,  23,  44,  95, 241,
          8,   8,  11,  15,  25,  47, 102, 255,
         10,  11,  13,  19,  31,  58, 127, 255,
         14,  15,  19,  27,  44,  83, 181, 255,
         23,  25,  31,  44,  72, 136, 255, 255,
         44,  47,  58,  83, 136, 255, 255, 255,
         95, 102, 127, 181, 255, 255, 255, 255,
        241, 255, 255, 255, 255, 255, 255, 255,
    ],
    // Ahumada, Watson and Peterson
    [
         15,  11,  11,  12,  15,  19,  25,  32,
         11,  13,  10,  10,  12,  15,  19,  24,
         11,  10,  14,  14,  16,  18,  22,  27,
         12,  10,  14,  18,  21,  24,  28,  33,
         15,  12,  16,  21,  26,  31,  36,  42,
         19,  15,  18,  24,  31,  38,  45,  53,
         25,  19,  22,  28,  36,  45,  55,  65,
         32,  24,  27,  33,  42,  53,  65,  77,
    ],
    // Peterson, Ahumada and Watson
    [
         14,  10,  11,  14,  19,  25,  34,  45,
         10,  11,  11,  12,  15,  20,  26,  33,
         11,  11,  15,  18,  21,  25,  31,  38,
         14,  12,  18,  24,  28,  33,  39,  47,
         19,  15,  21,  28,  36,  43,  51,  59,
         25,  20,  25,  33,  43,  54,  64,  74,
         34,  26,  31,  39,  51,  64,  77,  91,
         45,  33,  38,  47,  59,  74,  91, 108,
    ],
];

/// Scale factor in percent of the IJG quality law
fn scale_factor(quality: u8) -> u32 {
    let quality = u32::from(quality.clamp(1, MAXIMUM_QUALITY));

    if quality < 50 {
        5000 / quality
    } else {
        200 - quality * 2
    }
}

/// 8x8 quantization factors in natural (row-major) order, each in `1..=255`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct QuantizationTable {
    table: [NonZeroU8; 64],
}

impl QuantizationTable {
    /// Uses `values` as given
    ///
    /// Fails with [EncodingError::InvalidQuantizationValue] if an entry is
    /// outside `1..=255`.
    pub fn new(values: &[u16; 64]) -> EncoderResult<QuantizationTable> {
        let mut table = [ONE; 64];

        for (index, (dst, &value)) in table.iter_mut().zip(values.iter()).enumerate() {
            *dst = u8::try_from(value)
                .ok()
                .and_then(NonZeroU8::new)
                .ok_or(EncodingError::InvalidQuantizationValue { index, value })?;
        }

        Ok(QuantizationTable { table })
    }

    /// Scales `base` by `quality`
    ///
    /// Quality below 50 scales by `5000 / quality`, otherwise by
    /// `200 - 2 * quality` (in percent). Entries are rounded and clamped to
    /// `1..=255`. Quality outside `1..=100` is clamped first.
    pub fn from_base(base: &[u16; 64], quality: u8) -> QuantizationTable {
        let scale = scale_factor(quality);

        let mut table = [ONE; 64];

        for (dst, &v) in table.iter_mut().zip(base.iter()) {
            let v = (u32::from(v) * scale + 50) / 100;
            *dst = NonZeroU8::new(v.clamp(1, 255) as u8).unwrap_or(ONE);
        }

        QuantizationTable { table }
    }

    /// Builds the table of `class` from the base tables of `table_type`
    pub fn standard(
        table_type: QuantizationTableType,
        class: TableClass,
        quality: u8,
    ) -> QuantizationTable {
        Self::from_base(table_type.base_table(class), quality)
    }

    /// Factor for the coefficient at natural `index`
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        self.table[index].get()
    }

    /// All factors in natural order
    pub fn values(&self) -> [u8; 64] {
        let mut values = [0u8; 64];
        for (dst, v) in values.iter_mut().zip(self.table.iter()) {
            *dst = v.get();
        }
        values
    }

    /// Divides `value` by the factor at `index`, rounding half away from zero
    #[inline]
    pub(crate) fn quantize(&self, index: usize, value: i16) -> i32 {
        let q = i32::from(self.table[index].get());
        let value = i32::from(value);

        if value < 0 {
            -((-value + q / 2) / q)
        } else {
            (value + q / 2) / q
        }
    }
}

/// Luma and chroma tables used together by a color session
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct QuantizationTablePair {
    pub luma: QuantizationTable,
    pub chroma: QuantizationTable,
}

impl QuantizationTablePair {
    pub fn new(luma: QuantizationTable, chroma: QuantizationTable) -> QuantizationTablePair {
        QuantizationTablePair { luma, chroma }
    }

    /// Annex K tables scaled by `quality`
    pub fn with_quality(quality: u8) -> QuantizationTablePair {
        Self::with_type(QuantizationTableType::Default, quality)
    }

    /// Base tables of `table_type` scaled by `quality`
    pub fn with_type(table_type: QuantizationTableType, quality: u8) -> QuantizationTablePair {
        QuantizationTablePair {
            luma: QuantizationTable::standard(table_type, TableClass::Luma, quality),
            chroma: QuantizationTable::standard(table_type, TableClass::Chroma, quality),
        }
    }

    pub fn get(&self, class: TableClass) -> &QuantizationTable {
        match class {
            TableClass::Luma => &self.luma,
            TableClass::Chroma => &self.chroma,
        }
    }
}

impl Default for QuantizationTablePair {
    fn default() -> Self {
        Self::with_quality(DEFAULT_QUALITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [QuantizationTableType; 9] = [
        QuantizationTableType::Default,
        QuantizationTableType::Flat,
        QuantizationTableType::CustomMsSsim,
        QuantizationTableType::CustomPsnrHvs,
        QuantizationTableType::ImageMagick,
        QuantizationTableType::KleinSilversteinCarney,
        QuantizationTableType::DentalXRays,
        QuantizationTableType::VisualDetectionModel,
        QuantizationTableType::ImprovedDetectionModel,
    ];

    fn luma(quality: u8) -> [u8; 64] {
        QuantizationTable::standard(QuantizationTableType::Default, TableClass::Luma, quality)
            .values()
    }

    #[test]
    fn test_quality_50_is_base_table() {
        let table = luma(50);

        for (&a, &b) in table.iter().zip(LUMA_BASE_TABLES[0].iter()) {
            assert_eq!(u16::from(a), b);
        }
    }

    #[rustfmt::skip]
    #[test]
    fn test_known_luma_tables() {
        assert_eq!(luma(25), [
            0x20, 0x16, 0x14, 0x20, 0x30, 0x50, 0x66, 0x7A,
            0x18, 0x18, 0x1C, 0x26, 0x34, 0x74, 0x78, 0x6E,
            0x1C, 0x1A, 0x20, 0x30, 0x50, 0x72, 0x8A, 0x70,
            0x1C, 0x22, 0x2C, 0x3A, 0x66, 0xAE, 0xA0, 0x7C,
            0x24, 0x2C, 0x4A, 0x70, 0x88, 0xDA, 0xCE, 0x9A,
            0x30, 0x46, 0x6E, 0x80, 0xA2, 0xD0, 0xE2, 0xB8,
            0x62, 0x80, 0x9C, 0xAE, 0xCE, 0xF2, 0xF0, 0xCA,
            0x90, 0xB8, 0xBE, 0xC4, 0xE0, 0xC8, 0xCE, 0xC6,
        ]);

        assert_eq!(luma(75), [
            0x08, 0x06, 0x05, 0x08, 0x0C, 0x14, 0x1A, 0x1F,
            0x06, 0x06, 0x07, 0x0A, 0x0D, 0x1D, 0x1E, 0x1C,
            0x07, 0x07, 0x08, 0x0C, 0x14, 0x1D, 0x23, 0x1C,
            0x07, 0x09, 0x0B, 0x0F, 0x1A, 0x2C, 0x28, 0x1F,
            0x09, 0x0B, 0x13, 0x1C, 0x22, 0x37, 0x34, 0x27,
            0x0C, 0x12, 0x1C, 0x20, 0x29, 0x34, 0x39, 0x2E,
            0x19, 0x20, 0x27, 0x2C, 0x34, 0x3D, 0x3C, 0x33,
            0x24, 0x2E, 0x30, 0x31, 0x38, 0x32, 0x34, 0x32,
        ]);

        assert_eq!(luma(90), [
            0x03, 0x02, 0x02, 0x03, 0x05, 0x08, 0x0A, 0x0C,
            0x02, 0x02, 0x03, 0x04, 0x05, 0x0C, 0x0C, 0x0B,
            0x03, 0x03, 0x03, 0x05, 0x08, 0x0B, 0x0E, 0x0B,
            0x03, 0x03, 0x04, 0x06, 0x0A, 0x11, 0x10, 0x0C,
            0x04, 0x04, 0x07, 0x0B, 0x0E, 0x16, 0x15, 0x0F,
            0x05, 0x07, 0x0B, 0x0D, 0x10, 0x15, 0x17, 0x12,
            0x0A, 0x0D, 0x10, 0x11, 0x15, 0x18, 0x18, 0x14,
            0x0E, 0x12, 0x13, 0x14, 0x16, 0x14, 0x15, 0x14,
        ]);

        assert_eq!(luma(95), [
            0x02, 0x01, 0x01, 0x02, 0x02, 0x04, 0x05, 0x06,
            0x01, 0x01, 0x01, 0x02, 0x03, 0x06, 0x06, 0x06,
            0x01, 0x01, 0x02, 0x02, 0x04, 0x06, 0x07, 0x06,
            0x01, 0x02, 0x02, 0x03, 0x05, 0x09, 0x08, 0x06,
            0x02, 0x02, 0x04, 0x06, 0x07, 0x0B, 0x0A, 0x08,
            0x02, 0x04, 0x06, 0x06, 0x08, 0x0A, 0x0B, 0x09,
            0x05, 0x06, 0x08, 0x09, 0x0A, 0x0C, 0x0C, 0x0A,
            0x07, 0x09, 0x0A, 0x0A, 0x0B, 0x0A, 0x0A, 0x0A,
        ]);
    }

    #[test]
    fn test_extremes() {
        for table_type in ALL_TYPES {
            for class in [TableClass::Luma, TableClass::Chroma] {
                let worst = QuantizationTable::standard(table_type, class, 1);
                assert_eq!(worst.values(), [255; 64], "{:?} {:?}", table_type, class);

                let best = QuantizationTable::standard(table_type, class, MAXIMUM_QUALITY);
                assert_eq!(best.values(), [1; 64], "{:?} {:?}", table_type, class);
            }
        }
    }

    #[test]
    fn test_out_of_range_quality_is_clamped() {
        assert_eq!(luma(0), luma(1));
        assert_eq!(luma(200), luma(100));
    }

    #[test]
    fn test_higher_quality_never_increases_factors() {
        for table_type in ALL_TYPES {
            for class in [TableClass::Luma, TableClass::Chroma] {
                let mut previous = QuantizationTable::standard(table_type, class, 1);

                for quality in 2..=MAXIMUM_QUALITY {
                    let table = QuantizationTable::standard(table_type, class, quality);

                    for i in 0..64 {
                        assert!(
                            table.get(i) <= previous.get(i),
                            "{:?} {:?} quality {} index {}",
                            table_type,
                            class,
                            quality,
                            i
                        );
                    }

                    previous = table;
                }
            }
        }
    }

    #[test]
    fn test_new_validates_range() {
        let mut values = [16u16; 64];
        assert!(QuantizationTable::new(&values).is_ok());

        values[5] = 0;
        assert!(matches!(
            QuantizationTable::new(&values),
            Err(EncodingError::InvalidQuantizationValue { index: 5, value: 0 })
        ));

        values[5] = 255;
        values[63] = 256;
        assert!(matches!(
            QuantizationTable::new(&values),
            Err(EncodingError::InvalidQuantizationValue { index: 63, value: 256 })
        ));
    }

    #[test]
    fn test_quantize_rounds_half_away_from_zero() {
        let table = QuantizationTable::new(&[10; 64]).unwrap();

        assert_eq!(table.quantize(0, 0), 0);
        assert_eq!(table.quantize(0, 4), 0);
        assert_eq!(table.quantize(0, 5), 1);
        assert_eq!(table.quantize(0, -5), -1);
        assert_eq!(table.quantize(0, -4), 0);
        assert_eq!(table.quantize(0, 15), 2);
        assert_eq!(table.quantize(0, -15), -2);
        assert_eq!(table.quantize(0, -415), -42);

        let table = QuantizationTable::new(&[1; 64]).unwrap();
        assert_eq!(table.quantize(7, i16::MIN), -32768);
        assert_eq!(table.quantize(7, i16::MAX), 32767);
    }

    #[test]
    fn test_pair() {
        let pair = QuantizationTablePair::with_quality(50);

        assert_eq!(pair.get(TableClass::Luma).get(0), 16);
        assert_eq!(pair.get(TableClass::Chroma).get(0), 17);
        assert_eq!(pair.chroma.get(63), 99);

        assert_eq!(QuantizationTablePair::default(), QuantizationTablePair::with_quality(75));
    }
}
