//! The fixed Huffman tables of Annex K (Clause K.3) of ITU-T T.81.
//!
//! Lookup tables are evaluated at compile time so they live in the binary as
//! immutable data and sessions only ever hold references to them.

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CodingClass {
    Dc = 0,
    Ac = 1,
}

const DC_LUMA_LENGTHS: [u8; 16] = [0, 1, 5, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0];
const DC_LUMA_VALUES: [u8; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

const DC_CHROMA_LENGTHS: [u8; 16] = [0, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0];
const DC_CHROMA_VALUES: [u8; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

const AC_LUMA_LENGTHS: [u8; 16] = [0, 2, 1, 3, 3, 2, 4, 3, 5, 5, 4, 4, 0, 0, 1, 0x7D];
const AC_LUMA_VALUES: [u8; 162] = [
    0x01, 0x02, 0x03, 0x00, 0x04, 0x11, 0x05, 0x12, 0x21, 0x31, 0x41, 0x06, 0x13, 0x51, 0x61, 0x07,
    0x22, 0x71, 0x14, 0x32, 0x81, 0x91, 0xA1, 0x08, 0x23, 0x42, 0xB1, 0xC1, 0x15, 0x52, 0xD1, 0xF0,
    0x24, 0x33, 0x62, 0x72, 0x82, 0x09, 0x0A, 0x16, 0x17, 0x18, 0x19, 0x1A, 0x25, 0x26, 0x27, 0x28,
    0x29, 0x2A, 0x34, 0x35, 0x36, 0x37, 0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48, 0x49,
    0x4A, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68, 0x69,
    0x6A, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89,
    0x8A, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7,
    0xA8, 0xA9, 0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3, 0xC4, 0xC5,
    0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA, 0xE1, 0xE2,
    0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF1, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8,
    0xF9, 0xFA,
];

const AC_CHROMA_LENGTHS: [u8; 16] = [0, 2, 1, 2, 4, 4, 3, 4, 7, 5, 4, 4, 0, 1, 2, 0x77];
const AC_CHROMA_VALUES: [u8; 162] = [
    0x00, 0x01, 0x02, 0x03, 0x11, 0x04, 0x05, 0x21, 0x31, 0x06, 0x12, 0x41, 0x51, 0x07, 0x61, 0x71,
    0x13, 0x22, 0x32, 0x81, 0x08, 0x14, 0x42, 0x91, 0xA1, 0xB1, 0xC1, 0x09, 0x23, 0x33, 0x52, 0xF0,
    0x15, 0x62, 0x72, 0xD1, 0x0A, 0x16, 0x24, 0x34, 0xE1, 0x25, 0xF1, 0x17, 0x18, 0x19, 0x1A, 0x26,
    0x27, 0x28, 0x29, 0x2A, 0x35, 0x36, 0x37, 0x38, 0x39, 0x3A, 0x43, 0x44, 0x45, 0x46, 0x47, 0x48,
    0x49, 0x4A, 0x53, 0x54, 0x55, 0x56, 0x57, 0x58, 0x59, 0x5A, 0x63, 0x64, 0x65, 0x66, 0x67, 0x68,
    0x69, 0x6A, 0x73, 0x74, 0x75, 0x76, 0x77, 0x78, 0x79, 0x7A, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87,
    0x88, 0x89, 0x8A, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0xA2, 0xA3, 0xA4, 0xA5,
    0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xC2, 0xC3,
    0xC4, 0xC5, 0xC6, 0xC7, 0xC8, 0xC9, 0xCA, 0xD2, 0xD3, 0xD4, 0xD5, 0xD6, 0xD7, 0xD8, 0xD9, 0xDA,
    0xE2, 0xE3, 0xE4, 0xE5, 0xE6, 0xE7, 0xE8, 0xE9, 0xEA, 0xF2, 0xF3, 0xF4, 0xF5, 0xF6, 0xF7, 0xF8,
    0xF9, 0xFA,
];

pub(crate) static DEFAULT_LUMA_DC: HuffmanTable = HuffmanTable::new(&DC_LUMA_LENGTHS, &DC_LUMA_VALUES);
pub(crate) static DEFAULT_LUMA_AC: HuffmanTable = HuffmanTable::new(&AC_LUMA_LENGTHS, &AC_LUMA_VALUES);
pub(crate) static DEFAULT_CHROMA_DC: HuffmanTable =
    HuffmanTable::new(&DC_CHROMA_LENGTHS, &DC_CHROMA_VALUES);
pub(crate) static DEFAULT_CHROMA_AC: HuffmanTable =
    HuffmanTable::new(&AC_CHROMA_LENGTHS, &AC_CHROMA_VALUES);

/// A canonical Huffman table together with a symbol -> (size, code) lookup
#[derive(Debug)]
pub struct HuffmanTable {
    lengths: [u8; 16],
    values: &'static [u8],
    lookup_table: [(u8, u16); 256],
}

impl HuffmanTable {
    pub const fn new(lengths: &[u8; 16], values: &'static [u8]) -> HuffmanTable {
        HuffmanTable {
            lengths: *lengths,
            values,
            lookup_table: create_lookup_table(lengths, values),
        }
    }

    /// Standard luma table pair for the given class
    pub fn default_luma(class: CodingClass) -> &'static HuffmanTable {
        match class {
            CodingClass::Dc => &DEFAULT_LUMA_DC,
            CodingClass::Ac => &DEFAULT_LUMA_AC,
        }
    }

    /// Standard chroma table pair for the given class
    pub fn default_chroma(class: CodingClass) -> &'static HuffmanTable {
        match class {
            CodingClass::Dc => &DEFAULT_CHROMA_DC,
            CodingClass::Ac => &DEFAULT_CHROMA_AC,
        }
    }

    /// Returns `(size, code)` for a symbol. Symbols not in the table have size 0.
    #[inline]
    pub fn get_for_value(&self, value: u8) -> &(u8, u16) {
        &self.lookup_table[value as usize]
    }

    /// Number of codes for each code length from 1 to 16
    pub fn lengths(&self) -> &[u8; 16] {
        &self.lengths
    }

    /// Symbols ordered by code
    pub fn values(&self) -> &[u8] {
        self.values
    }
}

const fn create_lookup_table(lengths: &[u8; 16], values: &[u8]) -> [(u8, u16); 256] {
    let mut table = [(0u8, 0u16); 256];

    let mut code = 0u32;
    let mut k = 0;

    let mut length = 0;
    while length < 16 {
        let mut j = 0;
        while j < lengths[length] {
            table[values[k] as usize] = ((length + 1) as u8, code as u16);
            code += 1;
            k += 1;
            j += 1;
        }
        code <<= 1;
        length += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_codes() {
        assert_eq!(*DEFAULT_LUMA_DC.get_for_value(0), (2, 0b00));
        assert_eq!(*DEFAULT_LUMA_DC.get_for_value(1), (3, 0b010));
        assert_eq!(*DEFAULT_LUMA_DC.get_for_value(11), (9, 0b1_1111_1110));

        // EOB and ZRL
        assert_eq!(*DEFAULT_LUMA_AC.get_for_value(0x00), (4, 0b1010));
        assert_eq!(*DEFAULT_LUMA_AC.get_for_value(0xF0), (11, 0x7F9));
        assert_eq!(*DEFAULT_LUMA_AC.get_for_value(0x01), (2, 0b00));
        assert_eq!(*DEFAULT_LUMA_AC.get_for_value(0xFA), (16, 0xFFFE));
    }

    #[test]
    fn test_chroma_codes() {
        assert_eq!(*DEFAULT_CHROMA_DC.get_for_value(0), (2, 0b00));
        assert_eq!(*DEFAULT_CHROMA_DC.get_for_value(3), (3, 0b110));

        assert_eq!(*DEFAULT_CHROMA_AC.get_for_value(0x00), (2, 0b00));
        assert_eq!(*DEFAULT_CHROMA_AC.get_for_value(0xF0), (10, 0x3FA));
    }

    #[test]
    fn test_all_symbols_have_codes() {
        for table in [&DEFAULT_LUMA_AC, &DEFAULT_CHROMA_AC] {
            assert_eq!(table.values().len(), 162);

            let total: usize = table.lengths().iter().map(|&l| l as usize).sum();
            assert_eq!(total, 162);

            for run in 0..16u8 {
                for size in 1..=10u8 {
                    let (len, _) = *table.get_for_value((run << 4) | size);
                    assert!(len > 0, "missing code for run {} size {}", run, size);
                }
            }
        }
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = &DEFAULT_LUMA_AC;

        for &a in table.values() {
            for &b in table.values() {
                if a == b {
                    continue;
                }
                let (len_a, code_a) = *table.get_for_value(a);
                let (len_b, code_b) = *table.get_for_value(b);
                if len_a <= len_b {
                    assert_ne!(code_b >> (len_b - len_a), code_a, "{:x} prefixes {:x}", a, b);
                }
            }
        }
    }
}
