/// Markers used by a baseline sequential stream
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Marker {
    /// Start Of Image
    SOI,
    /// Application segment
    APP(u8),
    /// Define Quantization Table
    DQT,
    /// Start Of Frame, baseline DCT
    SOF0,
    /// Define Huffman Table
    DHT,
    /// Start Of Scan
    SOS,
    /// End Of Image
    EOI,
}

impl From<Marker> for u8 {
    fn from(marker: Marker) -> Self {
        use Marker::*;

        match marker {
            SOI => 0xD8,
            APP(nr) => 0xE0 | (nr & 0x0F),
            DQT => 0xDB,
            SOF0 => 0xC0,
            DHT => 0xC4,
            SOS => 0xDA,
            EOI => 0xD9,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Marker;

    #[test]
    fn test_marker_codes() {
        assert_eq!(u8::from(Marker::SOI), 0xD8);
        assert_eq!(u8::from(Marker::APP(0)), 0xE0);
        assert_eq!(u8::from(Marker::APP(14)), 0xEE);
        assert_eq!(u8::from(Marker::EOI), 0xD9);
    }
}
