//! Chroma resampling between 16x16 super blocks and 8x8 blocks.

use crate::block::{SampleBlock8, SuperBlock16};

/// Averages every 2x2 neighbourhood of `block`, rounding to nearest
///
/// This is the area filter a 4:2:0 chroma reduction uses.
pub fn downsample(block: &SuperBlock16) -> SampleBlock8 {
    let mut out = SampleBlock8::default();

    for y in 0..8 {
        let top = &block.0[(2 * y) * 16..(2 * y) * 16 + 16];
        let bottom = &block.0[(2 * y + 1) * 16..(2 * y + 1) * 16 + 16];

        for x in 0..8 {
            let sum = u16::from(top[2 * x])
                + u16::from(top[2 * x + 1])
                + u16::from(bottom[2 * x])
                + u16::from(bottom[2 * x + 1]);

            out.0[y * 8 + x] = ((sum + 2) / 4) as u8;
        }
    }

    out
}

/// Expands `block` to 16x16 with a 9-3-3-1 bilinear kernel
///
/// Every source sample covers a 2x2 output patch. Each output sample takes
/// 9/16 of its own source sample, 3/16 of the horizontal and of the vertical
/// neighbour on the side it lies on and 1/16 of the diagonal one. Neighbours
/// outside the block repeat the edge sample.
pub fn upsample(block: &SampleBlock8) -> SuperBlock16 {
    let mut out = SuperBlock16::default();

    for oy in 0..16 {
        let sy = oy / 2;
        let ny = neighbour(sy, oy);

        for ox in 0..16 {
            let sx = ox / 2;
            let nx = neighbour(sx, ox);

            let near = u16::from(block.get(sx, sy));
            let horizontal = u16::from(block.get(nx, sy));
            let vertical = u16::from(block.get(sx, ny));
            let diagonal = u16::from(block.get(nx, ny));

            let sum = 9 * near + 3 * horizontal + 3 * vertical + diagonal;

            out.0[oy * 16 + ox] = ((sum + 8) >> 4) as u8;
        }
    }

    out
}

// Source index of the neighbour on the side of output position `o`
#[inline]
fn neighbour(s: usize, o: usize) -> usize {
    if o % 2 == 0 {
        s.saturating_sub(1)
    } else {
        (s + 1).min(7)
    }
}
