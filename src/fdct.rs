//! Forward and inverse 8x8 DCT.
//!
//! Both directions evaluate the separable type-II DCT definition directly in
//! double precision instead of a fast factorization. This reproduces the
//! mathematical result to integer precision, which a scaled fixed-point
//! algorithm like LL&M does not guarantee for coefficients close to a
//! rounding boundary.
//!
//! Results are rounded half away from zero.

use crate::block::{CoefficientBlock8, SampleBlock8};

// c(u) * cos(k * pi / 16) with c(0) = sqrt(1/8) and c(u) = 1/2 otherwise
const C0: f64 = 0.353_553_390_593_273_8;
const C1: f64 = 0.490_392_640_201_615_2;
const C2: f64 = 0.461_939_766_255_643_4;
const C3: f64 = 0.415_734_806_151_272_6;
const C4: f64 = 0.353_553_390_593_273_8;
const C5: f64 = 0.277_785_116_509_801_1;
const C6: f64 = 0.191_341_716_182_544_9;
const C7: f64 = 0.097_545_161_008_064_17;

/// Orthonormal basis: `BASIS[u][x] = c(u) * cos((2x + 1) * u * pi / 16)`
#[rustfmt::skip]
static BASIS: [[f64; 8]; 8] = [
    [C0, C0, C0, C0, C0, C0, C0, C0],
    [C1, C3, C5, C7, -C7, -C5, -C3, -C1],
    [C2, C6, -C6, -C2, -C2, -C6, C6, C2],
    [C3, -C7, -C1, -C5, C5, C1, C7, -C3],
    [C4, -C4, -C4, C4, C4, -C4, -C4, C4],
    [C5, -C1, C7, C3, -C3, -C7, C1, -C5],
    [C6, -C2, C2, -C6, -C6, C2, -C2, C6],
    [C7, -C5, C3, -C1, C1, -C3, C5, -C7],
];

#[inline(always)]
fn round_half_away(value: f64) -> i32 {
    if value >= 0.0 {
        (value + 0.5) as i32
    } else {
        -((-value + 0.5) as i32)
    }
}

/// Computes the 2-D DCT of the level shifted (`sample - 128`) block
pub fn forward_transform(block: &SampleBlock8) -> CoefficientBlock8 {
    // Pass 1: columns, tmp[v][x] = sum_y BASIS[v][y] * s[y][x]
    let mut tmp = [0f64; 64];

    for v in 0..8 {
        let basis = &BASIS[v];
        for x in 0..8 {
            let mut acc = 0.0;
            for y in 0..8 {
                acc += basis[y] * (f64::from(block.0[y * 8 + x]) - 128.0);
            }
            tmp[v * 8 + x] = acc;
        }
    }

    // Pass 2: rows, out[v][u] = sum_x BASIS[u][x] * tmp[v][x]
    let mut out = CoefficientBlock8::default();

    for v in 0..8 {
        let row = &tmp[v * 8..v * 8 + 8];
        for u in 0..8 {
            let basis = &BASIS[u];
            let mut acc = 0.0;
            for x in 0..8 {
                acc += basis[x] * row[x];
            }
            out.0[v * 8 + u] = round_half_away(acc) as i16;
        }
    }

    out
}

/// Computes the inverse 2-D DCT, undoing the level shift and clamping the
/// result to `0..=255`
pub fn inverse_transform(block: &CoefficientBlock8) -> SampleBlock8 {
    // Pass 1: tmp[y][u] = sum_v BASIS[v][y] * F[v][u]
    let mut tmp = [0f64; 64];

    for y in 0..8 {
        for u in 0..8 {
            let mut acc = 0.0;
            for v in 0..8 {
                acc += BASIS[v][y] * f64::from(block.0[v * 8 + u]);
            }
            tmp[y * 8 + u] = acc;
        }
    }

    // Pass 2: s[y][x] = 128 + sum_u BASIS[u][x] * tmp[y][u]
    let mut out = SampleBlock8::default();

    for y in 0..8 {
        let row = &tmp[y * 8..y * 8 + 8];
        for x in 0..8 {
            let mut acc = 128.0;
            for u in 0..8 {
                acc += BASIS[u][x] * row[u];
            }
            out.0[y * 8 + x] = round_half_away(acc).clamp(0, 255) as u8;
        }
    }

    out
}
