//! Intensity histograms and CDF-based histogram equalization.
//!
//! The histogram is a 256-bin count of pixel intensities. Equalization
//! derives a lookup table from the cumulative distribution so the remapped
//! histogram spreads toward uniform:
//!
//! `lut[v] = round((cdf[v] - cdf_min) / (total - cdf_min) * 255)`
//!
//! where `cdf_min` is the cumulative count at the first populated bin.
//! Rounding is half-up, fixed so outputs are bit-exactly comparable.
//! Degenerate inputs (no pixels, or a single populated bin) produce the
//! identity table instead of dividing by zero, so a constant image
//! equalizes to itself.

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

/// Compute the 256-bin intensity histogram of a single-channel image.
///
/// Every pixel is counted exactly once (per-thread partial histograms over
/// row chunks, summed at the end). An empty image yields the all-zero
/// histogram; the sum of counts always equals `width * height`.
pub fn histogram(image: ArrayView2<u8>) -> [u32; 256] {
    let (height, width) = image.dim();
    if height == 0 || width == 0 {
        return [0u32; 256];
    }

    let src = super::contiguous(&image);
    src.as_ref()
        .par_chunks(width)
        .fold(
            || [0u32; 256],
            |mut hist, row| {
                for &px in row {
                    hist[px as usize] += 1;
                }
                hist
            },
        )
        .reduce(
            || [0u32; 256],
            |mut acc, partial| {
                for (a, p) in acc.iter_mut().zip(partial.iter()) {
                    *a += p;
                }
                acc
            },
        )
}

/// Build the equalization lookup table for a histogram.
///
/// The table is monotonically non-decreasing. If the histogram is empty or
/// has a single populated bin, the identity table is returned.
pub fn equalization_lut(hist: &[u32; 256]) -> [u8; 256] {
    let mut cdf = [0u64; 256];
    let mut running = 0u64;
    for (c, &count) in cdf.iter_mut().zip(hist.iter()) {
        running += count as u64;
        *c = running;
    }
    let total = running;

    // First populated bin's cumulative count. cdf_min == total means every
    // pixel shares one intensity; the scale denominator would be zero.
    let cdf_min = match cdf.iter().find(|&&c| c > 0) {
        Some(&c) if c < total => c,
        _ => return std::array::from_fn(|i| i as u8),
    };

    let scale = 255.0 / (total - cdf_min) as f64;
    std::array::from_fn(|v| {
        let spread = cdf[v].saturating_sub(cdf_min) as f64 * scale;
        // round half-up, clamped to the output range
        (spread + 0.5).floor().clamp(0.0, 255.0) as u8
    })
}

/// Remap every pixel through a 256-entry lookup table.
pub fn apply_lut(image: ArrayView2<u8>, lut: &[u8; 256]) -> Array2<u8> {
    let (height, width) = image.dim();
    if height == 0 || width == 0 {
        return Array2::zeros((height, width));
    }

    let src = super::contiguous(&image);
    let src = src.as_ref();

    let mut out = vec![0u8; width * height];
    out.par_chunks_mut(width)
        .zip(src.par_chunks(width))
        .for_each(|(out_row, in_row)| {
            for (out_px, &in_px) in out_row.iter_mut().zip(in_row.iter()) {
                *out_px = lut[in_px as usize];
            }
        });

    Array2::from_shape_vec((height, width), out)
        .expect("output buffer length equals width * height")
}

/// Histogram-equalize a single-channel image.
///
/// Composition of [`histogram`], [`equalization_lut`] and [`apply_lut`];
/// output dimensions match the input.
pub fn equalize(image: ArrayView2<u8>) -> Array2<u8> {
    let lut = equalization_lut(&histogram(image));
    apply_lut(image, &lut)
}
