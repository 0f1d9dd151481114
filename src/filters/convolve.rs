//! 2D kernel convolution over single-channel 8-bit images.
//!
//! The engine slides a square, odd-dimensioned kernel over the image and
//! computes the weighted sum at every pixel (sliding-window correlation).
//! The numeric contract is part of the public API:
//!
//! - **Border policy**: out-of-bounds taps replicate the nearest edge pixel
//!   (clamp-to-edge). Every output pixel is filtered, including the border
//!   band.
//! - **Accumulator**: `f32`. Kernel coefficients and 8-bit samples at
//!   catalog scale stay well inside the exactly-representable integer range.
//! - **Store**: the accumulated sum is clamped to `[0, 255]` and rounded
//!   half-up before the `u8` store (saturating-cast semantics).
//!
//! No normalization is applied implicitly; kernels that should sum to 1
//! arrive pre-divided (see the catalog in [`crate::kernel`]).

use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;

use crate::error::{FilterError, Result};
use crate::kernel::Kernel;

/// Convolve a single-channel image with a square kernel.
///
/// Complexity is `O(width * height * size^2)`; output rows are partitioned
/// across the rayon thread pool, and pixels whose kernel footprint lies
/// fully inside the image take a fast path over contiguous row slices with
/// no per-tap coordinate clamping.
///
/// # Arguments
/// * `image` - Single-channel image, shape (height, width), values 0-255
/// * `kernel` - Square kernel with odd dimension
///
/// # Returns
/// New image with the input's dimensions.
///
/// # Errors
/// * [`FilterError::InvalidKernelShape`] if the kernel dimension is even or zero
/// * [`FilterError::EmptyImage`] if the image has zero width or height
pub fn convolve(image: ArrayView2<u8>, kernel: Kernel) -> Result<Array2<u8>> {
    let size = kernel.size();
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidKernelShape { size });
    }

    let (height, width) = image.dim();
    if height == 0 || width == 0 {
        return Err(FilterError::EmptyImage);
    }

    let src = super::contiguous(&image);
    let src = src.as_ref();
    let r = kernel.radius();

    let mut out = vec![0u8; width * height];
    out.par_chunks_mut(width).enumerate().for_each(|(y, out_row)| {
        let row_interior = r <= y && y + r < height;
        for (x, out_px) in out_row.iter_mut().enumerate() {
            let sum = if row_interior && r <= x && x + r < width {
                accumulate_interior(src, width, kernel, x, y, r)
            } else {
                accumulate_clamped(src, width, height, kernel, x, y, r)
            };
            // clamp to [0, 255], then round half-up
            *out_px = (sum.clamp(0.0, 255.0) + 0.5) as u8;
        }
    });

    Ok(Array2::from_shape_vec((height, width), out)
        .expect("output buffer length equals width * height"))
}

/// Weighted sum at a pixel whose kernel footprint is fully inside the image.
#[inline]
fn accumulate_interior(
    src: &[u8],
    width: usize,
    kernel: Kernel,
    x: usize,
    y: usize,
    r: usize,
) -> f32 {
    let size = kernel.size();
    let mut sum = 0.0f32;
    for ky in 0..size {
        let row = &src[(y + ky - r) * width + (x - r)..][..size];
        for (kx, &px) in row.iter().enumerate() {
            sum += kernel.at(kx, ky) * px as f32;
        }
    }
    sum
}

/// Weighted sum at a border pixel, replicating the nearest edge pixel for
/// taps that fall outside the image.
fn accumulate_clamped(
    src: &[u8],
    width: usize,
    height: usize,
    kernel: Kernel,
    x: usize,
    y: usize,
    r: usize,
) -> f32 {
    let size = kernel.size();
    let mut sum = 0.0f32;
    for ky in 0..size {
        let sy = (y as isize + ky as isize - r as isize).clamp(0, height as isize - 1) as usize;
        let row = &src[sy * width..(sy + 1) * width];
        for kx in 0..size {
            let sx = (x as isize + kx as isize - r as isize).clamp(0, width as isize - 1) as usize;
            sum += kernel.at(kx, ky) * row[sx] as f32;
        }
    }
    sum
}
