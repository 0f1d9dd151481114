//! Luma conversion feeding the single-channel core.
//!
//! Uses ITU-R BT.601 luma coefficients, matching the gray conversion of
//! mainstream vision libraries so filtered output lines up with theirs.

use ndarray::{Array2, ArrayView3};

use crate::error::{FilterError, Result};

/// ITU-R BT.601 luma coefficients
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Collapse a color image to a single luma channel.
///
/// Accepts shapes (H, W, 1) (copied through), (H, W, 3) RGB and (H, W, 4)
/// RGBA (alpha ignored). Luma is `0.299 R + 0.587 G + 0.114 B`, rounded
/// half-up.
///
/// # Errors
/// [`FilterError::UnsupportedChannels`] for any other channel count.
pub fn luma(input: ArrayView3<u8>) -> Result<Array2<u8>> {
    let (height, width, channels) = input.dim();
    if !matches!(channels, 1 | 3 | 4) {
        return Err(FilterError::UnsupportedChannels { channels });
    }

    let mut output = Array2::<u8>::zeros((height, width));

    if channels == 1 {
        for y in 0..height {
            for x in 0..width {
                output[[y, x]] = input[[y, x, 0]];
            }
        }
        return Ok(output);
    }

    for y in 0..height {
        for x in 0..width {
            let r = input[[y, x, 0]] as f32;
            let g = input[[y, x, 1]] as f32;
            let b = input[[y, x, 2]] as f32;

            // weights sum to 1, so the result stays within 0-255
            output[[y, x]] = (LUMA_R * r + LUMA_G * g + LUMA_B * b + 0.5) as u8;
        }
    }

    Ok(output)
}
