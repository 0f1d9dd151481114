//! Filter modules operating on single-channel 8-bit image buffers.
//!
//! ## Image Format
//!
//! | Input | Shape | Description |
//! |-------|-------|-------------|
//! | Single-channel | (H, W) | Luminance samples, 0-255 |
//! | Color (luma conversion only) | (H, W, 1/3/4) | Gray, RGB or RGBA, 0-255 |
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - No shared state; the same inputs always yield the same output
//! - **Non-mutating** - Caller buffers are read-only views; every filter
//!   returns a new buffer
//! - **Row-parallel** - Per-pixel work is partitioned over output rows with
//!   rayon; no locking, the pool joins before the result is returned
//!
//! ## Filter Categories
//!
//! - **Spatial**: convolve (kernel filtering with clamp-to-edge borders)
//! - **Tonal**: histogram, equalization LUT construction and application
//! - **Feed-in**: luma conversion producing the single-channel buffer

pub mod convolve;
pub mod equalize;
pub mod grayscale;

use std::borrow::Cow;

use ndarray::ArrayView2;

/// Borrow the view's pixels as one contiguous row-major slice, copying only
/// when the caller handed us a non-standard layout (e.g. a slice of a
/// larger array).
pub(crate) fn contiguous<'a>(image: &ArrayView2<'a, u8>) -> Cow<'a, [u8]> {
    match image.to_slice() {
        Some(slice) => Cow::Borrowed(slice),
        None => Cow::Owned(image.iter().copied().collect()),
    }
}
