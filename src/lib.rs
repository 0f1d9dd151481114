//! Inspectra
//!
//! Spatial filtering and histogram engine for 8-bit image inspection.
//!
//! ## Image Format
//! The core operates on single-channel buffers:
//! - **Input**: `ArrayView2<u8>`, shape (height, width), intensities 0-255
//! - **Output**: a new `Array2<u8>` of the same dimensions; caller buffers
//!   are never mutated
//!
//! A luma conversion ([`luma`]) is provided to collapse (H, W, 1/3/4) color
//! buffers into the single channel the core consumes. Decoding, encoding,
//! channel splitting and plotting belong to the caller.
//!
//! ## Numeric Contract
//! The details an external vision library would hide are fixed here and are
//! part of the public API:
//! - Convolution border policy: clamp-to-edge (replicate)
//! - Accumulation in `f32`, saturating store with half-up rounding
//! - Equalization LUT: `round((cdf - cdf_min) / (total - cdf_min) * 255)`,
//!   half-up, identity on degenerate histograms
//!
//! ## Example
//! ```
//! use inspectra::{convolve, equalize, histogram, kernel};
//! use ndarray::Array2;
//!
//! let image = Array2::<u8>::from_elem((64, 64), 100);
//! let _edges = convolve(image.view(), kernel::SOBEL_X_3X3).unwrap();
//! let hist = histogram(image.view());
//! assert_eq!(hist[100], 64 * 64);
//! let spread = equalize(image.view());
//! assert_eq!(spread, image);
//! ```

pub mod error;
pub mod filters;
pub mod kernel;

pub use error::{FilterError, Result};
pub use filters::convolve::convolve;
pub use filters::equalize::{apply_lut, equalization_lut, equalize, histogram};
pub use filters::grayscale::luma;
pub use kernel::Kernel;
