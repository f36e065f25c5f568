//! # wavedec - 1-D discrete wavelet transform
//!
//! Single-level and multi-level wavelet decomposition of real-valued
//! signals, following the numerical conventions of the usual wavelet
//! toolboxes: symmetric boundary extension, valid-mode convolution and
//! even-index decimation.
//!
//! ## Features
//!
//! - **no_std + alloc**: every routine allocates only its output buffers
//! - **Pure functions**: no shared state, safe to call from any thread
//! - **Filter bank as data**: wavelet taps are static tables keyed by
//!   the [`Wavelet`] enum
//! - **Closed mode enums**: extension and convolution policies are
//!   checked at the type level, with `FromStr` for the legacy string
//!   names
//!
//! ## Cargo Features
//!
//! - `std` (default): implements `std::error::Error` for [`WaveletError`]
//! - `internal-tests`: enables the property-test suite (proptest + rand)
//! - `verbose-logging`: per-level trace output in the decomposition
//!   cascade via the `log` crate
//!
//! ## Example
//!
//! ```
//! use wavedec::{dwt, ExtensionMode, Wavelet};
//!
//! let signal: Vec<f64> = (1..=32).map(f64::from).collect();
//! let (approx, detail) = dwt(&signal, Wavelet::Db5, ExtensionMode::Symmetric).unwrap();
//! assert_eq!(approx.len(), 20);
//! assert_eq!(detail.len(), 20);
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0
//! - MIT license
//!
//! at your option.

#![no_std]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Signal boundary extension
///
/// Symmetric (mirror) padding applied before filtering.
pub mod extend;

/// Discrete linear convolution
///
/// Direct-form convolution under full, same and valid output policies.
pub mod convolve;

/// Wavelet filter bank
///
/// Analysis filter pairs stored as static tables.
pub mod filters;

/// Discrete wavelet transform
///
/// Single-level analysis and the multi-level decomposition cascade.
pub mod dwt;

pub use convolve::{wconv1, ConvMode};
pub use dwt::{downsample, dwt, max_decomposition_level, wavelet_decomposition, WaveletError};
pub use extend::{wextend, ExtensionMode};
pub use filters::Wavelet;
