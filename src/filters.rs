//! Wavelet filter bank
//! Analysis filter pairs as static tables; adding a family is a data
//! change, not a control-flow change
//! no_std + alloc compatible

use core::str::FromStr;

use crate::dwt::WaveletError;

/// Daubechies-5 low-pass analysis filter, as produced by the MATLAB
/// `wfilters` function.
const DB5_LO_D: [f64; 10] = [
    0.00333572528500155,
    -0.0125807519990155,
    -0.00624149021301171,
    0.0775714938400652,
    -0.0322448695850295,
    -0.242294887066190,
    0.138428145901103,
    0.724308528438574,
    0.603829269797473,
    0.160102397974125,
];

/// Daubechies-5 high-pass analysis filter: the low-pass reversed with
/// alternating sign flips (quadrature mirror pair).
const DB5_HI_D: [f64; 10] = [
    -0.160102397974125,
    0.603829269797473,
    -0.724308528438574,
    0.138428145901103,
    0.242294887066190,
    -0.0322448695850295,
    -0.0775714938400652,
    -0.00624149021301171,
    0.0125807519990155,
    0.00333572528500155,
];

/// Wavelet families with built-in analysis filter pairs.
///
/// Parses from the toolbox family names via `FromStr` ("db5"); unknown
/// names fail with [`WaveletError::UnknownWavelet`] at construction
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wavelet {
    /// Daubechies wavelet with 5 vanishing moments, 10 filter taps.
    #[default]
    Db5,
}

impl Wavelet {
    /// Decomposition filter pair `(low_pass, high_pass)`.
    pub fn decompose_filters(self) -> (&'static [f64], &'static [f64]) {
        match self {
            Wavelet::Db5 => (&DB5_LO_D, &DB5_HI_D),
        }
    }

    /// Number of filter taps.
    pub fn filter_len(self) -> usize {
        match self {
            Wavelet::Db5 => DB5_LO_D.len(),
        }
    }
}

impl FromStr for Wavelet {
    type Err = WaveletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "db5" => Ok(Wavelet::Db5),
            _ => Err(WaveletError::UnknownWavelet),
        }
    }
}
