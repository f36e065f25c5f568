//! 1-D discrete wavelet transform
//! Single-level analysis (extend, filter, decimate) and the multi-level
//! decomposition cascade
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec::Vec;

use crate::convolve::{wconv1, ConvMode};
use crate::extend::{wextend, ExtensionMode};
use crate::filters::Wavelet;

/// Errors surfaced by the transform routines.
///
/// All failures are immediate and non-retryable; the caller owns every
/// recovery decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveletError {
    /// A convolution operand was empty.
    EmptyInput,
    /// The requested boundary extension is longer than the signal.
    ExtensionTooLong,
    /// Downsampling window bound violated.
    InvalidWindow,
    /// Wavelet family name not present in the filter table.
    UnknownWavelet,
    /// Extension or convolution mode name not recognized.
    UnknownMode,
}

impl core::fmt::Display for WaveletError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WaveletError::EmptyInput => f.write_str("input or filter is empty"),
            WaveletError::ExtensionTooLong => {
                f.write_str("extension length exceeds signal length")
            }
            WaveletError::InvalidWindow => {
                f.write_str("window bound last must be at least twice first")
            }
            WaveletError::UnknownWavelet => f.write_str("unknown wavelet family name"),
            WaveletError::UnknownMode => f.write_str("unknown mode name"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for WaveletError {}

/// Keep every second element of `coeffs`, starting at the 1-based index
/// `first` and scanning through the end of the buffer.
///
/// `last` only gates the window precondition `last >= 2 * first`; it
/// does not bound the scan, which always runs to the end of `coeffs`.
/// Fails with [`WaveletError::InvalidWindow`] when `first` is zero or
/// the precondition is violated.
pub fn downsample(coeffs: &[f64], first: usize, last: usize) -> Result<Vec<f64>, WaveletError> {
    if first == 0 || last < 2 * first {
        return Err(WaveletError::InvalidWindow);
    }
    Ok(coeffs.iter().skip(first - 1).step_by(2).copied().collect())
}

/// Single-level discrete wavelet transform.
///
/// Extends `signal` symmetrically by `filter_len - 1` samples, filters
/// the extension with the analysis pair in valid mode and decimates
/// both outputs to every second sample. Returns the
/// `(approximation, detail)` coefficient pair, each of length
/// `floor((signal.len() + filter_len - 1) / 2)`.
///
/// An empty signal surfaces [`WaveletError::EmptyInput`]; a signal
/// shorter than `filter_len - 1` surfaces
/// [`WaveletError::ExtensionTooLong`].
pub fn dwt(
    signal: &[f64],
    wavelet: Wavelet,
    mode: ExtensionMode,
) -> Result<(Vec<f64>, Vec<f64>), WaveletError> {
    let (lo_d, hi_d) = wavelet.decompose_filters();
    let extend_len = lo_d.len() - 1;

    let extended = wextend(signal, extend_len, mode)?;

    // low-pass for the coarse structure, high-pass for the residual
    let approx = wconv1(&extended, lo_d, ConvMode::Valid)?;
    let detail = wconv1(&extended, hi_d, ConvMode::Valid)?;

    let first = 2;
    let last = signal.len() + extend_len;
    let ca = downsample(&approx, first, last)?;
    let cd = downsample(&detail, first, last)?;

    Ok((ca, cd))
}

/// Multi-level wavelet decomposition.
///
/// Applies [`dwt`] `level` times to the running approximation with
/// symmetric extension. Returns the flattened coefficient vector
/// `[cA_L | cD_L | cD_(L-1) | ... | cD_1]` together with the per-level
/// detail lengths in decomposition order (level 1 first); the lengths
/// slice the detail region of the flattened vector back apart.
///
/// `level == 0` returns the signal unchanged with an empty length
/// list. Any error raised by a nested [`dwt`] call propagates
/// unchanged; no partial results are returned.
pub fn wavelet_decomposition(
    signal: &[f64],
    level: usize,
    wavelet: Wavelet,
) -> Result<(Vec<f64>, Vec<usize>), WaveletError> {
    let mut coeffs = signal.to_vec();
    let mut details: Vec<Vec<f64>> = Vec::with_capacity(level);
    let mut lengths: Vec<usize> = Vec::with_capacity(level);

    for _step in 0..level {
        let (ca, cd) = dwt(&coeffs, wavelet, ExtensionMode::Symmetric)?;
        #[cfg(feature = "verbose-logging")]
        log::trace!(
            "wavedec level {}: cA len {}, cD len {}",
            _step + 1,
            ca.len(),
            cd.len()
        );
        lengths.push(cd.len());
        details.push(cd);
        coeffs = ca;
    }

    // deepest level's details come first in the flattened vector
    for cd in details.iter().rev() {
        coeffs.extend_from_slice(cd);
    }

    Ok((coeffs, lengths))
}

/// Maximum number of useful decomposition levels for a signal of
/// `signal_len` samples: `floor(log2(signal_len / (filter_len - 1)))`,
/// the convention of the usual wavelet toolboxes. Returns 0 when the
/// signal is shorter than the filter.
pub fn max_decomposition_level(signal_len: usize, wavelet: Wavelet) -> usize {
    let filter_len = wavelet.filter_len();
    if signal_len < filter_len {
        return 0;
    }
    libm::log2(signal_len as f64 / (filter_len - 1) as f64) as usize
}




#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn coefficient_length_law(
            signal in proptest::collection::vec(-1e3f64..1e3, 9..128),
        ) {
            let (ca, cd) = dwt(&signal, Wavelet::Db5, ExtensionMode::Symmetric).unwrap();
            let expected = (signal.len() + 10 - 1) / 2;
            prop_assert_eq!(ca.len(), expected);
            prop_assert_eq!(cd.len(), expected);
        }

        #[test]
        fn cascade_conserves_length(
            signal in proptest::collection::vec(-1e3f64..1e3, 9..128),
            level in 0usize..5,
        ) {
            let (coeffs, lengths) =
                wavelet_decomposition(&signal, level, Wavelet::Db5).unwrap();
            prop_assert_eq!(lengths.len(), level);

            let mut n = signal.len();
            for &len in &lengths {
                prop_assert_eq!(len, (n + 10 - 1) / 2);
                n = len;
            }
            let detail_total: usize = lengths.iter().sum();
            prop_assert_eq!(coeffs.len(), n + detail_total);
        }
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod random_signal_tests {
    use super::*;
    use alloc::vec::Vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn single_level_matches_cascade_at_level_one() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..16 {
            let n = rng.gen_range(9..256);
            let signal: Vec<f64> = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
            let (ca, cd) = dwt(&signal, Wavelet::Db5, ExtensionMode::Symmetric).unwrap();
            let (coeffs, lengths) = wavelet_decomposition(&signal, 1, Wavelet::Db5).unwrap();
            assert_eq!(lengths, [cd.len()]);
            assert_eq!(coeffs[..ca.len()], ca);
            assert_eq!(coeffs[ca.len()..], cd);
        }
    }
}
