//! Signal boundary extension for wavelet filtering
//! Symmetric (mirror) padding, edge samples duplicated
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::dwt::WaveletError;

/// Boundary extension modes.
///
/// Parses from the toolbox mode names via `FromStr` ("sym"); anything
/// else fails with [`WaveletError::UnknownMode`] at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionMode {
    /// Half-sample symmetric extension: the signal is mirrored at each
    /// edge with the boundary sample duplicated, `[2,1 | 1,2,3 | 3,2]`.
    #[default]
    Symmetric,
}

impl FromStr for ExtensionMode {
    type Err = WaveletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sym" => Ok(ExtensionMode::Symmetric),
            _ => Err(WaveletError::UnknownMode),
        }
    }
}

/// Extend `input` at both ends by `extend_len` mirrored samples.
///
/// The front pad is the first `extend_len` samples reversed and the
/// back pad is the last `extend_len` samples reversed, so the output
/// has length `input.len() + 2 * extend_len` with `input` copied into
/// the middle. An empty input or a zero extension length is returned
/// unchanged. Fails with [`WaveletError::ExtensionTooLong`] when the
/// extension would read past the signal.
pub fn wextend(
    input: &[f64],
    extend_len: usize,
    mode: ExtensionMode,
) -> Result<Vec<f64>, WaveletError> {
    if input.is_empty() || extend_len == 0 {
        return Ok(input.to_vec());
    }
    if input.len() < extend_len {
        return Err(WaveletError::ExtensionTooLong);
    }
    let n = input.len();
    match mode {
        ExtensionMode::Symmetric => {
            let mut extended = vec![0.0; n + 2 * extend_len];
            for i in 0..extend_len {
                extended[i] = input[extend_len - 1 - i];
                extended[extend_len + n + i] = input[n - 1 - i];
            }
            extended[extend_len..extend_len + n].copy_from_slice(input);
            Ok(extended)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_a_ramp() {
        let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let out = wextend(&input, 5, ExtensionMode::Symmetric).unwrap();
        let expected = [
            5.0, 4.0, 3.0, 2.0, 1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 10.0,
            9.0, 8.0, 7.0, 6.0,
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn mirrors_a_short_signal() {
        let out = wextend(&[1.0, 2.0, 3.0], 2, ExtensionMode::Symmetric).unwrap();
        assert_eq!(out, [2.0, 1.0, 1.0, 2.0, 3.0, 3.0, 2.0]);
    }

    #[test]
    fn zero_extension_is_identity() {
        let out = wextend(&[1.0, 2.0, 3.0], 0, ExtensionMode::Symmetric).unwrap();
        assert_eq!(out, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_input_passes_through() {
        let out = wextend(&[], 2, ExtensionMode::Symmetric).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn constant_signal_stays_constant() {
        let out = wextend(&[1.0; 5], 2, ExtensionMode::Symmetric).unwrap();
        assert_eq!(out, [1.0; 9]);
    }

    #[test]
    fn rejects_extension_longer_than_input() {
        assert_eq!(
            wextend(&[1.0, 2.0], 5, ExtensionMode::Symmetric),
            Err(WaveletError::ExtensionTooLong)
        );
        assert_eq!(
            wextend(&[0.0], 2, ExtensionMode::Symmetric),
            Err(WaveletError::ExtensionTooLong)
        );
    }

    #[test]
    fn parses_mode_names() {
        assert_eq!("sym".parse::<ExtensionMode>(), Ok(ExtensionMode::Symmetric));
        assert_eq!(
            "invalid_mode".parse::<ExtensionMode>(),
            Err(WaveletError::UnknownMode)
        );
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn length_and_middle_slice_laws(
            input in proptest::collection::vec(-1e6f64..1e6, 1..64),
            k in 0usize..64,
        ) {
            prop_assume!(k <= input.len());
            let out = wextend(&input, k, ExtensionMode::Symmetric).unwrap();
            prop_assert_eq!(out.len(), input.len() + 2 * k);
            prop_assert_eq!(&out[k..k + input.len()], &input[..]);
        }

        #[test]
        fn mirror_symmetry_at_both_edges(
            input in proptest::collection::vec(-1e6f64..1e6, 1..64),
            k in 1usize..64,
        ) {
            prop_assume!(k <= input.len());
            let n = input.len();
            let out = wextend(&input, k, ExtensionMode::Symmetric).unwrap();
            for i in 0..k {
                prop_assert_eq!(out[k - 1 - i], input[i]);
                prop_assert_eq!(out[k + n + i], input[n - 1 - i]);
            }
        }
    }
}
