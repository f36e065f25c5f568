//! 1-D discrete linear convolution
//! Direct O(n*m) accumulation; signals and filters stay small here
//! no_std + alloc compatible

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::dwt::WaveletError;

/// Output-length policies for [`wconv1`].
///
/// Parses from the toolbox mode names via `FromStr`
/// ("full"/"same"/"valid").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConvMode {
    /// Full linear convolution, output length `n + m - 1`.
    #[default]
    Full,
    /// Central `n` samples of the full convolution, starting at offset
    /// `m / 2`.
    Same,
    /// Only positions where the filter fully overlaps the input, output
    /// length `n - m + 1`; empty output when the filter is longer than
    /// the input.
    Valid,
}

impl FromStr for ConvMode {
    type Err = WaveletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(ConvMode::Full),
            "same" => Ok(ConvMode::Same),
            "valid" => Ok(ConvMode::Valid),
            _ => Err(WaveletError::UnknownMode),
        }
    }
}

/// Discrete linear convolution of `input` with `filter`.
///
/// The filter is applied in true convolution orientation (reversed),
/// not correlation. Fails with [`WaveletError::EmptyInput`] when either
/// operand is empty.
pub fn wconv1(input: &[f64], filter: &[f64], mode: ConvMode) -> Result<Vec<f64>, WaveletError> {
    if input.is_empty() || filter.is_empty() {
        return Err(WaveletError::EmptyInput);
    }
    match mode {
        ConvMode::Full => Ok(conv_full(input, filter)),
        ConvMode::Same => {
            let full = conv_full(input, filter);
            let start = filter.len() / 2;
            Ok(full[start..start + input.len()].to_vec())
        }
        ConvMode::Valid => {
            if input.len() < filter.len() {
                return Ok(Vec::new());
            }
            let out_len = input.len() - filter.len() + 1;
            let mut output = vec![0.0; out_len];
            for (i, out) in output.iter_mut().enumerate() {
                for (j, &f) in filter.iter().rev().enumerate() {
                    *out += input[i + j] * f;
                }
            }
            Ok(output)
        }
    }
}

fn conv_full(input: &[f64], filter: &[f64]) -> Vec<f64> {
    let mut output = vec![0.0; input.len() + filter.len() - 1];
    for (i, &x) in input.iter().enumerate() {
        for (j, &f) in filter.iter().enumerate() {
            output[i + j] += x * f;
        }
    }
    output
}




#[cfg(test)]
mod mode_tests {
    use super::*;

    #[test]
    fn parses_mode_names() {
        assert_eq!("full".parse::<ConvMode>(), Ok(ConvMode::Full));
        assert_eq!("same".parse::<ConvMode>(), Ok(ConvMode::Same));
        assert_eq!("valid".parse::<ConvMode>(), Ok(ConvMode::Valid));
        assert_eq!("circular".parse::<ConvMode>(), Err(WaveletError::UnknownMode));
    }
}

#[cfg(all(feature = "internal-tests", test))]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_length_laws(
            input in proptest::collection::vec(-1e3f64..1e3, 1..48),
            filter in proptest::collection::vec(-1e3f64..1e3, 1..48),
        ) {
            let full = wconv1(&input, &filter, ConvMode::Full).unwrap();
            prop_assert_eq!(full.len(), input.len() + filter.len() - 1);

            let same = wconv1(&input, &filter, ConvMode::Same).unwrap();
            prop_assert_eq!(same.len(), input.len());

            let valid = wconv1(&input, &filter, ConvMode::Valid).unwrap();
            if input.len() >= filter.len() {
                prop_assert_eq!(valid.len(), input.len() - filter.len() + 1);
            } else {
                prop_assert!(valid.is_empty());
            }
        }

        #[test]
        fn unit_impulse_is_identity(
            input in proptest::collection::vec(-1e3f64..1e3, 1..48),
        ) {
            let out = wconv1(&input, &[1.0], ConvMode::Full).unwrap();
            prop_assert_eq!(out, input);
        }
    }
}
