use wavedec::{wconv1, wextend, ConvMode, ExtensionMode, WaveletError};

/// Full convolution of a sequence with itself.
#[test]
fn full_known_vector() {
    let out = wconv1(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0], ConvMode::Full).unwrap();
    assert_eq!(out, [1.0, 4.0, 10.0, 12.0, 9.0]);
}

/// Full convolution after symmetric extension, the combination the
/// transform pipeline relies on.
#[test]
fn full_after_extension() {
    let extended = wextend(&[1.0, 2.0, 3.0], 2, ExtensionMode::Symmetric).unwrap();
    let out = wconv1(&extended, &[1.0, 2.0, 3.0], ConvMode::Full).unwrap();
    assert_eq!(out, [2.0, 5.0, 9.0, 7.0, 10.0, 15.0, 17.0, 13.0, 6.0]);
}

/// Valid convolution keeps only the fully-overlapping positions.
#[test]
fn valid_known_vector() {
    let out = wconv1(
        &[1.0, 2.0, 3.0, 4.0, 5.0],
        &[1.0, 2.0, 3.0],
        ConvMode::Valid,
    )
    .unwrap();
    assert_eq!(out, [10.0, 16.0, 22.0]);
}

/// Valid convolution with a filter longer than the input is empty, not
/// an error.
#[test]
fn valid_with_long_filter_is_empty() {
    let out = wconv1(&[1.0, 2.0], &[1.0, 2.0, 3.0], ConvMode::Valid).unwrap();
    assert!(out.is_empty());
}

/// Same-mode output is the central slice of the full convolution with
/// the length of the input.
#[test]
fn same_is_centered_full() {
    let input = [-1.0, 2.0, 3.0, -2.0, 0.0, 1.0, 2.0];
    let filter = [2.0, 4.0, -1.0, 1.0];
    let out = wconv1(&input, &filter, ConvMode::Same).unwrap();
    assert_eq!(out, [15.0, 5.0, -9.0, 7.0, 6.0, 7.0, -1.0]);
}

/// Output-length laws for all three modes.
#[test]
fn length_laws() {
    let input: Vec<f64> = (0..11).map(f64::from).collect();
    let filter = [0.25, 0.5, 0.25];
    let full = wconv1(&input, &filter, ConvMode::Full).unwrap();
    let same = wconv1(&input, &filter, ConvMode::Same).unwrap();
    let valid = wconv1(&input, &filter, ConvMode::Valid).unwrap();
    assert_eq!(full.len(), input.len() + filter.len() - 1);
    assert_eq!(same.len(), input.len());
    assert_eq!(valid.len(), input.len() - filter.len() + 1);
}

/// Empty operands are rejected in every mode.
#[test]
fn rejects_empty_operands() {
    for mode in [ConvMode::Full, ConvMode::Same, ConvMode::Valid] {
        assert_eq!(wconv1(&[], &[1.0], mode), Err(WaveletError::EmptyInput));
        assert_eq!(wconv1(&[1.0], &[], mode), Err(WaveletError::EmptyInput));
    }
}
