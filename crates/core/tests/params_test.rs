//! Tests for TextParams defaults and validation.

use tessera_core::{LayoutError, TextChunk, TextElement, TextParams};

#[test]
fn test_defaults() {
    let params = TextParams::default();
    assert_eq!(params.line_return, '\r');
    assert_eq!(params.squeeze_char, ' ');
    assert_eq!(params.min_run_length, 2);
    assert_eq!(params.line_threshold_ratio, 0.6);
    assert_eq!(params.min_line_threshold, 1.0);
    assert_eq!(params.word_gap_ratio, 1.5);
    assert_eq!(params.word_separator, Some(' '));
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn test_validate_rejects_zero_run_length() {
    let params = TextParams::default().with_squeeze('-', 0);
    assert_eq!(
        params.validate(),
        Err(LayoutError::InvalidParameter {
            name: "min_run_length",
            reason: "must be at least 1".to_string(),
        })
    );
}

#[test]
fn test_validate_rejects_bad_ratios() {
    for params in [
        TextParams {
            word_gap_ratio: 0.0,
            ..TextParams::default()
        },
        TextParams {
            line_threshold_ratio: f64::NAN,
            ..TextParams::default()
        },
        TextParams {
            min_line_threshold: -1.0,
            ..TextParams::default()
        },
    ] {
        assert!(matches!(
            params.validate(),
            Err(LayoutError::InvalidParameter { .. })
        ));
    }

    let err = TextParams {
        word_gap_ratio: -2.0,
        ..TextParams::default()
    }
    .validate()
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid parameter word_gap_ratio: expected a finite positive number, got -2"
    );
}

#[test]
fn test_with_squeeze_drives_squeeze_with() {
    let tc = TextChunk::from_element(TextElement::new(0.0, 0.0, 50.0, 10.0, "a---b", 1.0, 0.0));
    let params = TextParams::default().with_squeeze('-', 3);
    let texts: Vec<String> = tc
        .squeeze_with(&params)
        .iter()
        .map(|p| tessera_core::HasText::text(p))
        .collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn test_validated_passes_good_params_through() {
    let params = TextParams::default().with_squeeze('.', 4);
    assert_eq!(params.clone().validated(), Ok(params));

    let bad = TextParams {
        word_gap_ratio: f64::NAN,
        ..TextParams::default()
    };
    assert!(matches!(
        bad.validated(),
        Err(LayoutError::InvalidParameter {
            name: "word_gap_ratio",
            ..
        })
    ));
}
