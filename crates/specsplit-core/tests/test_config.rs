use specsplit_core::detection::{HighlightParams, Scale};
use specsplit_core::error::SpecsplitError;

#[test]
fn test_log_scale_parameter_table() {
    let params = Scale::Log.params();
    assert_eq!(params.low_threshold, 15);
    assert_eq!(params.high_threshold, 255);
    assert_eq!(params.h_kernel, 3);
    assert_eq!(params.v_kernel, 10);
}

#[test]
fn test_mel_and_lin_use_taller_kernel() {
    for scale in [Scale::Mel, Scale::Lin] {
        let params = scale.params();
        assert_eq!(params.low_threshold, 15);
        assert_eq!(params.high_threshold, 255);
        assert_eq!(params.h_kernel, 3);
        assert_eq!(params.v_kernel, 20);
    }
}

#[test]
fn test_high_threshold_is_max_intensity_for_all_scales() {
    for scale in Scale::ALL {
        assert_eq!(scale.params().high_threshold, 255);
    }
}

#[test]
fn test_zero_kernel_fails_validation() {
    let params = HighlightParams {
        h_kernel: 0,
        ..HighlightParams::default()
    };
    assert!(matches!(
        params.validate(),
        Err(SpecsplitError::InvalidParameter(_))
    ));
}

#[test]
fn test_scale_display_names() {
    assert_eq!(Scale::Log.to_string(), "log");
    assert_eq!(Scale::Mel.to_string(), "mel");
    assert_eq!(Scale::Lin.to_string(), "lin");
}
