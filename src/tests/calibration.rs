use crate::*;

#[test]
fn default_is_unit() {
    let calibration = CalibrationSet::default();
    assert_eq!(calibration, CalibrationSet::unit());
    assert_eq!(calibration.vcodes, Coefficient { mult: 1, shift: 0 });
    assert_eq!(calibration.icodes, Coefficient { mult: 1, shift: 0 });
    assert_eq!(calibration.pinstant, Coefficient { mult: 1, shift: 0 });
}

/// The precomputed Pololu tables must match what the generic board parameter
/// path computes for that board (30 A range, 4 MOhm Riso).
///
#[test]
fn pololu_presets_match_board_parameters() {
    let cases = [
        (PololuRsense::K1, 1000u32),
        (PololuRsense::K2, 2000),
        (PololuRsense::K4, 4000),
    ];
    for (preset, rsense_ohms) in cases {
        let computed = CalibrationSet::from_board_parameters(30, 4_000_000, rsense_ohms).unwrap();
        assert_eq!(CalibrationSet::pololu(preset), computed, "rsense={}", rsense_ohms);
    }
}

#[test]
fn pololu_preset_constants() {
    let calibration = CalibrationSet::pololu(PololuRsense::K4);
    assert_eq!(calibration.vcodes, Coefficient { mult: 18637, shift: 11 });
    assert_eq!(calibration.icodes, Coefficient { mult: 17873, shift: 14 });
    assert_eq!(calibration.pinstant, Coefficient { mult: 325, shift: 0 });
}

/// An unbuildable ratio surfaces as an error instead of a bogus calibration.
///
#[test]
fn board_parameters_reject_oversized_ratio() {
    // riso / (110 * rsense) far above the representable range.
    let result = CalibrationSet::from_board_parameters(30, 4_000_000_000, 1);
    assert!(result.is_err());
}
