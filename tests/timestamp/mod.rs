use chrono::{DateTime, Utc};
use error_beacon::{ReportError, Timestamp};
use regex::Regex;

fn wire_pattern() -> Regex {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").unwrap()
}

#[test]
fn epoch_zero_renders_unix_origin() {
    let ts = Timestamp::from_epoch(0).unwrap();
    assert_eq!(ts.to_wire(), "1970-01-01T00:00:00Z");
}

#[test]
fn now_matches_wire_pattern() {
    assert!(wire_pattern().is_match(&Timestamp::now().to_wire()));
}

#[test]
fn explicit_epochs_match_wire_pattern() {
    for secs in [0, 1, -1, 951_865_200, 1_756_339_200, -62_135_596_800] {
        let wire = Timestamp::from_epoch(secs).unwrap().to_wire();
        assert!(wire_pattern().is_match(&wire), "pattern mismatch for {secs}: {wire}");
    }
}

#[test]
fn formatting_is_zero_padded() {
    // 2000-03-05T04:08:09Z
    let ts = Timestamp::from_epoch(952_229_289).unwrap();
    assert_eq!(ts.to_wire(), "2000-03-05T04:08:09Z");
}

#[test]
fn repeated_format_of_same_instant_is_identical() {
    let ts = Timestamp::from_epoch(1_700_000_000).unwrap();
    assert_eq!(ts.to_wire(), ts.to_wire());
}

#[test]
fn subsecond_precision_truncates() {
    let instant = DateTime::<Utc>::from_timestamp(10, 999_000_000).unwrap();
    let ts = Timestamp::from(instant);
    assert_eq!(ts.to_wire(), "1970-01-01T00:00:10Z");
}

#[test]
fn out_of_range_epoch_fails_formatting() {
    for secs in [i64::MIN, i64::MAX] {
        let err = Timestamp::from_epoch(secs).unwrap_err();
        assert!(matches!(err, ReportError::Formatting { epoch } if epoch == secs));
    }
}

#[test]
fn epochs_outside_four_digit_years_fail_formatting() {
    // 10000-01-01T00:00:00Z and 1 BCE respectively.
    for secs in [253_402_300_800_i64, -62_167_219_201] {
        assert!(matches!(
            Timestamp::from_epoch(secs),
            Err(ReportError::Formatting { .. })
        ));
    }
}
