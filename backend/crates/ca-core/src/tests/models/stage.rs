use crate::Stage;

use std::str::FromStr;

#[test]
fn test_stage_as_str() {
    assert_eq!(Stage::School.as_str(), "School");
    assert_eq!(Stage::College.as_str(), "College");
    assert_eq!(Stage::Professional.as_str(), "Professional");
}

#[test]
fn test_stage_from_str_is_case_insensitive() {
    assert_eq!(Stage::from_str("School").unwrap(), Stage::School);
    assert_eq!(Stage::from_str("college").unwrap(), Stage::College);
    assert_eq!(Stage::from_str(" PROFESSIONAL ").unwrap(), Stage::Professional);
}

#[test]
fn test_stage_from_str_rejects_unknown() {
    let err = Stage::from_str("Retired").unwrap_err();
    assert!(err.to_string().contains("Retired"));
}
