use super::*;

#[test]
fn validate_access_code_input_trims() {
    assert_eq!(validate_access_code_input("  keystone-2026 \n"), Ok("keystone-2026".to_owned()));
}

#[test]
fn validate_access_code_input_rejects_blank() {
    assert_eq!(validate_access_code_input(""), Err(MISSING_CODE));
    assert_eq!(validate_access_code_input("   "), Err(MISSING_CODE));
}

#[test]
fn validate_access_code_input_keeps_inner_spaces() {
    assert_eq!(validate_access_code_input(" two words "), Ok("two words".to_owned()));
}
