use super::*;

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: u64 = env_parse("__TEST_CFG_NONEXISTENT_KEY__", 42).unwrap();
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__TEST_CFG_VALID__", " 99 ") };
    let val: u64 = env_parse("__TEST_CFG_VALID__", 0).unwrap();
    assert_eq!(val, 99);
    unsafe { std::env::remove_var("__TEST_CFG_VALID__") };
}

#[test]
fn env_parse_present_invalid_errors() {
    unsafe { std::env::set_var("__TEST_CFG_INVALID__", "notanumber") };
    let err = env_parse::<u64>("__TEST_CFG_INVALID__", 7).unwrap_err();
    assert!(err.to_string().starts_with("invalid __TEST_CFG_INVALID__"));
    unsafe { std::env::remove_var("__TEST_CFG_INVALID__") };
}

// =============================================================================
// assets dir
// =============================================================================

#[test]
fn assets_dir_defaults_to_public() {
    assert_eq!(parse_assets_dir(None).unwrap(), PathBuf::from("public"));
}

#[test]
fn assets_dir_is_trimmed() {
    assert_eq!(parse_assets_dir(Some(" /srv/site ")).unwrap(), PathBuf::from("/srv/site"));
}

#[test]
fn assets_dir_empty_errors() {
    let err = parse_assets_dir(Some("  ")).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "ASSETS_DIR", reason: "must not be empty".into() });
}

// =============================================================================
// log filter
// =============================================================================

#[test]
fn log_filter_unset_or_blank_uses_default() {
    assert!(log_filter(None).is_ok());
    assert!(log_filter(Some("   ")).is_ok());
}

#[test]
fn log_filter_accepts_directives() {
    assert!(log_filter(Some("info,tower_http=debug")).is_ok());
}

#[test]
fn log_filter_invalid_level_errors() {
    let err = log_filter(Some("tower_http=verbose")).unwrap_err();
    assert!(err.to_string().starts_with("invalid RUST_LOG"));
}
