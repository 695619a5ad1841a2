use super::*;

#[test]
fn defaults_match_portal_templates() {
    let config = PageConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.theme_attribute, "data-bs-theme");
    assert_eq!(config.toggle_id, "themeToggle");
    assert_eq!(config.icon_id, "themeIcon");
    assert_eq!(config.file_input_id, "evidence");
    assert_eq!(config.form_selector, ".needs-validation");
    assert_eq!(config.alert_selector, ".alert:not(.alert-permanent)");
    assert_eq!(config.anchor_selector, "a[href^=\"#\"]");
    assert_eq!(config.alert_dismiss_ms, 5000);
    assert_eq!(config.dark_scheme_query, "(prefers-color-scheme: dark)");
}

#[test]
fn empty_object_yields_defaults() {
    let config = PageConfig::from_json("{}");
    assert!(matches!(config, Ok(c) if c == PageConfig::default()));
}

#[test]
fn blank_input_yields_defaults() {
    let config = PageConfig::from_json("  \n ");
    assert!(matches!(config, Ok(c) if c == PageConfig::default()));
}

#[test]
fn partial_object_overrides_named_fields_only() {
    let Ok(config) = PageConfig::from_json(r#"{ "storage_key": "portal-theme", "alert_dismiss_ms": 8000 }"#)
    else {
        panic!("partial config should parse");
    };
    assert_eq!(config.storage_key, "portal-theme");
    assert_eq!(config.alert_dismiss_ms, 8000);
    assert_eq!(config.theme_attribute, DEFAULT_THEME_ATTRIBUTE);
    assert_eq!(config.file_input_id, "evidence");
}

#[test]
fn unknown_fields_are_ignored() {
    let config = PageConfig::from_json(r#"{ "sidebar": true }"#);
    assert!(matches!(config, Ok(c) if c == PageConfig::default()));
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(matches!(PageConfig::from_json("{ storage_key"), Err(UiError::Config(_))));
}

#[test]
fn wrong_field_type_is_a_config_error() {
    let config = PageConfig::from_json(r#"{ "alert_dismiss_ms": "soon" }"#);
    assert!(matches!(config, Err(UiError::Config(_))));
}
