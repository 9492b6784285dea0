use crate::Patch;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(default)]
    reports_to: Patch<String>,
}

#[test]
fn given_missing_key_when_deserializing_then_unset() {
    let body: Body = serde_json::from_str("{}").unwrap();

    assert_eq!(body.reports_to, Patch::Unset);
}

#[test]
fn given_null_when_deserializing_then_clear() {
    let body: Body = serde_json::from_str(r#"{"reports_to": null}"#).unwrap();

    assert_eq!(body.reports_to, Patch::Clear);
}

#[test]
fn given_value_when_deserializing_then_set() {
    let body: Body = serde_json::from_str(r#"{"reports_to": "mgr-1"}"#).unwrap();

    assert_eq!(body.reports_to, Patch::Set("mgr-1".to_string()));
}

#[test]
fn test_blank_as_clear() {
    assert_eq!(
        Patch::Set("   ".to_string()).blank_as_clear(),
        Patch::<String>::Clear
    );
    assert_eq!(
        Patch::Set("x".to_string()).blank_as_clear(),
        Patch::Set("x".to_string())
    );
    assert_eq!(Patch::<String>::Unset.blank_as_clear(), Patch::Unset);
}

#[test]
fn test_patch_default_is_unset() {
    assert!(Patch::<i32>::default().is_unset());
    assert_eq!(Patch::Set(3).map(|v| v * 2), Patch::Set(6));
}
