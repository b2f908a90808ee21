//! Tests for loading and saving options.

use b64web::Options;

#[test]
fn deserializes_camel_case() {
    let opt: Options = serde_json::from_str(r#"{"noPadding": true, "urlSafe": false}"#).unwrap();
    assert_eq!(opt.no_padding, Some(true));
    assert_eq!(opt.url_safe, Some(false));
}

#[test]
fn deserializes_lowercase_aliases() {
    let opt: Options = serde_json::from_str(r#"{"nopadding": false, "urlsafe": true}"#).unwrap();
    assert_eq!(opt, Options::default().with_no_padding(false).with_url_safe(true));
}

#[test]
fn missing_fields_are_unset() {
    let opt: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(opt, Options::default());
}

#[test]
fn unset_fields_are_skipped() {
    assert_eq!(serde_json::to_string(&Options::default()).unwrap(), "{}");
    assert_eq!(
        serde_json::to_string(&Options::url()).unwrap(),
        r#"{"noPadding":true,"urlSafe":true}"#
    );
}
