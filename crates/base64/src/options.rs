//! Encoding and validation options.

use serde::{Deserialize, Serialize};

/// BASE64 options shared by [`encode`](crate::encode) and [`validate`](crate::validate).
///
/// Each field is tri-state. `None` means "don't care": on encode it behaves
/// like `Some(false)`, on validate it lifts the constraint entirely.
///
/// | field | `Some(false)` | `Some(true)` | `None` |
/// |---|---|---|---|
/// | `no_padding` (encode) | pad with `=` | strip `=` | pad with `=` |
/// | `no_padding` (validate) | padding required | padding forbidden | either |
/// | `url_safe` (encode) | `+` `/` | `-` `_` | `+` `/` |
/// | `url_safe` (validate) | `-` `_` rejected | `+` `/` rejected | either, not mixed |
///
/// # Example
///
/// ```
/// use b64web::Options;
///
/// let opt: Options = serde_json::from_str(r#"{"urlSafe": true}"#).unwrap();
/// assert_eq!(opt, Options::default().with_url_safe(true));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Omit `=` padding on encode; require or forbid it on validate.
    #[serde(default, alias = "nopadding", skip_serializing_if = "Option::is_none")]
    pub no_padding: Option<bool>,
    /// Use the BASE64URL alphabet on encode; require or forbid it on validate.
    #[serde(default, alias = "urlsafe", skip_serializing_if = "Option::is_none")]
    pub url_safe: Option<bool>,
}

impl Options {
    /// URL-safe alphabet without padding, the usual BASE64URL form.
    pub fn url() -> Self {
        Self {
            no_padding: Some(true),
            url_safe: Some(true),
        }
    }

    pub fn with_no_padding(mut self, no_padding: bool) -> Self {
        self.no_padding = Some(no_padding);
        self
    }

    pub fn with_url_safe(mut self, url_safe: bool) -> Self {
        self.url_safe = Some(url_safe);
        self
    }

    pub(crate) fn pads(&self) -> bool {
        self.no_padding != Some(true)
    }

    pub(crate) fn uses_url_alphabet(&self) -> bool {
        self.url_safe == Some(true)
    }
}
