use serde_json::Value;

use crate::types::{Query, Translation};

/// Native error code -> user-facing message, per provider
#[derive(Debug, Clone, Copy)]
pub struct ErrorMessages(pub &'static [(i64, &'static str)]);

impl ErrorMessages {
    pub fn get(&self, code: i64) -> Option<&'static str> {
        self.0.iter().find(|(c, _)| *c == code).map(|(_, msg)| *msg)
    }
}

/// Fields a provider pulls out of its raw payload. Every field is optional,
/// a missing one is simply absent from the normalized result.
///
/// The dictionary backends never report the languages they used, so the
/// normalized result carries no `from`/`to`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
    /// Native error code, only set when the payload reports a failure
    pub error_code: Option<i64>,
    pub detailed: Option<Vec<String>>,
    pub phonetic: Option<String>,
    pub result: Option<Vec<String>>,
}

/// Turn a raw backend payload into a [`Translation`].
///
/// `raw` is `None` when the backend answered without a usable body. A
/// reported error code suppresses every other field. When nothing useful is
/// left the result carries the generic "no valid result" error.
pub fn normalize<F>(
    name: &str,
    messages: &ErrorMessages,
    query: &Query,
    raw: Option<Value>,
    link_to_result: String,
    extract: F,
) -> Translation
where
    F: FnOnce(&Value) -> Extracted,
{
    let mut translation = Translation {
        text: query.text.clone(),
        link_to_result,
        ..Translation::default()
    };

    if let Some(raw) = raw.filter(|v| !v.is_null()) {
        let fields = extract(&raw);

        match fields.error_code {
            Some(code) => {
                let message = messages
                    .get(code)
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{name} returned an unsupported error code: {code}"));
                translation.error = Some(message);
            }
            None => {
                translation.detailed = fields.detailed.filter(|d| !d.is_empty());
                if translation.detailed.is_some() {
                    translation.phonetic = fields.phonetic;
                }
                translation.result = fields.result.filter(|r| !r.is_empty());
            }
        }

        translation.response = raw;
    }

    if translation.error.is_none() && translation.detailed.is_none() && translation.result.is_none()
    {
        tracing::debug!(provider = name, "payload carried no usable fields");
        translation.error = Some(format!("{name} returned no valid result; retry later."));
    }

    translation
}
