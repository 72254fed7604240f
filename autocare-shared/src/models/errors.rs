use serde::{Deserialize, Serialize};

/// Error body returned by the backends on non-2xx responses.
///
/// The account backend reports `message`; some gateways only fill `error`.
/// Both are optional and unknown fields are ignored, so that any JSON object
/// deserializes.
#[derive(Debug, Default, Deserialize, Serialize, PartialEq, Eq, Clone)]
pub struct ErrorResponse {
    /// The main error message
    #[serde(default)]
    pub message: Option<String>,
    /// Short error label, e.g. `"Forbidden"`
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// The most specific non-blank message carried by this body, if any.
    #[must_use]
    pub fn display_message(&self) -> Option<&str> {
        [&self.message, &self.error]
            .into_iter()
            .filter_map(Option::as_deref)
            .map(str::trim)
            .find(|text| !text.is_empty())
    }
}
