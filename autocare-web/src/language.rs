use std::collections::HashMap;

/// Information about a supported language
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub translation: &'static str,
    pub native_name: &'static str,
}

/// Language used when the browser asks for one we do not ship.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Get information about a supported language
pub fn get_language_info(code: &str) -> Option<LanguageInfo> {
    supported_languages().get(code).cloned()
}

/// Get a map of supported languages
pub fn supported_languages() -> HashMap<&'static str, LanguageInfo> {
    HashMap::from([(
        "en",
        LanguageInfo {
            code: "en",
            translation: include_str!("../translations/en.json"),
            native_name: "English",
        },
    )])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn lookup<'a>(root: &'a Value, key: &str) -> Option<&'a Value> {
        key.split('.').try_fold(root, |node, part| node.get(part))
    }

    #[test]
    fn default_language_is_supported() {
        let info = get_language_info(DEFAULT_LANGUAGE).unwrap();
        assert_eq!(info.code, DEFAULT_LANGUAGE);
    }

    #[test]
    fn translations_are_valid_json() {
        for info in supported_languages().values() {
            let parsed: Value = serde_json::from_str(info.translation).unwrap();
            assert!(parsed.is_object(), "{}", info.code);
        }
    }

    #[test]
    fn navigation_labels_are_translated() {
        let info = get_language_info(DEFAULT_LANGUAGE).unwrap();
        let root: Value = serde_json::from_str(info.translation).unwrap();
        for link in crate::navigation::NAVIGATION_LINKS {
            assert!(
                lookup(&root, link.name).is_some_and(Value::is_string),
                "missing {}",
                link.name
            );
        }
    }
}
