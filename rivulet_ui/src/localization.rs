use std::collections::HashMap;

/// Key to display string table
///
/// Lookups of missing keys fall back to the key itself, so untranslated strings stay visible
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Localization {
    table: HashMap<String, String>,
}

impl Localization {
    pub fn new() -> Self {
        Self::default()
    }

    /// English strings for every key the crate uses by default
    pub fn english() -> Self {
        Self::new()
            .with("error-alert-view.dismiss.title", "ok")
            .with("confirmation-alert-view.dismiss.title", "cancel")
            .with("confirmation-alert-view.confirm.title", "ok")
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.table.insert(key.into(), value.into());
    }

    pub fn localized(&self, key: &str) -> String {
        match self.table.get(key) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!("No localization for {key}, using the key");
                key.to_string()
            }
        }
    }

    pub fn localized_capitalized(&self, key: &str) -> String {
        capitalize_words(&self.localized(key))
    }
}

/// Upper cases the first letter of every whitespace separated word, lower cases the rest
pub fn capitalize_words(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            word_start = true;
            result.push(c);
        } else if word_start {
            word_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_words() {
        assert_eq!(capitalize_words("ok"), "Ok");
        assert_eq!(capitalize_words("try AGAIN later"), "Try Again Later");
        assert_eq!(capitalize_words("  spaced\tout "), "  Spaced\tOut ");
        assert_eq!(capitalize_words(""), "");
        assert_eq!(capitalize_words("élan"), "Élan");
    }

    #[test]
    fn test_localized() {
        let localization = Localization::new().with("greeting", "hola mundo");
        assert_eq!(localization.localized("greeting"), "hola mundo");
        assert_eq!(localization.localized_capitalized("greeting"), "Hola Mundo");
    }

    #[test]
    fn test_missing_key_falls_back() {
        let localization = Localization::new();
        assert_eq!(localization.localized("some.key"), "some.key");
    }
}
