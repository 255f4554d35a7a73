use std::collections::HashMap;

/// Semantic text styles, each mapped to a point size by [`FontConfig`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption1,
    Caption2,
}

impl TextStyle {
    pub const ALL: [TextStyle; 11] = [
        TextStyle::LargeTitle,
        TextStyle::Title1,
        TextStyle::Title2,
        TextStyle::Title3,
        TextStyle::Headline,
        TextStyle::Subheadline,
        TextStyle::Body,
        TextStyle::Callout,
        TextStyle::Footnote,
        TextStyle::Caption1,
        TextStyle::Caption2,
    ];
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub size: f32,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    pub fn system(size: f32) -> Self {
        Self::new(FontConfig::SYSTEM_FAMILY, size)
    }
}

/// Fonts of the app: a single family, and a size per text style
#[derive(Debug, Clone, PartialEq)]
pub struct FontConfig {
    pub family: String,
    pub sizes: HashMap<TextStyle, f32>,
    /// Used for styles missing from `sizes`
    pub fallback_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: Self::SYSTEM_FAMILY.to_string(),
            sizes: HashMap::from([
                (TextStyle::LargeTitle, 34.0),
                (TextStyle::Title1, 28.0),
                (TextStyle::Title2, 22.0),
                (TextStyle::Title3, 20.0),
                (TextStyle::Headline, 17.0),
                (TextStyle::Subheadline, 15.0),
                (TextStyle::Body, 17.0),
                (TextStyle::Callout, 16.0),
                (TextStyle::Footnote, 13.0),
                (TextStyle::Caption1, 12.0),
                (TextStyle::Caption2, 11.0),
            ]),
            fallback_size: 17.0,
        }
    }
}

impl FontConfig {
    pub const SYSTEM_FAMILY: &'static str = "system";

    /// Same sizes as the default, with the app's own font family
    pub fn with_family(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            ..Default::default()
        }
    }

    pub fn font_for(&self, style: TextStyle) -> Font {
        let size = self
            .sizes
            .get(&style)
            .copied()
            .unwrap_or(self.fallback_size);
        Font::new(self.family.clone(), size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let config = FontConfig::default();
        for style in TextStyle::ALL {
            assert!(config.sizes.contains_key(&style), "missing {:?}", style);
        }
        assert_eq!(config.font_for(TextStyle::Body), Font::system(17.0));
        assert_eq!(config.font_for(TextStyle::Title1), Font::system(28.0));
    }

    #[test]
    fn test_app_family() {
        let config = FontConfig::with_family("Lato");
        assert_eq!(config.font_for(TextStyle::Caption2), Font::new("Lato", 11.0));
    }

    #[test]
    fn test_fallback_size() {
        let mut config = FontConfig::default();
        config.sizes.remove(&TextStyle::Callout);
        config.fallback_size = 14.0;
        assert_eq!(config.font_for(TextStyle::Callout).size, 14.0);
    }
}
