use crate::font::{Font, FontConfig, TextStyle};
use crate::form::FieldId;

/// A font together with the text style it was picked from, if any
///
/// Picking a style sets the matching font. Setting a font directly drops the style, as the
/// font no longer follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledFont {
    font: Font,
    text_style: Option<TextStyle>,
}

impl StyledFont {
    pub fn new(font: Font) -> Self {
        Self {
            font,
            text_style: None,
        }
    }

    pub fn from_style(style: TextStyle, fonts: &FontConfig) -> Self {
        Self {
            font: fonts.font_for(style),
            text_style: Some(style),
        }
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    pub fn text_style(&self) -> Option<TextStyle> {
        self.text_style
    }

    pub fn set_font(&mut self, font: Font) {
        if let Some(style) = self.text_style.take() {
            tracing::debug!("Font set directly, dropping text style {:?}", style);
        }
        self.font = font;
    }

    /// Clearing the style keeps the current font
    pub fn set_text_style(&mut self, style: Option<TextStyle>, fonts: &FontConfig) {
        if let Some(style) = style {
            self.font = fonts.font_for(style);
        }
        self.text_style = style;
    }
}

/// Anything displaying text with a [`StyledFont`]
pub trait FontStyled {
    fn styled_font(&self) -> &StyledFont;

    fn styled_font_mut(&mut self) -> &mut StyledFont;

    fn font(&self) -> &Font {
        self.styled_font().font()
    }

    fn set_font(&mut self, font: Font) {
        self.styled_font_mut().set_font(font)
    }

    fn font_text_style(&self) -> Option<TextStyle> {
        self.styled_font().text_style()
    }

    fn set_font_text_style(&mut self, style: Option<TextStyle>, fonts: &FontConfig) {
        self.styled_font_mut().set_text_style(style, fonts)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    styled_font: StyledFont,
}

impl Label {
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            styled_font: StyledFont::new(font),
        }
    }
}

impl FontStyled for Label {
    fn styled_font(&self) -> &StyledFont {
        &self.styled_font
    }

    fn styled_font_mut(&mut self) -> &mut StyledFont {
        &mut self.styled_font
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    id: FieldId,
    pub text: String,
    pub placeholder: Option<String>,
    styled_font: StyledFont,
    /// Field to move to when this one returns, used when chaining the fields of a form
    next_text_field: Option<FieldId>,
}

impl TextField {
    pub fn new(id: FieldId, font: Font) -> Self {
        Self {
            id,
            text: String::new(),
            placeholder: None,
            styled_font: StyledFont::new(font),
            next_text_field: None,
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    pub fn next_text_field(&self) -> Option<FieldId> {
        self.next_text_field
    }

    pub fn set_next_text_field(&mut self, next: Option<FieldId>) {
        self.next_text_field = next;
    }
}

impl FontStyled for TextField {
    fn styled_font(&self) -> &StyledFont {
        &self.styled_font
    }

    fn styled_font_mut(&mut self) -> &mut StyledFont {
        &mut self.styled_font
    }
}
