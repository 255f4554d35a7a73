use crate::font::FontConfig;
use crate::localization::Localization;

/// Localization keys of the default alert button titles
#[derive(Debug, Clone, PartialEq)]
pub struct AlertConfig {
    pub error_dismiss_title_key: String,
    pub confirmation_dismiss_title_key: String,
    pub confirmation_confirm_title_key: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            error_dismiss_title_key: "error-alert-view.dismiss.title".to_string(),
            confirmation_dismiss_title_key: "confirmation-alert-view.dismiss.title".to_string(),
            confirmation_confirm_title_key: "confirmation-alert-view.confirm.title".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    pub alerts: AlertConfig,
    pub fonts: FontConfig,
    pub localization: Localization,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            alerts: AlertConfig::default(),
            fonts: FontConfig::default(),
            localization: Localization::english(),
        }
    }
}
