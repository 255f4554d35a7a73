use derivative::Derivative;

use crate::config::UiConfig;

/// Callback run when an alert button is pressed, receiving the alert it belongs to
pub type AlertAction<T> = Box<dyn Fn(&T) + Send + Sync>;

fn no_op<T: 'static>() -> AlertAction<T> {
    Box::new(|_: &T| {})
}

/// Models an alert reporting an error, with a single dismiss button
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ErrorAlertViewModel {
    pub title: String,
    pub message: String,
    pub dismiss_button_title: String,
    #[derivative(Debug = "ignore")]
    pub dismiss_action: AlertAction<ErrorAlertViewModel>,
}

impl ErrorAlertViewModel {
    /// Dismiss button title defaults to the localized, capitalized value of
    /// [`crate::AlertConfig::error_dismiss_title_key`], the action to doing nothing
    pub fn new(title: impl Into<String>, message: impl Into<String>, config: &UiConfig) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            dismiss_button_title: config
                .localization
                .localized_capitalized(&config.alerts.error_dismiss_title_key),
            dismiss_action: no_op(),
        }
    }

    pub fn with_dismiss_button_title(mut self, title: impl Into<String>) -> Self {
        self.dismiss_button_title = title.into();
        self
    }

    pub fn with_dismiss_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&ErrorAlertViewModel) + Send + Sync + 'static,
    {
        self.dismiss_action = Box::new(action);
        self
    }

    pub fn dismiss(&self) {
        (self.dismiss_action)(self)
    }
}

/// Models an alert that can either be confirmed or dismissed
///
/// Most of the time only the title, the message and the confirm action need setting
#[derive(Derivative)]
#[derivative(Debug)]
pub struct ConfirmationAlertViewModel {
    pub title: String,
    pub message: String,
    pub dismiss_button_title: String,
    pub confirm_button_title: String,
    #[derivative(Debug = "ignore")]
    pub dismiss_action: AlertAction<ConfirmationAlertViewModel>,
    #[derivative(Debug = "ignore")]
    pub confirm_action: AlertAction<ConfirmationAlertViewModel>,
}

impl ConfirmationAlertViewModel {
    pub fn new(title: impl Into<String>, message: impl Into<String>, config: &UiConfig) -> Self {
        let localization = &config.localization;
        Self {
            title: title.into(),
            message: message.into(),
            dismiss_button_title: localization
                .localized_capitalized(&config.alerts.confirmation_dismiss_title_key),
            confirm_button_title: localization
                .localized_capitalized(&config.alerts.confirmation_confirm_title_key),
            dismiss_action: no_op(),
            confirm_action: no_op(),
        }
    }

    pub fn with_dismiss_button_title(mut self, title: impl Into<String>) -> Self {
        self.dismiss_button_title = title.into();
        self
    }

    pub fn with_confirm_button_title(mut self, title: impl Into<String>) -> Self {
        self.confirm_button_title = title.into();
        self
    }

    pub fn with_dismiss_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&ConfirmationAlertViewModel) + Send + Sync + 'static,
    {
        self.dismiss_action = Box::new(action);
        self
    }

    pub fn with_confirm_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&ConfirmationAlertViewModel) + Send + Sync + 'static,
    {
        self.confirm_action = Box::new(action);
        self
    }

    pub fn dismiss(&self) {
        (self.dismiss_action)(self)
    }

    pub fn confirm(&self) {
        (self.confirm_action)(self)
    }
}
