pub mod alert;
pub mod border;
pub mod config;
pub mod error;
pub mod font;
pub mod form;
pub mod geometry;
pub mod localization;
pub mod prelude;
pub mod text;
pub mod view;

pub use alert::{AlertAction, ConfirmationAlertViewModel, ErrorAlertViewModel};
pub use border::{Border, Edge};
pub use config::{AlertConfig, UiConfig};
pub use error::UiError;
pub use font::{Font, FontConfig, TextStyle};
pub use form::{FieldId, Form};
pub use geometry::{Color, EdgeInsets, Rect};
pub use localization::Localization;
pub use text::{FontStyled, Label, StyledFont, TextField};
pub use view::{View, ViewPositioning};
