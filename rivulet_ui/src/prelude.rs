pub use super::alert::*;
pub use super::border::*;
pub use super::config::*;
pub use super::error::UiError;
pub use super::font::*;
pub use super::form::*;
pub use super::geometry::*;
pub use super::localization::Localization;
pub use super::text::*;
pub use super::view::*;
