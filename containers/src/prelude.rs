pub use super::error;
pub use super::error::ContainerErrors;
pub use super::traits::*;
