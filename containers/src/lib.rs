pub mod error;
pub mod prelude;
pub mod traits;
