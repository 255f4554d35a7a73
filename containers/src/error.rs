use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Error)]
pub enum ContainerErrors {
    #[error("Index {index} is out of bounds for length {len}")]
    IndexOutOfBounds { index: isize, len: usize },
}
