use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum SignalError {
    #[error("Signal already terminated, event was not delivered")]
    Terminated,
    #[error("Signal was disposed, nobody is observing")]
    Disposed,
}
