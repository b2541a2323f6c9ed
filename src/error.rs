use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WatchError {
    #[error("Invalid threshold {0}: must be a finite, non-negative distance")]
    InvalidThreshold(f64),

    #[error("Scroll host is busy dispatching a notification")]
    HostBusy,
}
