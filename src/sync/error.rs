//! Error types for remote fetches and sync cycles.

use std::error::Error;
use std::fmt;

use crate::store::StoreError;

/// The remote feed could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFetchError {
    /// Connection, timeout or client setup failure.
    Transport(String),
    /// The feed answered with a non-success status.
    Status(u16),
    /// The body was not a JSON array of tariffs.
    Decode(String),
}

impl fmt::Display for RemoteFetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteFetchError::Transport(msg) => write!(f, "remote transport error: {}", msg),
            RemoteFetchError::Status(code) => write!(f, "remote returned status {}", code),
            RemoteFetchError::Decode(msg) => write!(f, "remote body decode failed: {}", msg),
        }
    }
}

impl Error for RemoteFetchError {}

impl From<reqwest::Error> for RemoteFetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RemoteFetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RemoteFetchError::Status(status.as_u16())
        } else {
            RemoteFetchError::Transport(err.to_string())
        }
    }
}

/// Error type for a sync cycle.
#[derive(Debug)]
pub enum SyncError {
    /// Fetching the batch failed; the cycle is skipped.
    Fetch(RemoteFetchError),
    /// A single remote record was structurally invalid.
    MalformedInput(String),
    /// The store could not be accessed.
    Store(StoreError),
    /// Another cycle is still running.
    AlreadyRunning,
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Fetch(e) => write!(f, "fetch failed: {}", e),
            SyncError::MalformedInput(msg) => write!(f, "malformed remote tariff: {}", msg),
            SyncError::Store(e) => write!(f, "store error: {}", e),
            SyncError::AlreadyRunning => write!(f, "a sync cycle is already running"),
        }
    }
}

impl Error for SyncError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SyncError::Fetch(e) => Some(e),
            SyncError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<RemoteFetchError> for SyncError {
    fn from(err: RemoteFetchError) -> Self {
        SyncError::Fetch(err)
    }
}

impl From<StoreError> for SyncError {
    fn from(err: StoreError) -> Self {
        SyncError::Store(err)
    }
}
