use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    LockPoisoned(&'static str),
    NotFound(u64),
    RemoteIdConflict { remote_id: u64, existing_id: u64 },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::LockPoisoned(operation) => {
                write!(f, "tariff store lock poisoned during {}", operation)
            }
            StoreError::NotFound(id) => write!(f, "tariff {} not found", id),
            StoreError::RemoteIdConflict {
                remote_id,
                existing_id,
            } => write!(
                f,
                "remote id {} is already bound to tariff {}",
                remote_id, existing_id
            ),
        }
    }
}

impl std::error::Error for StoreError {}
