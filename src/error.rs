use thiserror::Error;

// Error types for the hotel manager
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ManagerError {
    #[error("Index out of range: {index} (collection holds {len} hotels)")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ManagerError>;
