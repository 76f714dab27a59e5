use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("A location batch must contain at least one location")]
    EmptyBatch,
}
