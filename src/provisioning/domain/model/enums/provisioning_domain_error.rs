use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProvisioningDomainError {
    #[error("resource name is invalid; use [a-z0-9-] and length 3..44")]
    InvalidResourceName,

    #[error("location is invalid; provide a region name such as \"East US\"")]
    InvalidLocation,

    #[error("api kind is invalid; expected \"sql\" or \"mongo\"")]
    InvalidApiKind,

    #[error("operation id is invalid")]
    InvalidOperationId,

    #[error("an operation for this resource is already in flight")]
    OperationConflict,

    #[error("operation not found")]
    OperationNotFound,

    #[error("resource not found")]
    ResourceNotFound,

    #[error("invalid state transition")]
    InvalidStateTransition,

    #[error("upstream error: {0}")]
    Upstream(String),
}
