use thiserror::Error;

/// Caller-visible geographic resolution failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("no service-area identifier was provided")]
    MissingAreaIdentifier,
}

/// Failures of the durable key-value backend behind the attribution store.
/// These never escape the store; they are folded into its outcome values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("storage rejected write: {0}")]
    WriteRejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    EmptyValue(&'static str),
    #[error("location catalog not initialized; call init_catalog() first")]
    CatalogNotLoaded,
    #[error("location catalog already initialized")]
    CatalogAlreadyLoaded,
    #[error(transparent)]
    Catalog(#[from] shared_types::CatalogError),
}
