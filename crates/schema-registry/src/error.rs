use thiserror::Error;

/// Errors from the OID registry. A separate taxonomy from Kerberos error codes or cursor errors —
/// this registry never maps onto either.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("oid {oid} is not registered")]
    NotRegistered { oid: String },
    #[error("oid {oid} is already registered")]
    AlreadyRegistered { oid: String },
}
