//! Crate error types.

use crate::boundary::QueryError;
use thiserror::Error;

/// Unified error type for the crate's fallible surface.
///
/// Only setup operations return errors. The probes themselves never do:
/// a failed metadata query is recorded as "absent" and cached (see
/// [`crate::probe`]).
#[derive(Debug, Error)]
pub enum Error {
    /// A metadata service handle was installed twice.
    #[error("a metadata service is already installed for this process")]
    ServiceAlreadyInstalled,

    /// A query failed at the metadata boundary.
    #[error(transparent)]
    Query(#[from] QueryError),
}
