//! Boundary to the platform metadata system.
//!
//! The probes in [`crate::probe`] never talk to the platform directly;
//! every existence question goes through the [`MetadataQuery`] trait. The
//! embedding application installs one handle at startup with
//! [`install_metadata_service`], and the crate acquires it lazily on the
//! first probe. A probe that runs with no handle installed cannot answer
//! anything, now or later, so that path terminates the process instead of
//! returning a guess.

use once_cell::sync::OnceCell;
use std::sync::Arc;
use thiserror::Error;

/// Failure reported by the platform metadata system for a single query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The platform call itself failed.
    #[error("metadata query failed with platform error {code:#010x}")]
    Platform {
        /// Raw platform error code.
        code: u32,
    },

    /// The metadata system could not interpret the query.
    #[error("metadata query rejected: {0}")]
    Rejected(String),
}

/// Synchronous existence queries against the platform metadata system.
///
/// This is the one external collaborator of the crate, mirroring the
/// `ApiInformation` surface: each method asks whether a single named
/// capability exists on the running build. Implementations are expected
/// to be expensive cross-boundary calls; callers should go through the
/// memoized probes in [`crate::probe`] rather than calling these
/// directly.
pub trait MetadataQuery: Send + Sync {
    /// Whether `contract` is present at major version `major` or later.
    fn is_api_contract_present(&self, contract: &str, major: u16) -> Result<bool, QueryError>;

    /// Whether the type `type_name` exists.
    fn is_type_present(&self, type_name: &str) -> Result<bool, QueryError>;

    /// Whether `type_name` has a property named `property`.
    fn is_property_present(&self, type_name: &str, property: &str) -> Result<bool, QueryError>;

    /// Whether `type_name` has a method named `method`.
    fn is_method_present(&self, type_name: &str, method: &str) -> Result<bool, QueryError>;

    /// Whether `type_name` has an event named `event`.
    fn is_event_present(&self, type_name: &str, event: &str) -> Result<bool, QueryError>;

    /// Whether the enum `enum_name` has a value named `value`.
    fn is_enum_value_present(&self, enum_name: &str, value: &str) -> Result<bool, QueryError>;
}

static SERVICE: OnceCell<Arc<dyn MetadataQuery>> = OnceCell::new();

/// Installs the process-wide metadata service handle.
///
/// Call once during application startup, before the first probe runs.
/// Returns [`crate::Error::ServiceAlreadyInstalled`] on a second call.
pub fn install_metadata_service(service: Arc<dyn MetadataQuery>) -> crate::Result<()> {
    SERVICE
        .set(service)
        .map_err(|_| crate::Error::ServiceAlreadyInstalled)
}

/// The installed service handle.
///
/// Aborts the process if no service has been installed: every probe in
/// the crate depends on this handle, and there is no degraded mode.
pub(crate) fn metadata_service() -> &'static Arc<dyn MetadataQuery> {
    match SERVICE.get() {
        Some(service) => service,
        None => {
            tracing::error!("no metadata service installed before first API probe");
            std::process::abort();
        }
    }
}
