//! Version-gated, memoized availability probes.
//!
//! [`ApiProbe`] answers "does this API exist on the running build" with
//! at most one metadata query per distinct API, ever. A version bracket
//! is tried before the metadata system is involved:
//!
//! - an API introduced in a release the running build has not reached is
//!   **absent** without asking;
//! - an API introduced strictly before a release the running build has
//!   reached is **present** without asking.
//!
//! Only a build sitting exactly at the introducing release falls between
//! the brackets and needs the metadata system's answer, because a
//! pre-release build of that release may lack APIs added late in its
//! cycle. Being *at* the introducing version is never enough to assume
//! presence; being *past* it is.
//!
//! The crate-level free functions in this module delegate to a
//! process-wide [`ApiProbe`] created lazily from the installed
//! [`crate::MetadataQuery`] service; separate instances with their own
//! caches can be built for tests.

mod memo;

use crate::boundary::{metadata_service, MetadataQuery, QueryError};
use crate::version::WindowsVersion;
use memo::MemoMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Name of the contract whose major version tracks Windows releases.
pub const UNIVERSAL_API_CONTRACT: &str = "Windows.Foundation.UniversalApiContract";

/// The kind of API an availability probe asks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiKind {
    Type,
    Property,
    Method,
    Event,
    EnumValue,
}

/// Memoization identity of one availability probe.
///
/// Identity is structural: two probes with the same kind and the same
/// names share one cache entry and at most one metadata query between
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProbeKey {
    kind: ApiKind,
    owner: String,
    member: Option<String>,
}

impl ProbeKey {
    fn new(kind: ApiKind, owner: &str, member: Option<&str>) -> Self {
        Self {
            kind,
            owner: owner.to_owned(),
            member: member.map(str::to_owned),
        }
    }
}

/// Version-gated, memoized availability probes over one metadata service.
///
/// Every answer is computed at most once per distinct identity and cached
/// for the lifetime of the probe; repeated calls are memory reads. The
/// memo tables are the only mutable state, each entry written once and
/// immutable afterwards.
pub struct ApiProbe {
    service: Arc<dyn MetadataQuery>,
    versions: MemoMap<WindowsVersion>,
    apis: MemoMap<ProbeKey>,
}

impl ApiProbe {
    /// A probe backed by `service`, with empty caches.
    pub fn new(service: Arc<dyn MetadataQuery>) -> Self {
        Self {
            service,
            versions: MemoMap::new(),
            apis: MemoMap::new(),
        }
    }

    /// True if the running build is `version` or later.
    ///
    /// Versions within the application baseline are reachable by
    /// definition and answered without a query. Any other version is
    /// asked of the metadata system once, as a universal-contract check,
    /// and cached.
    pub fn is_at_least(&self, version: WindowsVersion) -> bool {
        self.versions.get_or_compute(&version, || {
            if version.is_within_baseline() {
                return true;
            }
            let outcome = self
                .service
                .is_api_contract_present(UNIVERSAL_API_CONTRACT, version.contract_major());
            match outcome {
                Ok(reached) => {
                    tracing::debug!(?version, reached, "contract version query resolved");
                    reached
                }
                Err(err) => {
                    tracing::warn!(
                        ?version,
                        %err,
                        "contract version query failed, assuming version not reached"
                    );
                    false
                }
            }
        })
    }

    /// Availability of the type `type_name`.
    ///
    /// `introduced_in` is the release whose universal contract first
    /// carried the API, or `None` for APIs outside the universal
    /// contract (extension APIs, private APIs), which are always probed.
    /// The same convention applies to the other four probe kinds.
    pub fn is_type_present(
        &self,
        type_name: &str,
        introduced_in: Option<WindowsVersion>,
    ) -> bool {
        self.resolve(introduced_in, ProbeKey::new(ApiKind::Type, type_name, None), || {
            self.service.is_type_present(type_name)
        })
    }

    /// Availability of the property `property` on `type_name`.
    pub fn is_property_present(
        &self,
        type_name: &str,
        property: &str,
        introduced_in: Option<WindowsVersion>,
    ) -> bool {
        let key = ProbeKey::new(ApiKind::Property, type_name, Some(property));
        self.resolve(introduced_in, key, || {
            self.service.is_property_present(type_name, property)
        })
    }

    /// Availability of the method `method` on `type_name`.
    pub fn is_method_present(
        &self,
        type_name: &str,
        method: &str,
        introduced_in: Option<WindowsVersion>,
    ) -> bool {
        let key = ProbeKey::new(ApiKind::Method, type_name, Some(method));
        self.resolve(introduced_in, key, || {
            self.service.is_method_present(type_name, method)
        })
    }

    /// Availability of the event `event` on `type_name`.
    pub fn is_event_present(
        &self,
        type_name: &str,
        event: &str,
        introduced_in: Option<WindowsVersion>,
    ) -> bool {
        let key = ProbeKey::new(ApiKind::Event, type_name, Some(event));
        self.resolve(introduced_in, key, || {
            self.service.is_event_present(type_name, event)
        })
    }

    /// Availability of the named value `value` on the enum `enum_name`.
    pub fn is_enum_value_present(
        &self,
        enum_name: &str,
        value: &str,
        introduced_in: Option<WindowsVersion>,
    ) -> bool {
        let key = ProbeKey::new(ApiKind::EnumValue, enum_name, Some(value));
        self.resolve(introduced_in, key, || {
            self.service.is_enum_value_present(enum_name, value)
        })
    }

    /// Three-way decision applied to every capability probe: definitely
    /// absent, definitely present, or ask the metadata system once.
    fn resolve(
        &self,
        introduced_in: Option<WindowsVersion>,
        key: ProbeKey,
        query: impl FnOnce() -> Result<bool, QueryError>,
    ) -> bool {
        if self.definitely_absent(introduced_in) {
            return false;
        }
        if self.definitely_present(introduced_in) {
            return true;
        }
        self.apis.get_or_compute(&key, || match query() {
            Ok(present) => {
                tracing::debug!(?key, present, "metadata query resolved");
                present
            }
            Err(err) => {
                tracing::warn!(?key, %err, "metadata query failed, treating API as absent");
                false
            }
        })
    }

    /// An API cannot exist before the release that introduced it.
    fn definitely_absent(&self, introduced_in: Option<WindowsVersion>) -> bool {
        match introduced_in {
            Some(version) => !self.is_at_least(version),
            None => false,
        }
    }

    /// An API is guaranteed once the running build is confirmed past the
    /// introducing release. The baseline counts as confirmation on its
    /// own; otherwise the successor release must be reached — the
    /// introducing release itself is not enough.
    fn definitely_present(&self, introduced_in: Option<WindowsVersion>) -> bool {
        match introduced_in {
            Some(version) if version.is_within_baseline() => true,
            Some(version) => version
                .successor()
                .map_or(false, |next| self.is_at_least(next)),
            None => false,
        }
    }
}

static GLOBAL: Lazy<ApiProbe> = Lazy::new(|| ApiProbe::new(Arc::clone(metadata_service())));

/// The process-wide probe behind the crate-level checks.
pub fn global_probe() -> &'static ApiProbe {
    &GLOBAL
}

/// True if the running build is `version` or later. Process-wide cache.
pub fn is_at_least(version: WindowsVersion) -> bool {
    GLOBAL.is_at_least(version)
}

/// Availability of `type_name`, against the process-wide cache.
pub fn is_type_present(type_name: &str, introduced_in: Option<WindowsVersion>) -> bool {
    GLOBAL.is_type_present(type_name, introduced_in)
}

/// Availability of a property, against the process-wide cache.
pub fn is_property_present(
    type_name: &str,
    property: &str,
    introduced_in: Option<WindowsVersion>,
) -> bool {
    GLOBAL.is_property_present(type_name, property, introduced_in)
}

/// Availability of a method, against the process-wide cache.
pub fn is_method_present(
    type_name: &str,
    method: &str,
    introduced_in: Option<WindowsVersion>,
) -> bool {
    GLOBAL.is_method_present(type_name, method, introduced_in)
}

/// Availability of an event, against the process-wide cache.
pub fn is_event_present(
    type_name: &str,
    event: &str,
    introduced_in: Option<WindowsVersion>,
) -> bool {
    GLOBAL.is_event_present(type_name, event, introduced_in)
}

/// Availability of an enum's named value, against the process-wide cache.
pub fn is_enum_value_present(
    enum_name: &str,
    value: &str,
    introduced_in: Option<WindowsVersion>,
) -> bool {
    GLOBAL.is_enum_value_present(enum_name, value, introduced_in)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_key_identity_is_structural() {
        let a = ProbeKey::new(ApiKind::Property, "Ns.Widget", Some("Color"));
        let b = ProbeKey::new(ApiKind::Property, "Ns.Widget", Some("Color"));
        let c = ProbeKey::new(ApiKind::Method, "Ns.Widget", Some("Color"));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_api_kind_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ApiKind::EnumValue).unwrap(),
            "\"enum_value\""
        );
        let key = ProbeKey::new(ApiKind::Type, "Ns.Widget", None);
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(json["kind"], "type");
        assert_eq!(json["owner"], "Ns.Widget");
    }
}
