//! # apicheck
//!
//! Efficient runtime checks for Windows API availability.
//!
//! ## Overview
//!
//! An application that supports several Windows releases cannot assume
//! that every type, property, method, event, or enum value it was built
//! against exists on the machine it is running on. The authoritative
//! answer comes from the platform metadata system (`ApiInformation`),
//! but that is a cross-boundary call — far too expensive to repeat at
//! every call site.
//!
//! This crate answers each availability question at most once per
//! process:
//!
//! - a **release lattice** ([`WindowsVersion`]) orders Windows releases
//!   by universal API contract version, with a compile-time baseline
//!   ([`REQUIRED_VERSION`]) the application already guarantees;
//! - a **version bracket** settles most probes analytically: an API
//!   introduced in a release the running build has not reached is
//!   absent, and one introduced strictly before a reached release is
//!   present — no metadata query either way;
//! - probes that fall between the brackets reach the **memoized
//!   boundary probe**, which asks the metadata system once per distinct
//!   API and caches the answer for the lifetime of the process, even
//!   under concurrent first use.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use apicheck::checks;
//!
//! if checks::is_reveal_brush_available() {
//!     // Safe to construct a RevealBrush.
//! }
//! ```
//!
//! The application installs its metadata service once at startup with
//! [`install_metadata_service`]. The first probe to run without an
//! installed service terminates the process: nothing in this crate can
//! be answered without it.
//!
//! ## Module organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`version`] | Windows release lattice and application baseline |
//! | [`probe`] | Version-gated, memoized availability probes |
//! | [`boundary`] | Metadata service trait and process-wide handle |
//! | [`checks`] | Pre-built checks for common versions and APIs |

pub mod boundary;
pub mod checks;
pub mod probe;
pub mod version;

pub mod error;

pub use boundary::{install_metadata_service, MetadataQuery, QueryError};
pub use error::Error;
pub use probe::{ApiKind, ApiProbe, ProbeKey, UNIVERSAL_API_CONTRACT};
pub use version::{WindowsVersion, REQUIRED_VERSION};

/// Result type alias for the library.
pub type Result<T> = std::result::Result<T, Error>;
