//! Windows release lattice.
//!
//! Every release of Windows 10 and later ships a new major version of the
//! universal API contract, so "which release is this build" and "which
//! contract version is present" are the same question. The numbering is
//! sparse: contract major 9 was never shipped, and navigation between
//! adjacent releases has to skip over it.

use serde::{Deserialize, Serialize};

/// A released version of Windows, identified by the major version of the
/// universal API contract it shipped.
///
/// Declaration order matches the contract numbering, so the derived `Ord`
/// is the release timeline. The enum holds only shipped releases; an API
/// outside the universal contract is modelled as `Option::<WindowsVersion>::None`
/// at its `introduced_in` site and never takes part in version ordering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u16)]
pub enum WindowsVersion {
    /// Threshold 1 = version 1507 = build 10240.
    Th1 = 1,
    /// Threshold 2 = version 1511 = build 10586.
    Th2 = 2,
    /// Redstone 1 = Anniversary Update = version 1607 = build 14393.
    Rs1 = 3,
    /// Redstone 2 = Creators Update = version 1703 = build 15063.
    Rs2 = 4,
    /// Redstone 3 = Fall Creators Update = version 1709 = build 16299.
    Rs3 = 5,
    /// Redstone 4 = April 2018 Update = version 1803 = build 17134.
    Rs4 = 6,
    /// Redstone 5 = October 2018 Update = version 1809 = build 17763.
    Rs5 = 7,
    /// 19H1 = May 2019 Update = version 1903 = build 18362.
    Cy19H1 = 8,
    // No release shipped contract major 9.
    /// 20H1 = May 2020 Update = version 2004 = build 19041.
    Cy20H1 = 10,
}

/// The minimum Windows version the embedding application requires to run
/// at all, as declared in its app manifest.
///
/// Any API introduced at or before this version is unconditionally
/// present on every machine the application can start on, and is never
/// worth a metadata query.
pub const REQUIRED_VERSION: WindowsVersion = WindowsVersion::Th1;

impl WindowsVersion {
    /// Major version of the universal API contract this release shipped.
    pub fn contract_major(self) -> u16 {
        self as u16
    }

    /// True if the application baseline already guarantees this version,
    /// i.e. it is [`REQUIRED_VERSION`] or older.
    pub fn is_within_baseline(self) -> bool {
        self <= REQUIRED_VERSION
    }

    /// The release immediately after this one, skipping the unshipped
    /// contract-9 slot. `None` for the newest release in the lattice.
    pub fn successor(self) -> Option<WindowsVersion> {
        use WindowsVersion::*;
        Some(match self {
            Th1 => Th2,
            Th2 => Rs1,
            Rs1 => Rs2,
            Rs2 => Rs3,
            Rs3 => Rs4,
            Rs4 => Rs5,
            Rs5 => Cy19H1,
            Cy19H1 => Cy20H1,
            Cy20H1 => return None,
        })
    }

    /// The release immediately before this one, skipping the unshipped
    /// contract-9 slot. `None` for the oldest release in the lattice.
    pub fn predecessor(self) -> Option<WindowsVersion> {
        use WindowsVersion::*;
        Some(match self {
            Th1 => return None,
            Th2 => Th1,
            Rs1 => Th2,
            Rs2 => Rs1,
            Rs3 => Rs2,
            Rs4 => Rs3,
            Rs5 => Rs4,
            Cy19H1 => Rs5,
            Cy20H1 => Cy19H1,
        })
    }
}
