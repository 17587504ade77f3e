//! Pre-built checks for common Windows versions and APIs.
//!
//! Each of these is a one-line call into the process-wide probe. APIs
//! without a pre-built check go through [`crate::probe`] directly with
//! their own name and introducing version.

use crate::probe;
use crate::version::WindowsVersion;

/// WinRT type names used by the pre-built checks.
mod runtime_class {
    pub const UI_ELEMENT: &str = "Windows.UI.Xaml.UIElement";
    pub const COMPOSITION_LINEAR_GRADIENT_BRUSH: &str =
        "Windows.UI.Composition.CompositionLinearGradientBrush";
    pub const REVEAL_BRUSH: &str = "Windows.UI.Xaml.Media.RevealBrush";
    pub const STATUS_BAR: &str = "Windows.UI.ViewManagement.StatusBar";
}

/// True if the app is running on Windows RS1 or a later version.
pub fn is_at_least_rs1() -> bool {
    probe::is_at_least(WindowsVersion::Rs1)
}

/// True if the app is running on Windows RS2 or a later version.
pub fn is_at_least_rs2() -> bool {
    probe::is_at_least(WindowsVersion::Rs2)
}

/// True if the app is running on Windows RS3 or a later version.
pub fn is_at_least_rs3() -> bool {
    probe::is_at_least(WindowsVersion::Rs3)
}

/// True if the app is running on Windows RS4 or a later version.
pub fn is_at_least_rs4() -> bool {
    probe::is_at_least(WindowsVersion::Rs4)
}

/// True if the app is running on Windows RS5 or a later version.
pub fn is_at_least_rs5() -> bool {
    probe::is_at_least(WindowsVersion::Rs5)
}

/// True if the app is running on Windows 19H1 or a later version.
pub fn is_at_least_19h1() -> bool {
    probe::is_at_least(WindowsVersion::Cy19H1)
}

/// True if the app is running on Windows 20H1 or a later version.
pub fn is_at_least_20h1() -> bool {
    probe::is_at_least(WindowsVersion::Cy20H1)
}

/// True if the `UIElement.PreviewKeyDown`/`PreviewKeyUp` events are
/// available (introduced in RS3).
pub fn are_preview_key_events_available() -> bool {
    probe::is_property_present(
        runtime_class::UI_ELEMENT,
        "PreviewKeyDown",
        Some(WindowsVersion::Rs3),
    )
}

/// True if `Windows.UI.Composition.CompositionLinearGradientBrush` is
/// available (introduced in RS3).
pub fn is_composition_linear_gradient_brush_available() -> bool {
    probe::is_type_present(
        runtime_class::COMPOSITION_LINEAR_GRADIENT_BRUSH,
        Some(WindowsVersion::Rs3),
    )
}

/// True if `Windows.UI.Xaml.Media.RevealBrush` is available (introduced
/// in RS3).
pub fn is_reveal_brush_available() -> bool {
    probe::is_type_present(runtime_class::REVEAL_BRUSH, Some(WindowsVersion::Rs3))
}

/// True if the deprecated `Windows.UI.ViewManagement.StatusBar` is
/// available. Not part of the universal contract, so the metadata system
/// is always asked (once).
pub fn is_status_bar_available() -> bool {
    probe::is_type_present(runtime_class::STATUS_BAR, None)
}
