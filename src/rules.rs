use crate::markers::{Marker, Markers};
use crate::types::{AppVersion, ClassificationFlags, Platform, StylesheetChoice};

const OPERA_MIN_VERSION: i64 = 7;
const MSIE_MIN_VERSION: i64 = 4;
const NETSCAPE_MIN_VERSION: i64 = 4;

/// Derive the classification flags from the markers found in a user agent.
pub(crate) fn derive_flags(markers: Markers, version: AppVersion) -> ClassificationFlags {
    let is_opera = markers.contains(Marker::Opera);
    let is_mozilla_family = markers.contains(Marker::Gecko);
    let is_msie = markers.contains(Marker::Msie) && !is_mozilla_family && !is_opera;
    let is_netscape_like =
        markers.contains(Marker::Mozilla) && !is_msie && !is_mozilla_family && !is_opera;

    ClassificationFlags {
        is_opera,
        is_opera_v7_plus: is_opera && version.at_least(OPERA_MIN_VERSION),
        is_mozilla_family,
        is_msie,
        is_msie_v4_plus: is_msie && version.at_least(MSIE_MIN_VERSION),
        is_netscape_like,
        is_netscape_v4_plus: is_netscape_like && version.at_least(NETSCAPE_MIN_VERSION),
        is_windows: markers.contains(Marker::Win),
        is_mac: markers.contains(Marker::Mac),
        is_unix: markers.contains(Marker::X11),
    }
}

/// Pick a stylesheet for the given flags, or `None` when the gate fails.
///
/// Netscape-like browsers use the `_ns` sheets; everything else, including
/// unrecognized browsers, uses the `_ie` ones. On Unix or an unknown
/// platform only Netscape-like browsers and Opera get `unix`; MSIE and
/// unrecognized browsers get `win_ie` there. A Mozilla-family browser
/// always ends up with `mozilla`.
pub fn select_stylesheet(flags: &ClassificationFlags) -> Option<StylesheetChoice> {
    if !flags.passes_gate() {
        return None;
    }

    let ns = flags.is_netscape_like;
    let choice = match flags.platform() {
        Platform::Windows if ns => StylesheetChoice::WinNs,
        Platform::Windows => StylesheetChoice::WinIe,
        Platform::Mac if ns => StylesheetChoice::MacNs,
        Platform::Mac => StylesheetChoice::MacIe,
        Platform::Unix | Platform::Unrecognized if ns || flags.is_opera => StylesheetChoice::Unix,
        Platform::Unix | Platform::Unrecognized => StylesheetChoice::WinIe,
    };

    if flags.is_mozilla_family {
        return Some(StylesheetChoice::Mozilla);
    }
    Some(choice)
}
