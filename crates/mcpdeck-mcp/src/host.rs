//! Native host detection.
//!
//! Decides whether the process runs inside the native host environment (and
//! should talk to the bridge) or must use JSON-RPC over HTTP. The probe is a
//! pure read of ambient environment markers and cannot fail: when nothing can
//! be inspected it answers `false`, the remote mode that works anywhere.

use std::env;

/// Environment variables the hosting runtime sets when a bridge is available.
const NATIVE_HOST_MARKERS: &[&str] = &[
    "MCPDECK_NATIVE_HOST",
    "MCPDECK_HOST_BRIDGE",
    "TAURI_ENV_PLATFORM",
];

/// Check whether the current process runs inside the native host.
pub fn is_native_host() -> bool {
    detect_from(
        NATIVE_HOST_MARKERS
            .iter()
            .filter_map(|name| env::var(name).ok().map(|value| ((*name).to_string(), value))),
    )
}

/// Evaluate a set of (name, value) markers. A single present, truthy marker
/// means the native host is available.
fn detect_from(vars: impl IntoIterator<Item = (String, String)>) -> bool {
    vars.into_iter().any(|(_, value)| is_truthy(&value))
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !value.eq_ignore_ascii_case("0") && !value.eq_ignore_ascii_case("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(n, v)| (n.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_no_markers_is_remote() {
        assert!(!detect_from(vars(&[])));
    }

    #[test]
    fn test_truthy_marker_is_native() {
        assert!(detect_from(vars(&[("MCPDECK_NATIVE_HOST", "1")])));
        assert!(detect_from(vars(&[("TAURI_ENV_PLATFORM", "linux")])));
    }

    #[test]
    fn test_falsy_markers_are_remote() {
        assert!(!detect_from(vars(&[("MCPDECK_NATIVE_HOST", "")])));
        assert!(!detect_from(vars(&[("MCPDECK_NATIVE_HOST", "0")])));
        assert!(!detect_from(vars(&[("MCPDECK_NATIVE_HOST", "false")])));
        assert!(!detect_from(vars(&[("MCPDECK_NATIVE_HOST", "FALSE")])));
        assert!(!detect_from(vars(&[("MCPDECK_NATIVE_HOST", "  ")])));
    }

    #[test]
    fn test_any_truthy_marker_wins() {
        assert!(detect_from(vars(&[
            ("MCPDECK_NATIVE_HOST", "0"),
            ("MCPDECK_HOST_BRIDGE", "yes"),
        ])));
    }
}
