//! Scripts injected into the widget document by the bridge host.
//!
//! Each script is a self-contained IIFE built from a template. They are
//! never executed here; tests check their structure.

use serde::Serialize;
use trialfinder_common::{Accuracy, GeoCoordinate};

use crate::ipc::JS_POST_FN;

/// Delay after the `load` event before the one-off height report.
pub const LOAD_SETTLE_DELAY_MS: u64 = 500;

/// Fallback height polling interval.
pub const HEIGHT_POLL_INTERVAL_MS: u64 = 1000;

const POST: &str = "__POST_MESSAGE__";

const GEOLOCATION_TEMPLATE: &str = r#"(function () {
    var coords = __COORDS__;
    var stub = function (success) {
        if (typeof success !== 'function') return;
        success({ coords: coords, timestamp: Date.now() });
    };
    var geo = navigator.geolocation;
    if (!geo) {
        try {
            Object.defineProperty(navigator, 'geolocation', { value: {}, configurable: true });
            geo = navigator.geolocation;
        } catch (e) {
            return;
        }
    }
    try {
        geo.getCurrentPosition = stub;
    } catch (e) {
        Object.defineProperty(geo, 'getCurrentPosition', { value: stub, configurable: true });
    }
})();"#;

const LINK_TEMPLATE: &str = r#"(function () {
    if (window.__trialfinderLinks) return;
    window.__trialfinderLinks = true;
    var post = __POST_MESSAGE__;
    var absolute = function (href) {
        try { return new URL(href, document.baseURI).href; } catch (e) { return String(href); }
    };
    window.open = function (url) {
        if (url) post({ kind: 'external_link', url: absolute(url) });
        return null;
    };
    document.addEventListener('click', function (event) {
        var el = event.target;
        while (el && el.nodeName !== 'A') el = el.parentElement;
        if (!el || !el.href) return;
        if ((el.getAttribute('target') || '').toLowerCase() !== '_blank') return;
        event.preventDefault();
        event.stopPropagation();
        post({ kind: 'external_link', url: el.href });
    }, true);
})();"#;

const HEIGHT_TEMPLATE: &str = r#"(function () {
    if (window.__trialfinderHeight) return;
    window.__trialfinderHeight = true;
    var post = __POST_MESSAGE__;
    var report = function () {
        var body = document.body, root = document.documentElement;
        if (!body || !root) return;
        post({ kind: 'resize', height: Math.max(body.scrollHeight, root.scrollHeight) });
    };
    var observe = function () {
        if (typeof ResizeObserver === 'function' && document.body) {
            new ResizeObserver(report).observe(document.body);
        }
    };
    if (document.body) observe(); else document.addEventListener('DOMContentLoaded', observe);
    window.addEventListener('load', function () { setTimeout(report, __SETTLE_MS__); });
    setInterval(report, __POLL_MS__);
})();"#;

/// Shape of `GeolocationCoordinates` handed to the widget.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Coords {
    latitude: f64,
    longitude: f64,
    altitude: Option<f64>,
    accuracy: f64,
    altitude_accuracy: Option<f64>,
    heading: Option<f64>,
    speed: Option<f64>,
}

const SCROLLING_TEMPLATE: &str = r#"(function () {
    var overflow = '__OVERFLOW__';
    document.documentElement.style.overflow = overflow;
    if (document.body) document.body.style.overflow = overflow;
})();"#;

/// Reported accuracy radius, in metres, for a fix taken at `accuracy`.
pub fn accuracy_radius(accuracy: Accuracy) -> f64 {
    match accuracy {
        Accuracy::High => 10.0,
        Accuracy::Balanced => 100.0,
        Accuracy::Low => 1_000.0,
        Accuracy::Lowest => 3_000.0,
    }
}

/// Replaces `navigator.geolocation.getCurrentPosition` with a stub that
/// answers synchronously with `coordinate`.
pub fn geolocation_override(coordinate: GeoCoordinate, accuracy: Accuracy) -> String {
    let coords = Coords {
        latitude: coordinate.latitude,
        longitude: coordinate.longitude,
        altitude: None,
        accuracy: accuracy_radius(accuracy),
        altitude_accuracy: None,
        heading: None,
        speed: None,
    };
    let json = serde_json::to_string(&coords).unwrap_or_else(|_| "null".to_string());
    GEOLOCATION_TEMPLATE.replace("__COORDS__", &json)
}

/// Suppresses `window.open` and `target="_blank"` link clicks, posting an
/// `external_link` message instead.
pub fn link_interception() -> String {
    LINK_TEMPLATE.replace(POST, JS_POST_FN)
}

/// Posts the document height as a `resize` message.
pub fn height_reporter() -> String {
    HEIGHT_TEMPLATE
        .replace(POST, JS_POST_FN)
        .replace("__SETTLE_MS__", &LOAD_SETTLE_DELAY_MS.to_string())
        .replace("__POLL_MS__", &HEIGHT_POLL_INTERVAL_MS.to_string())
}

/// Turns the document's own scrolling on or off, overriding the overflow
/// the markup was built with.
pub fn document_scrolling(enabled: bool) -> String {
    let overflow = if enabled { "auto" } else { "hidden" };
    SCROLLING_TEMPLATE.replace("__OVERFLOW__", overflow)
}

/// Initialization scripts for a bridge document, in injection order.
pub fn initialization_scripts(
    coordinate: Option<GeoCoordinate>,
    accuracy: Accuracy,
) -> Vec<String> {
    let mut scripts = Vec::with_capacity(3);
    if let Some(coordinate) = coordinate {
        scripts.push(geolocation_override(coordinate, accuracy));
    }
    scripts.push(link_interception());
    scripts.push(height_reporter());
    scripts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords_json(script: &str) -> serde_json::Value {
        let start = script.find("var coords = ").unwrap() + "var coords = ".len();
        let end = start + script[start..].find(";\n").unwrap();
        serde_json::from_str(&script[start..end]).unwrap()
    }

    #[test]
    fn override_carries_coordinate() {
        let script = geolocation_override(GeoCoordinate::new(37.0, -122.0), Accuracy::Balanced);
        let coords = coords_json(&script);
        assert_eq!(coords["latitude"], 37.0);
        assert_eq!(coords["longitude"], -122.0);
        assert!(!coords["accuracy"].is_null());
        assert!(coords["altitude"].is_null());
        assert!(coords["altitudeAccuracy"].is_null());
        assert!(coords["heading"].is_null());
        assert!(coords["speed"].is_null());
    }

    #[test]
    fn override_replaces_get_current_position() {
        let script = geolocation_override(GeoCoordinate::new(1.5, 2.5), Accuracy::High);
        assert!(script.contains("geo.getCurrentPosition = stub"));
        assert!(script.contains("timestamp: Date.now()"));
        assert!(!script.contains("__COORDS__"));
    }

    #[test]
    fn accuracy_radius_shrinks_with_tier() {
        assert!(accuracy_radius(Accuracy::High) < accuracy_radius(Accuracy::Balanced));
        assert!(accuracy_radius(Accuracy::Balanced) < accuracy_radius(Accuracy::Low));
        assert!(accuracy_radius(Accuracy::Low) < accuracy_radius(Accuracy::Lowest));
    }

    #[test]
    fn link_script_intercepts_both_paths() {
        let script = link_interception();
        assert!(script.contains("window.open = function"));
        assert!(script.contains("return null;"));
        assert!(script.contains("'_blank'"));
        assert!(script.contains("event.preventDefault()"));
        assert!(script.contains("kind: 'external_link'"));
        assert!(script.contains("window.ipc.postMessage"));
        assert!(!script.contains(POST));
    }

    #[test]
    fn height_script_reports_three_ways() {
        let script = height_reporter();
        assert!(script.contains("Math.max(body.scrollHeight, root.scrollHeight)"));
        assert!(script.contains("kind: 'resize'"));
        assert!(script.contains("new ResizeObserver(report).observe(document.body)"));
        assert!(script.contains("setTimeout(report, 500)"));
        assert!(script.contains("setInterval(report, 1000)"));
        for placeholder in [POST, "__SETTLE_MS__", "__POLL_MS__"] {
            assert!(!script.contains(placeholder), "unreplaced {placeholder}");
        }
    }

    #[test]
    fn scrolling_script_sets_root_and_body_overflow() {
        let on = document_scrolling(true);
        assert!(on.contains("var overflow = 'auto';"));
        assert!(on.contains("document.documentElement.style.overflow = overflow"));
        assert!(on.contains("document.body.style.overflow = overflow"));
        assert!(document_scrolling(false).contains("var overflow = 'hidden';"));
        assert!(!on.contains("__OVERFLOW__"));
    }

    #[test]
    fn no_override_without_coordinate() {
        let scripts = initialization_scripts(None, Accuracy::Balanced);
        assert_eq!(scripts.len(), 2);
        assert!(scripts.iter().all(|s| !s.contains("getCurrentPosition")));
    }

    #[test]
    fn override_is_injected_first() {
        let scripts =
            initialization_scripts(Some(GeoCoordinate::new(37.0, -122.0)), Accuracy::Balanced);
        assert_eq!(scripts.len(), 3);
        assert!(scripts[0].contains("getCurrentPosition"));
    }
}
