//! Widget markup.
//!
//! The document holds three things: a JSON configuration block, the
//! element the widget mounts into, and the remote loader script. Only the
//! widget identifier varies between documents.

use serde::Serialize;
use trialfinder_common::WidgetId;

use crate::host::DocumentSettings;

/// Origin serving the remote widget.
pub const WIDGET_ORIGIN: &str = "https://widget.prxengage.com";

/// Loader script for the trial finder widget.
pub const WIDGET_SCRIPT_URL: &str = "https://widget.prxengage.com/widget.js";

/// `id` of the JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "prx-widget-config";

/// `id` of the element the widget mounts into.
pub const CONTAINER_ELEMENT_ID: &str = "prx-trial-finder";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WidgetOptions<'a> {
    widget_id: &'a str,
    consent_banner_position: &'static str,
    button_color: &'static str,
    accent_color: &'static str,
    fill_height: bool,
    container_style: &'static str,
}

impl<'a> WidgetOptions<'a> {
    fn for_widget(id: &'a WidgetId) -> Self {
        Self {
            widget_id: id.as_str(),
            consent_banner_position: "bottom",
            button_color: "#1a5dab",
            accent_color: "#0f8a7e",
            fill_height: true,
            container_style: "width:100%;min-height:100%;",
        }
    }
}

/// Configuration block contents for `id`, safe to place inside a
/// `<script>` element.
pub fn widget_config_json(id: &WidgetId) -> String {
    let json = serde_json::to_string(&WidgetOptions::for_widget(id))
        .unwrap_or_else(|_| "{}".to_string());
    escape_script_json(&json)
}

/// The full widget document rendered by the bridge host.
pub fn widget_document(id: &WidgetId, settings: &DocumentSettings) -> String {
    let overflow = if settings.scroll_disabled {
        "hidden"
    } else {
        "auto"
    };
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1">
<style>
html, body {{ margin: 0; padding: 0; overflow: {overflow}; }}
#{container} {{ width: 100%; }}
</style>
<script type="application/json" id="{config_id}">{config}</script>
</head>
<body>
<div id="{container}"></div>
<script src="{script}" async></script>
</body>
</html>"#,
        config_id = CONFIG_ELEMENT_ID,
        config = widget_config_json(id),
        container = CONTAINER_ELEMENT_ID,
        script = WIDGET_SCRIPT_URL,
    )
}

/// The widget document wrapped in an inline frame, for hosts that render
/// the widget without a bridge.
///
/// Nothing reports the widget's height out of the frame, so the framed
/// document always scrolls itself.
pub fn frame_document(id: &WidgetId, settings: &DocumentSettings) -> String {
    let inner = DocumentSettings {
        scroll_disabled: false,
        ..settings.clone()
    };
    let srcdoc = escape_attribute(&widget_document(id, &inner));
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
html, body {{ margin: 0; padding: 0; height: 100%; overflow: hidden; }}
iframe {{ border: 0; width: 100%; height: 100%; display: block; }}
</style>
</head>
<body>
<iframe title="Clinical trial finder" allow="geolocation" srcdoc="{srcdoc}"></iframe>
</body>
</html>"#
    )
}

/// Escape the characters that could end a `<script>` element or start an
/// HTML entity. The result is still valid JSON.
fn escape_script_json(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attribute(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
