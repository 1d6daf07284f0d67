//! Static header: title, subtitle and the loading indicator.

use std::sync::Arc;

use winit::window::Window;
use wry::WebViewBuilder;

use trialfinder_common::Rect;

use super::core::TrialFinderApp;
use super::layout::rect_to_wry;

const LOADING_ELEMENT_ID: &str = "tf-loading";

/// Removes the loading indicator once the widget is ready.
const HIDE_LOADING_SCRIPT: &str =
    "(function () { var el = document.getElementById('tf-loading'); if (el) el.remove(); })();";

pub(super) fn header_html(title: &str, subtitle: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<style>
html, body {{ margin: 0; height: 100%; overflow: hidden; }}
body {{ font-family: -apple-system, "Segoe UI", Roboto, sans-serif; background: #ffffff; color: #1b1f24;
        display: flex; align-items: center; padding: 0 20px; box-sizing: border-box;
        border-bottom: 1px solid #e3e6ea; }}
.text {{ flex: 1; min-width: 0; }}
h1 {{ margin: 0; font-size: 20px; font-weight: 600; }}
p {{ margin: 4px 0 0; font-size: 14px; color: #5b6570; }}
#{loading} {{ width: 18px; height: 18px; border: 2px solid #d0d5db; border-top-color: #1a5dab;
        border-radius: 50%; animation: spin 0.8s linear infinite; }}
@keyframes spin {{ to {{ transform: rotate(360deg); }} }}
</style>
</head>
<body>
<div class="text"><h1>{title}</h1><p>{subtitle}</p></div>
<div id="{loading}" role="progressbar" aria-label="Loading"></div>
</body>
</html>"#,
        loading = LOADING_ELEMENT_ID,
        title = escape_html(title),
        subtitle = escape_html(subtitle),
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

impl TrialFinderApp {
    pub(super) fn build_header(&mut self, window: &Arc<Window>, rect: &Rect) {
        let html = header_html(&self.config.window.title, &self.config.window.subtitle);
        let result = WebViewBuilder::new()
            .with_bounds(rect_to_wry(rect))
            .with_focused(false)
            .with_html(html)
            .build_as_child(window.as_ref());

        match result {
            Ok(webview) => self.header = Some(webview),
            Err(e) => tracing::error!(error = %e, "Failed to create header webview"),
        }
    }

    /// Drop the loading indicator.
    pub(super) fn mark_header_ready(&self) {
        let Some(ref header) = self.header else {
            return;
        };
        if let Err(e) = header.evaluate_script(HIDE_LOADING_SCRIPT) {
            tracing::warn!(error = %e, "Failed to hide loading indicator");
        }
    }
}
