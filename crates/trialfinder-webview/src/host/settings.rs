use tracing::debug;
use wry::WebViewBuilder;

/// How the document treats HTTP subresources on an HTTPS page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MixedContentPolicy {
    Never,
    #[default]
    Compatibility,
    Always,
}

/// Behavioural flags for the embedded document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSettings {
    pub script_execution: bool,
    pub persistent_storage: bool,
    pub geolocation: bool,
    pub inline_media_playback: bool,
    pub scroll_disabled: bool,
    pub mixed_content: MixedContentPolicy,
    pub file_access: bool,
    pub caching: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub clipboard: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            script_execution: true,
            persistent_storage: true,
            geolocation: true,
            inline_media_playback: true,
            scroll_disabled: true,
            mixed_content: MixedContentPolicy::Compatibility,
            file_access: false,
            caching: true,
            devtools: cfg!(debug_assertions),
            clipboard: true,
        }
    }
}

impl DocumentSettings {
    /// Apply the flags the webview builder exposes.
    ///
    /// Scroll behaviour lives in the document's CSS. Script execution,
    /// geolocation, mixed content, file access and caching follow the
    /// platform webview defaults.
    pub fn apply<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        debug!(
            script_execution = self.script_execution,
            geolocation = self.geolocation,
            mixed_content = ?self.mixed_content,
            file_access = self.file_access,
            caching = self.caching,
            "document settings left to platform defaults"
        );
        builder
            .with_incognito(!self.persistent_storage)
            .with_autoplay(self.inline_media_playback)
            .with_devtools(self.devtools)
            .with_clipboard(self.clipboard)
    }
}
