//! The embedding bridge between the trial finder widget and the shell.
//!
//! Wraps the `wry` crate to provide:
//! - Widget markup and the scripts injected into it
//! - A typed message channel (JavaScript -> Rust)
//! - A navigation policy that routes foreign URLs to the system browser
//! - The [`Bridge`] state machine the shell drives from its event loop
//! - Document hosts that build the webview with or without the bridge

pub mod bridge;
pub mod content;
pub mod events;
pub mod host;
pub mod ipc;
pub mod navigation;
pub mod scripts;

pub use bridge::{Bridge, BridgeEffect, BridgePhase};
pub use events::{BridgeEvent, PageLoadState};
pub use host::{
    host_for, BridgeHost, DocumentHandle, DocumentHost, DocumentSettings, EventSink, FrameHost,
};
pub use ipc::BridgeMessage;
pub use navigation::NavigationDecision;
