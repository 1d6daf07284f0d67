//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Composes the header, the widget document and the bridge,
//! and relays bridge effects back into the window layout.

mod core;
mod document;
mod event_handler;
mod header;
mod init;
mod layout;
mod location;
mod polling;
mod shutdown;
mod types;

pub use core::TrialFinderApp;
