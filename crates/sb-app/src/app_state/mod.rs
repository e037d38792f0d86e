//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the tab registry, the synchronizer and the
//! chrome surfaces, and routes user actions between them.

mod chrome_bridge;
mod core;
mod dispatch;
mod event_handler;
mod init;
mod layout;
mod polling;
mod settings;
mod shutdown;
mod types;

pub use self::core::SbApp;
