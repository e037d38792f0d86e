//! Bridge between the app and the HTML chrome surfaces.
//!
//! The toolbar and status bar are `wry` surfaces speaking the same
//! `{kind, payload}` IPC protocol as pages. Outbound updates go through
//! [`WebChrome`], the `Chrome` implementation the synchronizer drives;
//! inbound messages are decoded by [`intent_from_ipc`].

mod intents;
mod menu;
mod web_chrome;

pub(super) use intents::{intent_from_ipc, ChromeIntent};
pub(super) use menu::menu_entries;
pub(super) use web_chrome::WebChrome;

pub(super) const TOOLBAR_HTML: &str = include_str!("../../../assets/toolbar.html");
pub(super) const STATUS_HTML: &str = include_str!("../../../assets/status.html");
