use std::path::PathBuf;

use sb_common::ClientId;
use sb_engine::{EngineEvent, EventKind, KeyPress, LoadStatus};

use super::*;
use crate::testing::{registry_with, FakeChrome, FakeEngine};

fn ev(client: u32, kind: EventKind) -> EngineEvent {
    EngineEvent {
        client: ClientId(client),
        kind,
    }
}

fn commit(client: u32, uri: &str) -> EngineEvent {
    ev(
        client,
        EventKind::LoadStatus(LoadStatus::Committed { uri: uri.into() }),
    )
}

fn setup(n: usize) -> (ClientRegistry<FakeEngine>, FakeChrome, Synchronizer) {
    let (reg, _) = registry_with(n);
    (reg, FakeChrome::default(), Synchronizer::new(24))
}

#[test]
fn title_change_on_active_updates_window_title() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(100)));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::TitleChanged("Example".into())));
    assert_eq!(chrome.title, "Example - sb");
    assert_eq!(reg.get(ClientId(1)).unwrap().label, "Example");
    assert_eq!(chrome.tabs[0].label, "Example");
}

#[test]
fn progress_below_100_is_shown_in_title() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::TitleChanged("Example".into())));
    assert_eq!(chrome.title, "Example - sb (0%)");
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(42)));
    assert_eq!(chrome.title, "Example - sb (42%)");
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(100)));
    assert_eq!(chrome.title, "Example - sb");
}

#[test]
fn progress_is_clamped() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(250)));
    assert_eq!(reg.get(ClientId(1)).unwrap().progress, 100);
}

#[test]
fn inactive_tab_does_not_touch_window_title_or_address() {
    let (mut reg, mut chrome, mut sync) = setup(2);
    chrome.title = "unchanged".into();
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::TitleChanged("Background".into())));
    sync.apply(&mut reg, &mut chrome, commit(1, "https://bg.example/"));
    assert_eq!(chrome.title, "unchanged");
    assert!(chrome.address.is_empty());
    assert_eq!(reg.get(ClientId(1)).unwrap().uri, "https://bg.example/");
    assert_eq!(chrome.tabs[0].label, "Background");
}

#[test]
fn commit_updates_address_and_navigation_state() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    reg.active_mut().unwrap().view.back = true;
    sync.apply(&mut reg, &mut chrome, commit(1, "https://example.com/"));
    assert_eq!(chrome.address, "https://example.com/");
    assert!(chrome.nav.can_go_back);
    assert!(!chrome.nav.can_go_forward);
}

#[test]
fn finished_recomputes_navigation_for_active_only() {
    let (mut reg, mut chrome, mut sync) = setup(2);
    reg.get_mut(ClientId(1)).unwrap().view.forward = true;
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::LoadStatus(LoadStatus::Finished)));
    assert!(!chrome.nav.can_go_forward);

    reg.get_mut(ClientId(2)).unwrap().view.forward = true;
    sync.apply(&mut reg, &mut chrome, ev(2, EventKind::LoadStatus(LoadStatus::Finished)));
    assert!(chrome.nav.can_go_forward);
}

#[test]
fn uri_is_label_until_title_arrives() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(&mut reg, &mut chrome, commit(1, "https://example.com/"));
    assert_eq!(chrome.tabs[0].label, "https://example.com/");
}

#[test]
fn new_tab_label_before_anything_loads() {
    let (reg, _, _) = setup(2);
    let entries = tab_entries(&reg);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label, "New Tab");
    assert!(entries[1].active);
    assert!(entries[1].loading);
}

#[test]
fn hover_sequence_ends_empty() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    let hover = |l: Option<&str>| ev(1, EventKind::HoveringOverLink(l.map(String::from)));
    sync.apply(&mut reg, &mut chrome, hover(Some("a")));
    sync.apply(&mut reg, &mut chrome, hover(Some("b")));
    assert_eq!(chrome.status.as_deref(), Some("b"));
    sync.apply(&mut reg, &mut chrome, hover(None));
    assert_eq!(chrome.status.as_deref(), Some("a"));
    sync.apply(&mut reg, &mut chrome, hover(None));
    sync.apply(&mut reg, &mut chrome, hover(None));
    assert_eq!(chrome.status, None);
    assert!(sync.status().is_empty());
}

#[test]
fn commit_clears_stale_link_hover() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(
        &mut reg,
        &mut chrome,
        ev(1, EventKind::HoveringOverLink(Some("https://next/".into()))),
    );
    sync.apply(&mut reg, &mut chrome, commit(1, "https://next/"));
    assert_eq!(chrome.status, None);
}

#[test]
fn download_lifecycle_in_status_bar() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(
        &mut reg,
        &mut chrome,
        ev(
            1,
            EventKind::DownloadRequested {
                uri: "https://example.com/a.zip".into(),
                destination: PathBuf::from("/tmp/dl/a.zip"),
            },
        ),
    );
    assert_eq!(chrome.status.as_deref(), Some("Downloading a.zip"));

    sync.apply(
        &mut reg,
        &mut chrome,
        ev(
            1,
            EventKind::DownloadFinished {
                uri: "https://example.com/a.zip".into(),
                path: Some(PathBuf::from("/tmp/dl/a.zip")),
                success: true,
            },
        ),
    );
    assert_eq!(chrome.status, None);
}

#[test]
fn failed_download_is_reported() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(
        &mut reg,
        &mut chrome,
        ev(
            1,
            EventKind::DownloadFinished {
                uri: "https://example.com/b.iso".into(),
                path: None,
                success: false,
            },
        ),
    );
    assert_eq!(chrome.status.as_deref(), Some("Download failed: b.iso"));
}

#[test]
fn create_view_request_asks_for_new_tab() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    let req = sync.apply(
        &mut reg,
        &mut chrome,
        ev(
            1,
            EventKind::CreateViewRequested {
                uri: "https://popup/".into(),
            },
        ),
    );
    assert_eq!(
        req,
        Some(SyncRequest::OpenTab {
            uri: "https://popup/".into()
        })
    );
}

#[test]
fn key_press_is_handed_back() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    let key = KeyPress {
        key: "t".into(),
        ctrl: true,
        alt: false,
        shift: false,
        meta: false,
    };
    let req = sync.apply(&mut reg, &mut chrome, ev(1, EventKind::KeyPressed(key.clone())));
    assert_eq!(req, Some(SyncRequest::Shortcut(key)));
}

#[test]
fn events_for_closed_tabs_are_dropped() {
    let (mut reg, mut chrome, mut sync) = setup(2);
    reg.close_client(ClientId(1));
    let req = sync.apply(&mut reg, &mut chrome, ev(1, EventKind::TitleChanged("gone".into())));
    assert!(req.is_none());
    assert!(chrome.title.is_empty());
}

#[test]
fn closing_active_tab_refresh_shows_survivor() {
    let (mut reg, mut chrome, mut sync) = setup(2);
    reg.set_active(ClientId(1));
    sync.apply(&mut reg, &mut chrome, commit(1, "https://one/"));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(100)));
    reg.set_active(ClientId(2));
    sync.apply(&mut reg, &mut chrome, commit(2, "https://two/"));
    assert_eq!(chrome.address, "https://two/");

    reg.close_client(ClientId(2));
    sync.refresh(&reg, &mut chrome);
    assert_eq!(reg.active_id(), ClientId(1));
    assert_eq!(chrome.address, "https://one/");
    assert_eq!(chrome.tabs.len(), 1);
    assert!(chrome.tabs[0].active);
}

#[test]
fn refresh_reflects_inspector_flag() {
    let (mut reg, mut chrome, sync) = setup(1);
    reg.active_mut().unwrap().inspecting = true;
    sync.refresh(&reg, &mut chrome);
    assert!(chrome.inspecting);
}

#[test]
fn notify_replaces_previous_notice() {
    let (_, mut chrome, mut sync) = setup(1);
    sync.notify(&mut chrome, "first");
    sync.notify(&mut chrome, "second");
    assert_eq!(chrome.status.as_deref(), Some("second"));
    assert_eq!(sync.status().len(), 1);
}

#[test]
fn long_titles_are_truncated_in_labels() {
    let (mut reg, mut chrome, _) = setup(1);
    let mut sync = Synchronizer::new(8);
    sync.apply(
        &mut reg,
        &mut chrome,
        ev(1, EventKind::TitleChanged("Something rather long".into())),
    );
    assert_eq!(chrome.tabs[0].label, "Somethi…");
}

#[test]
fn late_dom_ready_does_not_reopen_a_finished_load() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(&mut reg, &mut chrome, commit(1, "https://a.example/"));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::TitleChanged("A".into())));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(100)));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::LoadStatus(LoadStatus::Finished)));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(70)));
    assert_eq!(chrome.title, "A - sb");
    assert!(!reg.get(ClientId(1)).unwrap().is_loading());
    assert!(!chrome.tabs[0].loading);

    // The next navigation reports progress again.
    sync.apply(&mut reg, &mut chrome, commit(1, "https://b.example/"));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(10)));
    assert_eq!(chrome.title, "A - sb (10%)");
    assert!(chrome.tabs[0].loading);
}

#[test]
fn finished_completes_progress_without_a_final_progress_event() {
    let (mut reg, mut chrome, mut sync) = setup(1);
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::TitleChanged("A".into())));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::ProgressChanged(40)));
    sync.apply(&mut reg, &mut chrome, ev(1, EventKind::LoadStatus(LoadStatus::Finished)));
    assert_eq!(chrome.title, "A - sb");
    assert_eq!(reg.get(ClientId(1)).unwrap().progress, 100);
}
