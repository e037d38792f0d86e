//! Polling of engine notifications and chrome messages.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use sb_engine::webview::SurfaceMessage;
use sb_tabs::SyncRequest;

use super::chrome_bridge::{intent_from_ipc, ChromeIntent};
use super::core::SbApp;
use super::types::POLL_INTERVAL;

impl SbApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_chrome_messages();
            self.poll_engine_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Feed pending engine notifications to the synchronizer.
    fn poll_engine_events(&mut self) {
        for event in self.manager.drain_events() {
            let request = match (&mut self.registry, &mut self.chrome) {
                (Some(registry), Some(chrome)) => self.sync.apply(registry, chrome, event),
                _ => None,
            };
            match request {
                Some(SyncRequest::OpenTab { uri }) => {
                    self.open_tab(&uri, self.new_tab_placement());
                }
                Some(SyncRequest::Shortcut(key)) => self.handle_forwarded_key(&key),
                None => {}
            }
        }
    }

    fn poll_chrome_messages(&mut self) {
        for msg in self.manager.drain_surface_messages() {
            self.handle_chrome_message(msg);
        }
    }

    fn handle_chrome_message(&mut self, msg: SurfaceMessage) {
        let Some(intent) = intent_from_ipc(&msg.message) else {
            tracing::warn!(
                surface = msg.surface,
                kind = %msg.message.kind,
                "Chrome message rejected"
            );
            return;
        };
        tracing::debug!(surface = msg.surface, kind = %msg.message.kind, "Chrome message");

        match intent {
            ChromeIntent::Ready => self.initialize_chrome(),
            ChromeIntent::Action(action) => self.dispatch(action),
            ChromeIntent::Key(key) => self.handle_forwarded_key(&key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::core::test_app;
    use super::*;
    use sb_engine::IpcMessage;

    #[test]
    fn chrome_action_is_dispatched() {
        let mut app = test_app();
        app.handle_chrome_message(SurfaceMessage {
            surface: "toolbar",
            message: IpcMessage::text("action", "Quit"),
        });
        assert!(app.should_exit);
    }

    #[test]
    fn chrome_shortcut_is_resolved() {
        let mut app = test_app();
        let key = if cfg!(target_os = "macos") {
            r#"{"key":"q","meta":true}"#
        } else {
            r#"{"key":"q","ctrl":true}"#
        };
        app.handle_chrome_message(SurfaceMessage {
            surface: "toolbar",
            message: IpcMessage::json("key", serde_json::from_str(key).unwrap()),
        });
        assert!(app.should_exit);
    }

    #[test]
    fn rejected_chrome_message_changes_nothing() {
        let mut app = test_app();
        app.handle_chrome_message(SurfaceMessage {
            surface: "status",
            message: IpcMessage::text("eval", "Quit"),
        });
        assert!(!app.should_exit);
    }

    #[test]
    fn empty_queues_are_fine_without_window() {
        let mut app = test_app();
        app.poll_chrome_messages();
        app.poll_engine_events();
        assert!(app.registry.is_none());
    }
}
