//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::Key;
use winit::window::WindowId;

use sb_engine::KeyPress;
use sb_platform::KeyCombo;

use super::core::SbApp;

impl ApplicationHandler for SbApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            self.failed = true;
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.sync_bounds();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.sync_bounds();
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl SbApp {
    /// Key presses that reach the window itself (no webview focused).
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let KeyEvent {
            logical_key, state, ..
        } = event;
        if state != ElementState::Pressed {
            return;
        }

        let key_name = match &logical_key {
            Key::Named(named) => format!("{named:?}"),
            Key::Character(c) => c.to_string(),
            _ => return,
        };

        let combo = KeyCombo::from_event(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            &key_name,
        );
        self.run_shortcut(&combo);
    }

    /// Key presses forwarded from page or chrome content.
    pub(super) fn handle_forwarded_key(&mut self, key: &KeyPress) {
        let combo = KeyCombo::from_event(key.ctrl, key.alt, key.shift, key.meta, &key.key);
        self.run_shortcut(&combo);
    }

    fn run_shortcut(&mut self, combo: &KeyCombo) {
        match self.keybinds.lookup(combo).cloned() {
            Some(action) => {
                tracing::debug!(?combo, ?action, "Shortcut");
                self.dispatch(action);
            }
            None => tracing::trace!(?combo, "Unbound key"),
        }
    }
}
