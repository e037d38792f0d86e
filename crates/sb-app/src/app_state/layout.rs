//! Window layout: toolbar on top, status bar at the bottom, page between.

use sb_common::Rect;
use sb_config::schema::WindowConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Layout {
    pub toolbar: Rect,
    pub content: Rect,
    pub status: Rect,
}

impl Layout {
    /// Split a `width` x `height` logical viewport.
    ///
    /// When the window is too short for both bars the toolbar wins and the
    /// content area collapses to zero height.
    pub fn compute(width: f64, height: f64, window: &WindowConfig) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let toolbar_h = f64::from(window.toolbar_height).min(height);
        let status_h = f64::from(window.status_bar_height).min(height - toolbar_h);
        let content_h = height - toolbar_h - status_h;

        Self {
            toolbar: Rect {
                x: 0.0,
                y: 0.0,
                width,
                height: toolbar_h,
            },
            content: Rect {
                x: 0.0,
                y: toolbar_h,
                width,
                height: content_h,
            },
            status: Rect {
                x: 0.0,
                y: toolbar_h + content_h,
                width,
                height: status_h,
            },
        }
    }
}
