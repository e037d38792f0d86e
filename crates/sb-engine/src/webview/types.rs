use crate::ipc::IpcMessage;

/// Configuration of a chrome surface (toolbar, status bar).
#[derive(Debug, Clone)]
pub struct SurfaceConfig {
    pub html: String,
    pub transparent: bool,
    /// Dev tools for the chrome itself (on in debug builds).
    pub devtools: bool,
}

impl SurfaceConfig {
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            transparent: false,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// An IPC message posted by a chrome surface.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMessage {
    /// Name the surface was created with.
    pub surface: &'static str,
    pub message: IpcMessage,
}
