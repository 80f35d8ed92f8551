use std::sync::{Arc, Mutex};

use kaloriku::{Estimator, Session};

// ---------------------------------------------------------------------------
// Flash messages
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub enum FlashKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub text: String,
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        FlashMessage {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }
    pub fn error(text: impl Into<String>) -> Self {
        FlashMessage {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Mutable per-session state
// ---------------------------------------------------------------------------

/// The one mutable object in the process: the wizard session plus a one-shot
/// flash message for the next page render.
pub struct AppState {
    pub session: Session,
    pub flash: Option<FlashMessage>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            session: Session::new(),
            flash: None,
        }
    }

    /// Takes and returns the current flash message, clearing it.
    pub fn take_flash(&mut self) -> Option<FlashMessage> {
        self.flash.take()
    }
}

/// Shared session handle passed to every handler.
pub type SharedState = Arc<Mutex<AppState>>;

// ---------------------------------------------------------------------------
// Request context
// ---------------------------------------------------------------------------

/// Everything a handler needs: the immutable resource bundle and the mutable
/// session. Cloning is two `Arc` bumps.
#[derive(Clone)]
pub struct AppContext {
    pub estimator: Arc<Estimator>,
    pub state: SharedState,
}
