//! Application state definitions

use std::time::{Duration, Instant};

use crate::generator::GeneratedDocument;
use crate::state::forms::DocumentForm;
use crate::templates::{self, DocumentTemplate};

/// How long a notification stays on the status bar
const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Template catalog grid
    #[default]
    Catalog,
    /// Form and live preview for the selected template
    Editor,
}

/// Lifecycle of the active form session
#[derive(Debug, Clone, Copy, Default)]
pub enum SessionPhase {
    #[default]
    Editing,
    /// Simulated processing delay; always resolves to `Generated`
    Generating { started: Instant },
    Generated,
}

impl SessionPhase {
    pub fn is_generating(&self) -> bool {
        matches!(self, SessionPhase::Generating { .. })
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, SessionPhase::Generated)
    }
}

/// Notification severity, mapped to a status-bar color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Transient user-facing message shown on the status bar
#[derive(Debug, Clone)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    created: Instant,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created.elapsed() >= NOTIFICATION_TTL
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub selected_index: usize,

    // Active form session
    pub selected_template_id: Option<String>,
    pub form: Option<DocumentForm>,
    pub phase: SessionPhase,
    pub generated: Option<GeneratedDocument>,

    // UI state
    pub notification: Option<Notification>,
}

impl AppState {
    /// Template backing the active session, if any
    pub fn active_template(&self) -> Option<&'static DocumentTemplate> {
        self.selected_template_id
            .as_deref()
            .and_then(templates::find_template)
    }

    /// Begin a form session for the given template.
    /// Any previous session's FormData is discarded first.
    pub fn select_template(&mut self, template: &DocumentTemplate) {
        self.selected_template_id = Some(template.id.to_string());
        self.form = Some(DocumentForm::for_template(template));
        self.phase = SessionPhase::Editing;
        self.generated = None;
        self.current_view = View::Editor;
    }

    /// Drop the session and return to the catalog. Valid from any state.
    pub fn reset_session(&mut self) {
        self.selected_template_id = None;
        self.form = None;
        self.phase = SessionPhase::Editing;
        self.generated = None;
        self.current_view = View::Catalog;
    }

    pub fn notify(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.notification = Some(Notification::new(kind, message));
    }

    /// Clear the notification once its display window has passed
    pub fn expire_notification(&mut self) {
        if self
            .notification
            .as_ref()
            .is_some_and(Notification::is_expired)
        {
            self.notification = None;
        }
    }

    // Catalog grid navigation

    pub fn move_selection_left(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index % columns > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_right(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let col = self.selected_index % columns;
        if col < columns - 1 && self.selected_index + 1 < total {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self, columns: usize) {
        if columns == 0 {
            return;
        }
        if self.selected_index >= columns {
            self.selected_index -= columns;
        }
    }

    pub fn move_selection_down(&mut self, columns: usize, total: usize) {
        if columns == 0 || total == 0 {
            return;
        }
        let new_index = self.selected_index + columns;
        if new_index < total {
            self.selected_index = new_index;
        }
    }
}
