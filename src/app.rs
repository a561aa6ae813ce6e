//! Application state and core logic

use crate::config::TuiConfig;
use crate::generator::{ExportFormat, GeneratedDocument};
use crate::state::{AppState, NotificationKind, SessionPhase, View};
use crate::templates;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// Simulated processing delay before a generation is declared successful
const GENERATION_DELAY: Duration = Duration::from_millis(1800);

/// Action row while the form is being filled in
const EDITING_BUTTONS: &[&str] = &["Generate Document", "Cancel"];
/// Action row once a document has been generated
const GENERATED_BUTTONS: &[&str] = &["Download DOCX", "Download PDF", "Copy Text", "Start Over"];

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for grid calculations (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Pending simulated-generation result
    generation: Option<oneshot::Receiver<GeneratedDocument>>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "failed to load config, using defaults");
            TuiConfig::default()
        });
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
            terminal_size: None,
            generation: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True while the simulated processing delay runs
    pub fn is_generating(&self) -> bool {
        self.state.phase.is_generating()
    }

    /// Buttons shown on the editor's action row for the current phase
    pub fn button_labels(&self) -> &'static [&'static str] {
        if self.state.phase.is_generated() {
            GENERATED_BUTTONS
        } else {
            EDITING_BUTTONS
        }
    }

    /// Per-frame housekeeping: expire notifications and pick up a finished
    /// generation run
    pub fn tick(&mut self) {
        self.state.expire_notification();

        if !self.state.phase.is_generating() {
            return;
        }
        if let Some(rx) = self.generation.as_mut() {
            match rx.try_recv() {
                Ok(doc) => {
                    self.generation = None;
                    self.finish_generation(doc);
                }
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    // Sender dropped without a document; abandon the run
                    self.generation = None;
                    self.state.phase = SessionPhase::Editing;
                }
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match self.state.current_view {
            View::Catalog => self.handle_catalog_key(key),
            View::Editor => self.handle_editor_key(key),
        }
        Ok(())
    }

    /// Handle keys in the template catalog
    fn handle_catalog_key(&mut self, key: KeyEvent) {
        let columns = self.catalog_columns();
        let total = templates::templates().len();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.move_selection_down(columns, total),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(columns),
            KeyCode::Char('h') | KeyCode::Left => self.state.move_selection_left(columns),
            KeyCode::Char('l') | KeyCode::Right => {
                self.state.move_selection_right(columns, total);
            }
            KeyCode::Enter => {
                if let Some(template) = templates::templates().get(self.state.selected_index) {
                    tracing::info!(template = template.id, "template selected");
                    self.state.select_template(template);
                }
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Handle keys in the form/preview editor
    fn handle_editor_key(&mut self, key: KeyEvent) {
        // Keys are swallowed while the simulated processing delay runs
        if self.state.phase.is_generating() {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('g') {
            self.submit();
            return;
        }

        match key.code {
            KeyCode::Esc => self.start_over(),
            KeyCode::Tab => {
                if let Some(form) = self.state.form.as_mut() {
                    form.next_field();
                }
            }
            KeyCode::BackTab => {
                if let Some(form) = self.state.form.as_mut() {
                    form.prev_field();
                }
            }
            _ => {
                let on_buttons = self
                    .state
                    .form
                    .as_ref()
                    .is_some_and(|f| f.is_buttons_row_active());
                if on_buttons {
                    self.handle_buttons_row_key(key);
                } else {
                    self.handle_field_key(key);
                }
            }
        }
    }

    fn handle_buttons_row_key(&mut self, key: KeyEvent) {
        let count = self.button_labels().len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(form) = self.state.form.as_mut() {
                    form.prev_button(count);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(form) = self.state.form.as_mut() {
                    form.next_button(count);
                }
            }
            KeyCode::Enter => {
                if let Some(index) = self.state.form.as_ref().map(|f| f.selected_button) {
                    self.activate_button(index);
                }
            }
            _ => {}
        }
    }

    fn handle_field_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        let is_multiline = form.active_field().is_some_and(|f| f.is_multiline());

        match key.code {
            // Enter breaks the line in long-text fields, advances otherwise
            KeyCode::Enter if is_multiline => {
                if let Some(field) = form.active_field_mut() {
                    field.push_newline();
                }
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Backspace => {
                if let Some(field) = form.active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(field) = form.active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn activate_button(&mut self, index: usize) {
        match self.state.phase {
            SessionPhase::Editing => match index {
                0 => self.submit(),
                1 => self.start_over(),
                _ => {}
            },
            SessionPhase::Generating { .. } => {}
            SessionPhase::Generated => match index {
                0 => self.download(ExportFormat::Docx),
                1 => self.download(ExportFormat::Pdf),
                2 => self.copy_text(),
                3 => self.start_over(),
                _ => {}
            },
        }
    }

    /// Validate and, if clean, kick off the simulated generation run.
    /// The document snapshot is taken at submission time.
    fn submit(&mut self) {
        if self.state.phase.is_generating() {
            return;
        }
        let Some(template) = self.state.active_template() else {
            return;
        };
        let Some(form) = self.state.form.as_mut() else {
            return;
        };

        if !form.validate() {
            let message = form
                .first_error()
                .unwrap_or("Please complete the required fields")
                .to_string();
            self.state.notify(NotificationKind::Error, message);
            return;
        }

        let doc = GeneratedDocument::new(template.id, form.form_data());
        self.state.phase = SessionPhase::Generating {
            started: Instant::now(),
        };

        let (tx, rx) = oneshot::channel();
        self.generation = Some(rx);
        tokio::spawn(async move {
            tokio::time::sleep(GENERATION_DELAY).await;
            let _ = tx.send(doc);
        });
        tracing::info!(template = template.id, "generating document");
    }

    fn finish_generation(&mut self, doc: GeneratedDocument) {
        self.state.generated = Some(doc);
        self.state.phase = SessionPhase::Generated;
        if let Some(form) = self.state.form.as_mut() {
            form.focus_buttons_row();
            form.selected_button = match self.config.default_format() {
                ExportFormat::Docx => 0,
                ExportFormat::Pdf => 1,
            };
        }
        self.state
            .notify(NotificationKind::Success, "Legal document generated successfully!");
    }

    /// Write the artifact, snapshotting FormData at export time
    fn download(&mut self, format: ExportFormat) {
        let Some(template) = self.state.active_template() else {
            return;
        };
        let Some(form) = self.state.form.as_ref() else {
            return;
        };

        let doc = GeneratedDocument::new(template.id, form.form_data());
        let dir = self.config.export_dir();
        match doc.export(&dir, &template.file_stem(), format) {
            Ok(path) => {
                tracing::info!(path = %path.display(), "document exported");
                self.state.notify(
                    NotificationKind::Success,
                    format!("Document downloaded as {}!", format.label()),
                );
            }
            Err(err) => {
                tracing::error!(error = %err, "document export failed");
                self.state.notify(
                    NotificationKind::Error,
                    "Failed to download document. Please try again.",
                );
            }
        }
    }

    /// Put the rendered document text on the system clipboard
    fn copy_text(&mut self) {
        let Some(template) = self.state.active_template() else {
            return;
        };
        let Some(form) = self.state.form.as_ref() else {
            return;
        };

        let doc = GeneratedDocument::new(template.id, form.form_data());
        let copied = arboard::Clipboard::new().and_then(|mut cb| cb.set_text(doc.render_text()));
        match copied {
            Ok(()) => {
                self.state
                    .notify(NotificationKind::Info, "Document text copied to clipboard");
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                self.state
                    .notify(NotificationKind::Error, "Failed to copy to clipboard");
            }
        }
    }

    /// Clear the session and return to the catalog
    fn start_over(&mut self) {
        self.generation = None;
        self.state.reset_session();
        self.state.notify(NotificationKind::Info, "Form has been reset");
    }

    /// Number of catalog grid columns for the current terminal width
    pub fn catalog_columns(&self) -> usize {
        // terminal_size is (height, width)
        let width = self.terminal_size.map(|(_, w)| w).unwrap_or(80);
        crate::ui::grid_columns(width)
    }
}
