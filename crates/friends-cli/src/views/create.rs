//! Creation view: the add-friend form.

use std::fmt::Write;
use std::sync::Arc;

use colored::Colorize;
use tracing::{info, instrument, warn};

use friends_core::model::{DESCRIPTION_HINT_MAX, MIN_DESCRIPTION_LEN};
use friends_core::{Directory, DraftField, FieldErrors, Friend, FriendDraft, ImageProbe};

use crate::interact::Interaction;
use crate::router::{Navigator, Route};

const CREATE_FAILED: &str = "Failed to add friend. Please try again.";

/// Result of submitting the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid,
    /// The service rejected or never received the request.
    Failed,
    /// The friend was created and the navigator now points at it.
    Created(Friend),
}

/// Screen for `/add-friend`.
#[derive(Debug)]
pub struct CreationView<D> {
    directory: Arc<D>,
    draft: FriendDraft,
    errors: FieldErrors,
    preview: Option<String>,
}

impl<D: Directory> CreationView<D> {
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            draft: FriendDraft::default(),
            errors: FieldErrors::new(),
            preview: None,
        }
    }

    #[allow(dead_code)]
    pub fn draft(&self) -> &FriendDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Update one field, clearing any error shown for it.
    pub fn set_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
        if field == DraftField::Photo {
            self.preview = None;
        }
    }

    /// Clear every field and error.
    pub fn reset(&mut self) {
        self.draft = FriendDraft::default();
        self.errors.clear_all();
        self.preview = None;
    }

    /// URL of the photo preview, if the last probe could load it.
    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Try to load the photo. A photo that fails to load is hidden.
    pub async fn refresh_preview(&mut self, probe: &dyn ImageProbe) {
        self.preview = None;
        if self.draft.photo.is_empty() || !self.draft.has_valid_photo_url() {
            return;
        }
        if probe.probe(&self.draft.photo).await {
            self.preview = Some(self.draft.photo.clone());
        }
    }

    /// Validate and, if valid, create the friend.
    ///
    /// Invalid drafts never reach the service. On failure the entered values
    /// stay in place for another attempt. The view is borrowed for the whole
    /// request, so a second submit cannot start while one is in flight.
    #[instrument(skip_all)]
    pub async fn submit(&mut self, ui: &mut dyn Interaction, nav: &mut Navigator) -> SubmitOutcome {
        self.errors = self.draft.validate();
        if !self.errors.is_empty() {
            return SubmitOutcome::Invalid;
        }

        match self.directory.create(&self.draft).await {
            Ok(friend) => {
                info!(id = %friend.id, "Friend added");
                nav.push(Route::Friend(friend.id));
                SubmitOutcome::Created(friend)
            }
            Err(e) => {
                warn!(error = %e, "Error adding friend");
                ui.alert(CREATE_FAILED);
                SubmitOutcome::Failed
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let _ = writeln!(out, "{}", format!("← Back to Friends  {}", Route::Home).cyan());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", "Add New Friend".bold().underline());
        let _ = writeln!(
            out,
            "{}",
            "Tell us about your friend and add them to your collection".dimmed()
        );
        let _ = writeln!(out);

        for field in DraftField::ALL {
            let label = match field {
                DraftField::Name => "Name *",
                DraftField::Photo => "Photo URL *",
                DraftField::Description => "Description *",
            };
            let value = self.draft.get(field);
            let shown = if value.is_empty() {
                "(empty)".dimmed().to_string()
            } else {
                value.to_string()
            };
            let _ = writeln!(out, "{:<14} {}", label.bold(), shown);

            if let Some(message) = self.errors.get(field) {
                let _ = writeln!(out, "               {}", message.red());
            }
            match field {
                DraftField::Photo => {
                    let _ = writeln!(
                        out,
                        "               {}",
                        "Tip: any public image URL works".dimmed()
                    );
                }
                DraftField::Description => {
                    let _ = writeln!(
                        out,
                        "               {}",
                        format!(
                            "{}/{} characters (minimum {})",
                            self.draft.description_len(),
                            DESCRIPTION_HINT_MAX,
                            MIN_DESCRIPTION_LEN
                        )
                        .dimmed()
                    );
                }
                DraftField::Name => {}
            }
        }

        if let Some(url) = &self.preview {
            let _ = writeln!(out);
            let _ = writeln!(out, "Photo Preview: {}", url.cyan());
        }

        let _ = writeln!(out);
        let _ = write!(
            out,
            "{}  {}",
            "Reset Form (reset)".yellow(),
            "Add Friend (submit)".green()
        );
        out
    }
}
