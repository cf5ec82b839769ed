use crate::error::VodrError;

/// Writable field slots on the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Narrow seam over the hosting upload page.
///
/// The structural-path knowledge (which elements hold the filename and the
/// two form fields) lives entirely behind this trait, so the dispatcher can
/// be exercised against fakes.
pub trait UploadPage {
    /// Trimmed text content of the element showing the uploaded file's
    /// original name. Fails if the element cannot be located.
    fn current_filename(&self) -> Result<String, VodrError>;

    /// Set the field's displayed text to `value`, give it focus, and fire a
    /// bubbling change notification so the host page's listeners observe the
    /// write as if the user had typed it.
    ///
    /// Each field is independent: a missing title target must not prevent a
    /// later description write.
    fn inject(&mut self, field: FormField, value: &str) -> Result<(), VodrError>;
}

/// Modal user interaction, pluggable for the same reason.
pub trait UserPrompt {
    /// Blocking text prompt. `None` means the user dismissed the dialog.
    fn prompt_text(&self, message: &str) -> Option<String>;

    /// Blocking notification.
    fn notify(&self, message: &str);
}
