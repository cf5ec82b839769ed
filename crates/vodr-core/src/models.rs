use serde::{Deserialize, Serialize};

/// Metadata for one processed VOD, keyed by filename in the export payload.
///
/// Each field defaults independently: a payload entry missing `title` still
/// parses, yielding an empty title. Fill writes whatever is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VodRecord {
    /// Video title, as it should appear in the upload form.
    #[serde(default)]
    pub title: String,
    /// Video description. May span multiple lines.
    #[serde(default)]
    pub description: String,
}

impl VodRecord {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
