use std::collections::HashMap;

use crate::error::VodrError;
use crate::models::VodRecord;

/// In-memory filename → record mapping for the lifetime of the page.
///
/// There is exactly one active mapping. Import replaces it wholesale;
/// there is no merging and no persistence.
#[derive(Debug, Default)]
pub struct ImportStore {
    records: HashMap<String, VodRecord>,
}

impl ImportStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `payload` as a JSON mapping of filename → record and replace the
    /// current mapping with it. Returns the number of records imported.
    ///
    /// All-or-nothing: on a parse failure the prior mapping is left untouched.
    pub fn import(&mut self, payload: &str) -> Result<usize, VodrError> {
        let parsed: HashMap<String, VodRecord> =
            serde_json::from_str(payload).map_err(|e| VodrError::ImportParse(e.to_string()))?;
        let count = parsed.len();
        self.records = parsed;
        Ok(count)
    }

    /// Look up a record by exact filename (case-sensitive, no trimming).
    pub fn lookup(&self, filename: &str) -> Option<&VodRecord> {
        self.records.get(filename)
    }

    /// Add or replace a single record. Used by the export side when building
    /// a payload; the hotkey flow only ever replaces wholesale via `import`.
    pub fn insert(&mut self, filename: impl Into<String>, record: VodRecord) {
        self.records.insert(filename.into(), record);
    }

    /// Serialize the current mapping to the export payload format.
    ///
    /// The output round-trips through `import` to an equal mapping.
    pub fn export(&self) -> String {
        serde_json::to_string(&self.records).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
