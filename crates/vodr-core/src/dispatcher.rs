use tracing::{debug, info, warn};

use crate::page::{FormField, UploadPage, UserPrompt};
use crate::store::ImportStore;

/// Prompt shown when the import modifier is held.
pub const IMPORT_PROMPT: &str = "Paste VODr export code here";

/// Outcome of handling one hotkey trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Store was replaced wholesale with `records` entries.
    Imported { records: usize },
    /// Prompt dismissed or submitted empty; store unchanged.
    ImportCancelled,
    /// Payload did not parse; store unchanged.
    ImportFailed,
    /// Both fields were written and notified.
    Filled { filename: String },
    /// Some field writes failed; the remaining fields were still attempted.
    PartialFill {
        filename: String,
        failed: Vec<FormField>,
    },
    /// No record for the current filename; the user was notified.
    Miss { filename: String },
    /// The filename source element could not be read.
    FilenameUnavailable,
}

/// Handle one hotkey trigger: import when the modifier is held, fill
/// otherwise.
///
/// This is the recovery boundary for the whole tool. Every fault is absorbed
/// and logged here so the installed key handler survives any page drift; the
/// caller is responsible for consuming the triggering event regardless of the
/// returned outcome.
pub fn handle_trigger(
    with_modifier: bool,
    store: &mut ImportStore,
    page: &mut dyn UploadPage,
    ui: &dyn UserPrompt,
) -> TriggerOutcome {
    if with_modifier {
        run_import(store, ui)
    } else {
        run_fill(store, page, ui)
    }
}

fn run_import(store: &mut ImportStore, ui: &dyn UserPrompt) -> TriggerOutcome {
    let payload = match ui.prompt_text(IMPORT_PROMPT) {
        Some(p) if !p.is_empty() => p,
        _ => {
            debug!("Import prompt dismissed");
            return TriggerOutcome::ImportCancelled;
        }
    };

    match store.import(&payload) {
        Ok(records) => {
            info!(records, "Imported export payload");
            TriggerOutcome::Imported { records }
        }
        Err(e) => {
            // TODO: consider alerting the user here the way lookup misses do;
            // today a bad paste only shows up in the diagnostic log.
            warn!(error = %e, "Import payload rejected");
            TriggerOutcome::ImportFailed
        }
    }
}

fn run_fill(
    store: &ImportStore,
    page: &mut dyn UploadPage,
    ui: &dyn UserPrompt,
) -> TriggerOutcome {
    let filename = match page.current_filename() {
        Ok(name) => name,
        Err(e) => {
            warn!(error = %e, "Could not read filename from page");
            return TriggerOutcome::FilenameUnavailable;
        }
    };

    let record = match store.lookup(&filename) {
        Some(r) => r.clone(),
        None => {
            warn!(filename = %filename, "No record for current filename");
            ui.notify(&format!(
                "No entry found for \"{filename}\". \
                 Files must not be renamed after processing."
            ));
            return TriggerOutcome::Miss { filename };
        }
    };

    // Title first, description second, so the description ends up focused.
    // Field writes are independent; a failed one never blocks the next.
    let mut failed = Vec::new();
    for (field, value) in [
        (FormField::Title, record.title.as_str()),
        (FormField::Description, record.description.as_str()),
    ] {
        if let Err(e) = page.inject(field, value) {
            warn!(field = %field, error = %e, "Field injection failed");
            failed.push(field);
        }
    }

    if failed.is_empty() {
        info!(filename = %filename, "Filled title and description");
        TriggerOutcome::Filled { filename }
    } else {
        TriggerOutcome::PartialFill { filename, failed }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::error::VodrError;

    /// Fake page: records injections, optionally failing chosen fields.
    struct FakePage {
        filename: Option<String>,
        fields: HashMap<&'static str, String>,
        notified: Vec<FormField>,
        broken: Vec<FormField>,
    }

    impl FakePage {
        fn with_filename(name: &str) -> Self {
            Self {
                filename: Some(name.into()),
                fields: HashMap::new(),
                notified: Vec::new(),
                broken: Vec::new(),
            }
        }
    }

    impl UploadPage for FakePage {
        fn current_filename(&self) -> Result<String, VodrError> {
            self.filename
                .clone()
                .ok_or_else(|| VodrError::ElementNotFound("#original-filename".into()))
        }

        fn inject(&mut self, field: FormField, value: &str) -> Result<(), VodrError> {
            if self.broken.contains(&field) {
                return Err(VodrError::ElementNotFound(field.as_str().into()));
            }
            self.fields.insert(field.as_str(), value.to_string());
            self.notified.push(field);
            Ok(())
        }
    }

    struct FakePrompt {
        reply: Option<String>,
        notifications: RefCell<Vec<String>>,
    }

    impl FakePrompt {
        fn silent() -> Self {
            Self {
                reply: None,
                notifications: RefCell::new(Vec::new()),
            }
        }

        fn replying(payload: &str) -> Self {
            Self {
                reply: Some(payload.into()),
                notifications: RefCell::new(Vec::new()),
            }
        }
    }

    impl UserPrompt for FakePrompt {
        fn prompt_text(&self, _message: &str) -> Option<String> {
            self.reply.clone()
        }

        fn notify(&self, message: &str) {
            self.notifications.borrow_mut().push(message.to_string());
        }
    }

    fn seeded_store() -> ImportStore {
        let mut store = ImportStore::new();
        store
            .import(r#"{"clip_042": {"title": "Boss Fight", "description": "Epic battle"}}"#)
            .unwrap();
        store
    }

    #[test]
    fn test_fill_hit_writes_both_fields() {
        let mut store = seeded_store();
        let mut page = FakePage::with_filename("clip_042");
        let ui = FakePrompt::silent();

        let outcome = handle_trigger(false, &mut store, &mut page, &ui);
        assert_eq!(
            outcome,
            TriggerOutcome::Filled {
                filename: "clip_042".into()
            }
        );
        assert_eq!(page.fields["title"], "Boss Fight");
        assert_eq!(page.fields["description"], "Epic battle");
        // Both fields dispatched a change notification, title first.
        assert_eq!(page.notified, vec![FormField::Title, FormField::Description]);
        assert!(ui.notifications.borrow().is_empty());
    }

    #[test]
    fn test_fill_miss_notifies_and_touches_nothing() {
        let mut store = seeded_store();
        let mut page = FakePage::with_filename("renamed_clip");
        let ui = FakePrompt::silent();

        let outcome = handle_trigger(false, &mut store, &mut page, &ui);
        assert_eq!(
            outcome,
            TriggerOutcome::Miss {
                filename: "renamed_clip".into()
            }
        );
        assert!(page.fields.is_empty());
        let notes = ui.notifications.borrow();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].contains("renamed_clip"));
        assert!(notes[0].contains("renamed"));
    }

    #[test]
    fn test_fill_with_missing_filename_source_survives() {
        let mut store = seeded_store();
        let mut page = FakePage::with_filename("x");
        page.filename = None;
        let ui = FakePrompt::silent();

        let outcome = handle_trigger(false, &mut store, &mut page, &ui);
        assert_eq!(outcome, TriggerOutcome::FilenameUnavailable);
        assert!(ui.notifications.borrow().is_empty());
    }

    #[test]
    fn test_broken_title_target_still_fills_description() {
        let mut store = seeded_store();
        let mut page = FakePage::with_filename("clip_042");
        page.broken.push(FormField::Title);
        let ui = FakePrompt::silent();

        let outcome = handle_trigger(false, &mut store, &mut page, &ui);
        assert_eq!(
            outcome,
            TriggerOutcome::PartialFill {
                filename: "clip_042".into(),
                failed: vec![FormField::Title],
            }
        );
        assert!(!page.fields.contains_key("title"));
        assert_eq!(page.fields["description"], "Epic battle");
    }

    #[test]
    fn test_import_replaces_store() {
        let mut store = seeded_store();
        let mut page = FakePage::with_filename("clip_042");
        let ui = FakePrompt::replying(r#"{"a.mp4":{"title":"T","description":"D"}}"#);

        let outcome = handle_trigger(true, &mut store, &mut page, &ui);
        assert_eq!(outcome, TriggerOutcome::Imported { records: 1 });
        // Wholesale replacement: the old key is gone.
        assert!(store.lookup("clip_042").is_none());
        assert_eq!(store.lookup("a.mp4").unwrap().title, "T");
    }

    #[test]
    fn test_import_cancel_keeps_store() {
        let mut store = seeded_store();
        let mut page = FakePage::with_filename("clip_042");
        let ui = FakePrompt::silent();

        let outcome = handle_trigger(true, &mut store, &mut page, &ui);
        assert_eq!(outcome, TriggerOutcome::ImportCancelled);
        assert!(store.lookup("clip_042").is_some());
    }

    #[test]
    fn test_import_empty_reply_treated_as_cancel() {
        let mut store = seeded_store();
        let mut page = FakePage::with_filename("clip_042");
        let ui = FakePrompt::replying("");

        let outcome = handle_trigger(true, &mut store, &mut page, &ui);
        assert_eq!(outcome, TriggerOutcome::ImportCancelled);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_import_parse_failure_is_silent_to_user() {
        let mut store = seeded_store();
        let mut page = FakePage::with_filename("clip_042");
        let ui = FakePrompt::replying("{definitely not json");

        let outcome = handle_trigger(true, &mut store, &mut page, &ui);
        assert_eq!(outcome, TriggerOutcome::ImportFailed);
        // Prior mapping untouched, no alert shown.
        assert!(store.lookup("clip_042").is_some());
        assert!(ui.notifications.borrow().is_empty());
    }
}
