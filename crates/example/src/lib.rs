//! Example document pipeline built with Shifty hooks.
//!
//! A [`Document`] exposes two hook lists. Saving runs every hook attached to
//! `before-save`, bumps the revision, then runs `after-save`:
//!
//! ```text
//! save()
//!   ├─ before-save   trim (20) ─▶ capitalize (10) ─▶ count-words (5)
//!   ├─ revision += 1
//!   └─ after-save    journal (10)
//! ```
//!
//! Other code can attach to either list without touching `Document`.

use shifty_hooks::{HookOwner, HookRegistry};

/// Hook list run before a document is saved.
pub const BEFORE_SAVE: &str = "before-save";

/// Hook list run after a document is saved.
pub const AFTER_SAVE: &str = "after-save";

/// A text document whose save pipeline is extensible through hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Document title.
    pub title: String,
    /// Document body.
    pub body: String,
    /// Number of completed saves.
    pub revision: u32,
    /// Word count computed by the `count-words` hook.
    pub word_count: usize,
    /// Entries appended by `after-save` hooks.
    pub journal: Vec<String>,
}

impl HookOwner for Document {
    fn owner_name() -> &'static str {
        "Document"
    }
}

impl Document {
    /// Creates a document with the given title and body.
    #[must_use]
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            ..Self::default()
        }
    }

    /// Runs the save pipeline against `hooks`.
    pub fn save(&mut self, hooks: &HookRegistry) {
        hooks.do_action(self, BEFORE_SAVE);
        self.revision += 1;
        hooks.do_action(self, AFTER_SAVE);
    }
}

/// Declares the document hook lists and attaches the built-in hooks.
pub fn install(hooks: &HookRegistry) {
    hooks.create::<Document>(BEFORE_SAVE);
    hooks.create::<Document>(AFTER_SAVE);

    hooks.add_with_priority::<Document>(
        BEFORE_SAVE,
        "trim",
        |doc| {
            doc.title = doc.title.trim().to_owned();
            doc.body = doc.body.trim().to_owned();
        },
        20,
    );
    hooks.add::<Document>(BEFORE_SAVE, "capitalize", |doc| {
        doc.title = capitalize(&doc.title);
    });
    hooks.add_with_priority::<Document>(
        BEFORE_SAVE,
        "count-words",
        |doc| doc.word_count = doc.body.split_whitespace().count(),
        5,
    );
    hooks.add::<Document>(AFTER_SAVE, "journal", |doc| {
        let entry = format!("saved \"{}\" as revision {}", doc.title, doc.revision);
        doc.journal.push(entry);
    });
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
