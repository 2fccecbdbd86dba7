//! Append-only text document with snapshot support.

use crate::core::Originator;
use std::convert::Infallible;

/// A text buffer whose content can be saved and restored.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{HistoryStack, Originator};
/// use statecraft::Document;
///
/// let mut doc = Document::new();
/// let mut versions = HistoryStack::new();
///
/// doc.append("Hi, this is the start. ");
/// versions.push(doc.snapshot());
/// doc.append("Next comes the design.");
/// versions.push(doc.snapshot());
///
/// doc.restore_from(&versions.pop()?).unwrap();
/// assert_eq!(doc.content(), "Hi, this is the start. ");
///
/// doc.restore_from(&versions.pop()?).unwrap();
/// assert_eq!(doc.content(), "Hi, this is the start. Next comes the design.");
/// # Ok::<(), statecraft::core::HistoryError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    content: String,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Originator for Document {
    type Memento = String;
    type Error = Infallible;

    fn memento(&self) -> String {
        self.content.clone()
    }

    fn restore(&mut self, memento: &String) -> Result<(), Infallible> {
        self.content.clone_from(memento);
        Ok(())
    }
}
