// Start of file: /src/page/document.rs

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("no element with id '{0}'")]
    ElementNotFound(String),
}

/// A page that exposes elements by identifier.
///
/// Writes replace the element's text content; they never append.
pub trait Document: Send + Sync {
    fn set_text_content(&self, id: &str, text: &str) -> Result<(), PageError>;

    fn text_content(&self, id: &str) -> Option<String>;
}

/// Element map held behind a shared lock. Clones share the same elements.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocument {
    elements: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element with empty text content.
    pub fn with_element(self, id: impl Into<String>) -> Self {
        self.insert_element(id, "");
        self
    }

    pub fn insert_element(&self, id: impl Into<String>, text: impl Into<String>) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        elements.insert(id.into(), text.into());
    }

    pub fn remove_element(&self, id: &str) {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());
        elements.remove(id);
    }
}

impl Document for InMemoryDocument {
    fn set_text_content(&self, id: &str, text: &str) -> Result<(), PageError> {
        let mut elements = self.elements.write().unwrap_or_else(|e| e.into_inner());

        match elements.get_mut(id) {
            Some(content) => {
                content.clear();
                content.push_str(text);
                Ok(())
            }
            None => Err(PageError::ElementNotFound(id.to_string())),
        }
    }

    fn text_content(&self, id: &str) -> Option<String> {
        let elements = self.elements.read().unwrap_or_else(|e| e.into_inner());
        elements.get(id).cloned()
    }
}


// End of file: /src/page/document.rs
