use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use dirule_core::ports::Storage;
use tracing::debug;

/// Keeps every poem, one page per name. Writing to a used page overwrites it.
#[derive(Debug, Default)]
pub struct Notebook {
    pages: RwLock<HashMap<String, Vec<u8>>>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.pages.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all written pages, sorted.
    pub fn names(&self) -> Vec<String> {
        let pages = self.pages.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = pages.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Storage for Notebook {
    fn save(&self, name: &str, content: &[u8]) {
        let mut pages = self.pages.write().unwrap_or_else(PoisonError::into_inner);
        let replaced = pages.insert(name.to_string(), content.to_vec()).is_some();
        debug!(name, replaced, "notebook page written");
    }

    fn load(&self, name: &str) -> Option<Vec<u8>> {
        self.pages
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn kind(&self) -> &'static str {
        "notebook"
    }
}
