use std::borrow::Cow;

use dirule_common::{DiError, MissingKeyPolicy};
use tracing::debug;

use crate::ports::Storage;

const CAPABILITY: &str = "storage";

/// A piece of writing that knows it can be stored, but not where.
///
/// The storage is borrowed, never owned: the assembler keeps it alive and may hand the
/// same storage to any number of poems.
#[derive(Default)]
pub struct Poem<'a> {
    content: Vec<u8>,
    storage: Option<&'a dyn Storage>,
    on_missing: MissingKeyPolicy,
}

impl<'a> Poem<'a> {
    /// An empty poem with nowhere to go yet. Call [`Poem::set_storage`] before saving.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_storage(storage: &'a dyn Storage) -> Self {
        Self {
            storage: Some(storage),
            ..Self::default()
        }
    }

    /// Chooses what [`Poem::load`] does when the storage has nothing under a name.
    pub fn on_missing(mut self, policy: MissingKeyPolicy) -> Self {
        self.on_missing = policy;
        self
    }

    /// Replaces the injected storage.
    ///
    /// Not atomic with respect to a save or load running elsewhere on the same poem;
    /// callers sharing a poem across threads must serialize access themselves.
    pub fn set_storage(&mut self, storage: &'a dyn Storage) {
        self.storage = Some(storage);
    }

    pub fn write(&mut self, content: impl Into<Vec<u8>>) {
        self.content = content.into();
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    pub fn storage_kind(&self) -> Option<&'static str> {
        self.storage.map(|storage| storage.kind())
    }

    /// Hands the current content, unchanged, to the storage under `name`.
    pub fn save(&self, name: &str) -> Result<(), DiError> {
        let storage = self.storage()?;
        debug!(name, bytes = self.content.len(), "saving poem");
        storage.save(name, &self.content);
        Ok(())
    }

    /// Replaces the content with whatever the storage holds under `name`.
    ///
    /// Returns `Ok(true)` when the storage had the name. Otherwise the
    /// [`MissingKeyPolicy`] applies: `Empty` clears the content and returns `Ok(false)`,
    /// `Fail` keeps the content and returns [`DiError::KeyNotFound`].
    pub fn load(&mut self, name: &str) -> Result<bool, DiError> {
        let storage = self.storage()?;
        match storage.load(name) {
            Some(content) => {
                debug!(name, bytes = content.len(), "loaded poem");
                self.content = content;
                Ok(true)
            }
            None => match self.on_missing {
                MissingKeyPolicy::Empty => {
                    debug!(name, "nothing stored, clearing poem");
                    self.content.clear();
                    Ok(false)
                }
                MissingKeyPolicy::Fail => Err(DiError::KeyNotFound {
                    name: name.to_string(),
                }),
            },
        }
    }

    fn storage(&self) -> Result<&'a dyn Storage, DiError> {
        self.storage.ok_or_else(|| DiError::unset(CAPABILITY))
    }
}
