use std::sync::{PoisonError, RwLock};

use dirule_core::ports::Storage;
use tracing::debug;

/// Room for exactly one poem. The name is ignored: every save wipes the napkin and
/// every load returns whatever is scribbled on it.
#[derive(Debug, Default)]
pub struct Napkin {
    scribble: RwLock<Option<Vec<u8>>>,
}

impl Napkin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for Napkin {
    fn save(&self, name: &str, content: &[u8]) {
        debug!(ignored_name = name, "napkin overwritten");
        *self.scribble.write().unwrap_or_else(PoisonError::into_inner) = Some(content.to_vec());
    }

    fn load(&self, _name: &str) -> Option<Vec<u8>> {
        self.scribble
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn kind(&self) -> &'static str {
        "napkin"
    }
}
