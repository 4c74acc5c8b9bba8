use dirule_common::DiError;
use tracing::debug;

use crate::ports::Speaker;

const CAPABILITY: &str = "speaker";

/// A message waiting for someone to say it.
#[derive(Default)]
pub struct Announcement<'a> {
    message: String,
    speaker: Option<&'a dyn Speaker>,
}

impl<'a> Announcement<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speaker(speaker: &'a dyn Speaker) -> Self {
        Self {
            speaker: Some(speaker),
            ..Self::default()
        }
    }

    /// Replaces the injected speaker. Later announcements go through `speaker`.
    pub fn set_speaker(&mut self, speaker: &'a dyn Speaker) {
        self.speaker = Some(speaker);
    }

    /// Hands a message to the announcement, replacing the previous one.
    pub fn deliver(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn speaker_kind(&self) -> Option<&'static str> {
        self.speaker.map(|speaker| speaker.kind())
    }

    /// Has the injected speaker say the current message and returns its rendition.
    pub fn announce(&self) -> Result<String, DiError> {
        let speaker = self.speaker.ok_or_else(|| DiError::unset(CAPABILITY))?;
        debug!(chars = self.message.len(), "announcing");
        Ok(speaker.speak(&self.message))
    }
}
