use dirule_core::ports::Speaker;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct Preacher;

impl Speaker for Preacher {
    fn speak(&self, message: &str) -> String {
        debug!("sermon begins");
        format!("Brothers and sisters, hear the word: {message} Amen.")
    }

    fn kind(&self) -> &'static str {
        "preacher"
    }
}
