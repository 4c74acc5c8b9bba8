use dirule_core::ports::Speaker;
use tracing::debug;

/// Shouts. Always.
#[derive(Debug, Clone, Copy, Default)]
pub struct SalesPromoter;

impl Speaker for SalesPromoter {
    fn speak(&self, message: &str) -> String {
        debug!("pitching");
        let pitch = message.trim_end_matches(['.', '!']).to_uppercase();
        format!("Amazing offer! {pitch}!!! Only today!")
    }

    fn kind(&self) -> &'static str {
        "sales promoter"
    }
}
