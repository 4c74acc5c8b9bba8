use dirule_core::ports::Speaker;
use tracing::debug;

/// Reads the message on air, signing off with the station name.
#[derive(Debug, Clone)]
pub struct Newscaster {
    station: String,
}

impl Newscaster {
    pub fn new(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
        }
    }
}

impl Default for Newscaster {
    fn default() -> Self {
        Self::new("Gopher News Network")
    }
}

impl Speaker for Newscaster {
    fn speak(&self, message: &str) -> String {
        debug!(station = %self.station, "on air");
        format!("Breaking news: {message} Back to you in the studio. {}.", self.station)
    }

    fn kind(&self) -> &'static str {
        "newscaster"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_carries_message_and_station() {
        let anchor = Newscaster::new("KDI");
        let said = anchor.speak("Rain expected.");
        assert!(said.contains("Rain expected."));
        assert!(said.ends_with("KDI."));
    }
}
